//! Binary search tree engine
//!
//! Insert, remove, and search over an owned [`Tree`], with a `Traverse` step
//! per visited node carrying the root-to-node value path.  Every call clones
//! the input tree first and every step clones the live working tree, so
//! earlier steps stay frozen while later mutation proceeds.
//!
//! Removal of a node with two children replaces its value with the in-order
//! successor (the minimum of the right subtree) and then removes the
//! successor from the right subtree with the same recursion; steps emitted
//! during that inner removal show the tree with the value already replaced
//! and the successor node still present, which is exactly the intermediate
//! state worth teaching.
//!
//! Subtrees under mutation are addressed by a [`Dir`] path from the root and
//! re-navigated per access, so the whole tree can be cloned between
//! mutations without holding a borrow into it.

use tracing::debug;

use crate::complexity::Complexity;
use crate::error::OpError;
use crate::step::{OperationResult, StepKind, StepList, TreeResult};
use crate::tree::{Dir, Tree};

type TreeSteps = StepList<Tree, i64>;

/// A fresh tree built by folding `insert` over `initial` in order (the final
/// shape depends on insertion order; there is no balancing).  Construction
/// steps are discarded: the result has an empty step list.
pub fn create(initial: &[i64]) -> TreeResult {
    let mut tree = Tree::new();
    for &value in initial {
        tree.attach(value);
    }
    OperationResult::initial(tree)
}

/// Insert `value` at its BST position.  A duplicate emits an `Error` step
/// and leaves the tree unchanged.
pub fn insert(tree: &Tree, value: i64) -> TreeResult {
    let mut tree = tree.clone();
    let mut steps = TreeSteps::new();
    debug!(value, size = tree.size(), "bst insert");

    steps.push(
        StepKind::State,
        tree.clone(),
        vec![],
        format!("Preparing to insert {} into the BST", value),
        format!(
            "We're about to insert the value {} into the binary search tree. We'll start \
             from the root and follow the BST property: left child < parent < right child.",
            value
        ),
    );

    // Read-only descent; the tree is not touched until the slot is known.
    let mut path: Vec<i64> = Vec::new();
    let mut duplicate = false;
    {
        let mut link = &tree.root;
        loop {
            let Some(node) = link else {
                steps.push(
                    StepKind::Insert,
                    tree.clone(),
                    path.clone(),
                    format!("Inserting {} at this position", value),
                    format!(
                        "We've found the correct position for {}. Since this is a null \
                         node, we'll create a new node here.",
                        value
                    ),
                );
                break;
            };
            path.push(node.value);
            let (comparison, direction) = if value < node.value {
                (format!("{} < {}", value, node.value), "left")
            } else {
                (format!("{} > {}", value, node.value), "right")
            };
            steps.push(
                StepKind::Traverse,
                tree.clone(),
                path.clone(),
                format!("Comparing {} with {}", value, node.value),
                format!(
                    "We compare {} with {}. Since {}, we'll go {}.",
                    value, node.value, comparison, direction
                ),
            );
            if value < node.value {
                link = &node.left;
            } else if value > node.value {
                link = &node.right;
            } else {
                steps.push_error(
                    tree.clone(),
                    path.clone(),
                    &OpError::DuplicateValue { value },
                );
                duplicate = true;
                break;
            }
        }
    }

    if !duplicate {
        tree.attach(value);
    }

    steps.push(
        StepKind::Complete,
        tree.clone(),
        vec![],
        format!("Successfully inserted {} into the BST", value),
        format!(
            "The value {} has been successfully inserted while maintaining the BST \
             property: all left descendants are less than the node, and all right \
             descendants are greater.",
            value
        ),
    );

    OperationResult::new(tree, steps, "insert")
}

/// Remove `value` from the tree.  A miss emits an `Error` step mid-descent;
/// an empty tree is a single `Error` step with no `Complete`.
pub fn remove(tree: &Tree, value: i64) -> TreeResult {
    let mut tree = tree.clone();
    let mut steps = TreeSteps::new();
    debug!(value, size = tree.size(), "bst remove");

    if tree.is_empty() {
        steps.push_error(tree.clone(), vec![], &OpError::RemoveFromEmptyTree);
        return OperationResult::new(tree, steps, "remove");
    }

    steps.push(
        StepKind::State,
        tree.clone(),
        vec![],
        format!("Preparing to remove {} from the BST", value),
        format!(
            "We're about to remove the value {} from the binary search tree. We'll first \
             search for the node, then handle its removal.",
            value
        ),
    );

    remove_rec(&mut tree, Vec::new(), value, Vec::new(), &mut steps);

    steps.push(
        StepKind::Complete,
        tree.clone(),
        vec![],
        format!("Successfully removed {} from the BST", value),
        format!(
            "The value {} has been successfully removed while maintaining the BST property.",
            value
        ),
    );

    OperationResult::new(tree, steps, "remove")
}

/// Recursive removal of `value` from the subtree at `addr`.  `path` holds
/// the values visited so far; the two-children case reuses it for the inner
/// successor removal, so those steps still show the path through the node
/// being replaced.
fn remove_rec(tree: &mut Tree, addr: Vec<Dir>, value: i64, path: Vec<i64>, steps: &mut TreeSteps) {
    let Some((node_value, has_left, has_right)) = tree
        .link_at(&addr)
        .as_ref()
        .map(|node| (node.value, node.left.is_some(), node.right.is_some()))
    else {
        steps.push_error(tree.clone(), path, &OpError::ValueNotFound { value });
        return;
    };

    let mut current_path = path;
    current_path.push(node_value);

    if value < node_value {
        steps.push(
            StepKind::Traverse,
            tree.clone(),
            current_path.clone(),
            format!("Comparing {} with {}, going left", value, node_value),
            format!(
                "Since {} < {}, we continue searching in the left subtree.",
                value, node_value
            ),
        );
        let mut next = addr;
        next.push(Dir::Left);
        remove_rec(tree, next, value, current_path, steps);
        return;
    }
    if value > node_value {
        steps.push(
            StepKind::Traverse,
            tree.clone(),
            current_path.clone(),
            format!("Comparing {} with {}, going right", value, node_value),
            format!(
                "Since {} > {}, we continue searching in the right subtree.",
                value, node_value
            ),
        );
        let mut next = addr;
        next.push(Dir::Right);
        remove_rec(tree, next, value, current_path, steps);
        return;
    }

    steps.push(
        StepKind::Highlight,
        tree.clone(),
        current_path.clone(),
        format!("Found node {} to remove", value),
        format!(
            "We've found the node containing {}. Now we need to handle its removal based \
             on how many children it has.",
            value
        ),
    );

    match (has_left, has_right) {
        (false, false) => {
            steps.push(
                StepKind::Remove,
                tree.clone(),
                current_path,
                format!("Removing leaf node {}", value),
                format!(
                    "Node {} has no children (it's a leaf), so we can simply remove it.",
                    value
                ),
            );
            *tree.link_at_mut(&addr) = None;
        }
        (false, true) => {
            steps.push(
                StepKind::Remove,
                tree.clone(),
                current_path,
                format!("Removing node {} with right child only", value),
                format!(
                    "Node {} has only a right child. We replace it with its right child.",
                    value
                ),
            );
            let link = tree.link_at_mut(&addr);
            let child = link.as_mut().expect("node present at address").right.take();
            *link = child;
        }
        (true, false) => {
            steps.push(
                StepKind::Remove,
                tree.clone(),
                current_path,
                format!("Removing node {} with left child only", value),
                format!(
                    "Node {} has only a left child. We replace it with its left child.",
                    value
                ),
            );
            let link = tree.link_at_mut(&addr);
            let child = link.as_mut().expect("node present at address").left.take();
            *link = child;
        }
        (true, true) => {
            steps.push(
                StepKind::Traverse,
                tree.clone(),
                current_path.clone(),
                format!("Node {} has two children, finding inorder successor", value),
                format!(
                    "Node {} has two children. We'll find the inorder successor (smallest \
                     value in right subtree) to replace it.",
                    value
                ),
            );

            let mut right_addr = addr.clone();
            right_addr.push(Dir::Right);
            let successor = tree
                .min_value_at(&right_addr)
                .expect("two-children node has a right subtree");

            let mut successor_path = current_path.clone();
            successor_path.push(successor);
            steps.push(
                StepKind::Highlight,
                tree.clone(),
                successor_path,
                format!("Found successor: {}", successor),
                format!(
                    "The inorder successor is {}. We'll replace {} with {} and remove the \
                     original successor node.",
                    successor, value, successor
                ),
            );

            // Overwrite first, then remove the successor from the right
            // subtree.  The successor is a subtree minimum, so the inner
            // removal lands on the leaf or right-child-only case.
            tree.link_at_mut(&addr)
                .as_mut()
                .expect("node present at address")
                .value = successor;
            remove_rec(tree, right_addr, successor, current_path, steps);
        }
    }
}

/// Search for `value`.  Read-only; the final snapshot is the input tree
/// unchanged.
pub fn search(tree: &Tree, value: i64) -> TreeResult {
    let tree = tree.clone();
    let mut steps = TreeSteps::new();
    debug!(value, size = tree.size(), "bst search");

    if tree.is_empty() {
        steps.push_error(tree.clone(), vec![], &OpError::SearchInEmptyTree);
        return OperationResult::new(tree, steps, "search");
    }

    steps.push(
        StepKind::State,
        tree.clone(),
        vec![],
        format!("Searching for {} in the BST", value),
        format!(
            "We're about to search for the value {} in the binary search tree. We'll start \
             from the root and follow the BST property.",
            value
        ),
    );

    let mut path: Vec<i64> = Vec::new();
    let mut link = &tree.root;
    loop {
        let Some(node) = link else {
            steps.push(
                StepKind::NotFound,
                tree.clone(),
                path.clone(),
                format!("Value {} not found in the tree", value),
                format!(
                    "We've reached a null node, which means {} doesn't exist in the BST. \
                     The search path we followed was correct based on the BST property.",
                    value
                ),
            );
            break;
        };

        if value == node.value {
            let mut found_path = path.clone();
            found_path.push(value);
            let walked = if path.is_empty() {
                String::new()
            } else {
                let joined: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                format!("{} → ", joined.join(" → "))
            };
            steps.push(
                StepKind::Found,
                tree.clone(),
                found_path,
                format!("Found {} in the tree!", value),
                format!(
                    "We've successfully found {} in the BST. The search path we followed \
                     was: {}{}.",
                    value, walked, value
                ),
            );
            break;
        }

        path.push(node.value);
        let (comparison, direction) = if value < node.value {
            (format!("{} < {}", value, node.value), "left")
        } else {
            (format!("{} > {}", value, node.value), "right")
        };
        steps.push(
            StepKind::Traverse,
            tree.clone(),
            path.clone(),
            format!("Comparing {} with {}, going {}", value, node.value, direction),
            format!(
                "We compare {} with {}. Since {}, we continue searching in the {} subtree.",
                value, node.value, comparison, direction
            ),
        );
        link = if value < node.value {
            &node.left
        } else {
            &node.right
        };
    }

    OperationResult::new(tree, steps, "search")
}

/// Complexity table for BST operations.
pub fn time_complexity(operation: &str) -> Complexity {
    match operation {
        "insert" => Complexity {
            best: "O(log n)",
            average: "O(log n)",
            worst: "O(n)",
            explanation: "In a balanced BST, insertion is O(log n). In the worst case \
                          (unbalanced tree), it becomes O(n).",
        },
        "remove" => Complexity {
            best: "O(log n)",
            average: "O(log n)",
            worst: "O(n)",
            explanation: "In a balanced BST, removal is O(log n). In the worst case \
                          (unbalanced tree), it becomes O(n).",
        },
        "search" => Complexity {
            best: "O(log n)",
            average: "O(log n)",
            worst: "O(n)",
            explanation: "In a balanced BST, search is O(log n). In the worst case \
                          (unbalanced tree), it becomes O(n).",
        },
        _ => Complexity::constant(),
    }
}
