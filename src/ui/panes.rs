//! Rendering logic for each TUI pane

use crate::complexity::Complexity;
use crate::step::StepKind;
use crate::tree::{Link, Tree};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs, Wrap},
};
use rustc_hash::FxHashSet;

/// Tab bar across the top, one tab per structure.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, titles: &[&'static str], selected: usize) {
    let tabs = Tabs::new(titles.to_vec())
        .select(selected)
        .style(Style::default().fg(DEFAULT_THEME.muted))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(DEFAULT_THEME.border_normal)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .title(" Data Structures Visualizer "),
        );
    frame.render_widget(tabs, area);
}

fn cell_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.highlight_fg)
            .bg(DEFAULT_THEME.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    }
}

/// Horizontal row of value cells with index labels underneath.  Used by the
/// array and queue views; `front_rear` adds the queue's end markers.
pub fn render_cells_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    elements: &[i64],
    highlighted: &[usize],
    front_rear: bool,
) {
    let highlight_set: FxHashSet<usize> = highlighted.iter().copied().collect();

    let mut lines: Vec<Line> = Vec::new();
    if elements.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.muted),
        )));
    } else {
        let cells: Vec<String> = elements.iter().map(|v| format!(" {} ", v)).collect();

        let mut value_spans: Vec<Span> = Vec::new();
        let mut index_spans: Vec<Span> = Vec::new();
        let mut marker_spans: Vec<Span> = Vec::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                let sep = Span::styled("│", Style::default().fg(DEFAULT_THEME.border_normal));
                value_spans.push(sep);
                index_spans.push(Span::raw(" "));
                marker_spans.push(Span::raw(" "));
            }
            let width = cell.len();
            value_spans.push(Span::styled(cell.clone(), cell_style(highlight_set.contains(&i))));
            index_spans.push(Span::styled(
                format!("{:^width$}", i),
                Style::default().fg(DEFAULT_THEME.label),
            ));
            let marker = if front_rear {
                if i == 0 {
                    "front"
                } else if i == elements.len() - 1 {
                    "rear"
                } else {
                    ""
                }
            } else {
                ""
            };
            marker_spans.push(Span::styled(
                format!("{:^width$}", marker),
                Style::default().fg(DEFAULT_THEME.label),
            ));
        }
        lines.push(Line::from(value_spans));
        lines.push(Line::from(index_spans));
        if front_rear {
            lines.push(Line::from(marker_spans));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(pane_block(title));
    frame.render_widget(paragraph, area);
}

/// Vertical stack view, top element first.
pub fn render_stack_pane(frame: &mut Frame, area: Rect, elements: &[i64], highlighted: &[usize]) {
    let highlight_set: FxHashSet<usize> = highlighted.iter().copied().collect();

    let mut lines: Vec<Line> = Vec::new();
    if elements.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.muted),
        )));
    } else {
        for i in (0..elements.len()).rev() {
            let mut spans = vec![Span::styled(
                format!(" {} ", elements[i]),
                cell_style(highlight_set.contains(&i)),
            )];
            if i == elements.len() - 1 {
                spans.push(Span::styled(
                    "  ← top",
                    Style::default().fg(DEFAULT_THEME.label),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(pane_block("Stack"));
    frame.render_widget(paragraph, area);
}

/// Sideways tree view: the right subtree renders above its parent, the left
/// below, each level indented one step further.
pub fn render_tree_pane(frame: &mut Frame, area: Rect, tree: &Tree, highlighted: &[i64]) {
    let highlight_set: FxHashSet<i64> = highlighted.iter().copied().collect();

    let mut lines: Vec<Line> = Vec::new();
    if tree.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty tree)",
            Style::default().fg(DEFAULT_THEME.muted),
        )));
    } else {
        push_tree_lines(&tree.root, 0, &highlight_set, &mut lines);
    }

    let paragraph = Paragraph::new(lines).block(pane_block("Binary Search Tree"));
    frame.render_widget(paragraph, area);
}

fn push_tree_lines(
    link: &Link,
    depth: usize,
    highlights: &FxHashSet<i64>,
    lines: &mut Vec<Line<'static>>,
) {
    if let Some(node) = link {
        push_tree_lines(&node.right, depth + 1, highlights, lines);
        let style = if highlights.contains(&node.value) {
            Style::default()
                .fg(DEFAULT_THEME.highlight_fg)
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.number)
        };
        let mut spans = vec![Span::raw("      ".repeat(depth))];
        if depth > 0 {
            spans.push(Span::styled("── ", Style::default().fg(DEFAULT_THEME.border_normal)));
        }
        spans.push(Span::styled(format!(" {} ", node.value), style));
        lines.push(Line::from(spans));
        push_tree_lines(&node.left, depth + 1, highlights, lines);
    }
}

/// The explanation panel: current step message, long-form prose, and the
/// last operation's complexity table.
pub fn render_explanation_pane(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    explanation: &str,
    kind: Option<StepKind>,
    complexity: Option<(&'static str, Complexity)>,
    step_position: Option<(usize, usize)>,
) {
    let message_style = match kind {
        Some(StepKind::Error) => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        Some(StepKind::Found) | Some(StepKind::Complete) => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
        Some(_) => Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(DEFAULT_THEME.fg),
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(message.to_string(), message_style)),
        Line::from(""),
        Line::from(Span::styled(
            explanation.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    if let Some((operation, complexity)) = complexity {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("Time Complexity ({}):  ", operation),
                Style::default().fg(DEFAULT_THEME.title),
            ),
            Span::styled("best ", Style::default().fg(DEFAULT_THEME.muted)),
            Span::styled(complexity.best, Style::default().fg(DEFAULT_THEME.success)),
            Span::styled("   average ", Style::default().fg(DEFAULT_THEME.muted)),
            Span::styled(complexity.average, Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled("   worst ", Style::default().fg(DEFAULT_THEME.muted)),
            Span::styled(complexity.worst, Style::default().fg(DEFAULT_THEME.error)),
        ]));
        if !complexity.explanation.is_empty() {
            lines.push(Line::from(Span::styled(
                complexity.explanation,
                Style::default().fg(DEFAULT_THEME.muted),
            )));
        }
    }

    let title = match step_position {
        Some((current, total)) => format!(" Explanation — Step {}/{} ", current + 1, total),
        None => " Explanation ".to_string(),
    };
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(pane_block(&title));
    frame.render_widget(paragraph, area);
}

/// Bottom status bar: pending input prompt or status message plus key help.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    input: Option<(&str, &str)>,
    key_help: &str,
    is_playing: bool,
) {
    let line = match input {
        Some((prompt, buffer)) => Line::from(vec![
            Span::styled(
                format!(" {}: ", prompt),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                "   (Enter to apply, Esc to cancel)",
                Style::default().fg(DEFAULT_THEME.muted),
            ),
        ]),
        None => {
            let play = if is_playing { "▶ " } else { "" };
            Line::from(vec![
                Span::styled(
                    format!(" {}{}", play, status),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!("   │   {}", key_help),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(format!(" {} ", title))
        .padding(Padding::new(1, 1, 1, 0))
        .title_style(Style::default().fg(DEFAULT_THEME.title))
}
