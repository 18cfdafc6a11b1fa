//! Main TUI application state and logic

use crate::complexity::Complexity;
use crate::engines::{array, bst, queue, stack};
use crate::step::{LinearResult, StepKind, TreeResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Which structure tab is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureTab {
    Array,
    Stack,
    Queue,
    Bst,
}

impl StructureTab {
    pub const TITLES: [&'static str; 4] = ["Array", "Stack", "Queue", "Binary Search Tree"];

    pub fn index(self) -> usize {
        match self {
            StructureTab::Array => 0,
            StructureTab::Stack => 1,
            StructureTab::Queue => 2,
            StructureTab::Bst => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            StructureTab::Array => StructureTab::Stack,
            StructureTab::Stack => StructureTab::Queue,
            StructureTab::Queue => StructureTab::Bst,
            StructureTab::Bst => StructureTab::Array,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StructureTab::Array => StructureTab::Bst,
            StructureTab::Stack => StructureTab::Array,
            StructureTab::Queue => StructureTab::Stack,
            StructureTab::Bst => StructureTab::Queue,
        }
    }

    /// Key help shown in the status bar for this tab.
    fn key_help(self) -> &'static str {
        match self {
            StructureTab::Array => {
                "i insert  r remove  ←/→ step  Space play  Enter end  Bksp start  Tab switch  q quit"
            }
            StructureTab::Stack => {
                "p push  o pop  ←/→ step  Space play  Enter end  Bksp start  Tab switch  q quit"
            }
            StructureTab::Queue => {
                "e enqueue  d dequeue  ←/→ step  Space play  Enter end  Bksp start  Tab switch  q quit"
            }
            StructureTab::Bst => {
                "i insert  r remove  s search  ←/→ step  Space play  Enter end  Bksp start  Tab switch  q quit"
            }
        }
    }

    /// Explanation shown before the first operation on this tab.
    fn welcome(self) -> &'static str {
        match self {
            StructureTab::Array => "Welcome! Use the controls to perform array operations.",
            StructureTab::Stack => {
                "Welcome! Use the controls to perform stack operations. Stack follows LIFO \
                 (Last In, First Out) principle."
            }
            StructureTab::Queue => {
                "Welcome! Use the controls to perform queue operations. Queue follows FIFO \
                 (First In, First Out) principle."
            }
            StructureTab::Bst => {
                "Welcome! Use the controls to perform BST operations. BST property: left \
                 child < parent < right child."
            }
        }
    }
}

/// Operation waiting for its operand in the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    ArrayInsert,
    ArrayRemove,
    StackPush,
    QueueEnqueue,
    BstInsert,
    BstRemove,
    BstSearch,
}

impl PendingOp {
    fn prompt(self) -> &'static str {
        match self {
            PendingOp::ArrayInsert => "insert value (or value@index)",
            PendingOp::ArrayRemove => "remove index",
            PendingOp::StackPush => "push value",
            PendingOp::QueueEnqueue => "enqueue value",
            PendingOp::BstInsert => "insert value",
            PendingOp::BstRemove => "remove value",
            PendingOp::BstSearch => "search value",
        }
    }
}

/// The main application state
pub struct App {
    /// Latest result per structure; the live snapshot for the next
    /// operation is each result's final snapshot.
    pub array: LinearResult,
    pub stack: LinearResult,
    pub queue: LinearResult,
    pub bst: TreeResult,

    /// Currently shown structure tab
    pub tab: StructureTab,

    /// Pending operation and its input buffer, when in input mode
    input: Option<(PendingOp, String)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app with the same seed structures the original
    /// visualizer starts with.
    pub fn new() -> Self {
        App {
            array: array::create(&[10, 20, 30]),
            stack: stack::create(&[10, 20, 30]),
            queue: queue::create(&[10, 20, 30]),
            bst: bst::create(&[10, 5, 15, 3, 7, 12, 18]),
            tab: StructureTab::Array,
            input: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_secs(1) {
                    if self.advance_current() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Tab bar, structure pane, explanation pane, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(10),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_tab_bar(frame, chunks[0], &StructureTab::TITLES, self.tab.index());

        // The displayed snapshot is the current step's when steps exist,
        // else the live structure with the tab's welcome text.
        match self.tab {
            StructureTab::Array | StructureTab::Queue => {
                let result = if self.tab == StructureTab::Array {
                    &self.array
                } else {
                    &self.queue
                };
                let (elements, highlighted) = match result.current() {
                    Some(step) => (&step.snapshot, step.highlighted.as_slice()),
                    None => (&result.snapshot, &[] as &[usize]),
                };
                let title = if self.tab == StructureTab::Array {
                    "Array"
                } else {
                    "Queue"
                };
                super::panes::render_cells_pane(
                    frame,
                    chunks[1],
                    title,
                    elements,
                    highlighted,
                    self.tab == StructureTab::Queue,
                );
            }
            StructureTab::Stack => {
                let (elements, highlighted) = match self.stack.current() {
                    Some(step) => (&step.snapshot, step.highlighted.as_slice()),
                    None => (&self.stack.snapshot, &[] as &[usize]),
                };
                super::panes::render_stack_pane(frame, chunks[1], elements, highlighted);
            }
            StructureTab::Bst => {
                let (tree, highlighted) = match self.bst.current() {
                    Some(step) => (&step.snapshot, step.highlighted.as_slice()),
                    None => (&self.bst.snapshot, &[] as &[i64]),
                };
                super::panes::render_tree_pane(frame, chunks[1], tree, highlighted);
            }
        }

        let (message, explanation, kind, step_position) = self.explanation_content();
        super::panes::render_explanation_pane(
            frame,
            chunks[2],
            &message,
            &explanation,
            kind,
            self.current_complexity(),
            step_position,
        );

        let input = self
            .input
            .as_ref()
            .map(|(op, buffer)| (op.prompt(), buffer.as_str()));
        super::panes::render_status_bar(
            frame,
            chunks[3],
            &self.status_message,
            input,
            self.tab.key_help(),
            self.is_playing,
        );
    }

    /// Message, explanation, kind, and step position for the current tab.
    fn explanation_content(&self) -> (String, String, Option<StepKind>, Option<(usize, usize)>) {
        fn content<S, H>(
            result: &crate::step::OperationResult<S, H>,
            welcome: &str,
        ) -> (String, String, Option<StepKind>, Option<(usize, usize)>) {
            match result.current() {
                Some(step) => (
                    step.message.clone(),
                    step.explanation.clone(),
                    Some(step.kind),
                    Some((result.current_step, result.steps.len())),
                ),
                None => (String::new(), welcome.to_string(), None, None),
            }
        }
        match self.tab {
            StructureTab::Array => content(&self.array, self.tab.welcome()),
            StructureTab::Stack => content(&self.stack, self.tab.welcome()),
            StructureTab::Queue => content(&self.queue, self.tab.welcome()),
            StructureTab::Bst => content(&self.bst, self.tab.welcome()),
        }
    }

    /// Complexity of the last operation on the current tab, if any.
    fn current_complexity(&self) -> Option<(&'static str, Complexity)> {
        match self.tab {
            StructureTab::Array => self
                .array
                .operation
                .map(|op| (op, array::time_complexity(op))),
            StructureTab::Stack => self
                .stack
                .operation
                .map(|op| (op, stack::time_complexity(op))),
            StructureTab::Queue => self
                .queue
                .operation
                .map(|op| (op, queue::time_complexity(op))),
            StructureTab::Bst => self.bst.operation.map(|op| (op, bst::time_complexity(op))),
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.is_playing = false;
                self.tab = self.tab.next();
                self.status_message = format!("Viewing {}", StructureTab::TITLES[self.tab.index()]);
            }
            KeyCode::BackTab => {
                self.is_playing = false;
                self.tab = self.tab.prev();
                self.status_message = format!("Viewing {}", StructureTab::TITLES[self.tab.index()]);
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.advance_current() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the last step".to_string();
                }
            }
            KeyCode::Left => {
                self.is_playing = false;
                if self.retreat_current() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the first step".to_string();
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.jump_current_to_end();
                self.status_message = "Jumped to last step".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.rewind_current();
                self.status_message = "Jumped to first step".to_string();
            }
            KeyCode::Char(c) => self.handle_operation_key(c),
            _ => {}
        }
    }

    /// Per-tab operation keys; operand-less operations run immediately,
    /// the rest open the input line.
    fn handle_operation_key(&mut self, c: char) {
        match (self.tab, c) {
            (StructureTab::Array, 'i') => self.begin_input(PendingOp::ArrayInsert),
            (StructureTab::Array, 'r') => self.begin_input(PendingOp::ArrayRemove),
            (StructureTab::Stack, 'p') => self.begin_input(PendingOp::StackPush),
            (StructureTab::Stack, 'o') => {
                self.is_playing = false;
                self.stack = stack::pop(&self.stack.snapshot);
                self.status_message = applied_message(self.stack.steps.len(), "pop");
            }
            (StructureTab::Queue, 'e') => self.begin_input(PendingOp::QueueEnqueue),
            (StructureTab::Queue, 'd') => {
                self.is_playing = false;
                self.queue = queue::dequeue(&self.queue.snapshot);
                self.status_message =
                    applied_message(self.queue.steps.len(), "dequeue");
            }
            (StructureTab::Bst, 'i') => self.begin_input(PendingOp::BstInsert),
            (StructureTab::Bst, 'r') => self.begin_input(PendingOp::BstRemove),
            (StructureTab::Bst, 's') => self.begin_input(PendingOp::BstSearch),
            _ => {}
        }
    }

    fn begin_input(&mut self, op: PendingOp) {
        self.is_playing = false;
        self.input = Some((op, String::new()));
    }

    /// Keys while the input line is open
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input = None;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Backspace => {
                if let Some((_, buffer)) = self.input.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '@' => {
                if let Some((_, buffer)) = self.input.as_mut() {
                    buffer.push(c);
                }
            }
            KeyCode::Enter => {
                if let Some((op, buffer)) = self.input.take() {
                    self.apply_pending(op, buffer.trim());
                }
            }
            _ => {}
        }
    }

    /// Parse the operand and run the pending operation.  Malformed input
    /// never reaches an engine; it only sets a status message.
    fn apply_pending(&mut self, op: PendingOp, raw: &str) {
        match op {
            PendingOp::ArrayInsert => {
                // "value" appends, "value@index" inserts at the index.
                let (value_text, index_text) = match raw.split_once('@') {
                    Some((v, i)) => (v, Some(i)),
                    None => (raw, None),
                };
                let Ok(value) = value_text.parse::<i64>() else {
                    self.status_message = format!("Not a valid number: {:?}", value_text);
                    return;
                };
                let index = match index_text {
                    None => None,
                    Some(text) => match text.parse::<i64>() {
                        Ok(index) => Some(index),
                        Err(_) => {
                            self.status_message = format!("Not a valid index: {:?}", text);
                            return;
                        }
                    },
                };
                self.array = array::insert(&self.array.snapshot, value, index);
                self.status_message = applied_message(self.array.steps.len(), "insert");
            }
            PendingOp::ArrayRemove => {
                let Ok(index) = raw.parse::<i64>() else {
                    self.status_message = format!("Not a valid index: {:?}", raw);
                    return;
                };
                self.array = array::remove(&self.array.snapshot, index);
                self.status_message = applied_message(self.array.steps.len(), "remove");
            }
            PendingOp::StackPush => {
                let Ok(value) = raw.parse::<i64>() else {
                    self.status_message = format!("Not a valid number: {:?}", raw);
                    return;
                };
                self.stack = stack::push(&self.stack.snapshot, value);
                self.status_message = applied_message(self.stack.steps.len(), "push");
            }
            PendingOp::QueueEnqueue => {
                let Ok(value) = raw.parse::<i64>() else {
                    self.status_message = format!("Not a valid number: {:?}", raw);
                    return;
                };
                self.queue = queue::enqueue(&self.queue.snapshot, value);
                self.status_message =
                    applied_message(self.queue.steps.len(), "enqueue");
            }
            PendingOp::BstInsert => {
                let Ok(value) = raw.parse::<i64>() else {
                    self.status_message = format!("Not a valid number: {:?}", raw);
                    return;
                };
                self.bst = bst::insert(&self.bst.snapshot, value);
                self.status_message = applied_message(self.bst.steps.len(), "insert");
            }
            PendingOp::BstRemove => {
                let Ok(value) = raw.parse::<i64>() else {
                    self.status_message = format!("Not a valid number: {:?}", raw);
                    return;
                };
                self.bst = bst::remove(&self.bst.snapshot, value);
                self.status_message = applied_message(self.bst.steps.len(), "remove");
            }
            PendingOp::BstSearch => {
                let Ok(value) = raw.parse::<i64>() else {
                    self.status_message = format!("Not a valid number: {:?}", raw);
                    return;
                };
                self.bst = bst::search(&self.bst.snapshot, value);
                self.status_message = applied_message(self.bst.steps.len(), "search");
            }
        }
    }

    fn advance_current(&mut self) -> bool {
        match self.tab {
            StructureTab::Array => self.array.advance(),
            StructureTab::Stack => self.stack.advance(),
            StructureTab::Queue => self.queue.advance(),
            StructureTab::Bst => self.bst.advance(),
        }
    }

    fn retreat_current(&mut self) -> bool {
        match self.tab {
            StructureTab::Array => self.array.retreat(),
            StructureTab::Stack => self.stack.retreat(),
            StructureTab::Queue => self.queue.retreat(),
            StructureTab::Bst => self.bst.retreat(),
        }
    }

    fn jump_current_to_end(&mut self) {
        match self.tab {
            StructureTab::Array => self.array.jump_to_end(),
            StructureTab::Stack => self.stack.jump_to_end(),
            StructureTab::Queue => self.queue.jump_to_end(),
            StructureTab::Bst => self.bst.jump_to_end(),
        }
    }

    fn rewind_current(&mut self) {
        match self.tab {
            StructureTab::Array => self.array.rewind(),
            StructureTab::Stack => self.stack.rewind(),
            StructureTab::Queue => self.queue.rewind(),
            StructureTab::Bst => self.bst.rewind(),
        }
    }
}

fn applied_message(steps: usize, operation: &str) -> String {
    format!("{}: {} step(s), use ←/→ to replay", operation, steps)
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_is_a_loop() {
        let mut tab = StructureTab::Array;
        for _ in 0..4 {
            tab = tab.next();
        }
        assert_eq!(tab, StructureTab::Array);
        assert_eq!(StructureTab::Queue.prev(), StructureTab::Stack);
    }

    #[test]
    fn pending_operation_applies_to_engine_state() {
        let mut app = App::new();
        app.apply_pending(PendingOp::StackPush, "42");
        assert_eq!(app.stack.snapshot, vec![10, 20, 30, 42]);
        assert_eq!(app.stack.steps.len(), 3);
    }

    #[test]
    fn malformed_input_leaves_state_untouched() {
        let mut app = App::new();
        app.apply_pending(PendingOp::ArrayInsert, "abc");
        assert_eq!(app.array.snapshot, vec![10, 20, 30]);
        assert!(app.array.steps.is_empty());
        assert!(app.status_message.contains("Not a valid number"));
    }

    #[test]
    fn array_insert_parses_value_at_index() {
        let mut app = App::new();
        app.apply_pending(PendingOp::ArrayInsert, "25@1");
        assert_eq!(app.array.snapshot, vec![10, 25, 20, 30]);
    }
}
