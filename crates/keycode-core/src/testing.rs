use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the init/update/view cycle from a plain `#[test]`
/// function — no tokio runtime or TTY required. Synchronous commands
/// ([`Command::message`]) are collected and can be flushed with
/// [`drain_messages`](TestProgram::drain_messages); async commands are
/// silently ignored.
///
/// # Example
///
/// ```rust,ignore
/// use keycode_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<PinApp>::new(());
/// prog.send(Msg::Key(key(KeyCode::Char('1'))));
/// prog.drain_messages();
/// assert_eq!(prog.model().entered, "1");
///
/// let screen = prog.render_string(40, 4);
/// assert!(screen.contains('1'));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Synchronous commands produced by `init` are collected into the
    /// pending-message queue; call
    /// [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process all pending synchronous messages produced by [`Command::message`].
    ///
    /// Repeatedly drains the pending queue until no new synchronous messages
    /// are generated, which covers command-chaining scenarios where one
    /// update produces a message that triggers another update.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    ///
    /// Bypasses the normal message-driven update cycle, which is useful for
    /// arranging test state before sending messages.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Each row of the buffer becomes a line; rows are separated by newlines.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Action(Action::Quit) => {}
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // A minimal digit-collector model for exercising the harness.
    struct Digits {
        entered: String,
        limit: usize,
        complete: bool,
    }

    #[derive(Debug)]
    enum DigitsMsg {
        Typed(char),
        Filled,
        Clear,
    }

    impl Model for Digits {
        type Message = DigitsMsg;
        type Flags = usize;

        fn init(limit: usize) -> (Self, Command<DigitsMsg>) {
            (
                Digits {
                    entered: String::new(),
                    limit,
                    complete: false,
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: DigitsMsg) -> Command<DigitsMsg> {
            match msg {
                DigitsMsg::Typed(c) => {
                    if self.entered.len() < self.limit {
                        self.entered.push(c);
                    }
                    if self.entered.len() == self.limit {
                        return Command::message(DigitsMsg::Filled);
                    }
                    Command::none()
                }
                DigitsMsg::Filled => {
                    self.complete = true;
                    Command::none()
                }
                DigitsMsg::Clear => {
                    self.entered.clear();
                    self.complete = false;
                    Command::none()
                }
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = format!("pin: {}", self.entered);
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn init_with_flags() {
        let prog = TestProgram::<Digits>::new(4);
        assert_eq!(prog.model().limit, 4);
        assert!(prog.model().entered.is_empty());
    }

    #[test]
    fn send_updates_model() {
        let mut prog = TestProgram::<Digits>::new(4);
        prog.send(DigitsMsg::Typed('1'));
        prog.send(DigitsMsg::Typed('2'));
        assert_eq!(prog.model().entered, "12");
    }

    #[test]
    fn chained_message_requires_drain() {
        let mut prog = TestProgram::<Digits>::new(2);
        prog.send(DigitsMsg::Typed('1'));
        prog.send(DigitsMsg::Typed('2'));
        // The Filled message is pending, not yet applied
        assert!(!prog.model().complete);
        prog.drain_messages();
        assert!(prog.model().complete);
    }

    #[test]
    fn model_mut_allows_setup() {
        let mut prog = TestProgram::<Digits>::new(4);
        prog.model_mut().entered.push_str("99");
        prog.send(DigitsMsg::Typed('0'));
        assert_eq!(prog.model().entered, "990");
    }

    #[test]
    fn clear_resets() {
        let mut prog = TestProgram::<Digits>::new(2);
        prog.send(DigitsMsg::Typed('1'));
        prog.send(DigitsMsg::Typed('2'));
        prog.drain_messages();
        prog.send(DigitsMsg::Clear);
        assert!(prog.model().entered.is_empty());
        assert!(!prog.model().complete);
    }

    #[test]
    fn render_string_shows_view() {
        let mut prog = TestProgram::<Digits>::new(4);
        prog.send(DigitsMsg::Typed('7'));
        let content = prog.render_string(20, 1);
        assert!(content.contains("pin: 7"));
    }
}
