use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// All fields have defaults; use struct update syntax to override only what
/// you need:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     mouse_capture: true,   // needed for tap-to-focus
///     title: Some("PIN entry".into()),
///     ..ProgramOptions::default()
/// };
/// ```
pub struct ProgramOptions {
    /// Target frames per second (default: 60, max: 120).
    pub fps: u32,
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Enable mouse capture (default: false).
    pub mouse_capture: bool,
    /// Set terminal title.
    pub title: Option<String>,
    /// Whether to catch panics and restore the terminal (default: true).
    pub catch_panics: bool,
    /// Whether to quit on ctrl-c at the signal level (default: true).
    pub handle_signals: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: false,
            title: None,
            catch_panics: true,
            handle_signals: true,
        }
    }
}

/// The program runtime: terminal setup, the event loop, and the full
/// [`Model`] lifecycle.
///
/// `Program` wires a [`Model`] to a real terminal via [`ratatui`]/[`crossterm`]
/// and drives the init/update/view loop until the model returns
/// [`Command::quit()`] or the process receives ctrl-c.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<PinApp>::new(())?.run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscription_manager: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);

        let terminal = init_terminal(&options)?;
        let subscription_manager = SubscriptionManager::new(msg_tx.clone());

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            subscription_manager,
            options,
            needs_redraw: true,
            should_quit: false,
        };

        program.execute_command(init_cmd);

        let subs = program.model.subscriptions();
        program.subscription_manager.reconcile(subs);

        Ok(program)
    }

    /// Get a sender for external message injection.
    pub fn sender(&self) -> mpsc::UnboundedSender<M::Message> {
        self.msg_tx.clone()
    }

    /// Run the program. Blocks until quit; returns the final model state.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        self.event_loop().await?;

        self.subscription_manager.shutdown();
        restore_terminal(&self.options)?;

        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        // Initial render
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let handle_signals = self.options.handle_signals;

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                    if self.should_quit {
                        return Ok(());
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);

        // Reconcile subscriptions after every update
        let subs = self.model.subscriptions();
        self.subscription_manager.reconcile(subs);

        self.needs_redraw = true;
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Action(Action::Quit) => {
                self.should_quit = true;
            }
            CommandInner::Future(fut) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let msg = fut.await;
                    let _ = tx.send(msg);
                });
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(
    options: &ProgramOptions,
) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install a panic hook that restores the terminal (only once to avoid stacking)
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> Result<(), std::io::Error> {
    // Best-effort cleanup: continue even if individual steps fail, so we
    // restore as much terminal state as possible.
    let r1 = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    r1
}
