use futures::future::BoxFuture;
use std::future::Future;

/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// Commands are how widgets and apps talk back to the runtime without
/// performing the work themselves: an immediate follow-up message, an async
/// delay, or quitting the program.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Emit a message on the next loop iteration:
/// let cmd = Command::message(Msg::Changed(value));
///
/// // Fire once after a delay:
/// let cmd = Command::tick(Duration::from_millis(300), |_| Msg::SurfaceReady);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Action(Action<Msg>),
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
}

/// Side-effect-free actions the runtime processes synchronously.
pub enum Action<Msg> {
    /// Send a message immediately (no async).
    Message(Msg),
    /// Quit the program.
    Quit,
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Action(Action::Message(msg)),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Action(Action::Quit),
        }
    }

    /// Run an async future, map the result to a message.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// One-shot timer: fires once after `duration`, mapping the instant to a message.
    pub fn tick(
        duration: std::time::Duration,
        map: impl FnOnce(std::time::Instant) -> Msg + Send + 'static,
    ) -> Self {
        Command {
            inner: CommandInner::Future(Box::pin(async move {
                tokio::time::sleep(duration).await;
                map(std::time::Instant::now())
            })),
        }
    }

    /// Run multiple commands concurrently.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().collect();
        if cmds.is_empty() {
            return Command::none();
        }
        if cmds.len() == 1 {
            let mut cmds = cmds;
            return cmds.pop().unwrap();
        }
        Command {
            inner: CommandInner::Batch(cmds),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(std::sync::Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Action(Action::Message(msg)) => Command::message(f(msg)),
            CommandInner::Action(Action::Quit) => Command::quit(),
            CommandInner::Future(fut) => {
                let f = f.clone();
                Command {
                    inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
                }
            }
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message action, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Action(Action::Message(msg)) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
    }

    #[test]
    fn message_round_trips() {
        let cmd: Command<i32> = Command::message(7);
        assert_eq!(cmd.into_message(), Some(7));
    }

    #[test]
    fn quit_creates_quit() {
        let cmd: Command<()> = Command::quit();
        assert!(matches!(cmd.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn batch_single_unwraps() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let inner = cmd.into_batch().expect("batch");
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message(), Some("42".to_string()));
    }

    #[test]
    fn map_quit_stays_quit() {
        let cmd: Command<i32> = Command::quit();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(mapped.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        let inner = mapped.into_batch().expect("batch");
        assert_eq!(inner.len(), 2);
    }
}
