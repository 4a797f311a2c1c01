use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. External events arrive as messages through [`Subscription`]s.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further work.
/// 5. Steps 2--4 repeat until the program exits.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    ///
    /// Messages arrive from [`Subscription`]s, from [`Command::message`], or
    /// from async work completed via [`Command::perform`].
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when no
    /// startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// After `update` returns, the runtime calls [`view`](Model::view) to
    /// re-render and [`subscriptions`](Model::subscriptions) to reconcile
    /// active subscriptions.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// Should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions. Called after every update.
    ///
    /// The runtime diffs the returned list against the previously active
    /// set: new subscriptions are started and removed ones are cancelled.
    ///
    /// The default implementation returns an empty list.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
