use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one difference: its
/// [`view`](Component::view) receives an `area: Rect`, so a parent decides
/// *where* each child renders by handing it a sub-region of the frame.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// lift commands with [`Command::map`]:
///
/// ```rust,ignore
/// enum Msg { Pin(keycode_input::Message), Quit }
///
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Pin(m) => self.pin.update(m).map(Msg::Pin),
///         Msg::Quit => Command::quit(),
///     }
/// }
/// ```
///
/// The same lifting applies to [`subscriptions`](Component::subscriptions):
/// the parent collects the child's subscriptions and maps each one into its
/// own message type, so the runtime can start and stop them by diffing.
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The default implementation returns an empty list.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing; parents query this to decide which child
    /// receives keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
