//! Core runtime for the **keycode** entry widget.
//!
//! `keycode-core` is a small Elm-architecture runtime: a program is expressed
//! as a pure **init -> update -> view** cycle, with side effects pushed to
//! the edges through [`Command`]s and [`Subscription`]s. It exists so the
//! segmented keycode widget (in `keycode-input`) can express its focus-retry
//! timer as a declaratively-owned subscription: the runtime diffs the
//! declared subscription set after every update, so a timer declared only
//! while the widget is polling is aborted the moment polling ends. Cleanup is
//! a property of the loop, not a convention the widget has to remember.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`Subscription`] | Long-lived event source (terminal events, timers) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, Every};

/// Run an application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
