//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`], [`TerminalEvents`]) — keyboard,
//!   mouse, resize, focus, and paste events from the terminal.
//! - **Timers** ([`Every`]) — repeating interval subscription, used by the
//!   keycode widget's focus-retry loop.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
