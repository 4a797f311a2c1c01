//! Segmented keycode / OTP entry widget for the **keycode** TUI framework.
//!
//! [`input::KeycodeInput`] implements [`keycode_core::Component`], so it can
//! be embedded inside any [`keycode_core::Model`] and composed freely within
//! [`ratatui`] layouts.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`input`] | The [`KeycodeInput`](input::KeycodeInput) component |
//! | [`format`] | Value sanitization (uppercasing, alphanumeric filter) |
//! | [`slots`] | Value-to-slot-row display mapping |
//! | [`focus`] | Bounded focus-retry driver and capture-surface handle |
//! | [`keyboard`] | Keyboard-variant hints for host apps |

pub mod focus;
pub mod format;
pub mod input;
pub mod keyboard;
pub mod slots;
