//! Keyboard-mode selection.
//!
//! This only decides which on-screen keyboard *hint* the host app should
//! surface to the user; it never participates in validation, which is the
//! formatter's job alone.

/// The keyboard variant a host should hint at for this input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMode {
    /// Digit keypad.
    Numeric,
    /// Text keypad restricted to an ASCII-capable character set.
    AsciiCapable,
    /// The platform's default text keypad.
    Default,
}

impl KeyboardMode {
    /// A short human-readable label, handy for status lines.
    pub fn hint(self) -> &'static str {
        match self {
            KeyboardMode::Numeric => "numeric keypad",
            KeyboardMode::AsciiCapable => "ascii keypad",
            KeyboardMode::Default => "default keypad",
        }
    }
}

/// Select the keyboard mode from the `numeric` flag and the host platform.
///
/// The numeric flag wins outright; otherwise the Apple platform family gets
/// the ASCII-restricted variant and everything else the default keypad.
pub fn keyboard_mode(numeric: bool) -> KeyboardMode {
    if numeric {
        KeyboardMode::Numeric
    } else if cfg!(any(target_os = "macos", target_os = "ios")) {
        KeyboardMode::AsciiCapable
    } else {
        KeyboardMode::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_flag_wins() {
        assert_eq!(keyboard_mode(true), KeyboardMode::Numeric);
    }

    #[test]
    fn text_mode_follows_platform() {
        let mode = keyboard_mode(false);
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            assert_eq!(mode, KeyboardMode::AsciiCapable);
        } else {
            assert_eq!(mode, KeyboardMode::Default);
        }
    }

    #[test]
    fn hints_are_distinct() {
        assert_ne!(KeyboardMode::Numeric.hint(), KeyboardMode::Default.hint());
        assert_ne!(
            KeyboardMode::AsciiCapable.hint(),
            KeyboardMode::Default.hint()
        );
    }
}
