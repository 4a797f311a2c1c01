//! Slot computation: the pure mapping from the current value to the row of
//! visual character boxes.

use unicode_width::UnicodeWidthChar;

/// The default mask marker shown in place of previously typed characters.
pub const DEFAULT_MASK: char = '•';

/// The derived display state of one character box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    /// The glyph to display: `None` for an empty slot, otherwise the literal
    /// character or the mask marker.
    pub glyph: Option<char>,
    /// Whether this is the slot the next character will land in.
    pub active: bool,
}

/// Compute the slot row for the given value.
///
/// Always returns exactly `length` descriptors. Slot `i` is active iff
/// `i == value.len()`, so no slot is active once the value is full. Only the
/// most recently typed character is shown in plaintext; every earlier slot
/// shows the mask marker. That is a deliberate "show last character typed"
/// policy, not leakage.
pub fn slot_row(value: &[char], length: usize, mask: char) -> Vec<SlotDescriptor> {
    let len = value.len();
    (0..length)
        .map(|i| {
            let glyph = if i >= len {
                None
            } else if i == len - 1 {
                Some(value[i])
            } else {
                Some(mask)
            };
            SlotDescriptor {
                glyph,
                active: i == len,
            }
        })
        .collect()
}

/// Render a slot glyph into a fixed-width cell, centered by display width.
pub fn glyph_cell(glyph: Option<char>, width: usize) -> String {
    match glyph {
        None => " ".repeat(width),
        Some(c) => {
            let w = UnicodeWidthChar::width(c).unwrap_or(1);
            let pad = width.saturating_sub(w);
            let left = pad / 2;
            let mut cell = " ".repeat(left);
            cell.push(c);
            cell.push_str(&" ".repeat(pad - left));
            cell
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn always_length_slots() {
        for value in ["", "1", "12", "123", "1234"] {
            assert_eq!(slot_row(&chars(value), 4, DEFAULT_MASK).len(), 4);
        }
    }

    #[test]
    fn empty_value_first_slot_active() {
        let row = slot_row(&[], 4, DEFAULT_MASK);
        assert!(row[0].active);
        assert!(row.iter().all(|s| s.glyph.is_none()));
        assert_eq!(row.iter().filter(|s| s.active).count(), 1);
    }

    #[test]
    fn active_slot_tracks_next_position() {
        let row = slot_row(&chars("12"), 4, DEFAULT_MASK);
        assert!(!row[0].active);
        assert!(!row[1].active);
        assert!(row[2].active);
        assert!(!row[3].active);
    }

    #[test]
    fn no_active_slot_when_full() {
        let row = slot_row(&chars("1234"), 4, DEFAULT_MASK);
        assert_eq!(row.iter().filter(|s| s.active).count(), 0);
    }

    #[test]
    fn only_last_char_visible_in_plaintext() {
        let row = slot_row(&chars("ABC"), 4, DEFAULT_MASK);
        assert_eq!(row[0].glyph, Some(DEFAULT_MASK));
        assert_eq!(row[1].glyph, Some(DEFAULT_MASK));
        assert_eq!(row[2].glyph, Some('C'));
        assert_eq!(row[3].glyph, None);
    }

    #[test]
    fn single_char_is_visible() {
        let row = slot_row(&chars("A"), 4, DEFAULT_MASK);
        assert_eq!(row[0].glyph, Some('A'));
    }

    #[test]
    fn custom_mask_marker() {
        let row = slot_row(&chars("AB"), 4, '*');
        assert_eq!(row[0].glyph, Some('*'));
        assert_eq!(row[1].glyph, Some('B'));
    }

    #[test]
    fn glyph_cell_centers() {
        assert_eq!(glyph_cell(Some('A'), 3), " A ");
        assert_eq!(glyph_cell(None, 3), "   ");
        assert_eq!(glyph_cell(Some('1'), 4), " 1  ");
    }

    #[test]
    fn glyph_cell_wide_char() {
        // Full-width characters occupy two columns
        assert_eq!(glyph_cell(Some('Ａ'), 3), "Ａ ");
    }
}
