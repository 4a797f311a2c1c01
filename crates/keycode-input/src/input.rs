//! Segmented keycode entry component: a row of fixed-width character boxes
//! with masking, change/completion events, and bounded focus acquisition.

use keycode_core::command::Command;
use keycode_core::component::Component;
use keycode_core::subscription::{subscribe, Subscription};
use keycode_core::subscriptions::Every;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::focus::{FocusDriver, FocusState, SurfaceHandle};
use crate::format::sanitize;
use crate::keyboard::{keyboard_mode, KeyboardMode};
use crate::slots::{glyph_cell, slot_row, DEFAULT_MASK};

/// Style configuration for the keycode input.
#[derive(Debug, Clone)]
pub struct KeycodeStyle {
    /// Style applied to slot glyphs.
    pub text: Style,
    /// Style of the underline bar beneath the active slot.
    pub tint_bar: Style,
    /// Style of the underline bars beneath inactive slots.
    pub inactive_bar: Style,
    /// Marker shown in place of previously typed characters.
    pub mask_char: char,
    /// Width of each slot cell in terminal columns.
    pub slot_width: u16,
    /// Columns between adjacent slots.
    pub slot_gap: u16,
}

impl Default for KeycodeStyle {
    fn default() -> Self {
        Self {
            text: Style::default(),
            // #007AFF, the classic system tint
            tint_bar: Style::default().fg(Color::Rgb(0, 122, 255)),
            inactive_bar: Style::default().fg(Color::DarkGray),
            mask_char: DEFAULT_MASK,
            slot_width: 3,
            slot_gap: 1,
        }
    }
}

/// Messages for the keycode input component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Paste text into the input.
    Paste(String),
    /// The input's region was tapped/clicked: re-request focus.
    Pressed,
    /// One tick of the focus-retry timer.
    FocusTick,
    /// Emitted when the value changes.
    Changed(String),
    /// Emitted when the value reaches the configured length.
    Completed(String),
}

/// A segmented keycode/OTP entry component.
///
/// Renders one fixed-width box per character slot, each with an underline
/// bar; the bar under the next slot to be filled carries the tint style.
/// Previously typed characters are masked — only the most recent one is
/// shown in plaintext.
///
/// `Changed` fires on every accepted input event; `Completed` fires whenever
/// an event leaves the value at the configured length. `Completed` carries no
/// de-duplication: deleting the last character and retyping it fires it
/// again.
///
/// # Example
///
/// ```ignore
/// let mut pin = KeycodeInput::new("pin")
///     .with_length(4)
///     .with_numeric(true)
///     .with_on_complete(|code| submit(code));
///
/// // Once the surface exists (e.g. after your first frame):
/// let handle = pin.attach_surface();
///
/// // In your parent's update/view, delegate as usual:
/// // let cmd = pin.update(msg);
/// // pin.view(frame, area);
/// ```
pub struct KeycodeInput {
    value: Vec<char>,
    length: usize,
    uppercase: bool,
    alpha_numeric: bool,
    numeric: bool,
    auto_focus: bool,
    style: KeycodeStyle,
    surface: Option<SurfaceHandle>,
    focus: FocusDriver,
    block: Option<Block<'static>>,
    on_change: Option<Box<dyn Fn(&str) + Send>>,
    on_complete: Option<Box<dyn Fn(&str) + Send>>,
    id: &'static str,
}

impl KeycodeInput {
    /// Create a new keycode input with the given subscription id.
    ///
    /// Defaults: 4 slots, uppercase and alphanumeric filters on, text
    /// keyboard hint, auto-focus on (polling for the surface starts
    /// immediately).
    pub fn new(id: &'static str) -> Self {
        let mut focus = FocusDriver::new();
        focus.begin();
        Self {
            value: Vec::new(),
            length: 4,
            uppercase: true,
            alpha_numeric: true,
            numeric: false,
            auto_focus: true,
            style: KeycodeStyle::default(),
            surface: None,
            focus,
            block: None,
            on_change: None,
            on_complete: None,
            id,
        }
    }

    /// Set the number of character slots. Values below 1 are clamped to 1.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.max(1);
        self.value.truncate(self.length);
        self
    }

    /// Enable or disable forced uppercasing (on by default).
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Enable or disable the alphanumeric filter (on by default).
    pub fn with_alpha_numeric(mut self, alpha_numeric: bool) -> Self {
        self.alpha_numeric = alpha_numeric;
        self
    }

    /// Hint a numeric keypad to the host. Affects only
    /// [`keyboard_mode`](Self::keyboard_mode), never validation.
    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    /// Enable or disable focus acquisition on startup (on by default).
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        if auto_focus {
            self.focus.begin();
        } else {
            self.focus.cancel();
        }
        self
    }

    /// Seed the initial value. The seed runs through the same sanitization
    /// as typed input and is truncated to the slot count.
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Set custom styles for the input.
    pub fn with_style(mut self, style: KeycodeStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the active-underline tint color.
    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.style.tint_bar = Style::default().fg(color);
        self
    }

    /// Set the glyph color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.style.text = Style::default().fg(color);
        self
    }

    /// Wrap the input in the given block (border/title).
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set a callback invoked with the value on every accepted change.
    pub fn with_on_change(mut self, f: impl Fn(&str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Set a callback invoked with the value whenever an event leaves the
    /// input at full length.
    pub fn with_on_complete(mut self, f: impl Fn(&str) + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Attach the capture surface, creating it if necessary, and return a
    /// handle to it.
    ///
    /// Call this when the host is ready to receive input; the focus-retry
    /// timer acquires focus on its next tick. The returned handle can be kept
    /// to steer focus from outside the widget.
    pub fn attach_surface(&mut self) -> SurfaceHandle {
        self.surface.get_or_insert_with(SurfaceHandle::new).clone()
    }

    /// The capture surface, if attached.
    pub fn surface(&self) -> Option<&SurfaceHandle> {
        self.surface.as_ref()
    }

    /// Request focus immediately, attaching the surface if necessary.
    pub fn focus(&mut self) {
        self.attach_surface().request_focus();
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        if let Some(ref surface) = self.surface {
            surface.blur();
        }
    }

    /// Get the current value as a String.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Programmatically set the value (sanitized and truncated). Fires no
    /// events.
    pub fn set_value(&mut self, value: &str) {
        let sanitized = sanitize(value, self.uppercase, self.alpha_numeric);
        self.value = sanitized.chars().take(self.length).collect();
    }

    /// Clear the value. Fires no events.
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Return the number of characters currently entered.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The configured slot count.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the value fills every slot.
    pub fn is_complete(&self) -> bool {
        self.value.len() == self.length
    }

    /// Current focus-acquisition state.
    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    /// The keyboard hint the host should surface for this input.
    pub fn keyboard_mode(&self) -> KeyboardMode {
        keyboard_mode(self.numeric)
    }

    fn insert_char(&mut self, c: char) -> Command<Message> {
        if self.value.len() >= self.length {
            return Command::none();
        }
        let mut candidate = self.value();
        candidate.push(c);
        self.apply_raw(&candidate)
    }

    fn insert_paste(&mut self, text: &str) -> Command<Message> {
        if text.is_empty() || self.value.len() >= self.length {
            return Command::none();
        }
        let mut candidate = self.value();
        candidate.push_str(text);
        self.apply_raw(&candidate)
    }

    fn delete_char(&mut self) -> Command<Message> {
        if self.value.pop().is_some() {
            return self.emit_change();
        }
        Command::none()
    }

    // Run the formatter over the raw candidate text and report the change.
    // A change event fires even when filtering leaves the value as it was,
    // matching the underlying text field's change semantics.
    fn apply_raw(&mut self, raw: &str) -> Command<Message> {
        let sanitized = sanitize(raw, self.uppercase, self.alpha_numeric);
        self.value = sanitized.chars().take(self.length).collect();
        self.emit_change()
    }

    fn emit_change(&self) -> Command<Message> {
        let value = self.value();
        if let Some(ref on_change) = self.on_change {
            on_change(&value);
        }
        if self.value.len() == self.length {
            if let Some(ref on_complete) = self.on_complete {
                on_complete(&value);
            }
            return Command::batch(vec![
                Command::message(Message::Changed(value.clone())),
                Command::message(Message::Completed(value)),
            ]);
        }
        Command::message(Message::Changed(value))
    }
}

impl Component for KeycodeInput {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.focused() {
                    return Command::none();
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                        self.insert_char(c)
                    }
                    (KeyCode::Backspace, KeyModifiers::NONE) => self.delete_char(),
                    _ => Command::none(),
                }
            }
            Message::Paste(text) => {
                if !self.focused() {
                    return Command::none();
                }
                self.insert_paste(&text)
            }
            Message::Pressed => {
                // Tap-to-focus: the surface is presumed mounted here, so no
                // retry semantics — just re-request.
                if let Some(ref surface) = self.surface {
                    surface.request_focus();
                }
                Command::none()
            }
            Message::FocusTick => {
                self.focus.tick(self.surface.as_ref());
                Command::none()
            }
            Message::Changed(_) | Message::Completed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        let slots = slot_row(&self.value, self.length, self.style.mask_char);
        let width = self.style.slot_width as usize;
        let gap = " ".repeat(self.style.slot_gap as usize);

        let mut glyphs = Vec::with_capacity(slots.len() * 2);
        let mut bars = Vec::with_capacity(slots.len() * 2);
        for (i, slot) in slots.iter().enumerate() {
            if i > 0 {
                glyphs.push(Span::raw(gap.clone()));
                bars.push(Span::raw(gap.clone()));
            }
            glyphs.push(Span::styled(glyph_cell(slot.glyph, width), self.style.text));
            let bar_style = if slot.active {
                self.style.tint_bar
            } else {
                self.style.inactive_bar
            };
            bars.push(Span::styled("─".repeat(width), bar_style));
        }

        let paragraph = Paragraph::new(vec![Line::from(glyphs), Line::from(bars)]);
        frame.render_widget(paragraph, inner);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.focus.polling() {
            vec![
                subscribe(Every::new(self.focus.interval(), self.id))
                    .map(|_: std::time::Instant| Message::FocusTick),
            ]
        } else {
            vec![]
        }
    }

    fn focused(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.is_focused())
    }
}
