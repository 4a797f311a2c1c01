//! # PIN Entry Example
//!
//! A 4-digit numeric PIN prompt demonstrating:
//! - Deferred surface attachment: the capture surface appears ~300ms after
//!   startup, so the widget's focus-retry timer is doing real work
//! - Wrapping the widget's messages in a parent message enum
//! - Reacting to `Changed` / `Completed` in the parent
//! - Click-to-refocus via mouse capture
//!
//! Run with: `cargo run --example pin_entry`

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
use keycode_core::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use keycode_input::focus::FocusState;
use keycode_input::input::{self, KeycodeInput};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

struct PinApp {
    pin: KeycodeInput,
    status: Option<String>,
    unlocked: bool,
}

#[derive(Debug)]
enum Msg {
    Pin(input::Message),
    /// The host's input surface finished mounting.
    SurfaceReady,
    Quit,
}

impl Model for PinApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let pin = KeycodeInput::new("pin").with_length(4).with_numeric(true);
        (
            PinApp {
                pin,
                status: None,
                unlocked: false,
            },
            // Simulate a host whose input plumbing comes up after startup;
            // until then the widget polls for the surface on its own timer.
            Command::tick(std::time::Duration::from_millis(300), |_| {
                Msg::SurfaceReady
            }),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::SurfaceReady => {
                self.pin.attach_surface();
                Command::none()
            }
            Msg::Pin(m) => {
                match &m {
                    input::Message::Changed(v) => {
                        self.status = Some(format!("{} of {} digits", v.len(), self.pin.length()));
                    }
                    input::Message::Completed(v) => {
                        self.unlocked = v == "1234";
                        self.status = Some(if self.unlocked {
                            "Unlocked!".to_string()
                        } else {
                            "Wrong PIN — press Backspace to edit".to_string()
                        });
                    }
                    _ => {}
                }
                self.pin.update(m).map(Msg::Pin)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, pin_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let title = Paragraph::new("Enter PIN")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        // 4 slots of width 3 plus 3 gaps
        let [_, pin_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(15),
            Constraint::Fill(1),
        ])
        .areas(pin_area);
        self.pin.view(frame, pin_area);

        let focus_note = match self.pin.focus_state() {
            FocusState::Polling { .. } => Some("acquiring input focus..."),
            FocusState::GaveUp => Some("input surface never appeared"),
            _ => None,
        };
        let status = self
            .status
            .as_deref()
            .or(focus_note)
            .unwrap_or("waiting for input");
        let status_style = if self.unlocked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(status)
                .alignment(Alignment::Center)
                .style(status_style),
            status_area,
        );

        let help = Paragraph::new(Line::from(vec![
            Span::styled("0-9", Style::default().fg(Color::Cyan)),
            Span::raw(" type  "),
            Span::styled("Backspace", Style::default().fg(Color::Cyan)),
            Span::raw(" delete  "),
            Span::styled("Click", Style::default().fg(Color::Cyan)),
            Span::raw(" refocus  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" quit   [{}]", self.pin.keyboard_mode().hint())),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, help_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs: Vec<Subscription<Msg>> = self
            .pin
            .subscriptions()
            .into_iter()
            .map(|s| s.map(Msg::Pin))
            .collect();
        subs.push(terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                _ => Some(Msg::Pin(input::Message::KeyPress(key))),
            },
            TerminalEvent::Paste(text) => Some(Msg::Pin(input::Message::Paste(text))),
            TerminalEvent::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                Some(Msg::Pin(input::Message::Pressed))
            }
            _ => None,
        }));
        subs
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = keycode_core::ProgramOptions {
        mouse_capture: true,
        ..Default::default()
    };
    keycode_core::run_with::<PinApp>((), options).await?;
    Ok(())
}
