//! # Redeem Code Example
//!
//! A 6-slot alphanumeric gift-code prompt demonstrating:
//! - Uppercasing and alphanumeric filtering of typed and pasted text
//! - Seeding an initial value with `with_value`
//! - Custom styling (tint color, border block)
//! - Immediate surface attachment (no focus-retry phase)
//!
//! Run with: `cargo run --example redeem_code`

use crossterm::event::{KeyCode, KeyModifiers};
use keycode_core::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use keycode_input::input::{self, KeycodeInput};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

struct RedeemApp {
    code: KeycodeInput,
    redeemed: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Code(input::Message),
    Clear,
    Quit,
}

impl Model for RedeemApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut code = KeycodeInput::new("redeem")
            .with_length(6)
            .with_value("gc")
            .with_tint_color(Color::Magenta)
            .with_block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Gift Code "),
            );
        // The surface exists from the start here, so focus lands on the
        // retry timer's first tick.
        code.attach_surface();
        (
            RedeemApp {
                code,
                redeemed: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Code(m) => {
                if let input::Message::Completed(v) = &m {
                    self.redeemed = Some(v.clone());
                }
                self.code.update(m).map(Msg::Code)
            }
            Msg::Clear => {
                self.code.reset();
                self.redeemed = None;
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, code_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let title = Paragraph::new("Redeem a Gift Code")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        // 6 slots of width 3, 5 gaps, plus the border block
        let [_, code_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(25),
            Constraint::Fill(1),
        ])
        .areas(code_area);
        self.code.view(frame, code_area);

        if let Some(ref code) = self.redeemed {
            let status = Paragraph::new(format!("Redeeming {code}..."))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Green));
            frame.render_widget(status, status_area);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("a-z 0-9", Style::default().fg(Color::Magenta)),
            Span::raw(" type  "),
            Span::styled("Ctrl+U", Style::default().fg(Color::Magenta)),
            Span::raw(" clear  "),
            Span::styled("Esc", Style::default().fg(Color::Magenta)),
            Span::raw(" quit"),
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
            .code
            .subscriptions()
            .into_iter()
            .map(|s| s.map(Msg::Code))
            .collect();
        subs.push(terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Clear),
                _ => Some(Msg::Code(input::Message::KeyPress(key))),
            },
            TerminalEvent::Paste(text) => Some(Msg::Code(input::Message::Paste(text))),
            _ => None,
        }));
        subs
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    keycode_core::run::<RedeemApp>(()).await?;
    Ok(())
}
