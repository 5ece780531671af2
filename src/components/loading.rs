//! Loading screen component
//!
//! Shown while no live layout model exists yet.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

#[derive(Default)]
pub struct LoadingComponent {
    frame: usize,
}

impl LoadingComponent {
    fn spinner(&self) -> &'static str {
        SPINNER[self.frame % SPINNER.len()]
    }
}

impl Component for LoadingComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.frame = self.frame.wrapping_add(1);
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default(), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(3) / 2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(
                format!("{} ", self.spinner()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                "Loading workspace...",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[1]);

        let hint = Line::from(Span::styled(
            "Press q to quit",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[3]);

        Ok(())
    }
}
