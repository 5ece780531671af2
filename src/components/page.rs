//! Full-screen panel page
//!
//! Shown for `/workspace/<tag>` routes opened by clicking a menu entry.

use crate::action::Action;
use crate::component::Component;
use crate::components::panel::draw_panel;
use crate::model::panel::PanelView;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the page is showing
#[derive(Debug, Clone)]
pub enum PageContent {
    Panel(PanelView),
    NotFound(String),
}

pub struct PageComponent {
    content: PageContent,
    scroll: u16,
}

impl Default for PageComponent {
    fn default() -> Self {
        Self {
            content: PageContent::NotFound(String::new()),
            scroll: 0,
        }
    }
}

impl PageComponent {
    pub fn set_view(&mut self, view: PanelView) {
        self.content = PageContent::Panel(view);
        self.scroll = 0;
    }

    pub fn set_not_found(&mut self, path: String) {
        self.content = PageContent::NotFound(path);
        self.scroll = 0;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
    }
}

impl Component for PageComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::NavigateBack),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll_by(1),
            Action::ScrollUp => self.scroll_by(-1),
            Action::PageDown => self.scroll_by(10),
            Action::PageUp => self.scroll_by(-10),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match &self.content {
            PageContent::Panel(view) => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", view.tag))
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
                draw_panel(frame, area, view, block, &mut self.scroll);
            }
            PageContent::NotFound(path) => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Page not found",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(path.clone(), Style::default().fg(Color::DarkGray))),
                ];
                let paragraph = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(paragraph, area);
            }
        }
        Ok(())
    }
}
