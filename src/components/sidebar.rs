//! Sidebar menu component
//!
//! Lists the menu entries. Entries can be clicked to open their page or
//! dragged into the workspace to add a tab.

use crate::action::Action;
use crate::component::Component;
use crate::model::menu::{DragState, MenuEntry};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SidebarComponent {
    entries: &'static [MenuEntry],
    /// Highlighted entry
    pub selected: usize,
    pub focused: bool,
    drag: DragState,
    /// Row of each entry from the last draw
    entry_areas: Vec<Rect>,
}

impl SidebarComponent {
    pub fn new(entries: &'static [MenuEntry]) -> Self {
        Self {
            entries,
            selected: 0,
            focused: true,
            drag: DragState::Idle,
            entry_areas: Vec::new(),
        }
    }

    pub fn set_drag_state(&mut self, drag: DragState) {
        self.drag = drag;
    }

    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + self.entries.len() - 1) % self.entries.len();
        }
    }

    /// Index of the entry drawn at a screen position
    pub fn entry_at(&self, x: u16, y: u16) -> Option<usize> {
        self.entry_areas
            .iter()
            .position(|area| area.contains((x, y).into()))
    }
}

impl Component for SidebarComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MenuNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MenuPrev),
            KeyCode::Enter => Some(Action::MenuClick(self.selected)),
            KeyCode::Char(' ') => Some(Action::DragStart(self.selected)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::MenuNext => self.next(),
            Action::MenuPrev => self.previous(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Menu ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.entry_areas.clear();
        let dragged = self.drag.dragged_entry().map(|e| e.id);

        let mut lines = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            self.entry_areas.push(Rect::new(inner.x, y, inner.width, 1));

            let is_dragged = dragged == Some(entry.id);
            let style = if is_dragged {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == self.selected && self.focused {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if is_dragged { "⇢ " } else { "  " };

            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{} ", entry.icon), style.fg(Color::Yellow)),
                Span::styled(
                    format!("{:width$}", entry.name, width = inner.width.saturating_sub(4) as usize),
                    style,
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Drag into the workspace",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::menu::MENU_ENTRIES;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_keys_map_to_drag_and_click() {
        let mut sidebar = SidebarComponent::new(MENU_ENTRIES);
        sidebar.selected = 2;
        let key = |code| KeyEvent::from(code);
        assert_eq!(
            sidebar.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::MenuClick(2))
        );
        assert_eq!(
            sidebar.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::DragStart(2))
        );
    }

    #[test]
    fn test_selection_wraps() {
        let mut sidebar = SidebarComponent::new(MENU_ENTRIES);
        sidebar.previous();
        assert_eq!(sidebar.selected, MENU_ENTRIES.len() - 1);
        sidebar.next();
        assert_eq!(sidebar.selected, 0);
    }

    #[test]
    fn test_entry_hit_testing_after_draw() {
        let mut sidebar = SidebarComponent::new(MENU_ENTRIES);
        let mut terminal = Terminal::new(TestBackend::new(22, 12)).unwrap();
        terminal
            .draw(|frame| sidebar.draw(frame, frame.area()).unwrap())
            .unwrap();

        // Entries start inside the border
        assert_eq!(sidebar.entry_at(3, 1), Some(0));
        assert_eq!(sidebar.entry_at(3, 3), Some(2));
        assert_eq!(sidebar.entry_at(0, 0), None);
    }
}
