//! Header bar with the app title, current route and the layout selector

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Default)]
pub struct HeaderComponent {
    preset_label: String,
    route: String,
    /// Where the selector was drawn last frame
    selector_area: Rect,
}

impl HeaderComponent {
    pub fn set_context(&mut self, preset_label: String, route: String) {
        self.preset_label = preset_label;
        self.route = route;
    }

    fn selector_text(&self) -> String {
        format!(" Layout: {} ▾ ", self.preset_label)
    }
}

impl Component for HeaderComponent {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let clicked = mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self.selector_area.contains((mouse.column, mouse.row).into());
        Ok(clicked.then_some(Action::OpenLayoutSelector))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let selector = self.selector_text();
        let selector_width = (selector.width() as u16).min(inner.width);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(selector_width)])
            .split(inner);

        let title = Line::from(vec![
            Span::styled(
                " Workspace ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.route.clone(), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        self.selector_area = chunks[1];
        let selector = Paragraph::new(Line::from(Span::styled(
            selector,
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(selector, self.selector_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_selector_click_opens_picker() {
        let mut header = HeaderComponent::default();
        header.set_context("Complex".to_string(), "/workspace".to_string());

        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| header.draw(frame, frame.area()).unwrap())
            .unwrap();

        assert_eq!(
            header.handle_mouse_event(click(57, 1)).unwrap(),
            Some(Action::OpenLayoutSelector)
        );
        assert_eq!(header.handle_mouse_event(click(2, 1)).unwrap(), None);
    }
}
