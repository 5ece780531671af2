//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Clear the area
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "Tab", "Focus next region");
    add_shortcut(&mut lines, "Shift+Tab", "Focus previous region");
    add_shortcut(&mut lines, "L", "Choose a layout preset");
    add_shortcut(&mut lines, "r", "Reset the layout");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    add_section(&mut lines, "Menu");
    add_shortcut(&mut lines, "j / ↓", "Next entry");
    add_shortcut(&mut lines, "k / ↑", "Previous entry");
    add_shortcut(&mut lines, "Enter", "Open the entry page");
    add_shortcut(&mut lines, "Space", "Pick up the entry for dropping");

    add_section(&mut lines, "Dragging");
    add_shortcut(&mut lines, "Tab", "Choose the target tabset");
    add_shortcut(&mut lines, "Enter", "Drop as a new tab");
    add_shortcut(&mut lines, "Esc", "Cancel the drag");

    add_section(&mut lines, "Workspace");
    add_shortcut(&mut lines, "h / l", "Previous / next tab");
    add_shortcut(&mut lines, "j / k", "Scroll the panel");
    add_shortcut(&mut lines, "Ctrl+d/u", "Scroll a page");
    add_shortcut(&mut lines, "x", "Close the tab");
    add_shortcut(&mut lines, "m", "Move the tab to the next tabset");
    add_shortcut(&mut lines, "+ / -", "Grow / shrink the tabset");
    add_shortcut(&mut lines, "Enter", "Expand or collapse a border");

    add_section(&mut lines, "Mouse");
    add_shortcut(&mut lines, "Click", "Select tabs, focus panels, open pages");
    add_shortcut(&mut lines, "Drag", "Drop menu entries or tabs on a tabset");
    add_shortcut(&mut lines, "×", "Close a tab");
    add_shortcut(&mut lines, "Wheel", "Scroll the panel under the pointer");

    add_section(&mut lines, "Pages");
    add_shortcut(&mut lines, "Esc", "Back to the workspace");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut dialog = HelpDialog::default();
        for _ in 0..500 {
            dialog.handle_key_event(KeyEvent::from(KeyCode::Down)).unwrap();
        }
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();
        assert!(dialog.scroll_offset < build_help_content().len());
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        assert_eq!(
            dialog.handle_key_event(KeyEvent::from(KeyCode::Char('?'))).unwrap(),
            Some(Action::CloseModal)
        );
    }
}
