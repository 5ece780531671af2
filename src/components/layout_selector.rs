//! Layout selector dialog component
//!
//! Two-panel layout:
//! - Left panel: registered layout presets
//! - Right panel: outline of the highlighted preset

use crate::action::Action;
use crate::component::Component;
use crate::model::layout::{LayoutNode, LayoutPreset, NodeKind, TabNode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// One selectable preset
#[derive(Debug, Clone)]
pub struct PresetChoice {
    pub name: String,
    pub label: String,
    pub outline: Vec<String>,
}

impl PresetChoice {
    pub fn from_preset(preset: &LayoutPreset) -> Self {
        Self {
            name: preset.name.clone(),
            label: preset.label(),
            outline: outline(preset),
        }
    }
}

fn kind_label(kind: NodeKind) -> String {
    format!("{:?}", kind).to_lowercase()
}

/// Indented text outline of a preset's borders and tree
pub fn outline(preset: &LayoutPreset) -> Vec<String> {
    fn tab_names(tabs: &[TabNode]) -> String {
        tabs.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
    }

    fn walk(node: &LayoutNode, depth: usize, out: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let kind = kind_label(node.kind());
        match node {
            LayoutNode::Row(split) | LayoutNode::Column(split) => {
                out.push(format!("{}{} ({})", indent, kind, split.weight));
                for child in &split.children {
                    walk(child, depth + 1, out);
                }
            }
            LayoutNode::Tabset(tabset) => {
                out.push(format!(
                    "{}{} ({}): {}",
                    indent,
                    kind,
                    tabset.weight,
                    tab_names(&tabset.children)
                ));
            }
        }
    }

    let mut out: Vec<String> = preset
        .borders
        .iter()
        .map(|border| {
            format!(
                "{} {}: {}",
                format!("{:?}", border.location).to_lowercase(),
                kind_label(border.kind()),
                tab_names(&border.children)
            )
        })
        .collect();
    walk(&LayoutNode::Row(preset.root.clone()), 0, &mut out);
    out
}

/// Layout selector dialog
pub struct LayoutSelectorDialog {
    pub selected_index: usize,
    pub choices: Vec<PresetChoice>,
    pub current: String,
    list_state: ListState,
}

impl Default for LayoutSelectorDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSelectorDialog {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            choices: Vec::new(),
            current: String::new(),
            list_state: ListState::default(),
        }
    }

    /// Fill the dialog and highlight the current preset
    pub fn set_presets(&mut self, current: &str, presets: &[LayoutPreset]) {
        self.current = current.to_string();
        self.choices = presets.iter().map(PresetChoice::from_preset).collect();
        self.selected_index = self
            .choices
            .iter()
            .position(|c| c.name == current)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// Name of the highlighted preset
    pub fn selected_name(&self) -> Option<&str> {
        self.choices
            .get(self.selected_index)
            .map(|c| c.name.as_str())
    }

    fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.list_state.select(Some(index));
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.choices.len() {
            self.select(self.selected_index + 1);
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.select(self.selected_index - 1);
        }
    }
}

impl Component for LayoutSelectorDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('L') => Some(Action::CloseModal),
            KeyCode::Enter if !self.choices.is_empty() => Some(Action::ConfirmModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            // Quick pick
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.choices.len() {
                    self.select(index);
                    Some(Action::ConfirmModal)
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 80u16.min(area.width.saturating_sub(4));
        let popup_height = 20u16.min(area.height.saturating_sub(4));

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);
        frame.render_widget(Clear, popup_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Content (two panels)
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(Span::styled(
            format!("Current: {}", self.current),
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select Layout ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(30)])
            .split(main_chunks[1]);

        let items: Vec<ListItem> = self
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let is_current = choice.name == self.current;
                let marker = if is_current { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        marker,
                        Style::default().fg(if is_current {
                            Color::Green
                        } else {
                            Color::DarkGray
                        }),
                    ),
                    Span::raw(choice.label.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Presets ")
                    .title_style(Style::default().fg(Color::Cyan))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, content_chunks[0], &mut self.list_state);

        let outline_lines: Vec<Line> = match self.choices.get(self.selected_index) {
            Some(choice) => choice
                .outline
                .iter()
                .map(|line| match line.split_once(':') {
                    Some((node, tabs)) => Line::from(vec![
                        Span::styled(format!("{}:", node), Style::default().fg(Color::Cyan)),
                        Span::styled(tabs.to_string(), Style::default().fg(Color::Yellow)),
                    ]),
                    None => Line::from(Span::styled(
                        line.clone(),
                        Style::default().fg(Color::Cyan),
                    )),
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                "No presets registered",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        let outline_panel = Paragraph::new(outline_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Structure ")
                .title_style(Style::default().fg(Color::Cyan))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(outline_panel, content_chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presets::PresetRegistry;

    fn dialog(current: &str) -> LayoutSelectorDialog {
        let registry = PresetRegistry::builtin().unwrap();
        let mut dialog = LayoutSelectorDialog::new();
        dialog.set_presets(current, registry.presets());
        dialog
    }

    #[test]
    fn test_highlights_current_preset() {
        let dialog = dialog("complex");
        assert_eq!(dialog.selected_name(), Some("complex"));
        assert_eq!(dialog.choices[dialog.selected_index].label, "Complex");
    }

    #[test]
    fn test_navigation_and_quick_pick() {
        let mut dialog = dialog("default");
        assert_eq!(
            dialog.handle_key_event(KeyEvent::from(KeyCode::Char('j'))).unwrap(),
            Some(Action::ModalDown)
        );
        assert_eq!(dialog.selected_name(), Some("complex"));

        assert_eq!(
            dialog.handle_key_event(KeyEvent::from(KeyCode::Char('1'))).unwrap(),
            Some(Action::ConfirmModal)
        );
        assert_eq!(dialog.selected_name(), Some("default"));
        assert_eq!(
            dialog.handle_key_event(KeyEvent::from(KeyCode::Char('9'))).unwrap(),
            None
        );
    }

    #[test]
    fn test_outline_lists_borders_and_tabsets() {
        let registry = PresetRegistry::builtin().unwrap();
        let lines = outline(registry.resolve("complex"));
        assert_eq!(lines[0], "left border: Navigation");
        assert_eq!(lines[1], "bottom border: Console");
        assert_eq!(lines[2], "row (100)");
        assert_eq!(lines[3], "  tabset (33): Dashboard");
        assert_eq!(lines[4], "  column (67)");
        assert_eq!(lines[5], "    tabset (50): Analytics, Reports");
    }
}
