//! Workspace component
//!
//! Draws the live layout model: borders docked to the edges and the
//! row/column/tabset tree in between. Split children share space by weight.
//! Every draw records the screen areas of tabsets, tabs and border tabs so
//! mouse events can be mapped back to layout nodes.

use crate::action::Action;
use crate::component::Component;
use crate::components::panel::draw_panel;
use crate::model::layout::{
    BorderLocation, BorderNode, GlobalSettings, LayoutModel, LayoutNode, NodeId, SplitNode,
    TabNode, TabsetNode,
};
use crate::model::menu::MenuEntry;
use crate::model::panel::PanelFactory;
use crate::model::table::PX_PER_CELL;
use crate::model::ui::Focus;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// Approximate height of one terminal row in browser pixels
const PX_PER_ROW: u16 = 16;
const CLOSE_GLYPH: &str = "×";
const PAGE: i32 = 10;

// ═══════════════════════════════════════════════════════════════════════════════
// Hit Regions
// ═══════════════════════════════════════════════════════════════════════════════

/// One tab label in a tab strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHit {
    pub tab: NodeId,
    pub index: usize,
    pub area: Rect,
    /// Close button, for closable tabs
    pub close: Option<Rect>,
}

#[derive(Debug, Clone)]
struct TabsetRegion {
    tabset: NodeId,
    area: Rect,
    tabs: Vec<TabHit>,
}

#[derive(Debug, Clone)]
struct BorderRegion {
    border: NodeId,
    tabs: Vec<TabHit>,
}

/// What sits under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceHit {
    Tab {
        tabset: NodeId,
        tab: NodeId,
        index: usize,
    },
    Close {
        tab: NodeId,
    },
    BorderTab {
        border: NodeId,
        index: usize,
    },
    Body {
        tabset: NodeId,
    },
}

/// Lay out tab labels left to right from `(x, y)`, clipped to `max_width`
pub fn tab_strip(
    tabs: &[TabNode],
    global: &GlobalSettings,
    x: u16,
    y: u16,
    max_width: u16,
) -> Vec<TabHit> {
    let right = x.saturating_add(max_width);
    let mut hits = Vec::new();
    let mut cursor = x;

    for (index, tab) in tabs.iter().enumerate() {
        let closable = tab.closable(global);
        let label_width = tab_label(tab, closable).width() as u16;
        if cursor >= right {
            break;
        }
        let width = label_width.min(right - cursor);
        let close = closable
            .then(|| {
                // "×" sits one cell before the trailing space
                let cx = cursor + label_width.saturating_sub(2);
                (cx < right).then(|| Rect::new(cx, y, 1, 1))
            })
            .flatten();
        hits.push(TabHit {
            tab: tab.id,
            index,
            area: Rect::new(cursor, y, width, 1),
            close,
        });
        cursor = cursor.saturating_add(label_width + 1);
    }
    hits
}

fn tab_label(tab: &TabNode, closable: bool) -> String {
    if closable {
        format!(" {} {} ", tab.name, CLOSE_GLYPH)
    } else {
        format!(" {} ", tab.name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Workspace Component
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct WorkspaceComponent {
    /// Scroll offset per tab
    scroll: HashMap<NodeId, u16>,
    tabsets: Vec<TabsetRegion>,
    borders: Vec<BorderRegion>,
}

impl WorkspaceComponent {
    pub fn scroll_tab(&mut self, tab: NodeId, delta: i32) {
        let offset = self.scroll.entry(tab).or_insert(0);
        *offset = (*offset as i32 + delta).clamp(0, u16::MAX as i32) as u16;
    }

    pub fn scroll_offset(&self, tab: NodeId) -> u16 {
        self.scroll.get(&tab).copied().unwrap_or(0)
    }

    /// Forget scroll positions, e.g. after a preset switch
    pub fn reset_scroll(&mut self) {
        self.scroll.clear();
    }

    /// Tabset drawn at a screen position
    pub fn tabset_at(&self, x: u16, y: u16) -> Option<NodeId> {
        let pos = Position::new(x, y);
        self.tabsets
            .iter()
            .find(|r| r.area.contains(pos))
            .map(|r| r.tabset)
    }

    /// Layout element drawn at a screen position
    pub fn hit(&self, x: u16, y: u16) -> Option<WorkspaceHit> {
        let pos = Position::new(x, y);

        for region in &self.borders {
            if let Some(hit) = region.tabs.iter().find(|t| t.area.contains(pos)) {
                return Some(WorkspaceHit::BorderTab {
                    border: region.border,
                    index: hit.index,
                });
            }
        }

        let region = self.tabsets.iter().find(|r| r.area.contains(pos))?;
        for hit in &region.tabs {
            if hit.close.is_some_and(|c| c.contains(pos)) {
                return Some(WorkspaceHit::Close { tab: hit.tab });
            }
            if hit.area.contains(pos) {
                return Some(WorkspaceHit::Tab {
                    tabset: region.tabset,
                    tab: hit.tab,
                    index: hit.index,
                });
            }
        }
        Some(WorkspaceHit::Body {
            tabset: region.tabset,
        })
    }
}

impl Component for WorkspaceComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
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
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTab),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTab),
            KeyCode::Char('x') => Some(Action::CloseFocusedTab),
            KeyCode::Char('m') => Some(Action::MoveFocusedTab),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::GrowFocused),
            KeyCode::Char('-') => Some(Action::ShrinkFocused),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleFocusedBorder),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_workspace which takes the layout model
        Ok(())
    }
}

/// Scroll step for a scrolling action
pub fn scroll_delta(action: &Action) -> Option<i32> {
    match action {
        Action::ScrollDown => Some(1),
        Action::ScrollUp => Some(-1),
        Action::PageDown => Some(PAGE),
        Action::PageUp => Some(-PAGE),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the workspace
pub struct WorkspaceRenderContext<'a> {
    pub model: &'a LayoutModel,
    pub factory: &'a PanelFactory,
    pub focus: Focus,
    /// Entry being dragged from the sidebar
    pub dragging: Option<&'static MenuEntry>,
    /// Last pointer position during a mouse drag
    pub pointer: Option<(u16, u16)>,
}

impl WorkspaceRenderContext<'_> {
    fn is_drop_target(&self, tabset: NodeId, area: Rect) -> bool {
        if self.dragging.is_none() {
            return false;
        }
        match self.pointer {
            Some((x, y)) => area.contains(Position::new(x, y)),
            None => self.focus == Focus::Tabset(tabset),
        }
    }
}

/// Draw the workspace
pub fn draw_workspace(
    frame: &mut Frame,
    area: Rect,
    workspace: &mut WorkspaceComponent,
    ctx: &WorkspaceRenderContext,
) -> Result<()> {
    workspace.tabsets.clear();
    workspace.borders.clear();

    let center = draw_borders(frame, area, workspace, ctx);
    draw_split(frame, center, &ctx.model.root, Direction::Horizontal, workspace, ctx);
    Ok(())
}

/// Space a border takes along its axis
fn border_extent(border: &BorderNode, global: &GlobalSettings, available: u16) -> u16 {
    let expanded = border.selected_tab().is_some();
    let extent = if border.location.is_vertical() {
        if expanded {
            (border.size / PX_PER_CELL).max(16)
        } else {
            let longest = border
                .children
                .iter()
                .map(|t| t.name.width() as u16)
                .max()
                .unwrap_or(0);
            longest + 4
        }
    } else if expanded {
        (border.size / PX_PER_ROW).max(6)
    } else {
        // Label row plus the block's top and bottom edges
        (global.border_size / PX_PER_ROW).max(1) + 2
    };
    // Leave at least half the space to the main tree
    extent.min(available / 2)
}

fn draw_borders(
    frame: &mut Frame,
    area: Rect,
    workspace: &mut WorkspaceComponent,
    ctx: &WorkspaceRenderContext,
) -> Rect {
    let model = ctx.model;
    let mut center = area;

    // Top and bottom span the full width; left and right fit between them
    let ordered = model
        .borders
        .iter()
        .filter(|b| !b.location.is_vertical())
        .chain(model.borders.iter().filter(|b| b.location.is_vertical()));

    for border in ordered {
        if model.global.border_enable_auto_hide && border.children.is_empty() {
            continue;
        }
        let (border_area, rest) = match border.location {
            BorderLocation::Top => {
                let h = border_extent(border, &model.global, center.height);
                (
                    Rect::new(center.x, center.y, center.width, h),
                    Rect::new(center.x, center.y + h, center.width, center.height - h),
                )
            }
            BorderLocation::Bottom => {
                let h = border_extent(border, &model.global, center.height);
                (
                    Rect::new(center.x, center.bottom() - h, center.width, h),
                    Rect::new(center.x, center.y, center.width, center.height - h),
                )
            }
            BorderLocation::Left => {
                let w = border_extent(border, &model.global, center.width);
                (
                    Rect::new(center.x, center.y, w, center.height),
                    Rect::new(center.x + w, center.y, center.width - w, center.height),
                )
            }
            BorderLocation::Right => {
                let w = border_extent(border, &model.global, center.width);
                (
                    Rect::new(center.right() - w, center.y, w, center.height),
                    Rect::new(center.x, center.y, center.width - w, center.height),
                )
            }
        };
        draw_border(frame, border_area, border, workspace, ctx);
        center = rest;
    }
    center
}

fn draw_border(
    frame: &mut Frame,
    area: Rect,
    border: &BorderNode,
    workspace: &mut WorkspaceComponent,
    ctx: &WorkspaceRenderContext,
) {
    let focused = ctx.focus == Focus::Border(border.id);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Vertical borders list tabs one per row; horizontal ones use a strip
    let mut hits = Vec::new();
    let strip_rows = if border.location.is_vertical() {
        for (index, tab) in border.children.iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= inner.bottom() {
                break;
            }
            hits.push(TabHit {
                tab: tab.id,
                index,
                area: Rect::new(inner.x, y, inner.width, 1),
                close: None,
            });
        }
        hits.len() as u16
    } else {
        // Border tabs are toggled, not closed, from the strip
        let pinned: Vec<TabNode> = border
            .children
            .iter()
            .map(|t| TabNode {
                enable_close: Some(false),
                ..t.clone()
            })
            .collect();
        hits = tab_strip(&pinned, &ctx.model.global, inner.x, inner.y, inner.width);
        1
    };

    for hit in &hits {
        let tab = &border.children[hit.index];
        let selected = border.selected == Some(hit.index);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(tab_label(tab, false), style)),
            hit.area,
        );
    }

    workspace.borders.push(BorderRegion {
        border: border.id,
        tabs: hits,
    });

    if let Some(tab) = border.selected_tab() {
        let body = Rect::new(
            inner.x,
            inner.y + strip_rows,
            inner.width,
            inner.height.saturating_sub(strip_rows),
        );
        if body.height > 0 {
            let view = ctx.factory.render(&tab.component);
            let mut scroll = workspace.scroll_offset(tab.id);
            draw_panel(
                frame,
                body,
                &view,
                Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)),
                &mut scroll,
            );
            workspace.scroll.insert(tab.id, scroll);
        }
    }
}

fn draw_split(
    frame: &mut Frame,
    area: Rect,
    split: &SplitNode,
    direction: Direction,
    workspace: &mut WorkspaceComponent,
    ctx: &WorkspaceRenderContext,
) {
    if split.children.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = split
        .children
        .iter()
        .map(|c| Constraint::Fill(c.weight().min(u16::MAX as u32) as u16))
        .collect();
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    for (child, chunk) in split.children.iter().zip(chunks.iter()) {
        match child {
            LayoutNode::Row(s) => draw_split(frame, *chunk, s, Direction::Horizontal, workspace, ctx),
            LayoutNode::Column(s) => draw_split(frame, *chunk, s, Direction::Vertical, workspace, ctx),
            LayoutNode::Tabset(t) => draw_tabset(frame, *chunk, t, workspace, ctx),
        }
    }
}

fn draw_tabset(
    frame: &mut Frame,
    area: Rect,
    tabset: &TabsetNode,
    workspace: &mut WorkspaceComponent,
    ctx: &WorkspaceRenderContext,
) {
    let drop_target = ctx.is_drop_target(tabset.id, area);
    let focused = ctx.focus == Focus::Tabset(tabset.id);

    let (border_color, title) = match ctx.dragging {
        Some(entry) if drop_target => (Color::Green, format!(" Drop to add {} ", entry.name)),
        _ if focused => (Color::Cyan, String::new()),
        _ => (Color::DarkGray, String::new()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hits = if inner.height > 0 {
        tab_strip(&tabset.children, &ctx.model.global, inner.x, inner.y, inner.width)
    } else {
        Vec::new()
    };
    for hit in &hits {
        let tab = &tabset.children[hit.index];
        let style = if hit.index == tabset.selected {
            Style::default()
                .fg(Color::White)
                .bg(if focused { Color::Blue } else { Color::DarkGray })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(tab_label(tab, hit.close.is_some()), style)),
            hit.area,
        );
    }

    workspace.tabsets.push(TabsetRegion {
        tabset: tabset.id,
        area,
        tabs: hits,
    });

    let body = Rect::new(
        inner.x,
        inner.y.saturating_add(1),
        inner.width,
        inner.height.saturating_sub(1),
    );
    if body.height == 0 {
        return;
    }

    match tabset.selected_tab() {
        Some(tab) => {
            let view = ctx.factory.render(&tab.component);
            let mut scroll = workspace.scroll_offset(tab.id);
            draw_panel(
                frame,
                body,
                &view,
                Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)),
                &mut scroll,
            );
            workspace.scroll.insert(tab.id, scroll);
        }
        None => {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Drag a menu entry here",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center);
            let y = body.y + body.height / 2;
            frame.render_widget(hint, Rect::new(body.x, y, body.width, 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::menu::MENU_ENTRIES;
    use crate::model::presets::PresetRegistry;
    use ratatui::{backend::TestBackend, Terminal};

    fn model(name: &str) -> LayoutModel {
        PresetRegistry::builtin().unwrap().resolve(name).instantiate()
    }

    fn render(workspace: &mut WorkspaceComponent, model: &LayoutModel, dragging: bool) -> String {
        let factory = PanelFactory::default();
        let ctx = WorkspaceRenderContext {
            model,
            factory: &factory,
            focus: Focus::Tabset(model.tabsets()[0].id),
            dragging: dragging.then_some(&MENU_ENTRIES[2]),
            pointer: None,
        };
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| draw_workspace(frame, frame.area(), workspace, &ctx).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_tab_strip_positions() {
        let model = model("default");
        let tabset = model.tabsets()[0];
        let hits = tab_strip(&tabset.children, &model.global, 10, 2, 80);
        assert_eq!(hits.len(), 2);
        // " Dashboard × " is 13 cells wide, then one cell gap
        assert_eq!(hits[0].area, Rect::new(10, 2, 13, 1));
        assert_eq!(hits[0].close, Some(Rect::new(21, 2, 1, 1)));
        assert_eq!(hits[1].area.x, 24);
    }

    #[test]
    fn test_tab_strip_clips() {
        let model = model("default");
        let tabset = model.tabsets()[0];
        let hits = tab_strip(&tabset.children, &model.global, 0, 0, 8);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].area.width, 8);
        assert_eq!(hits[0].close, None);
    }

    #[test]
    fn test_draw_records_regions() {
        let model = model("complex");
        let mut workspace = WorkspaceComponent::default();
        let screen = render(&mut workspace, &model, false);

        assert!(screen.contains("Project Dashboard"));
        assert!(screen.contains("Analytics Dashboard"));
        assert!(screen.contains("System Settings"));
        assert_eq!(workspace.tabsets.len(), 3);
        assert_eq!(workspace.borders.len(), 2);

        // The middle of every tabset maps back to it
        for region in workspace.tabsets.clone() {
            let x = region.area.x + region.area.width / 2;
            let y = region.area.y + region.area.height / 2;
            assert_eq!(workspace.tabset_at(x, y), Some(region.tabset));
            assert_eq!(
                workspace.hit(x, y),
                Some(WorkspaceHit::Body {
                    tabset: region.tabset
                })
            );
        }
    }

    #[test]
    fn test_hit_close_and_tab() {
        let model = model("default");
        let mut workspace = WorkspaceComponent::default();
        render(&mut workspace, &model, false);

        let region = workspace.tabsets[0].clone();
        let first = region.tabs[0].clone();
        let close = first.close.unwrap();
        assert_eq!(
            workspace.hit(close.x, close.y),
            Some(WorkspaceHit::Close { tab: first.tab })
        );
        assert_eq!(
            workspace.hit(first.area.x, first.area.y),
            Some(WorkspaceHit::Tab {
                tabset: region.tabset,
                tab: first.tab,
                index: 0
            })
        );
    }

    #[test]
    fn test_border_tabs_are_hit_targets() {
        let model = model("default");
        let mut workspace = WorkspaceComponent::default();
        render(&mut workspace, &model, false);

        let border = &workspace.borders[0];
        let nav = border.tabs[0].area;
        assert_eq!(
            workspace.hit(nav.x, nav.y),
            Some(WorkspaceHit::BorderTab {
                border: model.borders[0].id,
                index: 0
            })
        );
    }

    #[test]
    fn test_drop_target_is_labelled() {
        let model = model("default");
        let mut workspace = WorkspaceComponent::default();
        let screen = render(&mut workspace, &model, true);
        assert!(screen.contains("Drop to add Reports"));
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let model = model("default");
        let mut workspace = WorkspaceComponent::default();
        let tab = model.tabsets()[0].children[0].id;
        workspace.scroll_tab(tab, 5000);
        workspace.scroll_tab(tab, -10_000_000);
        assert_eq!(workspace.scroll_offset(tab), 0);

        workspace.scroll_tab(tab, 5000);
        render(&mut workspace, &model, false);
        assert!(workspace.scroll_offset(tab) < 5000);
    }
}
