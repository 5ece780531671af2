//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the sidebar menu, in cells
pub const SIDEBAR_WIDTH: u16 = 22;

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub sidebar: Rect,
    /// Workspace, or the full-screen panel on a panel route
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    // header + body + status line + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main_chunks[1]);

    MainLayout {
        header: main_chunks[0],
        sidebar: body_chunks[0],
        content: body_chunks[1],
        status: main_chunks[2],
        help: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_partitions_screen() {
        let layout = calculate_main_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.content.height, 35);
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_centered_popup_clamps() {
        let popup = centered_popup(Rect::new(0, 0, 20, 10), 40, 7);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.y, 1);
    }
}
