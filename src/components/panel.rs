//! Panel view rendering
//!
//! Turns a `PanelView` into styled lines. The same lines back a tab in the
//! workspace and the full-screen panel page.

use crate::components::table::{build_table_lines, tone_color};
use crate::model::panel::{ChartBar, PanelView, Section, Tile};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const CHART_LABEL_WIDTH: usize = 18;
const CHART_SERIES_WIDTH: usize = 10;

/// Greedy word wrap to `width` cells
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn tile_spans(tiles: &[Tile]) -> Line<'static> {
    let spans: Vec<Span> = tiles
        .iter()
        .flat_map(|tile| {
            vec![
                Span::styled(
                    format!(" {} ", tile.value),
                    Style::default()
                        .fg(Color::Black)
                        .bg(tone_color(tile.tone))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}   ", tile.label),
                    Style::default().fg(Color::Gray),
                ),
            ]
        })
        .collect();
    Line::from(spans)
}

fn chart_lines(bars: &[ChartBar], width: usize) -> Vec<Line<'static>> {
    let room = width
        .saturating_sub(CHART_LABEL_WIDTH + CHART_SERIES_WIDTH + 10)
        .max(4);
    let mut lines = vec![Line::from(vec![
        Span::styled("■ Today  ", Style::default().fg(Color::Cyan)),
        Span::styled("■ Yesterday", Style::default().fg(Color::DarkGray)),
    ])];

    for bar in bars {
        // Each metric is scaled on its own; units differ between rows
        let max = bar.today.max(bar.yesterday);
        let length = |value: f64| {
            if max <= 0.0 {
                0
            } else {
                ((value / max) * room as f64).round() as usize
            }
        };
        let label = crate::components::table::fit(bar.label, CHART_LABEL_WIDTH);
        let padding = " ".repeat(CHART_LABEL_WIDTH);

        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::styled("█".repeat(length(bar.today)), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {}", bar.today)),
        ]));
        lines.push(Line::from(vec![
            Span::raw(padding),
            Span::styled(
                "█".repeat(length(bar.yesterday)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!(" {}", bar.yesterday), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines
}

/// Build the lines of a panel for a given content width
pub fn build_panel_lines(view: &PanelView, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();

    let title_style = if view.is_fallback() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(view.title.clone(), title_style)));
    if let Some(subtitle) = view.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }

    for section in &view.sections {
        lines.push(Line::from(""));
        match section {
            Section::Text(text) => {
                lines.extend(
                    wrap_words(text, width)
                        .into_iter()
                        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
                );
            }
            Section::List(items) => {
                lines.extend(items.iter().map(|item| {
                    Line::from(vec![
                        Span::styled("  • ", Style::default().fg(Color::DarkGray)),
                        Span::raw(*item),
                    ])
                }));
            }
            Section::Callout { title, lines: body } => {
                lines.push(Line::from(Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.extend(body.iter().map(|l| {
                    Line::from(Span::styled(*l, Style::default().fg(Color::Blue)))
                }));
            }
            Section::Tiles(tiles) => lines.push(tile_spans(tiles)),
            Section::Chart(bars) => lines.extend(chart_lines(bars, width)),
            Section::Table(table) => lines.extend(build_table_lines(*table)),
            Section::Console(output) => {
                lines.extend(output.iter().map(|l| {
                    let color = if l.warning { Color::Yellow } else { Color::Green };
                    Line::from(Span::styled(l.text, Style::default().fg(color)))
                }));
            }
        }
    }

    lines
}

/// Draw a panel inside `block`, scrolled by `scroll` lines
///
/// The scroll offset is clamped to the content and written back.
pub fn draw_panel(frame: &mut Frame, area: Rect, view: &PanelView, block: Block, scroll: &mut u16) {
    let inner = block.inner(area);
    let content = build_panel_lines(view, inner.width);
    let total = content.len();
    let visible = inner.height as usize;

    let max_scroll = total.saturating_sub(visible) as u16;
    *scroll = (*scroll).min(max_scroll);

    let paragraph = Paragraph::new(content).block(block).scroll((*scroll, 0));
    frame.render_widget(paragraph, area);

    if total > visible {
        let mut scrollbar_state = ScrollbarState::new(max_scroll as usize).position(*scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::panel::PanelFactory;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_words("longword", 3), vec!["longword"]);
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn test_dashboard_lines() {
        let view = PanelFactory::default().render("dashboard");
        let lines = text(&build_panel_lines(&view, 80));
        assert_eq!(lines[0], "Project Dashboard");
        assert_eq!(lines[1], "Track and manage all your projects");
        assert!(lines.iter().any(|l| l.contains("Active Projects") && l.contains(" 6 ")));
        assert!(lines.iter().any(|l| l == "Total rows: 6"));
    }

    #[test]
    fn test_fallback_lines_name_tag() {
        let view = PanelFactory::default().render("mystery");
        let lines = text(&build_panel_lines(&view, 40));
        assert_eq!(lines, vec!["Unknown component: mystery".to_string()]);
    }

    #[test]
    fn test_chart_has_two_bars_per_metric() {
        let view = PanelFactory::default().render("analytics");
        let Section::Chart(bars) = &view.sections[0] else {
            panic!("analytics starts with a chart");
        };
        let lines = chart_lines(bars, 60);
        assert_eq!(lines.len(), 1 + bars.len() * 2);
    }
}
