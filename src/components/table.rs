//! Table rendering for the sample data panels
//!
//! Renders a `DataTable` with headers, rows, and column alignment. Column
//! widths come from the schema; row colors come from the table's tone rule.

use crate::model::table::{DataTable, Tone};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Color used for a tone, in rows and summary tiles alike
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Danger => Color::Red,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Info => Color::Blue,
        Tone::Accent => Color::Magenta,
    }
}

fn row_style(tone: Option<Tone>) -> Style {
    match tone {
        Some(tone) => Style::default().fg(tone_color(tone)),
        None => Style::default().fg(Color::White),
    }
}

/// Pad or cut `text` to exactly `width` terminal cells
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Build table lines for embedding in a panel
pub fn build_table_lines(table: DataTable) -> Vec<Line<'static>> {
    let columns = table.columns();
    let records = table.records();
    let mut lines = Vec::new();

    if columns.is_empty() {
        return vec![Line::from("Empty table")];
    }

    let widths: Vec<usize> = columns.iter().map(|c| c.cell_width()).collect();

    // Header
    let header_spans: Vec<Span> = columns
        .iter()
        .zip(&widths)
        .flat_map(|(column, width)| {
            vec![
                Span::styled(
                    fit(column.label, *width),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    let separator: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    for record in &records {
        let style = row_style(table.row_tone(*record));
        let row_spans: Vec<Span> = columns
            .iter()
            .zip(&widths)
            .flat_map(|(column, width)| {
                vec![
                    Span::styled(fit(&column.render_cell(*record), *width), style),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Total rows: {}", records.len()),
        Style::default().fg(Color::Yellow),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abc", 0), "");
        assert_eq!(fit("↗", 2), "↗ ");
    }

    #[test]
    fn test_reports_table_lines() {
        let lines = build_table_lines(DataTable::Reports);
        // header + separator + 5 rows + blank + total
        assert_eq!(lines.len(), 9);
        let header = line_text(&lines[0]);
        assert!(header.starts_with("ID"));
        assert!(header.contains("Downloads"));
        assert_eq!(line_text(&lines[8]), "Total rows: 5");
    }

    #[test]
    fn test_progress_column_is_formatted() {
        let lines = build_table_lines(DataTable::Projects);
        let first_row = line_text(&lines[2]);
        assert!(first_row.contains('%'));
    }

    #[test]
    fn test_critical_rows_are_red() {
        let lines = build_table_lines(DataTable::Projects);
        let records = DataTable::Projects.records();
        for (record, line) in records.iter().zip(&lines[2..]) {
            let critical = record.field("priority").and_then(|v| v.as_text()) == Some("Critical");
            if critical {
                assert_eq!(line.spans[0].style.fg, Some(Color::Red));
            }
        }
    }
}
