//! Column schemas and row styling for the sample tables

use super::sample_data::{CellValue, Record, ANALYTICS, PROJECTS, REPORTS, SETTINGS};

/// Approximate width of one terminal cell in browser pixels
pub const PX_PER_CELL: u16 = 8;

/// Pure cell formatter: same value in, same text out
pub type Formatter = fn(&CellValue) -> String;

/// How a single column of a table is rendered
#[derive(Debug, Clone, Copy)]
pub struct ColumnSchema {
    /// Record field this column reads
    pub key: &'static str,
    /// Header label
    pub label: &'static str,
    /// Width in pixels
    pub width: u16,
    pub formatter: Option<Formatter>,
}

impl ColumnSchema {
    const fn new(key: &'static str, label: &'static str, width: u16) -> Self {
        Self {
            key,
            label,
            width,
            formatter: None,
        }
    }

    /// Render one cell of `record` for this column
    ///
    /// Missing fields render empty rather than failing the row.
    pub fn render_cell(&self, record: &dyn Record) -> String {
        match record.field(self.key) {
            Some(value) => match self.formatter {
                Some(format) => format(&value),
                None => value.to_string(),
            },
            None => String::new(),
        }
    }

    /// Width in terminal cells, never narrower than the label
    pub fn cell_width(&self) -> usize {
        let from_px = (self.width / PX_PER_CELL) as usize;
        from_px.max(unicode_width::UnicodeWidthStr::width(self.label))
    }
}

fn percent(value: &CellValue) -> String {
    format!("{}%", value)
}

pub static PROJECT_COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::new("id", "ID", 60),
    ColumnSchema::new("name", "Project Name", 180),
    ColumnSchema::new("status", "Status", 100),
    ColumnSchema::new("priority", "Priority", 80),
    ColumnSchema::new("assignee", "Assignee", 120),
    ColumnSchema::new("dueDate", "Due Date", 100),
    ColumnSchema {
        key: "progress",
        label: "Progress",
        width: 80,
        formatter: Some(percent),
    },
];

pub static ANALYTICS_COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::new("metric", "Metric", 150),
    ColumnSchema::new("today", "Today", 80),
    ColumnSchema::new("yesterday", "Yesterday", 80),
    ColumnSchema::new("change", "Change", 80),
    ColumnSchema::new("trend", "Trend", 60),
];

pub static REPORT_COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::new("id", "ID", 50),
    ColumnSchema::new("name", "Report Name", 200),
    ColumnSchema::new("type", "Type", 100),
    ColumnSchema::new("status", "Status", 80),
    ColumnSchema::new("generated", "Generated", 100),
    ColumnSchema::new("size", "Size", 80),
    ColumnSchema::new("downloads", "Downloads", 80),
];

pub static SETTING_COLUMNS: &[ColumnSchema] = &[
    ColumnSchema::new("category", "Category", 120),
    ColumnSchema::new("setting", "Setting", 150),
    ColumnSchema::new("value", "Value", 120),
    ColumnSchema::new("type", "Type", 80),
    ColumnSchema::new("lastModified", "Last Modified", 120),
];

/// Visual tone used for highlighted rows and summary tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Success,
    Warning,
    Info,
    Accent,
}

/// The four sample tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTable {
    Projects,
    Analytics,
    Reports,
    Settings,
}

impl DataTable {
    pub fn columns(&self) -> &'static [ColumnSchema] {
        match self {
            DataTable::Projects => PROJECT_COLUMNS,
            DataTable::Analytics => ANALYTICS_COLUMNS,
            DataTable::Reports => REPORT_COLUMNS,
            DataTable::Settings => SETTING_COLUMNS,
        }
    }

    pub fn records(&self) -> Vec<&'static dyn Record> {
        match self {
            DataTable::Projects => PROJECTS.iter().map(|r| r as &dyn Record).collect(),
            DataTable::Analytics => ANALYTICS.iter().map(|r| r as &dyn Record).collect(),
            DataTable::Reports => REPORTS.iter().map(|r| r as &dyn Record).collect(),
            DataTable::Settings => SETTINGS.iter().map(|r| r as &dyn Record).collect(),
        }
    }

    /// Row highlight for a record of this table
    pub fn row_tone(&self, record: &dyn Record) -> Option<Tone> {
        let text = |key: &str| record.field(key).and_then(|v| v.as_text()).unwrap_or("");
        match self {
            DataTable::Projects => project_row_tone(text("priority"), text("status")),
            DataTable::Analytics => {
                let change = text("change");
                if change.starts_with('+') {
                    Some(Tone::Success)
                } else if change.starts_with('-') {
                    Some(Tone::Danger)
                } else {
                    None
                }
            }
            DataTable::Reports => match text("status") {
                "Published" => Some(Tone::Success),
                "Draft" => Some(Tone::Warning),
                "Review" => Some(Tone::Info),
                _ => None,
            },
            DataTable::Settings => match text("category") {
                "Security" => Some(Tone::Danger),
                "General" => Some(Tone::Info),
                "Notifications" => Some(Tone::Warning),
                _ => Some(Tone::Accent),
            },
        }
    }
}

/// Critical work wins over completion; everything else stays plain
fn project_row_tone(priority: &str, status: &str) -> Option<Tone> {
    if priority == "Critical" {
        Some(Tone::Danger)
    } else if status == "Completed" {
        Some(Tone::Success)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data::Project;
    use proptest::prelude::*;

    fn project(priority: &'static str, status: &'static str) -> Project {
        Project {
            id: 99,
            name: "Probe",
            status,
            priority,
            assignee: "Nobody",
            due_date: "2024-01-01",
            progress: 10,
        }
    }

    #[test]
    fn test_reports_schema_order() {
        let keys: Vec<&str> = DataTable::Reports.columns().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec!["id", "name", "type", "status", "generated", "size", "downloads"]
        );
        assert_eq!(DataTable::Reports.records().len(), 5);
    }

    #[test]
    fn test_progress_formatter() {
        let progress = &PROJECT_COLUMNS[6];
        assert_eq!(progress.render_cell(&PROJECTS[0]), "75%");
        assert_eq!(progress.render_cell(&PROJECTS[4]), "0%");

        let name = &PROJECT_COLUMNS[1];
        assert_eq!(name.render_cell(&PROJECTS[0]), "Website Redesign");
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let column = ColumnSchema::new("nope", "Nope", 40);
        assert_eq!(column.render_cell(&PROJECTS[0]), "");
    }

    #[test]
    fn test_cell_width_from_pixels() {
        assert_eq!(ColumnSchema::new("id", "ID", 60).cell_width(), 7);
        // Label wider than the pixel budget
        assert_eq!(ColumnSchema::new("x", "Last Modified", 40).cell_width(), 13);
    }

    #[test]
    fn test_project_row_tones() {
        let table = DataTable::Projects;
        assert_eq!(table.row_tone(&project("Critical", "Completed")), Some(Tone::Danger));
        assert_eq!(table.row_tone(&project("High", "Completed")), Some(Tone::Success));
        assert_eq!(table.row_tone(&project("Medium", "Planning")), None);
    }

    #[test]
    fn test_other_row_tones() {
        assert_eq!(DataTable::Analytics.row_tone(&ANALYTICS[0]), Some(Tone::Success));
        assert_eq!(DataTable::Analytics.row_tone(&ANALYTICS[2]), Some(Tone::Danger));
        assert_eq!(DataTable::Reports.row_tone(&REPORTS[1]), Some(Tone::Warning));
        assert_eq!(DataTable::Reports.row_tone(&REPORTS[3]), Some(Tone::Info));
        assert_eq!(DataTable::Settings.row_tone(&SETTINGS[2]), Some(Tone::Danger));
        assert_eq!(DataTable::Settings.row_tone(&SETTINGS[6]), Some(Tone::Accent));
    }

    proptest! {
        #[test]
        fn critical_rows_are_always_danger(status in ".*", other in "[A-Za-z ]{0,12}") {
            let status: &'static str = Box::leak(status.into_boxed_str());
            let other: &'static str = Box::leak(other.into_boxed_str());
            let mut row = project("Critical", status);
            row.assignee = other;
            prop_assert_eq!(DataTable::Projects.row_tone(&row), Some(Tone::Danger));
        }

        #[test]
        fn row_tone_is_deterministic(priority in "[A-Za-z]{0,10}", status in "[A-Za-z ]{0,12}") {
            let priority: &'static str = Box::leak(priority.into_boxed_str());
            let status: &'static str = Box::leak(status.into_boxed_str());
            let row = project(priority, status);
            prop_assert_eq!(
                DataTable::Projects.row_tone(&row),
                DataTable::Projects.row_tone(&row)
            );
        }

        #[test]
        fn formatter_is_pure(n in any::<i64>()) {
            let value = CellValue::Int(n);
            prop_assert_eq!(percent(&value), percent(&value));
            prop_assert_eq!(percent(&value), format!("{}%", n));
        }
    }
}
