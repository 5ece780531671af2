//! Static sample tables shown by the dashboard panels
//!
//! Every table is a fixed slice of plain structs. Panels and the table
//! renderer read fields by key through the `Record` trait, so column
//! schemas can stay declarative.

use std::fmt;

/// A single scalar cell value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl CellValue {
    /// Text content, if this is a text cell
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Field access by key for a sample row
pub trait Record: fmt::Debug + Sync {
    /// Look up a field; `None` for keys the record does not have
    fn field(&self, key: &str) -> Option<CellValue>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Projects
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: &'static str,
    pub status: &'static str,
    pub priority: &'static str,
    pub assignee: &'static str,
    pub due_date: &'static str,
    pub progress: i64,
}

impl Record for Project {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => CellValue::Int(self.id),
            "name" => CellValue::Text(self.name),
            "status" => CellValue::Text(self.status),
            "priority" => CellValue::Text(self.priority),
            "assignee" => CellValue::Text(self.assignee),
            "dueDate" => CellValue::Text(self.due_date),
            "progress" => CellValue::Int(self.progress),
            _ => return None,
        };
        Some(value)
    }
}

pub static PROJECTS: &[Project] = &[
    Project { id: 1, name: "Website Redesign", status: "In Progress", priority: "High", assignee: "John Doe", due_date: "2024-04-15", progress: 75 },
    Project { id: 2, name: "Mobile App", status: "Planning", priority: "Medium", assignee: "Jane Smith", due_date: "2024-05-01", progress: 25 },
    Project { id: 3, name: "API Integration", status: "Completed", priority: "High", assignee: "Mike Johnson", due_date: "2024-03-30", progress: 100 },
    Project { id: 4, name: "Database Migration", status: "In Progress", priority: "Critical", assignee: "Sarah Wilson", due_date: "2024-04-10", progress: 60 },
    Project { id: 5, name: "Security Audit", status: "Pending", priority: "Medium", assignee: "Tom Brown", due_date: "2024-04-20", progress: 0 },
    Project { id: 6, name: "Performance Optimization", status: "In Progress", priority: "High", assignee: "Lisa Davis", due_date: "2024-04-25", progress: 40 },
];

// ═══════════════════════════════════════════════════════════════════════════════
// Analytics
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub metric: &'static str,
    pub today: f64,
    pub yesterday: f64,
    pub change: &'static str,
    pub trend: &'static str,
}

impl Record for Metric {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "metric" => CellValue::Text(self.metric),
            "today" => CellValue::Float(self.today),
            "yesterday" => CellValue::Float(self.yesterday),
            "change" => CellValue::Text(self.change),
            "trend" => CellValue::Text(self.trend),
            _ => return None,
        };
        Some(value)
    }
}

pub static ANALYTICS: &[Metric] = &[
    Metric { metric: "Page Views", today: 1234.0, yesterday: 1156.0, change: "+6.7%", trend: "↗" },
    Metric { metric: "Unique Visitors", today: 891.0, yesterday: 823.0, change: "+8.3%", trend: "↗" },
    Metric { metric: "Bounce Rate", today: 23.4, yesterday: 25.1, change: "-6.8%", trend: "↘" },
    Metric { metric: "Session Duration", today: 245.0, yesterday: 238.0, change: "+2.9%", trend: "↗" },
    Metric { metric: "Conversion Rate", today: 3.2, yesterday: 2.9, change: "+10.3%", trend: "↗" },
    Metric { metric: "Revenue", today: 5420.0, yesterday: 4980.0, change: "+8.8%", trend: "↗" },
];

// ═══════════════════════════════════════════════════════════════════════════════
// Reports
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub id: i64,
    pub name: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
    pub generated: &'static str,
    pub size: &'static str,
    pub downloads: i64,
}

impl Record for Report {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => CellValue::Int(self.id),
            "name" => CellValue::Text(self.name),
            "type" => CellValue::Text(self.kind),
            "status" => CellValue::Text(self.status),
            "generated" => CellValue::Text(self.generated),
            "size" => CellValue::Text(self.size),
            "downloads" => CellValue::Int(self.downloads),
            _ => return None,
        };
        Some(value)
    }
}

pub static REPORTS: &[Report] = &[
    Report { id: 1, name: "Monthly Performance Report", kind: "Performance", status: "Published", generated: "2024-03-15", size: "2.3 MB", downloads: 45 },
    Report { id: 2, name: "User Engagement Analysis", kind: "Analytics", status: "Draft", generated: "2024-03-14", size: "1.8 MB", downloads: 23 },
    Report { id: 3, name: "Revenue Breakdown Q1", kind: "Financial", status: "Published", generated: "2024-03-10", size: "3.1 MB", downloads: 78 },
    Report { id: 4, name: "Security Assessment", kind: "Security", status: "Review", generated: "2024-03-12", size: "4.2 MB", downloads: 12 },
    Report { id: 5, name: "Customer Feedback Summary", kind: "Feedback", status: "Published", generated: "2024-03-08", size: "1.5 MB", downloads: 34 },
];

// ═══════════════════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setting {
    pub category: &'static str,
    pub setting: &'static str,
    pub value: &'static str,
    pub kind: &'static str,
    pub last_modified: &'static str,
}

impl Record for Setting {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "category" => CellValue::Text(self.category),
            "setting" => CellValue::Text(self.setting),
            "value" => CellValue::Text(self.value),
            "type" => CellValue::Text(self.kind),
            "lastModified" => CellValue::Text(self.last_modified),
            _ => return None,
        };
        Some(value)
    }
}

pub static SETTINGS: &[Setting] = &[
    Setting { category: "General", setting: "Site Title", value: "My Dashboard", kind: "Text", last_modified: "2024-03-15" },
    Setting { category: "General", setting: "Language", value: "English", kind: "Dropdown", last_modified: "2024-03-10" },
    Setting { category: "Security", setting: "Two-Factor Auth", value: "Enabled", kind: "Boolean", last_modified: "2024-03-12" },
    Setting { category: "Security", setting: "Session Timeout", value: "30 minutes", kind: "Number", last_modified: "2024-03-08" },
    Setting { category: "Notifications", setting: "Email Alerts", value: "Enabled", kind: "Boolean", last_modified: "2024-03-14" },
    Setting { category: "Notifications", setting: "Push Notifications", value: "Disabled", kind: "Boolean", last_modified: "2024-03-11" },
    Setting { category: "Performance", setting: "Cache Duration", value: "24 hours", kind: "Duration", last_modified: "2024-03-09" },
];
