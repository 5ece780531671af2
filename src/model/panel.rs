//! Panel factory
//!
//! Maps a component tag to a panel view. Dispatch goes through a lookup
//! table of render functions; tags without an entry get a fallback view
//! naming the tag, so a bad tab never takes the workspace down.

use super::sample_data::{ANALYTICS, PROJECTS, REPORTS, SETTINGS};
use super::table::{DataTable, Tone};
use std::collections::{BTreeSet, HashMap};

/// A headline number shown above a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub value: String,
    pub label: &'static str,
    pub tone: Tone,
}

impl Tile {
    fn new(value: impl ToString, label: &'static str, tone: Tone) -> Self {
        Self {
            value: value.to_string(),
            label,
            tone,
        }
    }
}

/// One metric of the analytics chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub today: f64,
    pub yesterday: f64,
}

/// A line of console output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: &'static str,
    pub warning: bool,
}

/// Building blocks of a panel body, rendered top to bottom
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Text(&'static str),
    List(Vec<&'static str>),
    Callout {
        title: &'static str,
        lines: Vec<&'static str>,
    },
    Tiles(Vec<Tile>),
    Chart(Vec<ChartBar>),
    Table(DataTable),
    Console(Vec<ConsoleLine>),
}

/// Everything needed to draw one tab's content
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    /// Tag the view was rendered for
    pub tag: String,
    pub title: String,
    pub subtitle: Option<&'static str>,
    pub sections: Vec<Section>,
}

impl PanelView {
    fn new(title: &str, subtitle: Option<&'static str>, sections: Vec<Section>) -> Self {
        Self {
            tag: String::new(),
            title: title.to_string(),
            subtitle,
            sections,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.title.starts_with(UNKNOWN_PREFIX)
    }
}

#[cfg(test)]
impl PanelView {
    /// The embedded table, if the panel has one
    pub fn table(&self) -> Option<DataTable> {
        self.sections.iter().find_map(|s| match s {
            Section::Table(table) => Some(*table),
            _ => None,
        })
    }

    pub fn tiles(&self) -> &[Tile] {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Tiles(tiles) => Some(tiles.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

const UNKNOWN_PREFIX: &str = "Unknown component: ";

type RenderFn = fn() -> PanelView;

/// Tag → panel lookup table
pub struct PanelFactory {
    renderers: HashMap<&'static str, RenderFn>,
}

impl Default for PanelFactory {
    fn default() -> Self {
        let mut factory = Self {
            renderers: HashMap::new(),
        };
        factory.register("navigation", navigation_panel);
        factory.register("dashboard", dashboard_panel);
        factory.register("analytics", analytics_panel);
        factory.register("reports", reports_panel);
        factory.register("settings", settings_panel);
        factory.register("console", console_panel);
        factory.register("datagrid", datagrid_panel);
        factory
    }
}

impl PanelFactory {
    pub fn register(&mut self, tag: &'static str, render: RenderFn) {
        self.renderers.insert(tag, render);
    }

    pub fn is_known(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    /// Build the view for a component tag
    pub fn render(&self, tag: &str) -> PanelView {
        let mut view = match self.renderers.get(tag) {
            Some(render) => render(),
            None => fallback_panel(tag),
        };
        view.tag = tag.to_string();
        view
    }
}

fn fallback_panel(tag: &str) -> PanelView {
    PanelView::new(&format!("{}{}", UNKNOWN_PREFIX, tag), None, Vec::new())
}

fn navigation_panel() -> PanelView {
    PanelView::new(
        "Navigation",
        None,
        vec![
            Section::Text(
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                 Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            ),
            Section::List(vec!["▦ Dashboard", "▤ Projects", "☺ Team", "⚙ Settings"]),
            Section::Callout {
                title: "Quick Stats",
                lines: vec!["Active Users: 1,234", "Online Now: 56"],
            },
        ],
    )
}

fn dashboard_panel() -> PanelView {
    let completed = PROJECTS.iter().filter(|p| p.status == "Completed").count();
    let total_progress: i64 = PROJECTS.iter().map(|p| p.progress).sum();
    let avg_progress = if PROJECTS.is_empty() {
        0
    } else {
        (total_progress as f64 / PROJECTS.len() as f64).round() as i64
    };

    PanelView::new(
        "Project Dashboard",
        Some("Track and manage all your projects"),
        vec![
            Section::Tiles(vec![
                Tile::new(PROJECTS.len(), "Active Projects", Tone::Info),
                Tile::new(completed, "Completed", Tone::Success),
                Tile::new(format!("{}%", avg_progress), "Avg Progress", Tone::Warning),
            ]),
            Section::Table(DataTable::Projects),
        ],
    )
}

fn analytics_panel() -> PanelView {
    let bars = ANALYTICS
        .iter()
        .map(|m| ChartBar {
            label: m.metric,
            today: m.today,
            yesterday: m.yesterday,
        })
        .collect();

    PanelView::new(
        "Analytics Dashboard",
        Some("Real-time metrics and performance data"),
        vec![Section::Chart(bars), Section::Table(DataTable::Analytics)],
    )
}

fn reports_panel() -> PanelView {
    let count = |status: &str| REPORTS.iter().filter(|r| r.status == status).count();
    let downloads: i64 = REPORTS.iter().map(|r| r.downloads).sum();

    PanelView::new(
        "Reports Center",
        Some("Manage and download generated reports"),
        vec![
            Section::Tiles(vec![
                Tile::new(REPORTS.len(), "Total Reports", Tone::Info),
                Tile::new(count("Published"), "Published", Tone::Success),
                Tile::new(count("Review"), "In Review", Tone::Warning),
                Tile::new(downloads, "Downloads", Tone::Accent),
            ]),
            Section::Table(DataTable::Reports),
        ],
    )
}

fn settings_panel() -> PanelView {
    let count = |value: &str| SETTINGS.iter().filter(|s| s.value == value).count();
    let categories: BTreeSet<&str> = SETTINGS.iter().map(|s| s.category).collect();

    PanelView::new(
        "System Settings",
        Some("Configure system preferences and options"),
        vec![
            Section::Tiles(vec![
                Tile::new(SETTINGS.len(), "Settings", Tone::Accent),
                Tile::new(count("Enabled"), "Enabled", Tone::Success),
                Tile::new(count("Disabled"), "Disabled", Tone::Danger),
                Tile::new(categories.len(), "Categories", Tone::Info),
            ]),
            Section::Table(DataTable::Settings),
        ],
    )
}

fn console_panel() -> PanelView {
    let line = |text| ConsoleLine {
        text,
        warning: false,
    };
    PanelView::new(
        "Console Output",
        None,
        vec![Section::Console(vec![
            line("$ Starting application..."),
            line("$ Loading modules..."),
            line("$ Server running on port 5173"),
            line("$ Ready for connections"),
            ConsoleLine {
                text: "$ Warning: Development mode",
                warning: true,
            },
            line("$ All systems operational"),
        ])],
    )
}

fn datagrid_panel() -> PanelView {
    PanelView::new(
        "Generic Data Grid",
        Some("Customizable data table"),
        vec![Section::Table(DataTable::Projects)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KNOWN: &[(&str, &str)] = &[
        ("navigation", "Navigation"),
        ("dashboard", "Project Dashboard"),
        ("analytics", "Analytics Dashboard"),
        ("reports", "Reports Center"),
        ("settings", "System Settings"),
        ("console", "Console Output"),
        ("datagrid", "Generic Data Grid"),
    ];

    fn tile_values(view: &PanelView) -> Vec<(&str, &str)> {
        view.tiles()
            .iter()
            .map(|t| (t.label, t.value.as_str()))
            .collect()
    }

    #[test]
    fn test_known_tags_render_headers() {
        let factory = PanelFactory::default();
        for (tag, title) in KNOWN {
            let view = factory.render(tag);
            assert_eq!(view.title, *title, "tag {}", tag);
            assert_eq!(view.tag, *tag);
            assert!(!view.sections.is_empty());
            assert!(!view.is_fallback());
        }
    }

    #[test]
    fn test_reports_panel_table() {
        let view = PanelFactory::default().render("reports");
        let table = view.table().unwrap();
        assert_eq!(table.records().len(), 5);
        let keys: Vec<&str> = table.columns().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec!["id", "name", "type", "status", "generated", "size", "downloads"]
        );
    }

    #[test]
    fn test_dashboard_tiles_are_derived() {
        let view = PanelFactory::default().render("dashboard");
        assert_eq!(
            tile_values(&view),
            vec![("Active Projects", "6"), ("Completed", "1"), ("Avg Progress", "50%")]
        );
        assert_eq!(view.table(), Some(DataTable::Projects));
    }

    #[test]
    fn test_reports_and_settings_tiles() {
        let factory = PanelFactory::default();
        assert_eq!(
            tile_values(&factory.render("reports")),
            vec![
                ("Total Reports", "5"),
                ("Published", "3"),
                ("In Review", "1"),
                ("Downloads", "192"),
            ]
        );
        assert_eq!(
            tile_values(&factory.render("settings")),
            vec![
                ("Settings", "7"),
                ("Enabled", "2"),
                ("Disabled", "1"),
                ("Categories", "4"),
            ]
        );
    }

    #[test]
    fn test_console_has_one_warning() {
        let view = PanelFactory::default().render("console");
        let Section::Console(lines) = &view.sections[0] else {
            panic!("console panel should start with console output");
        };
        assert_eq!(lines.len(), 6);
        assert_eq!(lines.iter().filter(|l| l.warning).count(), 1);
    }

    #[test]
    fn test_unknown_tag_fallback() {
        let view = PanelFactory::default().render("weather");
        assert_eq!(view.title, "Unknown component: weather");
        assert!(view.is_fallback());
        assert!(view.table().is_none());
    }

    #[test]
    fn test_register_extends_table() {
        let mut factory = PanelFactory::default();
        assert!(!factory.is_known("weather"));
        factory.register("weather", console_panel);
        assert!(factory.is_known("weather"));
        assert_eq!(factory.render("weather").title, "Console Output");
    }

    proptest! {
        #[test]
        fn unknown_tags_name_themselves(tag in ".{0,24}") {
            let factory = PanelFactory::default();
            prop_assume!(!factory.is_known(&tag));
            let view = factory.render(&tag);
            prop_assert!(view.title.contains(tag.as_str()));
            prop_assert!(view.is_fallback());
        }
    }
}
