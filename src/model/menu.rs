//! Sidebar menu entries and the drag/click dispatcher
//!
//! A pointer interaction on a menu entry ends in exactly one of two ways:
//! the entry is dropped into the workspace as a new tab, or it is clicked
//! and the app navigates to the entry's route. `DragSource` keeps those
//! outcomes mutually exclusive with an explicit Idle/Dragging state.

use super::layout::TabDescriptor;

/// A navigable, draggable sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Component tag of the tab created when the entry is dropped
    pub component: &'static str,
    pub route: &'static str,
}

impl MenuEntry {
    pub fn tab_descriptor(&self) -> TabDescriptor {
        TabDescriptor {
            name: self.name.to_string(),
            component: self.component.to_string(),
        }
    }
}

pub static MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry { id: "dashboard", name: "Dashboard", icon: "▦", component: "dashboard", route: "/workspace/dashboard" },
    MenuEntry { id: "analytics", name: "Analytics", icon: "◔", component: "analytics", route: "/workspace/analytics" },
    MenuEntry { id: "reports", name: "Reports", icon: "▤", component: "reports", route: "/workspace/reports" },
    MenuEntry { id: "settings", name: "Settings", icon: "⚙", component: "settings", route: "/workspace/settings" },
    MenuEntry { id: "console", name: "Console", icon: "❯", component: "console", route: "/workspace/console" },
    MenuEntry { id: "datagrid", name: "Data Grid", icon: "▥", component: "datagrid", route: "/workspace/datagrid" },
];

/// Drag gesture state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(&'static MenuEntry),
}

impl DragState {
    pub fn in_drag(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn dragged_entry(&self) -> Option<&'static MenuEntry> {
        match self {
            DragState::Dragging(entry) => Some(entry),
            DragState::Idle => None,
        }
    }
}

/// Tab data handed to the dock layer for a drop in progress
///
/// Pass it back to `DragSource::finish_drop` once placement has been
/// attempted, whether or not it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingDrop {
    pub tab: TabDescriptor,
}

/// Outbound request for the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: &'static str,
}

/// The sidebar's drag source and click dispatcher
#[derive(Debug)]
pub struct DragSource {
    entries: &'static [MenuEntry],
    state: DragState,
}

impl Default for DragSource {
    fn default() -> Self {
        Self::new(MENU_ENTRIES)
    }
}

impl DragSource {
    pub fn new(entries: &'static [MenuEntry]) -> Self {
        Self {
            entries,
            state: DragState::Idle,
        }
    }

    pub fn entries(&self) -> &'static [MenuEntry] {
        self.entries
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Begin dragging the entry at `index`
    pub fn drag_start(&mut self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) => {
                tracing::debug!(entry = entry.id, "drag started");
                self.state = DragState::Dragging(entry);
                true
            }
            None => false,
        }
    }

    /// Drag ended without a drop
    pub fn drag_end(&mut self) {
        if let DragState::Dragging(entry) = self.state {
            tracing::debug!(entry = entry.id, "drag ended without drop");
        }
        self.state = DragState::Idle;
    }

    /// The dock layer asks what to create for the drag in progress
    ///
    /// With no dragged entry the request is rejected and the state is reset.
    pub fn external_drag(&mut self) -> Option<PendingDrop> {
        match self.state {
            DragState::Dragging(entry) => Some(PendingDrop {
                tab: entry.tab_descriptor(),
            }),
            DragState::Idle => {
                tracing::warn!("drop requested with no drag in progress");
                self.state = DragState::Idle;
                None
            }
        }
    }

    /// Placement of a pending drop has been attempted
    pub fn finish_drop(&mut self, pending: PendingDrop) {
        tracing::info!(component = %pending.tab.component, "drop finished");
        self.state = DragState::Idle;
    }

    /// A click on the entry at `index`
    ///
    /// Only honoured when idle; a click that arrives mid-drag is the tail of
    /// the drag gesture and is ignored.
    pub fn click(&mut self, index: usize) -> Option<NavigationRequest> {
        if self.state.in_drag() {
            tracing::debug!(index, "click suppressed during drag");
            return None;
        }
        self.entries
            .get(index)
            .map(|entry| NavigationRequest { path: entry.route })
    }
}
