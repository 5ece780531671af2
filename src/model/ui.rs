//! UI state - presentation state separate from the layout model

use super::layout::{LayoutModel, NodeId};

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// No live layout model yet
    Loading,
    Running,
}

/// Region receiving keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Sidebar,
    Border(NodeId),
    Tabset(NodeId),
}

impl Focus {
    /// Focus order for a model: sidebar, then borders, then tabsets
    pub fn order(model: &LayoutModel) -> Vec<Focus> {
        let mut order = vec![Focus::Sidebar];
        order.extend(model.borders.iter().map(|b| Focus::Border(b.id)));
        order.extend(model.tabsets().iter().map(|t| Focus::Tabset(t.id)));
        order
    }

    /// Step forward (or back) through the model's focus order
    ///
    /// A focus that no longer exists in the model restarts from the sidebar.
    pub fn cycle(self, model: &LayoutModel, forward: bool) -> Focus {
        let order = Self::order(model);
        let len = order.len();
        match order.iter().position(|f| *f == self) {
            Some(i) if forward => order[(i + 1) % len],
            Some(i) => order[(i + len - 1) % len],
            None => Focus::Sidebar,
        }
    }

    /// Keep the focus if its node survived a model change
    pub fn revalidate(self, model: &LayoutModel) -> Focus {
        if Self::order(model).contains(&self) {
            self
        } else {
            model
                .tabsets()
                .first()
                .map(|t| Focus::Tabset(t.id))
                .unwrap_or(Focus::Sidebar)
        }
    }

    pub fn tabset(&self) -> Option<NodeId> {
        match self {
            Focus::Tabset(id) => Some(*id),
            _ => None,
        }
    }
}
