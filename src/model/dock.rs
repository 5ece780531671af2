//! Docking operations on a layout model
//!
//! Every command is applied to a copy of the model. The result is a whole new
//! model that is handed back to the layout controller, which stores it as the
//! live model. Commands that do not apply (unknown node, closing a pinned
//! tab) yield `None` and leave the live model untouched.

use super::layout::{LayoutModel, LayoutNode, NodeId, SplitNode, TabDescriptor, TabNode, TabsetNode};

/// Smallest weight a node can be resized down to
pub const MIN_WEIGHT: u32 = 5;
/// Largest weight a node can be resized up to
pub const MAX_WEIGHT: u32 = 1000;

/// A mutation request from the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockCommand {
    /// Make the tab at `index` the visible one in a tabset
    SelectTab { tabset: NodeId, index: usize },
    /// Close a tab in a tabset or border
    CloseTab { tab: NodeId },
    /// Move a tab to the end of another tabset
    MoveTab { tab: NodeId, to: NodeId },
    /// Create a new tab at the end of a tabset and select it
    AddTab { tabset: NodeId, tab: TabDescriptor },
    /// Grow or shrink a node relative to its siblings
    Resize { node: NodeId, delta: i32 },
    /// Expand a border on the tab at `index`, or collapse it if already shown
    ToggleBorder { border: NodeId, index: usize },
}

impl LayoutModel {
    /// Apply a command, returning the resulting model
    pub fn apply(&self, command: &DockCommand) -> Option<LayoutModel> {
        let mut next = self.clone();
        let changed = match command {
            DockCommand::SelectTab { tabset, index } => next.select_tab(*tabset, *index),
            DockCommand::CloseTab { tab } => next.close_tab(*tab),
            DockCommand::MoveTab { tab, to } => next.move_tab(*tab, *to),
            DockCommand::AddTab { tabset, tab } => next.add_tab(*tabset, tab),
            DockCommand::Resize { node, delta } => next.resize(*node, *delta),
            DockCommand::ToggleBorder { border, index } => next.toggle_border(*border, *index),
        };
        changed.then_some(next)
    }

    fn select_tab(&mut self, tabset: NodeId, index: usize) -> bool {
        match find_tabset_mut(&mut self.root, tabset) {
            Some(t) if index < t.children.len() && t.selected != index => {
                t.selected = index;
                true
            }
            _ => false,
        }
    }

    fn close_tab(&mut self, tab: NodeId) -> bool {
        let closable = match self.tabs().into_iter().find(|t| t.id == tab) {
            Some(t) => t.closable(&self.global),
            None => return false,
        };
        if !closable {
            return false;
        }
        self.take_tab(tab).is_some()
    }

    fn move_tab(&mut self, tab: NodeId, to: NodeId) -> bool {
        if !self.global.tab_enable_drag {
            return false;
        }
        let Some(target) = self.tabset(to) else {
            return false;
        };
        if target.children.iter().any(|t| t.id == tab) {
            return false;
        }
        let Some(moved) = self.take_tab(tab) else {
            return false;
        };
        match find_tabset_mut(&mut self.root, to) {
            Some(target) => {
                target.children.push(moved);
                target.selected = target.children.len() - 1;
                true
            }
            None => false,
        }
    }

    fn add_tab(&mut self, tabset: NodeId, descriptor: &TabDescriptor) -> bool {
        if self.tabset(tabset).is_none() {
            return false;
        }
        let tab = TabNode {
            id: self.alloc_id(),
            name: descriptor.name.clone(),
            component: descriptor.component.clone(),
            enable_close: None,
        };
        match find_tabset_mut(&mut self.root, tabset) {
            Some(target) => {
                target.children.push(tab);
                target.selected = target.children.len() - 1;
                true
            }
            None => false,
        }
    }

    fn resize(&mut self, node: NodeId, delta: i32) -> bool {
        match find_node_mut(&mut self.root, node) {
            Some(found) => {
                let weight = found.weight_mut();
                let resized = (*weight as i64 + delta as i64)
                    .clamp(MIN_WEIGHT as i64, MAX_WEIGHT as i64) as u32;
                if resized == *weight {
                    return false;
                }
                *weight = resized;
                true
            }
            None => false,
        }
    }

    fn toggle_border(&mut self, border: NodeId, index: usize) -> bool {
        match self.borders.iter_mut().find(|b| b.id == border) {
            Some(b) if index < b.children.len() => {
                b.selected = if b.selected == Some(index) {
                    None
                } else {
                    Some(index)
                };
                true
            }
            _ => false,
        }
    }

    /// Remove a tab from wherever it lives, pruning emptied tabsets
    fn take_tab(&mut self, tab: NodeId) -> Option<TabNode> {
        for border in &mut self.borders {
            if let Some(pos) = border.children.iter().position(|t| t.id == tab) {
                let removed = border.children.remove(pos);
                border.selected = match border.selected {
                    Some(sel) if sel == pos => None,
                    Some(sel) if sel > pos => Some(sel - 1),
                    other => other,
                };
                return Some(removed);
            }
        }

        let removed = take_from_split(&mut self.root, tab)?;
        prune(&mut self.root);
        if self.root.children.is_empty() {
            // Keep one tabset around so there is always a drop target
            let id = self.alloc_id();
            self.root.children.push(LayoutNode::Tabset(TabsetNode {
                id,
                weight: 100,
                selected: 0,
                children: Vec::new(),
            }));
        }
        Some(removed)
    }
}

fn find_tabset_mut(split: &mut SplitNode, id: NodeId) -> Option<&mut TabsetNode> {
    for child in &mut split.children {
        match child {
            LayoutNode::Tabset(t) if t.id == id => return Some(t),
            LayoutNode::Row(s) | LayoutNode::Column(s) => {
                if let Some(found) = find_tabset_mut(s, id) {
                    return Some(found);
                }
            }
            LayoutNode::Tabset(_) => {}
        }
    }
    None
}

fn find_node_mut(split: &mut SplitNode, id: NodeId) -> Option<&mut LayoutNode> {
    for child in &mut split.children {
        if child.id() == id {
            return Some(child);
        }
        if let LayoutNode::Row(s) | LayoutNode::Column(s) = child {
            if let Some(found) = find_node_mut(s, id) {
                return Some(found);
            }
        }
    }
    None
}

fn take_from_split(split: &mut SplitNode, tab: NodeId) -> Option<TabNode> {
    for child in &mut split.children {
        match child {
            LayoutNode::Tabset(t) => {
                if let Some(pos) = t.children.iter().position(|c| c.id == tab) {
                    let removed = t.children.remove(pos);
                    if pos < t.selected || t.selected >= t.children.len() {
                        t.selected = t.selected.saturating_sub(1);
                    }
                    return Some(removed);
                }
            }
            LayoutNode::Row(s) | LayoutNode::Column(s) => {
                if let Some(removed) = take_from_split(s, tab) {
                    return Some(removed);
                }
            }
        }
    }
    None
}

/// Drop empty tabsets and splits left without children
fn prune(split: &mut SplitNode) {
    for child in &mut split.children {
        if let LayoutNode::Row(s) | LayoutNode::Column(s) = child {
            prune(s);
        }
    }
    split.children.retain(|child| match child {
        LayoutNode::Tabset(t) => !t.children.is_empty(),
        LayoutNode::Row(s) | LayoutNode::Column(s) => !s.children.is_empty(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presets::PresetRegistry;

    fn complex() -> LayoutModel {
        PresetRegistry::builtin().unwrap().resolve("complex").instantiate()
    }

    fn tab_id(model: &LayoutModel, component: &str) -> NodeId {
        model
            .tabs()
            .into_iter()
            .find(|t| t.component == component)
            .map(|t| t.id)
            .unwrap()
    }

    #[test]
    fn test_select_tab() {
        let model = complex();
        let tabset = model.tabsets()[1].id;
        let next = model.apply(&DockCommand::SelectTab { tabset, index: 1 }).unwrap();
        assert_eq!(next.tabset(tabset).unwrap().selected, 1);
        // Original is untouched
        assert_eq!(model.tabset(tabset).unwrap().selected, 0);

        assert!(next.apply(&DockCommand::SelectTab { tabset, index: 1 }).is_none());
        assert!(next.apply(&DockCommand::SelectTab { tabset, index: 9 }).is_none());
    }

    #[test]
    fn test_close_tab_and_prune_tabset() {
        let model = complex();
        let dashboard = tab_id(&model, "dashboard");
        let next = model.apply(&DockCommand::CloseTab { tab: dashboard }).unwrap();

        // The single-tab tabset disappears with its tab
        assert_eq!(next.tabsets().len(), 2);
        assert!(!next.components().contains(&"dashboard"));
    }

    #[test]
    fn test_close_adjusts_selection() {
        let model = complex();
        let tabset = model.tabsets()[2].id;
        let model = model.apply(&DockCommand::SelectTab { tabset, index: 1 }).unwrap();
        let settings = tab_id(&model, "settings");
        let next = model.apply(&DockCommand::CloseTab { tab: settings }).unwrap();
        let remaining = next.tabset(tabset).unwrap();
        assert_eq!(remaining.selected, 0);
        assert_eq!(remaining.selected_tab().unwrap().component, "datagrid");
    }

    #[test]
    fn test_pinned_border_tab_cannot_close() {
        let model = complex();
        let console = tab_id(&model, "console");
        assert!(model.apply(&DockCommand::CloseTab { tab: console }).is_none());
    }

    #[test]
    fn test_closing_everything_leaves_a_drop_target() {
        let mut model = PresetRegistry::builtin().unwrap().resolve("default").instantiate();
        for component in ["dashboard", "analytics", "reports", "settings"] {
            let tab = tab_id(&model, component);
            model = model.apply(&DockCommand::CloseTab { tab }).unwrap();
        }
        assert_eq!(model.tabsets().len(), 1);
        assert!(model.tabsets()[0].children.is_empty());

        let tabset = model.tabsets()[0].id;
        let tab = TabDescriptor {
            name: "Reports".to_string(),
            component: "reports".to_string(),
        };
        let model = model.apply(&DockCommand::AddTab { tabset, tab }).unwrap();
        assert_eq!(model.components(), vec!["reports"]);
    }

    #[test]
    fn test_move_tab() {
        let model = complex();
        let reports = tab_id(&model, "reports");
        let target = model.tabsets()[0].id;
        let next = model.apply(&DockCommand::MoveTab { tab: reports, to: target }).unwrap();

        let first = next.tabset(target).unwrap();
        assert_eq!(first.children.len(), 2);
        assert_eq!(first.selected_tab().unwrap().component, "reports");
        assert_eq!(next.tabs().len(), model.tabs().len());

        // Moving into its own tabset is a no-op
        assert!(next.apply(&DockCommand::MoveTab { tab: reports, to: target }).is_none());
    }

    #[test]
    fn test_move_requires_drag_enabled() {
        let mut model = complex();
        model.global.tab_enable_drag = false;
        let reports = tab_id(&model, "reports");
        let target = model.tabsets()[0].id;
        assert!(model.apply(&DockCommand::MoveTab { tab: reports, to: target }).is_none());
    }

    #[test]
    fn test_add_tab_gets_fresh_id() {
        let model = complex();
        let tabset = model.tabsets()[0].id;
        let tab = TabDescriptor {
            name: "Console".to_string(),
            component: "console".to_string(),
        };
        let next = model.apply(&DockCommand::AddTab { tabset, tab }).unwrap();
        let added = next.tabset(tabset).unwrap().selected_tab().unwrap();
        assert_eq!(added.component, "console");
        assert!(model.tabs().iter().all(|t| t.id != added.id));
    }

    #[test]
    fn test_resize_clamps() {
        let model = complex();
        let node = model.root.children[0].id();
        let next = model.apply(&DockCommand::Resize { node, delta: 10 }).unwrap();
        assert_eq!(next.root.children[0].weight(), 43);

        let shrunk = next.apply(&DockCommand::Resize { node, delta: -500 }).unwrap();
        assert_eq!(shrunk.root.children[0].weight(), MIN_WEIGHT);
        assert!(shrunk.apply(&DockCommand::Resize { node, delta: -1 }).is_none());
    }

    #[test]
    fn test_toggle_border() {
        let model = complex();
        let border = model.borders[1].id;
        let open = model.apply(&DockCommand::ToggleBorder { border, index: 0 }).unwrap();
        assert_eq!(open.border(border).unwrap().selected_tab().unwrap().component, "console");
        let closed = open.apply(&DockCommand::ToggleBorder { border, index: 0 }).unwrap();
        assert_eq!(closed.border(border).unwrap().selected, None);
    }
}
