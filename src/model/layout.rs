//! Layout tree model
//!
//! A layout is a root row of nested rows, columns and tabsets, plus optional
//! borders docked to the window edges. Presets describe layouts as JSON/YAML
//! documents; `LayoutPreset::instantiate` turns one into a live `LayoutModel`
//! with stable node ids.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to every node of a live model
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

/// Kind tag of a layout node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Row,
    Column,
    Tabset,
    Border,
}

fn default_weight() -> u32 {
    100
}

fn default_true() -> bool {
    true
}

fn default_border_size() -> u16 {
    25
}

fn default_border_extent() -> u16 {
    200
}

/// Workspace-wide behaviour switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    #[serde(default = "default_true")]
    pub tab_enable_close: bool,
    #[serde(default = "default_true")]
    pub tab_enable_drag: bool,
    #[serde(default)]
    pub tab_enable_rename: bool,
    /// Size of a collapsed border strip, in pixels
    #[serde(default = "default_border_size")]
    pub border_size: u16,
    /// Hide borders that have no tabs
    #[serde(default)]
    pub border_enable_auto_hide: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            tab_enable_close: true,
            tab_enable_drag: true,
            tab_enable_rename: false,
            border_size: default_border_size(),
            border_enable_auto_hide: false,
        }
    }
}

/// A tab bound to a panel component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabNode {
    #[serde(default, skip_serializing)]
    pub id: NodeId,
    pub name: String,
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_close: Option<bool>,
}

impl TabNode {
    /// Whether this tab may be closed under `global`
    pub fn closable(&self, global: &GlobalSettings) -> bool {
        self.enable_close.unwrap_or(global.tab_enable_close)
    }
}

/// Name and component of a tab to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub name: String,
    pub component: String,
}

/// A stack of tabs where one is visible at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsetNode {
    #[serde(default, skip_serializing)]
    pub id: NodeId,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub selected: usize,
    #[serde(default)]
    pub children: Vec<TabNode>,
}

impl TabsetNode {
    pub fn selected_tab(&self) -> Option<&TabNode> {
        self.children.get(self.selected)
    }
}

/// Children laid out side by side (row) or stacked (column)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitNode {
    #[serde(default, skip_serializing)]
    pub id: NodeId,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

/// A node inside the main layout tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Row(SplitNode),
    Column(SplitNode),
    Tabset(TabsetNode),
}

impl LayoutNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            LayoutNode::Row(_) => NodeKind::Row,
            LayoutNode::Column(_) => NodeKind::Column,
            LayoutNode::Tabset(_) => NodeKind::Tabset,
        }
    }

    pub fn id(&self) -> NodeId {
        match self {
            LayoutNode::Row(s) | LayoutNode::Column(s) => s.id,
            LayoutNode::Tabset(t) => t.id,
        }
    }

    pub fn weight(&self) -> u32 {
        match self {
            LayoutNode::Row(s) | LayoutNode::Column(s) => s.weight,
            LayoutNode::Tabset(t) => t.weight,
        }
    }

    pub(crate) fn weight_mut(&mut self) -> &mut u32 {
        match self {
            LayoutNode::Row(s) | LayoutNode::Column(s) => &mut s.weight,
            LayoutNode::Tabset(t) => &mut t.weight,
        }
    }
}

/// Window edge a border is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderLocation {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderLocation {
    pub fn is_vertical(&self) -> bool {
        matches!(self, BorderLocation::Left | BorderLocation::Right)
    }
}

/// Tabs docked to a window edge
///
/// `selected` is `None` while the border is collapsed to its strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderNode {
    #[serde(default, skip_serializing)]
    pub id: NodeId,
    pub location: BorderLocation,
    /// Expanded size in pixels
    #[serde(default = "default_border_extent")]
    pub size: u16,
    #[serde(default)]
    pub selected: Option<usize>,
    #[serde(default)]
    pub children: Vec<TabNode>,
}

impl BorderNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Border
    }

    pub fn selected_tab(&self) -> Option<&TabNode> {
        self.selected.and_then(|i| self.children.get(i))
    }
}

/// On-disk shape of a preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDescriptor {
    #[serde(default)]
    pub global: GlobalSettings,
    #[serde(default)]
    pub borders: Vec<BorderNode>,
    pub layout: LayoutNode,
}

/// A validated, immutable layout template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPreset {
    pub name: String,
    pub global: GlobalSettings,
    pub borders: Vec<BorderNode>,
    pub root: SplitNode,
}

impl LayoutPreset {
    /// Display label for selectors ("complex" → "Complex")
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Build a fresh live model from this template
    ///
    /// The template is cloned, so later edits to the model never reach it.
    pub fn instantiate(&self) -> LayoutModel {
        let mut model = LayoutModel {
            preset: self.name.clone(),
            global: self.global.clone(),
            borders: self.borders.clone(),
            root: self.root.clone(),
            next_id: 1,
        };
        model.assign_ids();
        model
    }
}

/// The live, user-editable layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutModel {
    preset: String,
    pub global: GlobalSettings,
    pub borders: Vec<BorderNode>,
    /// Always a row
    pub root: SplitNode,
    next_id: u32,
}

impl LayoutModel {
    /// Name of the preset this model was built from
    pub fn preset(&self) -> &str {
        &self.preset
    }

    pub fn root_kind(&self) -> NodeKind {
        NodeKind::Row
    }

    pub(crate) fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn assign_ids(&mut self) {
        let mut next = self.next_id;
        let mut take = || {
            let id = NodeId(next);
            next += 1;
            id
        };

        for border in &mut self.borders {
            border.id = take();
            for tab in &mut border.children {
                tab.id = take();
            }
        }

        fn walk(split: &mut SplitNode, take: &mut dyn FnMut() -> NodeId) {
            split.id = take();
            for child in &mut split.children {
                match child {
                    LayoutNode::Row(s) | LayoutNode::Column(s) => walk(s, take),
                    LayoutNode::Tabset(t) => {
                        t.id = take();
                        for tab in &mut t.children {
                            tab.id = take();
                        }
                    }
                }
            }
        }
        walk(&mut self.root, &mut take);

        self.next_id = next;
    }

    /// All tabsets in depth-first order
    pub fn tabsets(&self) -> Vec<&TabsetNode> {
        fn collect<'a>(split: &'a SplitNode, out: &mut Vec<&'a TabsetNode>) {
            for child in &split.children {
                match child {
                    LayoutNode::Row(s) | LayoutNode::Column(s) => collect(s, out),
                    LayoutNode::Tabset(t) => out.push(t),
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }

    pub fn tabset(&self, id: NodeId) -> Option<&TabsetNode> {
        self.tabsets().into_iter().find(|t| t.id == id)
    }

    pub fn border(&self, id: NodeId) -> Option<&BorderNode> {
        self.borders.iter().find(|b| b.id == id)
    }

    /// Every tab in the model, borders first
    pub fn tabs(&self) -> Vec<&TabNode> {
        let border_tabs = self.borders.iter().flat_map(|b| b.children.iter());
        let main_tabs = self
            .tabsets()
            .into_iter()
            .flat_map(|t| t.children.iter());
        border_tabs.chain(main_tabs).collect()
    }

    /// Component tags of the main tree's tabs, in order
    pub fn components(&self) -> Vec<&str> {
        self.tabsets()
            .into_iter()
            .flat_map(|t| t.children.iter().map(|tab| tab.component.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset_from_json(json: &str) -> LayoutPreset {
        let descriptor: PresetDescriptor = serde_json::from_str(json).unwrap();
        let root = match descriptor.layout {
            LayoutNode::Row(split) => split,
            other => panic!("expected row, got {:?}", other.kind()),
        };
        LayoutPreset {
            name: "test".to_string(),
            global: descriptor.global,
            borders: descriptor.borders,
            root,
        }
    }

    const SMALL: &str = r#"{
        "global": { "tabEnableClose": false },
        "borders": [
            { "type": "border", "location": "left",
              "children": [{ "type": "tab", "name": "Nav", "component": "navigation", "enableClose": false }] }
        ],
        "layout": {
            "type": "row",
            "children": [
                { "type": "tabset", "weight": 30,
                  "children": [{ "type": "tab", "name": "A", "component": "a" }] },
                { "type": "column", "weight": 70, "children": [
                    { "type": "tabset", "children": [
                        { "type": "tab", "name": "B", "component": "b" },
                        { "type": "tab", "name": "C", "component": "c" }
                    ] }
                ] }
            ]
        }
    }"#;

    #[test]
    fn test_descriptor_defaults() {
        let preset = preset_from_json(SMALL);
        assert!(!preset.global.tab_enable_close);
        assert!(preset.global.tab_enable_drag);
        assert_eq!(preset.global.border_size, 25);
        assert_eq!(preset.borders[0].size, 200);
        assert_eq!(preset.borders[0].selected, None);
        assert_eq!(preset.root.weight, 100);
    }

    #[test]
    fn test_instantiate_assigns_unique_ids() {
        let model = preset_from_json(SMALL).instantiate();
        let mut ids: Vec<NodeId> = model.tabs().iter().map(|t| t.id).collect();
        ids.extend(model.tabsets().iter().map(|t| t.id));
        ids.extend(model.borders.iter().map(|b| b.id));
        ids.push(model.root.id);

        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
        assert!(ids.iter().all(|id| id.0 > 0));
    }

    #[test]
    fn test_instantiate_is_deterministic() {
        let preset = preset_from_json(SMALL);
        assert_eq!(preset.instantiate(), preset.instantiate());
    }

    #[test]
    fn test_model_edits_do_not_touch_template() {
        let preset = preset_from_json(SMALL);
        let mut model = preset.instantiate();
        model.root.children.clear();
        assert_eq!(preset.root.children.len(), 2);
        assert_eq!(preset.instantiate().root.children.len(), 2);
    }

    #[test]
    fn test_structure_queries() {
        let model = preset_from_json(SMALL).instantiate();
        let kinds: Vec<NodeKind> = model.root.children.iter().map(LayoutNode::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Tabset, NodeKind::Column]);
        assert_eq!(model.root_kind(), NodeKind::Row);
        assert_eq!(model.tabsets().len(), 2);
        assert_eq!(model.components(), vec!["a", "b", "c"]);
        assert_eq!(model.tabs().len(), 4);
        assert_eq!(model.borders[0].kind(), NodeKind::Border);
    }

    #[test]
    fn test_closable_respects_override() {
        let preset = preset_from_json(SMALL);
        let model = preset.instantiate();
        let nav = &model.borders[0].children[0];
        assert!(!nav.closable(&model.global));

        let mut global = GlobalSettings::default();
        let tab = &model.tabsets()[0].children[0];
        assert!(tab.closable(&global));
        global.tab_enable_close = false;
        assert!(!tab.closable(&global));
    }

    #[test]
    fn test_preset_label() {
        let mut preset = preset_from_json(SMALL);
        preset.name = "complex".to_string();
        assert_eq!(preset.label(), "Complex");
    }
}
