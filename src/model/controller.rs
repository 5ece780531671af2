//! Layout model controller
//!
//! Sole owner of the live layout model. The model is replaced wholesale on
//! every preset selection and on every change reported by the dock layer.

use super::dock::DockCommand;
use super::layout::LayoutModel;
use super::presets::PresetRegistry;

pub struct LayoutController {
    registry: PresetRegistry,
    /// Effective preset name, after fallback
    selected: String,
    model: Option<LayoutModel>,
}

impl LayoutController {
    /// Create a controller with no live model yet
    pub fn new(registry: PresetRegistry) -> Self {
        let selected = registry.presets()[0].name.clone();
        Self {
            registry,
            selected,
            model: None,
        }
    }

    /// Select a preset by name and rebuild the live model from it
    ///
    /// Unknown names fall back to the default preset. Any edits made to the
    /// previous model are discarded.
    pub fn select_preset(&mut self, name: &str) -> &LayoutModel {
        let preset = self.registry.resolve(name);
        self.selected = preset.name.clone();
        let model = preset.instantiate();
        tracing::debug!(
            requested = name,
            preset = %preset.name,
            root = ?model.root_kind(),
            tabs = model.tabs().len(),
            "instantiated layout preset"
        );
        self.model.insert(model)
    }

    /// Re-instantiate the current preset
    pub fn reset(&mut self) -> &LayoutModel {
        let name = self.selected.clone();
        self.select_preset(&name)
    }

    /// Store a model emitted by the dock layer as the live model
    pub fn on_model_changed(&mut self, model: LayoutModel) {
        tracing::debug!(
            preset = %model.preset(),
            components = ?model.components(),
            "layout model replaced"
        );
        self.model = Some(model);
    }

    /// Apply a dock command to the live model
    ///
    /// Returns `false` when there is no model yet or the command did not
    /// change anything.
    pub fn apply(&mut self, command: &DockCommand) -> bool {
        let Some(next) = self.model.as_ref().and_then(|m| m.apply(command)) else {
            return false;
        };
        self.on_model_changed(next);
        true
    }

    /// The live model, or `None` before the first preset selection
    pub fn current_model(&self) -> Option<&LayoutModel> {
        self.model.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.model.is_some()
    }

    pub fn selected_preset(&self) -> &str {
        &self.selected
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layout::{LayoutNode, NodeKind};
    use proptest::prelude::*;

    fn controller() -> LayoutController {
        LayoutController::new(PresetRegistry::builtin().unwrap())
    }

    #[test]
    fn test_uninitialized_until_first_selection() {
        let mut controller = controller();
        assert!(controller.current_model().is_none());
        assert!(!controller.is_initialized());

        controller.select_preset("default");
        assert!(controller.current_model().is_some());
    }

    #[test]
    fn test_complex_preset_root() {
        let mut controller = controller();
        let model = controller.select_preset("complex");
        assert_eq!(model.root_kind(), NodeKind::Row);
        let kinds: Vec<NodeKind> = model.root.children.iter().map(LayoutNode::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Tabset, NodeKind::Column]);
    }

    #[test]
    fn test_unknown_preset_matches_default() {
        let mut controller = controller();
        let unknown = controller.select_preset("nonexistent").clone();
        assert_eq!(controller.selected_preset(), "default");
        let default = controller.select_preset("default").clone();
        assert_eq!(unknown, default);
    }

    #[test]
    fn test_reselect_discards_edits() {
        let mut controller = controller();
        let template = controller.select_preset("complex").clone();

        let tab = template.tabs()[2].id;
        assert!(controller.apply(&DockCommand::CloseTab { tab }));
        assert_ne!(controller.current_model(), Some(&template));

        controller.select_preset("complex");
        assert_eq!(controller.current_model(), Some(&template));
    }

    #[test]
    fn test_reset_restores_template() {
        let mut controller = controller();
        let template = controller.select_preset("default").clone();
        let node = template.root.children[0].id();
        assert!(controller.apply(&DockCommand::Resize { node, delta: 20 }));

        controller.reset();
        assert_eq!(controller.current_model(), Some(&template));
    }

    #[test]
    fn test_on_model_changed_stores_whole_model() {
        let mut controller = controller();
        let mut model = controller.select_preset("default").clone();
        model.root.children.truncate(1);
        controller.on_model_changed(model.clone());
        assert_eq!(controller.current_model(), Some(&model));
    }

    #[test]
    fn test_apply_without_model_is_noop() {
        let mut controller = controller();
        let command = DockCommand::Resize {
            node: crate::model::layout::NodeId(1),
            delta: 5,
        };
        assert!(!controller.apply(&command));
        assert!(controller.current_model().is_none());
    }

    proptest! {
        #[test]
        fn unknown_names_fall_back_to_default(name in "[a-z0-9_ -]{0,16}") {
            prop_assume!(name != "default" && name != "complex");
            let mut controller = controller();
            let unknown = controller.select_preset(&name).clone();
            let default = controller.select_preset("default").clone();
            prop_assert_eq!(unknown, default);
        }
    }
}
