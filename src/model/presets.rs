//! Layout preset registry
//!
//! Built-in presets ship as embedded JSON documents. Extra presets can be
//! loaded from a YAML file whose top level maps preset names to descriptors.

use super::layout::{LayoutNode, LayoutPreset, PresetDescriptor};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Preset used when a requested name is unknown
pub const DEFAULT_PRESET: &str = "default";

const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("default", include_str!("../../presets/default.json")),
    ("complex", include_str!("../../presets/complex.json")),
];

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to parse preset '{name}': {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse preset file {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to read preset file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preset '{0}' must have a row as its root layout node")]
    RootNotRow(String),
    #[error("preset names must be non-empty strings")]
    InvalidName,
}

impl LayoutPreset {
    /// Validate a descriptor and turn it into a named template
    pub fn from_descriptor(
        name: impl Into<String>,
        descriptor: PresetDescriptor,
    ) -> Result<Self, PresetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PresetError::InvalidName);
        }
        let root = match descriptor.layout {
            LayoutNode::Row(split) => split,
            _ => return Err(PresetError::RootNotRow(name)),
        };
        Ok(Self {
            name,
            global: descriptor.global,
            borders: descriptor.borders,
            root,
        })
    }
}

/// All presets available to the layout selector
///
/// The default preset is always at index 0.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: Vec<LayoutPreset>,
}

impl PresetRegistry {
    /// Registry holding only the built-in presets
    pub fn builtin() -> Result<Self, PresetError> {
        let presets = BUILTIN_PRESETS
            .iter()
            .map(|(name, json)| {
                let descriptor: PresetDescriptor =
                    serde_json::from_str(json).map_err(|source| PresetError::Json {
                        name: name.to_string(),
                        source,
                    })?;
                LayoutPreset::from_descriptor(*name, descriptor)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { presets })
    }

    /// Merge presets from a YAML file, returning how many were added
    pub fn load_file(&mut self, path: &Path) -> Result<usize, PresetError> {
        let contents = fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_yaml(&contents).map_err(|source| PresetError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge presets from YAML text
    ///
    /// Entries that fail validation or reuse an existing name are skipped
    /// with a warning; only a malformed document is an error.
    pub fn load_yaml(&mut self, yaml: &str) -> Result<usize, serde_yaml::Error> {
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(yaml)?;
        let mut added = 0;

        for (key, value) in mapping {
            let Some(name) = key.as_str().map(str::to_string) else {
                tracing::warn!(?key, "skipping preset with a non-string name");
                continue;
            };
            if self.get(&name).is_some() {
                tracing::warn!(preset = %name, "skipping preset that shadows an existing one");
                continue;
            }
            let preset = serde_yaml::from_value::<PresetDescriptor>(value)
                .map_err(|e| e.to_string())
                .and_then(|d| LayoutPreset::from_descriptor(name.clone(), d).map_err(|e| e.to_string()));
            match preset {
                Ok(preset) => {
                    tracing::debug!(preset = %name, "loaded user preset");
                    self.presets.push(preset);
                    added += 1;
                }
                Err(error) => {
                    tracing::warn!(preset = %name, %error, "skipping invalid preset");
                }
            }
        }

        Ok(added)
    }

    pub fn get(&self, name: &str) -> Option<&LayoutPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Look up a preset, silently falling back to the default
    pub fn resolve(&self, name: &str) -> &LayoutPreset {
        match self.get(name) {
            Some(preset) => preset,
            None => {
                tracing::debug!(requested = name, "unknown preset, using default");
                &self.presets[0]
            }
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn presets(&self) -> &[LayoutPreset] {
        &self.presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layout::NodeKind;

    #[test]
    fn test_builtin_presets_parse() {
        let registry = PresetRegistry::builtin().unwrap();
        assert_eq!(registry.names(), vec!["default", "complex"]);
        assert_eq!(registry.presets()[0].name, DEFAULT_PRESET);
    }

    #[test]
    fn test_complex_structure() {
        let registry = PresetRegistry::builtin().unwrap();
        let complex = registry.resolve("complex");
        let kinds: Vec<NodeKind> = complex.root.children.iter().map(LayoutNode::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Tabset, NodeKind::Column]);
        assert_eq!(complex.borders.len(), 2);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let registry = PresetRegistry::builtin().unwrap();
        assert_eq!(registry.resolve("nonexistent").name, "default");
        assert_eq!(registry.resolve("").name, "default");
    }

    #[test]
    fn test_root_must_be_row() {
        let descriptor: PresetDescriptor = serde_json::from_str(
            r#"{ "layout": { "type": "tabset", "children": [] } }"#,
        )
        .unwrap();
        let err = LayoutPreset::from_descriptor("odd", descriptor).unwrap_err();
        assert!(matches!(err, PresetError::RootNotRow(name) if name == "odd"));
    }

    #[test]
    fn test_load_yaml_presets() {
        let mut registry = PresetRegistry::builtin().unwrap();
        let yaml = r#"
focus:
  layout:
    type: row
    children:
      - type: tabset
        children:
          - { type: tab, name: Reports, component: reports }
default:
  layout:
    type: row
    children: []
broken:
  layout:
    type: column
    children: []
"#;
        let added = registry.load_yaml(yaml).unwrap();
        assert_eq!(added, 1);
        assert_eq!(registry.names(), vec!["default", "complex", "focus"]);
        // Built-in default was not replaced
        assert_eq!(registry.resolve("default").root.children.len(), 2);
    }

    #[test]
    fn test_load_yaml_rejects_malformed_document() {
        let mut registry = PresetRegistry::builtin().unwrap();
        assert!(registry.load_yaml("- just\n- a list\n").is_err());
        assert_eq!(registry.names().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let mut registry = PresetRegistry::builtin().unwrap();
        let err = registry
            .load_file(Path::new("/definitely/not/here/layouts.yaml"))
            .unwrap_err();
        assert!(matches!(err, PresetError::Io { .. }));
    }

    #[test]
    fn test_example_file_loads() {
        let mut registry = PresetRegistry::builtin().unwrap();
        let yaml = include_str!("../../presets/layouts.example.yaml");
        assert_eq!(registry.load_yaml(yaml).unwrap(), 1);
        assert!(registry.get("focus").is_some());
    }
}
