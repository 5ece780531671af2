//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - Sample records and the column schemas that render them
//! - Layout presets, the live layout model and the docking commands on it
//! - `LayoutController` - sole owner of the live model
//! - `PanelFactory` - component tag to panel view lookup
//! - `DragSource` - sidebar drag/click state machine
//! - `ModalStack` - Modal overlay management

pub mod controller;
pub mod dock;
pub mod layout;
pub mod menu;
pub mod modal;
pub mod panel;
pub mod presets;
pub mod sample_data;
pub mod table;
pub mod ui;

// Re-export commonly used types
pub use controller::LayoutController;
pub use dock::DockCommand;
pub use layout::{LayoutModel, NodeId};
pub use menu::DragSource;
pub use panel::PanelFactory;
pub use presets::PresetRegistry;
pub use ui::{AppMode, Focus};
