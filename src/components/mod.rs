//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod layout_selector;
pub mod loading;
pub mod page;
pub mod panel;
pub mod quit_dialog;
pub mod sidebar;
pub mod table;
pub mod workspace;

pub use header::HeaderComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use layout_selector::LayoutSelectorDialog;
pub use loading::LoadingComponent;
pub use page::PageComponent;
pub use quit_dialog::QuitDialog;
pub use sidebar::SidebarComponent;
pub use workspace::{draw_workspace, WorkspaceComponent, WorkspaceHit, WorkspaceRenderContext};
