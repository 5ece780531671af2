//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::dock::DockCommand;
use crate::model::layout::NodeId;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────
    /// Replace the live model with a fresh instance of a preset
    SelectPreset(String),
    /// Re-instantiate the current preset
    ResetLayout,
    /// Apply a docking command to the live model
    Dock(DockCommand),
    /// Select the next tab of the focused tabset or border
    NextTab,
    /// Select the previous tab of the focused tabset or border
    PrevTab,
    /// Close the selected tab of the focused tabset
    CloseFocusedTab,
    /// Move the selected tab to the next tabset
    MoveFocusedTab,
    /// Give the focused tabset more room
    GrowFocused,
    /// Give the focused tabset less room
    ShrinkFocused,
    /// Expand or collapse the focused border
    ToggleFocusedBorder,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus & Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Move keyboard focus to the next region
    FocusNext,
    /// Move keyboard focus to the previous region
    FocusPrev,
    /// Focus a region directly (mouse)
    FocusTabset(NodeId),
    /// Scroll the focused panel up one line
    ScrollUp,
    /// Scroll the focused panel down one line
    ScrollDown,
    /// Scroll the focused panel up one page
    PageUp,
    /// Scroll the focused panel down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Sidebar
    // ─────────────────────────────────────────────────────────────────────────
    /// Highlight the next menu entry
    MenuNext,
    /// Highlight the previous menu entry
    MenuPrev,
    /// Plain click on a menu entry
    MenuClick(usize),
    /// Start dragging a menu entry
    DragStart(usize),
    /// Drag ended without a drop
    DragEnd,
    /// Drop the dragged entry onto a tabset
    DropOnTabset(NodeId),

    // ─────────────────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────────────────
    /// Go back to the previous route
    NavigateBack,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the layout preset picker
    OpenLayoutSelector,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Navigate up in modal (e.g., previous option)
    ModalUp,
    /// Navigate down in modal (e.g., next option)
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SelectPreset(name) => write!(f, "SelectPreset({})", name),
            Action::ResetLayout => write!(f, "ResetLayout"),
            Action::Dock(command) => write!(f, "Dock({:?})", command),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::CloseFocusedTab => write!(f, "CloseFocusedTab"),
            Action::MoveFocusedTab => write!(f, "MoveFocusedTab"),
            Action::GrowFocused => write!(f, "GrowFocused"),
            Action::ShrinkFocused => write!(f, "ShrinkFocused"),
            Action::ToggleFocusedBorder => write!(f, "ToggleFocusedBorder"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::FocusTabset(id) => write!(f, "FocusTabset({})", id.0),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::MenuNext => write!(f, "MenuNext"),
            Action::MenuPrev => write!(f, "MenuPrev"),
            Action::MenuClick(i) => write!(f, "MenuClick({})", i),
            Action::DragStart(i) => write!(f, "DragStart({})", i),
            Action::DragEnd => write!(f, "DragEnd"),
            Action::DropOnTabset(id) => write!(f, "DropOnTabset({})", id.0),
            Action::NavigateBack => write!(f, "NavigateBack"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenLayoutSelector => write!(f, "OpenLayoutSelector"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}
