//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates between the layout controller, the sidebar drag source
//! and the router; the layout and drag rules live in the model layer.

use crate::action::Action;
use crate::component::Component;
use crate::components::workspace::scroll_delta;
use crate::components::{
    calculate_main_layout, draw_workspace, HeaderComponent, HelpDialog, LayoutSelectorDialog,
    LoadingComponent, PageComponent, QuitDialog, SidebarComponent, WorkspaceComponent,
    WorkspaceHit, WorkspaceRenderContext,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{
    AppMode, DockCommand, DragSource, Focus, LayoutController, LayoutModel, NodeId, PanelFactory,
    PresetRegistry,
};
use crate::services::{Route, Router};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::VecDeque;

/// Weight step for keyboard resizing
const RESIZE_STEP: i32 = 10;

/// What the left button went down on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Menu(usize),
    /// A menu press that has moved; its release is never a click
    MenuDragged,
    Tab(NodeId),
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,

    /// Owner of the live layout model
    pub controller: LayoutController,

    /// Component tag → panel lookup
    pub factory: PanelFactory,

    /// Sidebar drag state machine
    pub drag: DragSource,

    pub router: Router,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Region receiving keyboard input
    pub focus: Focus,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Actions scheduled outside of event handling
    pending: VecDeque<Action>,

    /// Left button press awaiting release
    press: Option<Press>,

    /// Pointer position while the left button is held
    pointer: Option<(u16, u16)>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub header: HeaderComponent,
    pub sidebar: SidebarComponent,
    pub workspace: WorkspaceComponent,
    pub page: PageComponent,
    pub loading: LoadingComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub layout_selector: LayoutSelectorDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new(config: Config, registry: PresetRegistry) -> App {
        let drag = DragSource::default();
        App {
            config,
            controller: LayoutController::new(registry),
            factory: PanelFactory::default(),
            sidebar: SidebarComponent::new(drag.entries()),
            drag,
            router: Router::new(),
            modals: ModalStack::new(),
            focus: Focus::Sidebar,
            should_quit: false,
            status_message: None,
            pending: VecDeque::new(),
            press: None,
            pointer: None,
            header: HeaderComponent::default(),
            workspace: WorkspaceComponent::default(),
            page: PageComponent::default(),
            loading: LoadingComponent::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            layout_selector: LayoutSelectorDialog::new(),
        }
    }

    /// Loading until the first preset selection has produced a model
    pub fn mode(&self) -> AppMode {
        if self.controller.is_initialized() {
            AppMode::Running
        } else {
            AppMode::Loading
        }
    }

    /// Next scheduled action, if any
    pub fn next_pending(&mut self) -> Option<Action> {
        self.pending.pop_front()
    }

    fn model(&self) -> Option<&LayoutModel> {
        self.controller.current_model()
    }

    fn on_workspace(&self) -> bool {
        *self.router.route() == Route::Workspace
    }

    /// Keep focus on a node that still exists after a model change
    fn revalidate_focus(&mut self) {
        if let Some(model) = self.controller.current_model() {
            self.focus = self.focus.revalidate(model);
        }
    }

    fn preset_label(&self) -> String {
        self.controller
            .registry()
            .resolve(self.controller.selected_preset())
            .label()
    }

    /// Show the page for the current route
    fn sync_page(&mut self) {
        match self.router.route().clone() {
            Route::Workspace => {}
            Route::Panel(tag) => {
                if !self.factory.is_known(&tag) {
                    tracing::warn!(tag = %tag, "route names an unknown component");
                }
                self.page.set_view(self.factory.render(&tag));
            }
            Route::NotFound(path) => self.page.set_not_found(path),
        }
    }

    /// Tab shown in the focused tabset or border
    fn focused_tab(&self) -> Option<NodeId> {
        let model = self.model()?;
        match self.focus {
            Focus::Tabset(id) => model.tabset(id)?.selected_tab().map(|t| t.id),
            Focus::Border(id) => model.border(id)?.selected_tab().map(|t| t.id),
            Focus::Sidebar => None,
        }
    }

    /// Dock command cycling the focused tabset or border by one tab
    fn cycle_tab(&self, forward: bool) -> Option<DockCommand> {
        let model = self.model()?;
        let step = |current: usize, len: usize| {
            if forward {
                (current + 1) % len
            } else {
                (current + len - 1) % len
            }
        };
        match self.focus {
            Focus::Tabset(id) => {
                let tabset = model.tabset(id)?;
                let len = tabset.children.len();
                (len > 1).then(|| DockCommand::SelectTab {
                    tabset: id,
                    index: step(tabset.selected, len),
                })
            }
            Focus::Border(id) => {
                let border = model.border(id)?;
                let len = border.children.len();
                if len == 0 {
                    return None;
                }
                let index = match border.selected {
                    Some(current) => step(current, len),
                    None => 0,
                };
                (border.selected != Some(index)).then_some(DockCommand::ToggleBorder {
                    border: id,
                    index,
                })
            }
            Focus::Sidebar => None,
        }
    }

    /// Tabset after the focused one, wrapping around
    fn next_tabset(&self, from: NodeId) -> Option<NodeId> {
        let tabsets = self.model()?.tabsets();
        let pos = tabsets.iter().position(|t| t.id == from)?;
        let next = tabsets[(pos + 1) % tabsets.len()].id;
        (next != from).then_some(next)
    }

    fn drop_on_tabset(&mut self, tabset: NodeId) {
        let Some(pending) = self.drag.external_drag() else {
            self.status_message = Some("Nothing to drop".to_string());
            return;
        };
        let name = pending.tab.name.clone();
        let placed = self.controller.apply(&DockCommand::AddTab {
            tabset,
            tab: pending.tab.clone(),
        });
        self.drag.finish_drop(pending);
        self.pointer = None;

        if placed {
            self.focus = Focus::Tabset(tabset);
            self.status_message = Some(format!("Added {} tab", name));
        } else {
            self.status_message = Some(format!("Could not place {}", name));
        }
        self.revalidate_focus();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        // The first model is built before any panel is rendered
        self.pending
            .push_back(Action::SelectPreset(self.config.default_layout.clone()));
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode() {
            AppMode::Loading => self.loading.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    return self.handle_modal_key_event(&modal, key);
                }
                if self.drag.state().in_drag() {
                    return Ok(self.handle_drag_key_event(key));
                }
                if let Some(action) = self.handle_global_key_event(key) {
                    return Ok(Some(action));
                }

                if !self.on_workspace() {
                    return self.page.handle_key_event(key);
                }
                match self.focus {
                    Focus::Sidebar => self.sidebar.handle_key_event(key),
                    Focus::Border(_) | Focus::Tabset(_) => self.workspace.handle_key_event(key),
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode() == AppMode::Loading || !self.modals.is_empty() {
            return Ok(None);
        }
        let (x, y) = (mouse.column, mouse.row);

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.header.handle_mouse_event(mouse)? {
                    return Ok(Some(action));
                }
                self.pointer = None;
                if let Some(index) = self.sidebar.entry_at(x, y) {
                    self.press = Some(Press::Menu(index));
                    self.sidebar.selected = index;
                    self.focus = Focus::Sidebar;
                    return Ok(None);
                }
                if !self.on_workspace() {
                    return Ok(None);
                }
                match self.workspace.hit(x, y) {
                    Some(WorkspaceHit::Tab { tabset, tab, index }) => {
                        self.press = Some(Press::Tab(tab));
                        self.focus = Focus::Tabset(tabset);
                        Some(Action::Dock(DockCommand::SelectTab { tabset, index }))
                    }
                    Some(WorkspaceHit::Close { tab }) => {
                        Some(Action::Dock(DockCommand::CloseTab { tab }))
                    }
                    Some(WorkspaceHit::BorderTab { border, index }) => {
                        self.focus = Focus::Border(border);
                        Some(Action::Dock(DockCommand::ToggleBorder { border, index }))
                    }
                    Some(WorkspaceHit::Body { tabset }) => Some(Action::FocusTabset(tabset)),
                    None => None,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer = Some((x, y));
                match self.press {
                    Some(Press::Menu(index)) => {
                        self.press = Some(Press::MenuDragged);
                        if self.drag.state().in_drag() {
                            None
                        } else {
                            Some(Action::DragStart(index))
                        }
                    }
                    _ => None,
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let press = self.press.take();
                self.pointer = None;
                let target = if self.on_workspace() {
                    self.workspace.tabset_at(x, y)
                } else {
                    None
                };

                if self.drag.state().in_drag() {
                    Some(match target {
                        Some(tabset) => Action::DropOnTabset(tabset),
                        None => Action::DragEnd,
                    })
                } else {
                    match press {
                        Some(Press::Menu(index)) if self.sidebar.entry_at(x, y) == Some(index) => {
                            Some(Action::MenuClick(index))
                        }
                        Some(Press::Tab(tab)) => {
                            let home = self
                                .model()
                                .and_then(|m| m.tabsets().into_iter().find(|t| t.children.iter().any(|c| c.id == tab)))
                                .map(|t| t.id);
                            match target {
                                Some(to) if Some(to) != home => {
                                    self.focus = Focus::Tabset(to);
                                    Some(Action::Dock(DockCommand::MoveTab { tab, to }))
                                }
                                _ => None,
                            }
                        }
                        _ => None,
                    }
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let action = if mouse.kind == MouseEventKind::ScrollDown {
                    Action::ScrollDown
                } else {
                    Action::ScrollUp
                };
                if !self.on_workspace() {
                    Some(action)
                } else {
                    self.workspace.tabset_at(x, y).map(|tabset| {
                        self.focus = Focus::Tabset(tabset);
                        action
                    })
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode() == AppMode::Loading {
                    self.loading.update(Action::Tick)?;
                }
            }
            Action::ForceQuit => {
                tracing::info!("quit");
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Layout
            // ─────────────────────────────────────────────────────────────────
            Action::SelectPreset(name) => {
                self.controller.select_preset(&name);
                self.workspace.reset_scroll();
                self.revalidate_focus();
                self.status_message = Some(format!("Layout: {}", self.preset_label()));
            }
            Action::ResetLayout => {
                if self.controller.is_initialized() {
                    self.controller.reset();
                    self.workspace.reset_scroll();
                    self.revalidate_focus();
                    self.status_message = Some("Layout reset".to_string());
                }
            }
            Action::Dock(command) => {
                if self.controller.apply(&command) {
                    self.revalidate_focus();
                } else {
                    tracing::debug!(?command, "dock command had no effect");
                }
            }
            Action::NextTab | Action::PrevTab => {
                let forward = action == Action::NextTab;
                return Ok(self.cycle_tab(forward).map(Action::Dock));
            }
            Action::CloseFocusedTab => {
                let selected = self.model().and_then(|model| {
                    let tab = model.tabset(self.focus.tabset()?)?.selected_tab()?;
                    Some((tab.id, tab.name.clone(), tab.closable(&model.global)))
                });
                let Some((tab, name, closable)) = selected else {
                    return Ok(None);
                };
                if !closable {
                    self.status_message = Some(format!("{} cannot be closed", name));
                    return Ok(None);
                }
                return Ok(Some(Action::Dock(DockCommand::CloseTab { tab })));
            }
            Action::MoveFocusedTab => {
                let Some(from) = self.focus.tabset() else {
                    return Ok(None);
                };
                let (Some(tab), Some(to)) = (self.focused_tab(), self.next_tabset(from)) else {
                    return Ok(None);
                };
                self.focus = Focus::Tabset(to);
                return Ok(Some(Action::Dock(DockCommand::MoveTab { tab, to })));
            }
            Action::GrowFocused | Action::ShrinkFocused => {
                let delta = if action == Action::GrowFocused {
                    RESIZE_STEP
                } else {
                    -RESIZE_STEP
                };
                return Ok(self
                    .focus
                    .tabset()
                    .map(|node| Action::Dock(DockCommand::Resize { node, delta })));
            }
            Action::ToggleFocusedBorder => {
                let Focus::Border(border) = self.focus else {
                    return Ok(None);
                };
                let index = self
                    .model()
                    .and_then(|m| m.border(border))
                    .filter(|b| !b.children.is_empty())
                    .map(|b| b.selected.unwrap_or(0));
                return Ok(index.map(|index| Action::Dock(DockCommand::ToggleBorder { border, index })));
            }

            // ─────────────────────────────────────────────────────────────────
            // Focus & Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext | Action::FocusPrev => {
                if let Some(model) = self.controller.current_model() {
                    self.focus = self.focus.cycle(model, action == Action::FocusNext);
                }
            }
            Action::FocusTabset(id) => self.focus = Focus::Tabset(id),
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                if !self.on_workspace() {
                    self.page.update(action)?;
                } else if let (Some(tab), Some(delta)) = (self.focused_tab(), scroll_delta(&action)) {
                    self.workspace.scroll_tab(tab, delta);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Sidebar
            // ─────────────────────────────────────────────────────────────────
            Action::MenuNext | Action::MenuPrev => {
                self.sidebar.update(action)?;
            }
            Action::MenuClick(index) => {
                if let Some(request) = self.drag.click(index) {
                    self.router.navigate(request.path);
                    self.sync_page();
                }
            }
            Action::DragStart(index) => {
                if !self.on_workspace() {
                    self.status_message = Some("Go back to the workspace to add tabs".to_string());
                    return Ok(None);
                }
                if self.drag.drag_start(index) {
                    if let Some(entry) = self.drag.state().dragged_entry() {
                        self.status_message = Some(format!("Dragging {}", entry.name));
                    }
                    // Keyboard drags need a tabset to aim at
                    if self.pointer.is_none() && self.focus == Focus::Sidebar {
                        if let Some(first) = self.model().and_then(|m| m.tabsets().first().map(|t| t.id)) {
                            self.focus = Focus::Tabset(first);
                        }
                    }
                }
            }
            Action::DragEnd => {
                self.drag.drag_end();
                self.pointer = None;
                self.status_message = None;
            }
            Action::DropOnTabset(tabset) => self.drop_on_tabset(tabset),

            // ─────────────────────────────────────────────────────────────────
            // Routing
            // ─────────────────────────────────────────────────────────────────
            Action::NavigateBack => {
                self.router.back();
                self.sync_page();
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenLayoutSelector => {
                self.layout_selector.set_presets(
                    self.controller.selected_preset(),
                    self.controller.registry().presets(),
                );
                self.modals.push(Modal::LayoutSelector {
                    selected_index: self.layout_selector.selected_index,
                });
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => match self.modals.pop() {
                Some(Modal::LayoutSelector { .. }) => {
                    return Ok(self
                        .layout_selector
                        .selected_name()
                        .map(|name| Action::SelectPreset(name.to_string())));
                }
                Some(Modal::QuitConfirm) => return Ok(Some(Action::ForceQuit)),
                _ => {}
            },
            Action::ModalUp | Action::ModalDown => {
                if let Some(Modal::LayoutSelector { selected_index }) = self.modals.top_mut() {
                    *selected_index = self.layout_selector.selected_index;
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.mode() == AppMode::Loading {
            return self.loading.draw(frame, area);
        }

        let layout = calculate_main_layout(area);

        self.header
            .set_context(self.preset_label(), self.router.route().to_string());
        self.header.draw(frame, layout.header)?;

        self.sidebar.focused = self.focus == Focus::Sidebar;
        self.sidebar.set_drag_state(self.drag.state());
        self.sidebar.draw(frame, layout.sidebar)?;

        match (self.router.route(), self.controller.current_model()) {
            (Route::Workspace, Some(model)) => {
                let ctx = WorkspaceRenderContext {
                    model,
                    factory: &self.factory,
                    focus: self.focus,
                    dragging: self.drag.state().dragged_entry(),
                    pointer: self.pointer,
                };
                draw_workspace(frame, layout.content, &mut self.workspace, &ctx)?;
            }
            _ => self.page.draw(frame, layout.content)?,
        }

        self.draw_status_bar(frame, layout.status);
        self.draw_help_bar(frame, layout.help);

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::LayoutSelector { .. } => self.layout_selector.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    /// Keys while a menu entry is being dragged
    fn handle_drag_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::DragEnd),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Tabset(id) => Some(Action::DropOnTabset(id)),
                _ => {
                    self.status_message = Some("Focus a tabset to drop".to_string());
                    None
                }
            },
            _ => None,
        }
    }

    fn handle_global_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('L') => Some(Action::OpenLayoutSelector),
            KeyCode::Char('r') if self.on_workspace() => Some(Action::ResetLayout),
            KeyCode::Tab if self.on_workspace() => Some(Action::FocusNext),
            KeyCode::BackTab if self.on_workspace() => Some(Action::FocusPrev),
            _ => None,
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::LayoutSelector { .. } => self.layout_selector.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }

    fn draw_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        if let Some(entry) = self.drag.state().dragged_entry() {
            spans.push(Span::styled(
                format!(" ⇢ {} ", entry.name),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        if let Some(model) = self.model() {
            let focus = match self.focus {
                Focus::Sidebar => "menu".to_string(),
                Focus::Border(id) => model
                    .border(id)
                    .map(|b| format!("{:?} border", b.location).to_lowercase())
                    .unwrap_or_default(),
                Focus::Tabset(id) => model
                    .tabset(id)
                    .and_then(|t| t.selected_tab())
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| "empty tabset".to_string()),
            };
            spans.push(Span::styled(
                format!(" {} tabs ", model.tabs().len()),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!(" Focus: {} ", focus),
                Style::default().fg(Color::Cyan),
            ));
        }

        if let Some(ref status) = self.status_message {
            spans.push(Span::styled(
                format!(" {} ", status),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };

        let spans = if self.drag.state().in_drag() {
            vec![
                key(" Enter ", Color::Green),
                Span::raw("Drop  "),
                key(" Tab ", Color::Cyan),
                Span::raw("Target  "),
                key(" Esc ", Color::Yellow),
                Span::raw("Cancel"),
            ]
        } else if !self.on_workspace() {
            let back = if self.router.can_go_back() { "Back  " } else { "Workspace  " };
            vec![
                key(" Esc ", Color::Yellow),
                Span::raw(back),
                key(" j/k ", Color::Cyan),
                Span::raw("Scroll  "),
                key(" q ", Color::Yellow),
                Span::raw("Quit"),
            ]
        } else {
            vec![
                key(" q ", Color::Yellow),
                Span::raw("Quit  "),
                key(" ? ", Color::Cyan),
                Span::raw("Help  "),
                key(" L ", Color::Magenta),
                Span::raw("Layout  "),
                key(" Tab ", Color::Cyan),
                Span::raw("Focus  "),
                key(" Space ", Color::Green),
                Span::raw("Drag  "),
                key(" x ", Color::Red),
                Span::raw("Close tab"),
            ]
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
