//! In-app router
//!
//! Tracks the current route and a back stack. The workspace is the home
//! route; `/workspace/<tag>` shows a single panel full-screen.

use std::fmt;

const WORKSPACE: &str = "/workspace";

/// Routes kept on the back stack
const MAX_HISTORY: usize = 32;

/// A parsed route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The tiled workspace
    Workspace,
    /// One panel, by component tag
    Panel(String),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() || trimmed == WORKSPACE {
            return Route::Workspace;
        }
        match trimmed.strip_prefix("/workspace/") {
            Some(tag) if !tag.is_empty() && !tag.contains('/') => Route::Panel(tag.to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Workspace => write!(f, "{}", WORKSPACE),
            Route::Panel(tag) => write!(f, "{}/{}", WORKSPACE, tag),
            Route::NotFound(path) => write!(f, "{}", path),
        }
    }
}

#[derive(Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Workspace,
            history: Vec::new(),
        }
    }

    /// Go to `path`, pushing the current route onto the back stack
    ///
    /// Navigating to the route already shown does nothing. Going home to the
    /// workspace clears the stack, and the stack never holds more than
    /// `MAX_HISTORY` routes.
    pub fn navigate(&mut self, path: &str) -> &Route {
        let route = Route::parse(path);
        if route != self.current {
            tracing::info!(from = %self.current, to = %route, "navigate");
            let previous = std::mem::replace(&mut self.current, route);
            if self.current == Route::Workspace {
                self.history.clear();
            } else {
                if self.history.len() == MAX_HISTORY {
                    self.history.remove(0);
                }
                self.history.push(previous);
            }
        }
        &self.current
    }

    /// Return to the previous route, if any
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!(to = %previous, "navigate back");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
