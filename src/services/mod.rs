//! Services the UI talks to
//!
//! - In-app routing between the workspace and full-screen panels

pub mod router;

pub use router::{Route, Router};
