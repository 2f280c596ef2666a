//! Terminal User Interface for browsing movies and submitting reviews.
//!
//! This module provides an interactive TUI for listing movies from the
//! catalogue service, sorting them and submitting a short review for the
//! selected movie, using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::MovieApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Network calls, the companies retry and notification expiry are all
//! commands: futures that resolve into an [`messages::AppMsg`] which is fed
//! back into `update()`.
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Sort, draft, notification and retry state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, collaborators and settings are handed over through module-level
//! storage. Call [`set_app_services`] and [`set_app_settings`] before
//! starting the program; `MovieApp::init()` reads them back, falling back to
//! an unconfigured catalogue, the simulated submitter and default settings.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod settings;
pub mod state;
mod storage;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use app::MovieApp;
pub(crate) use settings::get_app_settings;
pub use settings::{AppSettings, set_app_settings};
pub(crate) use storage::{get_app_services, get_initial_terminal_size};
pub use storage::{AppServices, set_app_services, set_initial_terminal_size};
