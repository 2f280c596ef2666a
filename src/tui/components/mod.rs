//! UI components for the movie listing TUI.
//!
//! Components are stateless or near-stateless renderers. Each takes a view
//! context borrowed from the application model and returns a string.

mod movie_table;
mod notification_bar;
mod review_form;
mod text_fit;

pub use movie_table::{MovieTableComponent, MovieTableViewContext};
pub use notification_bar::NotificationBarComponent;
pub use review_form::{ReviewFormComponent, ReviewFormViewContext};
