//! Support modules for the movie listing BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use state::{ListingState, ensure_runtime_and_server, mount_catalogue};
