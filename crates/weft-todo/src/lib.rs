//! weft-todo: example task-tracking web application.
//!
//! Demonstrates the weft template engine end to end:
//! - page templates are composed once at startup and held by the
//!   application context (no global template state);
//! - each request builds a fresh scope, pushes the shared chrome context
//!   and then the page-specific context, and renders;
//! - the task store hands back scalar counts and iterable rows, which is
//!   all the templates need from persistence.

pub mod context;
pub mod error;
pub mod pages;
pub mod server;
pub mod store;

pub use context::{AppConfig, AppContext, SharedContext};
pub use error::{Error, Result};
pub use store::{Task, TaskStore};
