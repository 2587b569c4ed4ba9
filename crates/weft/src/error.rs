/*
 * error.rs
 * Copyright (c) 2025 Weft developers
 */

//! Error types for template rendering.

use thiserror::Error;

/// Errors that can occur while rendering a template.
///
/// Rendering is all-or-nothing: when an error is returned, no output is
/// produced. A rendering error indicates a template/scope mismatch and
/// should be treated as a programming error by the caller, not a transient
/// fault to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A placeholder or repeat required a context type that no object in
    /// the scope matched.
    #[error("no context of type `{type_name}` in scope")]
    MissingContext {
        /// Name of the context type that could not be resolved.
        type_name: &'static str,
    },
}

/// Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
