/*
 * lib.rs
 * Copyright (c) 2025 Weft developers
 */

//! Typed template composition and scoped rendering.
//!
//! This crate lets an application build text templates out of literal
//! fragments and typed placeholders bound to accessor functions on arbitrary
//! context types, then resolve those placeholders at render time against a
//! stack of context objects (a [`Scope`]) pushed in caller-chosen order.
//!
//! Templates are built once (typically at process start) with an explicit
//! combinator API and are immutable afterwards; they are cheap to clone and
//! safe to render concurrently. Scopes are built fresh per render and
//! discarded afterwards. Rendering is a pure function of the template and
//! the scope contents: it either produces the complete output string or
//! fails with [`RenderError::MissingContext`] — there is no partial output
//! and no silent empty-string substitution.
//!
//! Output is spliced literally: numbers render in their decimal form,
//! strings verbatim. There is no HTML escaping and no expression language.
//!
//! # Example
//!
//! ```
//! use weft::{Scope, Template, field};
//!
//! struct Greeting {
//!     name: String,
//! }
//!
//! let template = Template::literal("Hello, ")
//!     .slot(field(|g: &Greeting| g.name.as_str()))
//!     .text("!");
//!
//! let greeting = Greeting { name: "World".to_string() };
//! let mut scope = Scope::new();
//! scope.push(&greeting);
//!
//! assert_eq!(template.render(&scope)?, "Hello, World!");
//! # Ok::<(), weft::RenderError>(())
//! ```

pub mod accessor;
pub mod error;
pub mod fragment;
pub mod scope;
pub mod template;

// Re-export main types at crate root
pub use accessor::{Accessor, field};
pub use error::{RenderError, RenderResult};
pub use scope::Scope;
pub use template::Template;
