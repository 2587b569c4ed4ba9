/*
 * template.rs
 * Copyright (c) 2025 Weft developers
 */

//! Template composition and rendering.
//!
//! A [`Template`] is an ordered sequence of fragments, built with an
//! explicit combinator API and sealed thereafter. Concatenation is
//! associative and order-preserving; the required context set of a
//! concatenation is the union of the operands' sets.

use std::any::Any;
use std::borrow::Cow;
use std::fmt::Display;
use std::sync::Arc;

use crate::accessor::Accessor;
use crate::error::RenderResult;
use crate::fragment::{Fragment, Placeholder, Repeat};
use crate::scope::Scope;

/// An immutable, reusable sequence of fragments.
///
/// Templates are data, independent of any scope: build them once at process
/// start, hold them in the hosting application, and render them arbitrarily
/// many times, concurrently if needed. Cloning is cheap (non-literal
/// fragments are reference-counted).
#[derive(Clone, Default)]
pub struct Template {
    fragments: Vec<Fragment>,
}

impl Template {
    /// The empty template. Renders to `""` against any scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-fragment template holding literal text.
    ///
    /// An empty literal is legal and renders to nothing.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new().text(text)
    }

    /// Concatenate any number of templates in order.
    ///
    /// An empty iterator yields the empty template.
    pub fn concat(parts: impl IntoIterator<Item = Template>) -> Self {
        let mut fragments = Vec::new();
        for part in parts {
            fragments.extend(part.fragments);
        }
        Self { fragments }
    }

    /// Append literal text.
    pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.fragments.push(Fragment::Literal(text.into()));
        self
    }

    /// Append a placeholder for an accessor.
    ///
    /// At render time the accessor's context type `C` is resolved in the
    /// scope and the projected value is emitted in its `Display` form:
    /// numbers as decimal text, strings verbatim, no escaping.
    pub fn slot<C, V>(mut self, accessor: Accessor<C, V>) -> Self
    where
        C: Any,
        V: Display + ?Sized + 'static,
    {
        self.fragments
            .push(Fragment::Placeholder(Arc::new(Placeholder::new(accessor))));
        self
    }

    /// Append a repetition of `body` over the collection projected by
    /// `collection`.
    ///
    /// The element type of the collection is what `body`'s element
    /// accessors must require; each iteration renders `body` against the
    /// enclosing scope with the current element pushed on top. Iteration
    /// follows source order. An empty collection renders nothing.
    pub fn repeat<C, E>(mut self, collection: Accessor<C, [E]>, body: Template) -> Self
    where
        C: Any,
        E: Any,
    {
        self.fragments
            .push(Fragment::Repeat(Arc::new(Repeat::new(collection, body))));
        self
    }

    /// Concatenate another template after this one.
    pub fn then(mut self, other: Template) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    /// Render this template against a scope.
    ///
    /// All-or-nothing: either the complete output is returned, or the first
    /// unresolvable context aborts the render with an error and no output.
    pub fn render(&self, scope: &Scope<'_>) -> RenderResult<String> {
        let mut out = String::new();
        self.render_into(scope, &mut out)?;
        Ok(out)
    }

    /// Render into an existing buffer. Used for repeat bodies, where all
    /// iterations share the render's output buffer.
    pub(crate) fn render_into(&self, scope: &Scope<'_>, out: &mut String) -> RenderResult<()> {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(text) => out.push_str(text),
                Fragment::Placeholder(node) | Fragment::Repeat(node) => node.expand(scope, out)?,
            }
        }
        Ok(())
    }

    /// The set of context type names this template requires from a scope,
    /// sorted and deduplicated.
    ///
    /// A repeat contributes the context of its collection accessor plus its
    /// body's requirements, minus the element type the repeat itself
    /// supplies.
    pub fn required_contexts(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.collect_required(&mut names);
        names.sort_unstable();
        names.dedup();
        names
    }

    pub(crate) fn collect_required(&self, out: &mut Vec<&'static str>) {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(_) => {}
                Fragment::Placeholder(node) | Fragment::Repeat(node) => node.required_contexts(out),
            }
        }
    }
}
