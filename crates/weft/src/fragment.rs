/*
 * fragment.rs
 * Copyright (c) 2025 Weft developers
 */

//! Template fragments.
//!
//! A fragment is one node in a template: a literal string, a placeholder
//! bound to an accessor, or a repetition of a sub-template over a
//! collection. Fragments are immutable once constructed and owned by the
//! template that contains them.

use std::any::Any;
use std::any::type_name;
use std::borrow::Cow;
use std::fmt::Display;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::accessor::Accessor;
use crate::error::RenderResult;
use crate::scope::Scope;
use crate::template::Template;

/// Scope-dependent expansion of a non-literal fragment.
///
/// Placeholders and repeats are stored type-erased behind this trait so
/// that fragments with different context types can live in one template.
pub(crate) trait Expand: Send + Sync {
    /// Append this fragment's output for the given scope to `out`.
    fn expand(&self, scope: &Scope<'_>, out: &mut String) -> RenderResult<()>;

    /// Append the context type names this fragment requires from an
    /// enclosing scope.
    fn required_contexts(&self, out: &mut Vec<&'static str>);
}

/// One node in a template.
#[derive(Clone)]
pub(crate) enum Fragment {
    /// Literal text, emitted verbatim; never consults the scope.
    Literal(Cow<'static, str>),
    /// A typed placeholder: resolve, project, print.
    Placeholder(Arc<dyn Expand>),
    /// A sub-template rendered once per element of a collection.
    Repeat(Arc<dyn Expand>),
}

/// A placeholder bound to an accessor on context type `C`.
pub(crate) struct Placeholder<C, V: ?Sized> {
    accessor: Accessor<C, V>,
}

impl<C, V> Placeholder<C, V>
where
    C: Any,
    V: Display + ?Sized + 'static,
{
    pub(crate) fn new(accessor: Accessor<C, V>) -> Self {
        Self { accessor }
    }
}

impl<C, V> Expand for Placeholder<C, V>
where
    C: Any,
    V: Display + ?Sized + 'static,
{
    fn expand(&self, scope: &Scope<'_>, out: &mut String) -> RenderResult<()> {
        let context = scope.resolve::<C>()?;
        let value = self.accessor.apply(context);
        // Writing to a String never fails.
        let _ = write!(out, "{value}");
        Ok(())
    }

    fn required_contexts(&self, out: &mut Vec<&'static str>) {
        out.push(type_name::<C>());
    }
}

/// A repetition of `body` over the elements of a collection projected out
/// of context type `C`.
///
/// Each iteration renders the body against a child scope with the element
/// pushed on top, so the body's accessors on the element type resolve to
/// the current element. An empty collection renders nothing.
pub(crate) struct Repeat<C, E> {
    collection: Accessor<C, [E]>,
    body: Template,
}

impl<C, E> Repeat<C, E>
where
    C: Any,
    E: Any,
{
    pub(crate) fn new(collection: Accessor<C, [E]>, body: Template) -> Self {
        Self { collection, body }
    }
}

impl<C, E> Expand for Repeat<C, E>
where
    C: Any,
    E: Any,
{
    fn expand(&self, scope: &Scope<'_>, out: &mut String) -> RenderResult<()> {
        let context = scope.resolve::<C>()?;
        for element in self.collection.apply(context) {
            let iteration = scope.child(element);
            self.body.render_into(&iteration, out)?;
        }
        Ok(())
    }

    fn required_contexts(&self, out: &mut Vec<&'static str>) {
        out.push(type_name::<C>());

        // The body's requirement on the element type is satisfied by the
        // repeat itself; everything else must come from the outer scope.
        let mut body = Vec::new();
        self.body.collect_required(&mut body);
        let element = type_name::<E>();
        out.extend(body.into_iter().filter(|name| *name != element));
    }
}
