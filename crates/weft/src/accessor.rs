/*
 * accessor.rs
 * Copyright (c) 2025 Weft developers
 */

//! Typed accessors: pure projections from a context type to a value.
//!
//! An [`Accessor`] pairs a projection function with the context type it
//! requires. Accessors are created once, at template-definition time, and
//! shared by every render of the template that owns them. The projection is
//! borrowing: it maps `&C` to `&V`, so field access costs nothing and the
//! projected value lives exactly as long as the context it came from.

use std::sync::Arc;

/// A typed projection from a context object of type `C` to a value of type
/// `V`.
///
/// `V` may be unsized, so projections to `str` and to slices work directly:
///
/// ```
/// use weft::{Accessor, field};
///
/// struct Task {
///     description: String,
/// }
///
/// let description: Accessor<Task, str> = field(|t: &Task| t.description.as_str());
/// ```
///
/// Whether `V` must be printable (`Display`) or iterable (`[E]`) is decided
/// where the accessor is used: [`Template::slot`](crate::Template::slot)
/// requires the former, [`Template::repeat`](crate::Template::repeat) the
/// latter. A projection to a value that is neither simply has no use site.
pub struct Accessor<C: ?Sized, V: ?Sized> {
    project: Arc<dyn for<'a> Fn(&'a C) -> &'a V + Send + Sync>,
}

impl<C: ?Sized, V: ?Sized> Clone for Accessor<C, V> {
    fn clone(&self) -> Self {
        Self {
            project: Arc::clone(&self.project),
        }
    }
}

impl<C: ?Sized, V: ?Sized> Accessor<C, V> {
    /// Apply the projection to a resolved context object.
    pub(crate) fn apply<'a>(&self, context: &'a C) -> &'a V {
        (self.project)(context)
    }
}

/// Build an accessor from a projection function.
///
/// The projection must be pure: applying it twice to equal contexts yields
/// equal values. Field accesses (`|c: &Ctx| &c.total`) and borrowing getters
/// (`|c: &Ctx| c.items.as_slice()`) are the intended shapes.
pub fn field<C, V, F>(project: F) -> Accessor<C, V>
where
    C: ?Sized,
    V: ?Sized,
    F: for<'a> Fn(&'a C) -> &'a V + Send + Sync + 'static,
{
    Accessor {
        project: Arc::new(project),
    }
}
