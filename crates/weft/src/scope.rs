/*
 * scope.rs
 * Copyright (c) 2025 Weft developers
 */

//! Per-render context stacks.
//!
//! A [`Scope`] is an ordered stack of borrowed context objects, each tagged
//! with its concrete type. Placeholders resolve the context type they need
//! by scanning the stack from the most recent push to the oldest, so a more
//! recently pushed object shadows an earlier one of the same type.
//!
//! Scopes are single-use: build one per render call, push contexts
//! outer-to-inner, render, discard. They are never shared across threads.

use std::any::Any;
use std::any::type_name;

use crate::error::{RenderError, RenderResult};

/// One pushed context object together with its type tag.
#[derive(Clone, Copy)]
struct Frame<'a> {
    value: &'a dyn Any,
    type_name: &'static str,
}

/// An ordered stack of context objects used to resolve accessors by type.
#[derive(Default)]
pub struct Scope<'a> {
    frames: Vec<Frame<'a>>,
}

impl<'a> Scope<'a> {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a context object onto the top of the stack.
    ///
    /// The scope borrows the object for the duration of the render; nothing
    /// is copied. A later push of the same type shadows this one.
    pub fn push<C: Any>(&mut self, context: &'a C) {
        self.frames.push(Frame {
            value: context,
            type_name: type_name::<C>(),
        });
    }

    /// [`push`](Self::push) as a chainable builder step.
    pub fn with<C: Any>(mut self, context: &'a C) -> Self {
        self.push(context);
        self
    }

    /// Find the most recently pushed context object of type `C`.
    pub fn resolve<C: Any>(&self) -> RenderResult<&'a C> {
        for frame in self.frames.iter().rev() {
            let value: &'a dyn Any = frame.value;
            if let Some(context) = value.downcast_ref::<C>() {
                return Ok(context);
            }
        }
        Err(RenderError::MissingContext {
            type_name: type_name::<C>(),
        })
    }

    /// The scope for one repeat iteration: this scope with the element
    /// pushed on top. The element is read-only for the duration of that
    /// iteration's render and does not leak into sibling iterations.
    pub(crate) fn child<E: Any>(&self, element: &'a E) -> Scope<'a> {
        let mut frames = self.frames.clone();
        frames.push(Frame {
            value: element,
            type_name: type_name::<E>(),
        });
        Scope { frames }
    }

    /// Names of the pushed context types, bottom to top.
    pub fn context_types(&self) -> Vec<&'static str> {
        self.frames.iter().map(|frame| frame.type_name).collect()
    }
}
