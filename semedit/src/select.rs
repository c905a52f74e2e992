//! Editors that select positions in a [`Sequence`].
use std::num::NonZeroUsize;

use tracing::trace;

use crate::{EditError, EditResult, Editor, Sequence};

/// Edits the element at a fixed position. Fails with [`EditError::IndexOutOfRange`] past the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Index(pub usize);

pub fn index(i: usize) -> Index {
    Index(i)
}

impl<S: Sequence> Editor<S, S::Item> for Index {
    fn try_edit<F>(&self, whole: S, f: &F) -> EditResult<S>
    where
        F: Fn(S::Item) -> EditResult<S::Item> + Clone + 'static,
    {
        whole.try_edit_at(self.0, f)
    }
}

/// Edits the first element, if any.
#[derive(Copy, Clone, Debug, Default)]
pub struct First;

pub fn first() -> First {
    First
}

impl<S: Sequence> Editor<S, S::Item> for First {
    fn try_edit<F>(&self, whole: S, f: &F) -> EditResult<S>
    where
        F: Fn(S::Item) -> EditResult<S::Item> + Clone + 'static,
    {
        if whole.is_empty() {
            return Ok(whole);
        }
        whole.try_edit_at(0, f)
    }
}

/// Edits the last element, if any.
#[derive(Copy, Clone, Debug, Default)]
pub struct Last;

pub fn last() -> Last {
    Last
}

impl<S: Sequence> Editor<S, S::Item> for Last {
    fn try_edit<F>(&self, whole: S, f: &F) -> EditResult<S>
    where
        F: Fn(S::Item) -> EditResult<S::Item> + Clone + 'static,
    {
        match whole.len() {
            0 => Ok(whole),
            len => whole.try_edit_at(len - 1, f),
        }
    }
}

/// Edits every element of a container.
///
/// This is how an editor on `T` is lifted to an editor on all the `T`s in a `Vec<T>`,
/// an `Option<T>`, etc.
#[derive(Copy, Clone, Debug, Default)]
pub struct Every;

pub fn every() -> Every {
    Every
}

impl<S: Sequence> Editor<S, S::Item> for Every {
    fn try_edit<F>(&self, whole: S, f: &F) -> EditResult<S>
    where
        F: Fn(S::Item) -> EditResult<S::Item> + Clone + 'static,
    {
        whole.try_map_indexed(|_, item| f(item))
    }
}

/// Edits every element satisfying a predicate.
#[derive(Copy, Clone, Debug)]
pub struct Matching<P>(P);

pub fn matching<P>(predicate: P) -> Matching<P> {
    Matching(predicate)
}

impl<S, P> Editor<S, S::Item> for Matching<P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    fn try_edit<F>(&self, whole: S, f: &F) -> EditResult<S>
    where
        F: Fn(S::Item) -> EditResult<S::Item> + Clone + 'static,
    {
        whole.try_map_indexed(|_, item| if (self.0)(&item) { f(item) } else { Ok(item) })
    }
}

/// Edits the elements at positions `0, n, 2n, ...`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stride(NonZeroUsize);

/// Fails with [`EditError::InvalidStride`] if `n` is zero.
pub fn on_every(n: usize) -> EditResult<Stride> {
    match NonZeroUsize::new(n) {
        Some(n) => Ok(Stride(n)),
        None => {
            trace!(n, "invalid stride");
            Err(EditError::InvalidStride)
        }
    }
}

impl Stride {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl<S: Sequence> Editor<S, S::Item> for Stride {
    fn try_edit<F>(&self, whole: S, f: &F) -> EditResult<S>
    where
        F: Fn(S::Item) -> EditResult<S::Item> + Clone + 'static,
    {
        let n = self.get();
        whole.try_map_indexed(|i, item| if i % n == 0 { f(item) } else { Ok(item) })
    }
}
