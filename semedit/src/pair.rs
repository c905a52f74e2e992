use crate::{EditResult, Editor};

/// Edits the first component of a pair.
#[derive(Copy, Clone, Debug, Default)]
pub struct Left;

/// Edits the second component of a pair.
#[derive(Copy, Clone, Debug, Default)]
pub struct Right;

pub fn left() -> Left {
    Left
}

pub fn right() -> Right {
    Right
}

impl<A, B> Editor<(A, B), A> for Left {
    fn try_edit<F>(&self, (a, b): (A, B), f: &F) -> EditResult<(A, B)>
    where
        F: Fn(A) -> EditResult<A> + Clone + 'static,
    {
        Ok((f(a)?, b))
    }
}

impl<A, B> Editor<(A, B), B> for Right {
    fn try_edit<F>(&self, (a, b): (A, B), f: &F) -> EditResult<(A, B)>
    where
        F: Fn(B) -> EditResult<B> + Clone + 'static,
    {
        Ok((a, f(b)?))
    }
}
