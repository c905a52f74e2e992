//! Editing functions from the outside: what they receive and what they produce.
use std::fmt;
use std::rc::Rc;

use crate::{EditResult, Editor};

/// A shared function value from `A` to `B`.
///
/// Calling it can fail if an edit applied to it fails on the values flowing through it.
///
/// A `Func` is not `Send`: [`Ret`] and [`Arg`] capture the part transformation inside it, and
/// part transformations are not required to be thread-safe. Every other editor is `Send + Sync`
/// when its parameters are.
pub struct Func<A, B>(Rc<dyn Fn(A) -> EditResult<B>>);

impl<A, B> Func<A, B> {
    pub fn new(f: impl Fn(A) -> B + 'static) -> Func<A, B> {
        Func(Rc::new(move |a: A| -> EditResult<B> { Ok(f(a)) }))
    }

    pub fn try_new(f: impl Fn(A) -> EditResult<B> + 'static) -> Func<A, B> {
        Func(Rc::new(f))
    }

    pub fn call(&self, a: A) -> EditResult<B> {
        (self.0)(a)
    }
}

// #26925
impl<A, B> Clone for Func<A, B> {
    fn clone(&self) -> Self {
        Func(self.0.clone())
    }
}

impl<A, B> fmt::Debug for Func<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Func({:p})", Rc::as_ptr(&self.0))
    }
}

/// Edits the result of a function: `ret` turns `f` into `g ↦ f ∘ g`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Ret;

pub fn ret() -> Ret {
    Ret
}

impl<A: 'static, B: 'static> Editor<Func<A, B>, B> for Ret {
    fn try_edit<F>(&self, g: Func<A, B>, f: &F) -> EditResult<Func<A, B>>
    where
        F: Fn(B) -> EditResult<B> + Clone + 'static,
    {
        let f = f.clone();
        Ok(Func::try_new(move |a| f(g.call(a)?)))
    }
}

/// Edits the argument of a function: `arg` turns `f` into `g ↦ g ∘ f`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Arg;

pub fn arg() -> Arg {
    Arg
}

impl<A: 'static, B: 'static> Editor<Func<A, B>, A> for Arg {
    fn try_edit<F>(&self, g: Func<A, B>, f: &F) -> EditResult<Func<A, B>>
    where
        F: Fn(A) -> EditResult<A> + Clone + 'static,
    {
        let f = f.clone();
        Ok(Func::try_new(move |a| g.call(f(a)?)))
    }
}
