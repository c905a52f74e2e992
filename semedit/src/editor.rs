use std::marker::PhantomData;

use crate::{EditError, EditResult};

/// Trait implemented by editor types, which turn a transformation of some "part" of type `P`
/// into a transformation of a "whole" of type `W` containing it.
///
/// The part transformation `f` is fallible so that failures of nested editors surface through
/// the outer ones. It must be `Clone + 'static` because some editors (see [`Ret`](crate::Ret))
/// store it inside the value they return.
///
/// Editors take the whole by value and return the edited whole. Keep a clone around if you need
/// the original afterwards.
pub trait Editor<W, P> {
    fn try_edit<F>(&self, whole: W, f: &F) -> EditResult<W>
    where
        F: Fn(P) -> EditResult<P> + Clone + 'static;
}

/// Methods for applying and composing editors.
///
/// The trait carries no whole/part parameters: editors like [`index`](crate::index) are generic
/// over the container they edit, and that type is only known once the path is applied to a
/// value.
pub trait EditorExt: Sized {
    /// Applies an infallible part transformation.
    fn edit<W, P, F>(&self, whole: W, f: F) -> EditResult<W>
    where
        Self: Editor<W, P>,
        F: Fn(P) -> P + Clone + 'static,
    {
        self.try_edit(whole, &move |part: P| -> EditResult<P> { Ok(f(part)) })
    }

    /// Replaces the part with a fixed value.
    fn set<W, P>(&self, whole: W, value: P) -> EditResult<W>
    where
        Self: Editor<W, P>,
        P: Clone + 'static,
    {
        self.edit(whole, move |_: P| value.clone())
    }

    /// Editor composition: first go into the part targeted by `self`, then into the part of it
    /// targeted by `inner`.
    fn then<K, M>(self, inner: K) -> Then<Self, K, M> {
        Then(self, inner, PhantomData)
    }
}

impl<E> EditorExt for E {}

/// Identity editor: the part is the whole.
#[derive(Copy, Clone, Debug, Default)]
pub struct Id;

impl<W> Editor<W, W> for Id {
    fn try_edit<F>(&self, whole: W, f: &F) -> EditResult<W>
    where
        F: Fn(W) -> EditResult<W> + Clone + 'static,
    {
        f(whole)
    }
}

/// Editor composition: combines `Editor<W, M>` and `Editor<M, P>` into `Editor<W, P>`.
#[derive(Debug)]
pub struct Then<A, B, M>(pub A, pub B, pub PhantomData<fn() -> M>);

// #26925
impl<A: Clone, B: Clone, M> Clone for Then<A, B, M> {
    fn clone(&self) -> Self {
        Then(self.0.clone(), self.1.clone(), PhantomData)
    }
}

impl<A: Copy, B: Copy, M> Copy for Then<A, B, M> {}

impl<W, M, P, A, B> Editor<W, P> for Then<A, B, M>
where
    A: Editor<W, M>,
    B: Editor<M, P> + Clone + 'static,
{
    fn try_edit<F>(&self, whole: W, f: &F) -> EditResult<W>
    where
        F: Fn(P) -> EditResult<P> + Clone + 'static,
    {
        let inner = self.1.clone();
        let f = f.clone();
        self.0
            .try_edit(whole, &move |part: M| -> EditResult<M> { inner.try_edit(part, &f) })
    }
}

/// Function form of [`EditorExt::then`].
pub fn compose<A, B, M>(outer: A, inner: B) -> Then<A, B, M> {
    Then(outer, inner, PhantomData)
}

/// Turns an editor and a part transformation into a reusable whole transformation.
pub fn apply<W, P, E, F>(editor: E, f: F) -> impl Fn(W) -> EditResult<W>
where
    E: Editor<W, P>,
    F: Fn(P) -> P + Clone + 'static,
{
    move |whole| editor.edit(whole, f.clone())
}

/// Like [`apply`], for a part transformation that can fail.
pub fn try_apply<W, P, E, F>(editor: E, f: F) -> impl Fn(W) -> EditResult<W>
where
    E: Editor<W, P>,
    F: Fn(P) -> Result<P, EditError> + Clone + 'static,
{
    move |whole| editor.try_edit(whole, &f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{every, index, left, right};

    #[test]
    fn identity_is_a_noop() {
        assert_eq!(Id.edit(42, |x: i32| x + 1), Ok(43));
        assert_eq!(index(1).edit(vec![1, 2, 3], |x| x), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn composition_matches_manual_nesting() {
        let by_hand = {
            let (a, (b, c)) = (1, (2, 3));
            (a, (b, c * 10))
        };
        let composed = right().then(right()).edit((1, (2, 3)), |c: i32| c * 10);
        assert_eq!(composed, Ok(by_hand));
    }

    #[test]
    fn generic_editors_compose_with_then() {
        let nested = vec![vec![1, 2], vec![3, 4], vec![5, 6, 7, 8, 9], vec![10, 11]];
        let by_method = index(2).then(index(3)).edit(nested.clone(), |x: i32| x + 100);
        let by_function = compose(index(2), index(3)).edit(nested, |x: i32| x + 100);
        assert_eq!(by_method, by_function);
        assert_eq!(by_method.unwrap()[2], vec![5, 6, 7, 108, 9]);

        let shape = index(0).then(every()).then(right());
        assert_eq!(
            shape.edit(vec![vec![(1, 'a'), (2, 'b')]], |c: char| c.to_ascii_uppercase()),
            Ok(vec![vec![(1, 'A'), (2, 'B')]])
        );
    }

    #[test]
    fn identity_is_a_unit_of_composition() {
        let w = ((1, 2), 3);
        let plain = left().then(left()).edit(w, |x: i32| x - 5);
        let with_id = Id.then(left()).then(Id).then(left()).then(Id).edit(w, |x: i32| x - 5);
        assert_eq!(plain, with_id);
    }

    #[test]
    fn set_replaces_the_part() {
        assert_eq!(right().set((1, "a"), "b"), Ok((1, "b")));
    }

    #[test]
    fn apply_is_reusable() {
        let add100 = apply(index(2), |x: i32| x + 100);
        assert_eq!(add100(vec![1, 2, 3, 4, 5]), Ok(vec![1, 2, 103, 4, 5]));
        assert_eq!(add100(vec![0, 0, 0]), Ok(vec![0, 0, 100]));
        assert_eq!(
            add100(vec![]),
            Err(EditError::IndexOutOfRange { index: 2, len: 0 })
        );
    }

    #[test]
    fn failing_part_transformation_propagates() {
        let halve = try_apply(left(), |x: i32| {
            if x % 2 == 0 {
                Ok(x / 2)
            } else {
                Err(EditError::OutsideView)
            }
        });
        assert_eq!(halve((4, ())), Ok((2, ())));
        assert_eq!(halve((3, ())), Err(EditError::OutsideView));
    }
}
