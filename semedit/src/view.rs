//! Editing a value through a derived ("virtual") representation of it.
//!
//! A view is a pair of conversions `to: T -> V` and `from: V -> T`. The edited value is
//! `from(f(to(x)))`: the `V` only exists for the duration of the edit.
//!
//! Views must round-trip: `from(to(x)) == x` for every `x`. This is not checked; a view that
//! breaks it makes the identity edit change the value.
use tracing::trace;

use crate::{EditError, EditResult, Editor};

/// Editor through a pair of mutually inverse conversions.
#[derive(Copy, Clone, Debug)]
pub struct View<Fwd, Bwd> {
    to: Fwd,
    from: Bwd,
}

pub fn view<Fwd, Bwd>(to: Fwd, from: Bwd) -> View<Fwd, Bwd> {
    View { to, from }
}

impl<T, V, Fwd, Bwd> Editor<T, V> for View<Fwd, Bwd>
where
    Fwd: Fn(T) -> V,
    Bwd: Fn(V) -> T,
{
    fn try_edit<F>(&self, whole: T, f: &F) -> EditResult<T>
    where
        F: Fn(V) -> EditResult<V> + Clone + 'static,
    {
        Ok((self.from)(f((self.to)(whole))?))
    }
}

/// Like [`View`], for views that can represent values with no counterpart in `T`.
///
/// Fails with [`EditError::OutsideView`] if the edited view has no counterpart.
#[derive(Copy, Clone, Debug)]
pub struct PartialView<Fwd, Bwd> {
    to: Fwd,
    from: Bwd,
}

pub fn partial_view<Fwd, Bwd>(to: Fwd, from: Bwd) -> PartialView<Fwd, Bwd> {
    PartialView { to, from }
}

impl<T, V, Fwd, Bwd> Editor<T, V> for PartialView<Fwd, Bwd>
where
    Fwd: Fn(T) -> V,
    Bwd: Fn(V) -> Option<T>,
{
    fn try_edit<F>(&self, whole: T, f: &F) -> EditResult<T>
    where
        F: Fn(V) -> EditResult<V> + Clone + 'static,
    {
        (self.from)(f((self.to)(whole))?).ok_or_else(|| {
            trace!("edited view has no counterpart");
            EditError::OutsideView
        })
    }
}

/// A character through its code point.
pub fn as_code() -> PartialView<fn(char) -> u32, fn(u32) -> Option<char>> {
    partial_view(
        u32::from as fn(char) -> u32,
        char::from_u32 as fn(u32) -> Option<char>,
    )
}

/// Types with a lossless bit-level representation.
pub trait BitPattern: Sized {
    type Bits;
    fn to_bit_pattern(self) -> Self::Bits;
    fn from_bit_pattern(bits: Self::Bits) -> Self;
}

macro_rules! impl_bit_pattern {
    ($t:ty => $bits:ty, $to:expr, $from:expr) => {
        impl BitPattern for $t {
            type Bits = $bits;
            fn to_bit_pattern(self) -> $bits {
                $to(self)
            }
            fn from_bit_pattern(bits: $bits) -> $t {
                $from(bits)
            }
        }
    };
}

impl_bit_pattern!(f32 => u32, f32::to_bits, f32::from_bits);
impl_bit_pattern!(f64 => u64, f64::to_bits, f64::from_bits);
impl_bit_pattern!(i8 => u8, |x: i8| x as u8, |b: u8| b as i8);
impl_bit_pattern!(i16 => u16, |x: i16| x as u16, |b: u16| b as i16);
impl_bit_pattern!(i32 => u32, |x: i32| x as u32, |b: u32| b as i32);
impl_bit_pattern!(i64 => u64, |x: i64| x as u64, |b: u64| b as i64);

/// A number through its bit pattern.
pub fn as_bits<T: BitPattern>() -> View<fn(T) -> T::Bits, fn(T::Bits) -> T> {
    view(
        T::to_bit_pattern as fn(T) -> T::Bits,
        T::from_bit_pattern as fn(T::Bits) -> T,
    )
}

/// A vector through its reverse, so that e.g. `reversed().then(first())` edits the last element.
pub fn reversed<T>() -> View<fn(Vec<T>) -> Vec<T>, fn(Vec<T>) -> Vec<T>> {
    fn reverse<T>(mut v: Vec<T>) -> Vec<T> {
        v.reverse();
        v
    }
    view(reverse::<T> as fn(Vec<T>) -> Vec<T>, reverse::<T>)
}
