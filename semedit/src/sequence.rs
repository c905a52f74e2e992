//! Positional containers.
use std::collections::VecDeque;

use tracing::trace;

use crate::{EditError, EditResult};

/// Trait to edit different kinds of positional containers generically.
///
/// Elements are addressed by zero-based position. `Option<T>` is a sequence of length zero or
/// one, and `String` is a sequence of `char`s.
pub trait Sequence: Sized {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rebuilds the sequence, passing every element and its position through `f`.
    ///
    /// Stops at the first error.
    fn try_map_indexed<F>(self, f: F) -> EditResult<Self>
    where
        F: FnMut(usize, Self::Item) -> EditResult<Self::Item>;

    /// Replaces the element at `index` with `f(element)`.
    fn try_edit_at<F>(self, index: usize, f: F) -> EditResult<Self>
    where
        F: FnOnce(Self::Item) -> EditResult<Self::Item>,
    {
        check_bounds(index, self.len())?;
        let mut f = Some(f);
        self.try_map_indexed(|i, item| {
            if i == index {
                if let Some(edit) = f.take() {
                    return edit(item);
                }
            }
            Ok(item)
        })
    }
}

pub(crate) fn check_bounds(index: usize, len: usize) -> EditResult<()> {
    if index < len {
        Ok(())
    } else {
        trace!(index, len, "index out of range");
        Err(EditError::IndexOutOfRange { index, len })
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn try_map_indexed<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(usize, T) -> EditResult<T>,
    {
        self.into_iter()
            .enumerate()
            .map(|(i, item)| f(i, item))
            .collect()
    }

    fn try_edit_at<F>(mut self, index: usize, f: F) -> EditResult<Self>
    where
        F: FnOnce(T) -> EditResult<T>,
    {
        check_bounds(index, self.len())?;
        // only the tail after `index` is moved
        let mut tail = self.split_off(index).into_iter();
        if let Some(item) = tail.next() {
            self.push(f(item)?);
        }
        self.extend(tail);
        Ok(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn try_map_indexed<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(usize, T) -> EditResult<T>,
    {
        self.into_iter()
            .enumerate()
            .map(|(i, item)| f(i, item))
            .collect()
    }
}

impl Sequence for String {
    type Item = char;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }

    fn try_map_indexed<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(usize, char) -> EditResult<char>,
    {
        self.chars().enumerate().map(|(i, c)| f(i, c)).collect()
    }
}

impl<T> Sequence for Option<T> {
    type Item = T;

    fn len(&self) -> usize {
        usize::from(self.is_some())
    }

    fn try_map_indexed<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(usize, T) -> EditResult<T>,
    {
        self.map(|item| f(0, item)).transpose()
    }
}

#[cfg(feature = "imbl")]
impl<T: Clone> Sequence for imbl::Vector<T> {
    type Item = T;

    fn len(&self) -> usize {
        imbl::Vector::len(self)
    }

    fn try_map_indexed<F>(self, mut f: F) -> EditResult<Self>
    where
        F: FnMut(usize, T) -> EditResult<T>,
    {
        self.into_iter()
            .enumerate()
            .map(|(i, item)| f(i, item))
            .collect()
    }

    fn try_edit_at<F>(mut self, index: usize, f: F) -> EditResult<Self>
    where
        F: FnOnce(T) -> EditResult<T>,
    {
        check_bounds(index, self.len())?;
        // unedited nodes stay shared with other clones of this vector
        let item = self[index].clone();
        self.set(index, f(item)?);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_edit_at() {
        let v = vec![1, 2, 3, 4, 5];
        assert_eq!(v.clone().try_edit_at(0, |x| Ok(x * 10)), Ok(vec![10, 2, 3, 4, 5]));
        assert_eq!(v.clone().try_edit_at(4, |x| Ok(x * 10)), Ok(vec![1, 2, 3, 4, 50]));
        assert_eq!(
            v.try_edit_at(5, |x| Ok(x * 10)),
            Err(EditError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn deque_edit_at_uses_default() {
        let d: VecDeque<_> = vec!['a', 'b', 'c'].into();
        let d = d.try_edit_at(1, |c| Ok(c.to_ascii_uppercase())).unwrap();
        assert_eq!(d.into_iter().collect::<String>(), "aBc");
    }

    #[test]
    fn string_positions_are_chars() {
        let s = "héllo".to_string();
        assert_eq!(Sequence::len(&s), 5);
        assert_eq!(s.try_edit_at(4, |_| Ok('!')), Ok("héll!".to_string()));
    }

    #[test]
    fn option_is_a_short_sequence() {
        assert_eq!(Sequence::len(&Some(1)), 1);
        assert_eq!(None::<i32>.try_map_indexed(|_, x| Ok(x + 1)), Ok(None));
        assert_eq!(Some(1).try_map_indexed(|i, x| Ok(x + i as i32 + 1)), Ok(Some(2)));
    }

    #[test]
    fn map_stops_at_first_error() {
        let mut seen = Vec::new();
        let result = vec![1, 2, 3].try_map_indexed(|i, x| {
            seen.push(i);
            if x == 2 {
                Err(EditError::OutsideView)
            } else {
                Ok(x)
            }
        });
        assert_eq!(result, Err(EditError::OutsideView));
        assert_eq!(seen, vec![0, 1]);
    }

    #[cfg(feature = "imbl")]
    #[test]
    fn imbl_edit_at_keeps_original() {
        let original: imbl::Vector<i32> = (0..100).collect();
        let edited = original.clone().try_edit_at(50, |x| Ok(-x)).unwrap();
        assert_eq!(original[50], 50);
        assert_eq!(edited[50], -50);
        assert_eq!(edited.len(), 100);
    }
}
