//! Semantic editor combinators.
//!
//! # Editor
//! An editor turns a transformation of a *part* into a transformation of the *whole* that
//! contains it. `index(2)` turns `f: T -> T` into a transformation of `Vec<T>` that applies `f`
//! to the third element; `left()` turns it into a transformation of pairs `(T, U)`.
//!
//! # Path
//! Editors compose with [`EditorExt::then`], read left to right as successive steps inward:
//! `index(2).then(left())` edits the first component of the third pair of a list.
//! Composition is associative and [`Id`] is its unit.
//!
//! # Virtual values
//! Editors can target values that are not stored anywhere, like the code point of a `char`
//! (see [`as_code`]) or the bit pattern of a float. These only exist during the edit.
//!
//! ```
//! use semedit::{every, index, as_code, EditorExt};
//!
//! let nested = vec![vec![1, 2], vec![3, 4], vec![5, 6, 7, 8, 9], vec![10, 11]];
//! let edited = index(2).then(index(3)).edit(nested, |x: i32| x + 100).unwrap();
//! assert_eq!(edited[2], vec![5, 6, 7, 108, 9]);
//!
//! let shifted = every().then(as_code()).edit("hello world".to_string(), |c: u32| c + 1);
//! assert_eq!(shifted.unwrap(), "ifmmp!xpsme");
//! ```
//!
//! Struct fields get their editors from `#[derive(Editable)]`:
//!
//! ```
//! use semedit::{every, Editable, EditorExt};
//!
//! #[derive(Debug, PartialEq, Editable)]
//! struct Track {
//!     title: String,
//!     ratings: Vec<u8>,
//! }
//!
//! let track = Track { title: "intro".to_string(), ratings: vec![3, 4] };
//! let track = Track::ratings.then(every()).edit(track, |r: u8| r + 1).unwrap();
//! assert_eq!(track.ratings, vec![4, 5]);
//! ```
mod editor;
mod error;
mod func;
mod keyed;
mod pair;
mod record;
mod select;
mod sequence;
mod view;

pub use crate::{
    editor::{apply, compose, try_apply, Editor, EditorExt, Id, Then},
    error::{EditError, EditResult},
    func::{arg, ret, Arg, Func, Ret},
    keyed::{on_key, on_keys, values, Keyed, OnKey, OnKeys, Values},
    pair::{left, right, Left, Right},
    record::{field, Named},
    select::{every, first, index, last, matching, on_every, Every, First, Index, Last, Matching, Stride},
    sequence::Sequence,
    view::{as_bits, as_code, partial_view, reversed, view, BitPattern, PartialView, View},
};
pub use semedit_macros::Editable;
