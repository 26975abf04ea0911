//! This crate provides a sequence with a movable "current item", implemented
//! as a singly-linked list with owned nodes.
//!
//! The [`Sequence`] keeps a cursor into itself: [`insert`] places a new
//! element just before the current item, [`attach`] places one just after
//! it, and [`remove_current`] takes the current item out, all in constant
//! time. That is the point of the linked representation: an array-backed
//! sequence pays *O*(*n*) for the same front and middle edits.
//!
//! Here is a quick example showing how the sequence works.
//!
//! ```
//! use cursor_seq::Sequence;
//! use std::iter::FromIterator;
//!
//! let mut seq = Sequence::from_iter([1, 2, 3]);
//!
//! seq.start(); // position at the first item
//! assert_eq!(seq.current(), Some(&1));
//!
//! seq.advance().unwrap(); // move to 2
//! seq.insert(9); // insert before it: [1, 9, 2, 3]
//! assert_eq!(seq.current(), Some(&9));
//!
//! seq.attach(7); // insert after it: [1, 9, 7, 2, 3]
//! assert_eq!(seq.remove_current(), Ok(7));
//! assert_eq!(seq.current(), Some(&2));
//!
//! assert_eq!(Vec::from_iter(seq), vec![1, 9, 2, 3]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the sequence is like the following graph:
//! ```text
//!   head                                           tail
//!    │                                               │
//!    ↓                                               ↓
//! ╔═══════════╗      ╔═══════════╗      ┄┄      ╔═══════════╗
//! ║ element 0 ║      ║ element 1 ║              ║element N-1║
//! ╟───────────╢      ╟───────────╢              ╟───────────╢
//! ║   next    ║ ───→ ║   next    ║ ───→ ┄┄ ───→ ║   next    ║ ───→ ∅
//! ╚═══════════╝      ╚═══════════╝              ╚═══════════╝
//!        ↑                 ↑
//!    precursor           cursor
//! ```
//! Each node is allocated on the heap and owned by the link that reaches
//! it, rooted at `head`. The other three pointers are positional caches:
//! `tail` makes end-appends constant-time, `cursor` marks the current item,
//! and `precursor` trails one node behind the cursor so that [`insert`] and
//! [`remove_current`] never have to walk the chain.
//!
//! # Cursor Positions
//!
//! In a sequence with *n* items the cursor rests either on one of the *n*
//! nodes or on "no current item". The latter covers a fresh (or freshly
//! collected) sequence that has not been [`start`]ed yet, and the
//! past-the-end position reached by [`advance`]-ing off the last item or
//! removing it. [`is_item`] tells the two kinds of position apart from the
//! nodes; [`start`] always returns the cursor to the front.
//!
//! # Value Semantics
//!
//! Cloning a sequence deep-copies every node and then re-derives the
//! cursor and precursor *by position* inside the new chain, so the clone
//! scans from the same place the source did while sharing no storage with
//! it:
//!
//! ```
//! use cursor_seq::Sequence;
//! use std::iter::FromIterator;
//!
//! let mut seq = Sequence::from_iter(["a", "b", "c"]);
//! seq.start();
//! seq.advance().unwrap();
//!
//! let mut copy = seq.clone();
//! assert_eq!(copy.current(), Some(&"b"));
//!
//! copy.remove_current().unwrap();
//! assert_eq!(Vec::from_iter(&copy), vec![&"a", &"c"]);
//! assert_eq!(Vec::from_iter(&seq), vec![&"a", &"b", &"c"]);
//! ```
//!
//! # Iteration
//!
//! Iterating over a sequence is by the [`Iter`] and [`IterMut`] iterators,
//! created by [`iter`] and [`iter_mut`]. They always cover the whole
//! sequence front to back and leave the cursor untouched, which makes them
//! the right tool for read-only passes; use the cursor operations when the
//! pass needs to edit the sequence while scanning it.
//!
//! ```
//! use cursor_seq::Sequence;
//! use std::iter::FromIterator;
//!
//! let mut seq = Sequence::from_iter([1, 2, 3]);
//! seq.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(seq), vec![2, 4, 6]);
//! ```
//!
//! [`Sequence`]: crate::Sequence
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`insert`]: crate::Sequence::insert
//! [`attach`]: crate::Sequence::attach
//! [`remove_current`]: crate::Sequence::remove_current
//! [`advance`]: crate::Sequence::advance
//! [`start`]: crate::Sequence::start
//! [`is_item`]: crate::Sequence::is_item
//! [`iter`]: crate::Sequence::iter
//! [`iter_mut`]: crate::Sequence::iter_mut

#[doc(inline)]
pub use sequence::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use sequence::{NoCurrentItem, Sequence};

pub mod sequence;

pub(crate) mod node;

mod experiments;
