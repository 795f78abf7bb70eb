//! Spell checking for wordcheck.
//!
//! This module holds the word indexing and matching engine: a hash-bucketed
//! [`dictionary`] of known words, a red-black [`index`] of the words in a
//! text, the [`scorer`] that ranks replacement candidates, and the
//! [`session`] tying them together.

pub mod dictionary;
pub mod index;
pub mod scorer;
pub mod session;
