//! Text analysis for wordcheck.
//!
//! Splits raw dictionary and document text into the word tokens consumed by
//! the spelling engine.

pub mod tokenizer;
