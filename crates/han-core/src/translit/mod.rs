//! Hangul-to-Latin romanization and Hangul-to-Cyrillic transliteration.
//!
//! Both paths decode the input leniently, decompose each syllable and look
//! its components up in the script's [`ComponentTable`](crate::table::ComponentTable).
//! They differ in how non-Hangul input and capitalization are handled:
//!
//! - Latin: non-Hangul codepoints pass through, the first letter of every
//!   piece is upper-cased (ASCII only) and a K following K becomes G.
//! - Cyrillic: non-Hangul codepoints are dropped, the first letter of every
//!   syllable is upper-cased (а..я only), no assimilation.

mod cyrillic;
mod latin;

pub use cyrillic::{transliterate_one_ru, transliterate_ru};
pub use latin::{romanize, romanize_one, romanize_str, LatinState};
