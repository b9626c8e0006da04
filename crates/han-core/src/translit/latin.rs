use tracing::{debug, debug_span};

use crate::hangul::decompose;
use crate::table::{ComponentTable, Script};
use crate::utf8::{self, Codepoint, Decoder};

/// Romanize one codepoint. Hangul syllables go through the Latin table;
/// anything else is re-encoded unchanged.
pub fn romanize_one(cp: Codepoint) -> Vec<u8> {
    match decompose(cp) {
        Some(syllable) => ComponentTable::global(Script::Latin)
            .render(syllable)
            .into_bytes(),
        None => utf8::encode(cp),
    }
}

/// Cross-syllable state of the Latin romanizer: the first letter written for
/// the previous non-empty piece, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatinState {
    prev_first: Option<u8>,
}

impl LatinState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_first(&self) -> Option<u8> {
        self.prev_first
    }

    /// Romanize `cp` given the current state, returning the next state and
    /// the bytes to append.
    ///
    /// The first byte of the piece is upper-cased when it is an ASCII
    /// letter, then the K/G rule is applied against the previous first
    /// letter. An empty piece leaves the state untouched.
    pub fn step(self, cp: Codepoint) -> (Self, Vec<u8>) {
        let mut piece = romanize_one(cp);
        if piece.is_empty() {
            return (self, piece);
        }
        let letter = assimilate(self.prev_first, piece[0].to_ascii_uppercase());
        piece[0] = letter;
        (
            Self {
                prev_first: Some(letter),
            },
            piece,
        )
    }
}

fn assimilate(prev: Option<u8>, letter: u8) -> u8 {
    match (prev, letter) {
        (Some(b'K'), b'K') => b'G',
        // After a G the next K stays K, so runs alternate K, G, K, ...
        (Some(b'G'), b'K') => b'K',
        _ => letter,
    }
}

/// Romanize a UTF-8 byte sequence.
///
/// The result is a byte vector rather than a `String`: non-Hangul
/// codepoints are passed through with [`utf8::encode`], which also packs
/// surrogates and out-of-range values decoded from malformed input.
pub fn romanize(bytes: &[u8]) -> Vec<u8> {
    let _span = debug_span!("romanize", input_len = bytes.len()).entered();

    let mut decoder = Decoder::new(bytes);
    let mut state = LatinState::new();
    let mut out = Vec::with_capacity(bytes.len() * 2);
    let mut codepoints = 0usize;
    for cp in decoder.by_ref() {
        let (next, piece) = state.step(cp);
        state = next;
        out.extend_from_slice(&piece);
        codepoints += 1;
    }

    debug!(
        codepoints,
        replacements = decoder.replacements(),
        output_len = out.len()
    );
    out
}

/// Romanize a Rust string.
pub fn romanize_str(input: &str) -> String {
    // Scalar values re-encode to valid UTF-8, so the lossy branch is never
    // taken for `&str` input.
    String::from_utf8(romanize(input.as_bytes()))
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
