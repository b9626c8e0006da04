use tracing::{debug, debug_span};

use crate::hangul::decompose;
use crate::table::{ComponentTable, Script};
use crate::unicode::cyrillic_to_upper;
use crate::utf8::{Codepoint, Decoder};

/// Transliterate one codepoint into Cyrillic. Non-Hangul codepoints yield
/// an empty string and are dropped from the output.
pub fn transliterate_one_ru(cp: Codepoint) -> String {
    decompose(cp)
        .map(|syllable| ComponentTable::global(Script::Cyrillic).render(syllable))
        .unwrap_or_default()
}

fn capitalize_first(piece: &str, out: &mut String) {
    let mut chars = piece.chars();
    if let Some(first) = chars.next() {
        out.push(cyrillic_to_upper(first));
        out.push_str(chars.as_str());
    }
}

/// Transliterate a UTF-8 byte sequence into Cyrillic, capitalizing the
/// first letter of every syllable.
pub fn transliterate_ru(bytes: &[u8]) -> String {
    let _span = debug_span!("transliterate_ru", input_len = bytes.len()).entered();

    let mut decoder = Decoder::new(bytes);
    let mut out = String::with_capacity(bytes.len() * 2);
    let mut codepoints = 0usize;
    for cp in decoder.by_ref() {
        capitalize_first(&transliterate_one_ru(cp), &mut out);
        codepoints += 1;
    }

    debug!(
        codepoints,
        replacements = decoder.replacements(),
        output_len = out.len()
    );
    out
}
