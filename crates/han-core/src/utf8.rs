//! Lenient UTF-8 decoding and unchecked re-encoding.
//!
//! The decoder never fails: malformed sequences degrade to [`REPLACEMENT`],
//! unknown lead bytes are skipped and a sequence cut off by the end of the
//! input ends decoding. The encoder applies the UTF-8 bit packing to any
//! `u32`, including surrogates and values above U+10FFFF that the decoder
//! can produce from overlong or out-of-range input.

/// One decoded scalar, kept as a raw `u32` because the decoder does not
/// reject surrogates or values above U+10FFFF.
pub type Codepoint = u32;

/// U+FFFD, substituted for malformed sequences.
pub const REPLACEMENT: Codepoint = 0xFFFD;

const CONT_MASK: u8 = 0x3F;

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Lazily decodes a byte slice into codepoints.
///
/// The slice is decoded in full; callers holding a NUL-terminated buffer
/// must cut it at the terminator first.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    replacements: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            replacements: 0,
        }
    }

    /// Number of [`REPLACEMENT`] codepoints emitted so far.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    fn replacement(&mut self) -> Codepoint {
        self.replacements += 1;
        REPLACEMENT
    }
}

impl Iterator for Decoder<'_> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Codepoint> {
        loop {
            let lead = *self.bytes.get(self.pos)?;
            let (init, extra) = match lead {
                0x00..=0x7F => (lead as u32, 0),
                // A continuation byte where a lead byte is expected.
                0x80..=0xBF => {
                    self.pos += 1;
                    return Some(self.replacement());
                }
                0xC0..=0xDF => ((lead & 0x1F) as u32, 1),
                0xE0..=0xEF => ((lead & 0x0F) as u32, 2),
                0xF0..=0xF7 => ((lead & 0x07) as u32, 3),
                _ => {
                    self.pos += 1;
                    continue;
                }
            };

            let end = self.pos + 1 + extra;
            if end > self.bytes.len() {
                // Truncated tail: drop it silently.
                self.pos = self.bytes.len();
                return None;
            }

            let decoded = self.bytes[self.pos + 1..end]
                .iter()
                .try_fold(init, |acc, &b| {
                    is_continuation(b).then(|| (acc << 6) | (b & CONT_MASK) as u32)
                });
            // The whole declared length is consumed even when a continuation
            // byte is bad.
            self.pos = end;

            return Some(match decoded {
                Some(cp) => cp,
                None => self.replacement(),
            });
        }
    }
}

/// Decode `bytes` into a vector of codepoints.
pub fn decode(bytes: &[u8]) -> Vec<Codepoint> {
    Decoder::new(bytes).collect()
}

/// Append the UTF-8 encoding of `cp` to `out`.
///
/// Values above U+FFFF always take four bytes; bits above the 21st are
/// discarded.
pub fn encode_into(cp: Codepoint, out: &mut Vec<u8>) {
    if cp <= 0x7F {
        out.push(cp as u8);
    } else if cp <= 0x7FF {
        out.extend_from_slice(&[0xC0 | ((cp >> 6) & 0x1F) as u8, 0x80 | (cp & 0x3F) as u8]);
    } else if cp <= 0xFFFF {
        out.extend_from_slice(&[
            0xE0 | ((cp >> 12) & 0x0F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]);
    } else {
        out.extend_from_slice(&[
            0xF0 | ((cp >> 18) & 0x07) as u8,
            0x80 | ((cp >> 12) & 0x3F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]);
    }
}

/// UTF-8 encoding of a single codepoint.
pub fn encode(cp: Codepoint) -> Vec<u8> {
    let mut out = Vec::with_capacity(4);
    encode_into(cp, &mut out);
    out
}

/// Length of the longest prefix of `bytes` that fits in `max` bytes without
/// splitting a multi-byte sequence.
pub fn sequence_boundary(bytes: &[u8], max: usize) -> usize {
    if max >= bytes.len() {
        return bytes.len();
    }
    let mut cut = max;
    while cut > 0 && is_continuation(bytes[cut]) {
        cut -= 1;
    }
    cut
}
