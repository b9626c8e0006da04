//! Arithmetic decomposition of precomposed Hangul syllables (U+AC00..U+D7A3).

use crate::utf8::Codepoint;

/// First codepoint of the Hangul syllable block.
pub const S_BASE: Codepoint = 0xAC00;
/// Number of leading consonants.
pub const L_COUNT: u32 = 19;
/// Number of vowels.
pub const V_COUNT: u32 = 21;
/// Number of trailing consonants, counting "none" at index 0.
pub const T_COUNT: u32 = 28;
/// Syllables sharing one leading consonant.
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
/// Size of the syllable block.
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

/// Leading consonant ㅇ, silent at the start of a syllable.
pub const SILENT_LEAD: usize = 11;

/// Indices of a decomposed syllable into the leading, vowel and trailing
/// component tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub lead: usize,
    pub vowel: usize,
    pub trail: usize,
}

pub fn is_syllable(cp: Codepoint) -> bool {
    (S_BASE..S_BASE + S_COUNT).contains(&cp)
}

/// Split a syllable codepoint into its component indices, or `None` when
/// `cp` lies outside the syllable block.
pub fn decompose(cp: Codepoint) -> Option<Syllable> {
    if !is_syllable(cp) {
        return None;
    }
    let offset = cp - S_BASE;
    Some(Syllable {
        lead: (offset / N_COUNT) as usize,
        vowel: ((offset % N_COUNT) / T_COUNT) as usize,
        trail: (offset % T_COUNT) as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_edges() {
        assert_eq!(
            decompose(0xAC00),
            Some(Syllable {
                lead: 0,
                vowel: 0,
                trail: 0
            })
        );
        assert_eq!(
            decompose(0xD7A3),
            Some(Syllable {
                lead: 18,
                vowel: 20,
                trail: 27
            })
        );
        assert_eq!(decompose(0xABFF), None);
        assert_eq!(decompose(0xD7A4), None);
    }

    #[test]
    fn test_known_syllables() {
        // 각: ㄱ + ㅏ + ㄱ
        assert_eq!(
            decompose('각' as u32),
            Some(Syllable {
                lead: 0,
                vowel: 0,
                trail: 1
            })
        );
        // 아: ㅇ + ㅏ
        assert_eq!(decompose('아' as u32).map(|s| s.lead), Some(SILENT_LEAD));
        // 한: ㅎ + ㅏ + ㄴ
        assert_eq!(
            decompose('한' as u32),
            Some(Syllable {
                lead: 18,
                vowel: 0,
                trail: 4
            })
        );
    }

    #[test]
    fn test_jamo_and_ascii_are_not_syllables() {
        assert_eq!(decompose('ㄱ' as u32), None);
        assert_eq!(decompose(0x1100), None);
        assert_eq!(decompose('a' as u32), None);
    }

    #[test]
    fn test_every_syllable_decomposes() {
        for cp in S_BASE..S_BASE + S_COUNT {
            let s = decompose(cp).unwrap();
            assert!(s.lead < L_COUNT as usize);
            assert!(s.vowel < V_COUNT as usize);
            assert!(s.trail < T_COUNT as usize);
            let rebuilt = s.lead as u32 * N_COUNT + s.vowel as u32 * T_COUNT + s.trail as u32;
            assert_eq!(rebuilt, cp - S_BASE, "cp={cp:#X}");
        }
    }
}
