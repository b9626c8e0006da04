//! Character-level classification used when capitalizing syllables, and
//! UTF-16 cut points for bounded output.

/// Basic Cyrillic lower-case letters а..я (U+0430..U+044F). ё and the
/// extended letters are outside this range and stay as they are.
pub fn is_cyrillic_lower(c: char) -> bool {
    ('\u{0430}'..='\u{044F}').contains(&c)
}

/// Upper-case a basic Cyrillic letter; any other character is returned
/// unchanged.
pub fn cyrillic_to_upper(c: char) -> char {
    if is_cyrillic_lower(c) {
        char::from_u32(c as u32 - ('а' as u32 - 'А' as u32)).unwrap_or(c)
    } else {
        c
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// Largest cut `<= max` that does not split a surrogate pair in `units`.
pub fn utf16_boundary(units: &[u16], max: usize) -> usize {
    if max >= units.len() {
        return units.len();
    }
    if max > 0 && is_high_surrogate(units[max - 1]) {
        max - 1
    } else {
        max
    }
}
