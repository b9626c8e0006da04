//! Per-script component tables: the strings written for each leading
//! consonant, vowel and trailing consonant of a Hangul syllable.
//!
//! Tables are TOML data embedded at compile time and parsed once into a
//! read-only singleton per script. A host may install its own table with
//! [`ComponentTable::init_custom`] before the first lookup.

mod config;

use std::sync::OnceLock;

use tracing::debug;

use crate::hangul::Syllable;

pub use config::{parse_table_toml, TableConfigError};

pub const DEFAULT_LATIN_TOML: &str = include_str!("default_latin.toml");
pub const DEFAULT_CYRILLIC_TOML: &str = include_str!("default_cyrillic.toml");

static LATIN: OnceLock<ComponentTable> = OnceLock::new();
static CYRILLIC: OnceLock<ComponentTable> = OnceLock::new();

/// Target script of a transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
}

impl Script {
    /// Map the numeric script id used at the C boundary.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Script::Latin),
            1 => Some(Script::Cyrillic),
            _ => None,
        }
    }

    /// Embedded default table source.
    pub fn default_toml(self) -> &'static str {
        match self {
            Script::Latin => DEFAULT_LATIN_TOML,
            Script::Cyrillic => DEFAULT_CYRILLIC_TOML,
        }
    }

    fn table_slot(self) -> &'static OnceLock<ComponentTable> {
        match self {
            Script::Latin => &LATIN,
            Script::Cyrillic => &CYRILLIC,
        }
    }
}

/// Lookup strings for one script, 19 leading / 21 vowel / 28 trailing.
///
/// Lengths are checked by [`parse_table_toml`], so indexing with a
/// [`Syllable`] from [`crate::hangul::decompose`] is always in bounds.
#[derive(Debug, Clone)]
pub struct ComponentTable {
    pub(crate) lead: Vec<String>,
    pub(crate) vowel: Vec<String>,
    pub(crate) trail: Vec<String>,
}

impl ComponentTable {
    /// Install a custom table for `script` before its first `global()` call.
    ///
    /// The parsed table goes into the same cell `global()` fills, so exactly
    /// one of the two wins: either this returns `Ok` and every lookup sees
    /// the custom table, or it returns `AlreadyInitialized`.
    pub fn init_custom(script: Script, toml_content: String) -> Result<(), TableConfigError> {
        let table = parse_table_toml(&toml_content)?;
        script
            .table_slot()
            .set(table)
            .map_err(|_| TableConfigError::AlreadyInitialized)?;
        debug!(?script, "installed custom component table");
        Ok(())
    }

    /// Get or initialize the table singleton for `script`, falling back to
    /// the embedded default.
    pub fn global(script: Script) -> &'static ComponentTable {
        script.table_slot().get_or_init(|| {
            debug!(?script, "loading default component table");
            parse_table_toml(script.default_toml()).expect("embedded component table must be valid")
        })
    }

    pub fn lead(&self, idx: usize) -> &str {
        &self.lead[idx]
    }

    pub fn vowel(&self, idx: usize) -> &str {
        &self.vowel[idx]
    }

    pub fn trail(&self, idx: usize) -> &str {
        &self.trail[idx]
    }

    /// Append the rendering of `syllable` (lead + vowel + trail) to `out`.
    pub fn render_into(&self, syllable: Syllable, out: &mut String) {
        out.push_str(self.lead(syllable.lead));
        out.push_str(self.vowel(syllable.vowel));
        out.push_str(self.trail(syllable.trail));
    }

    pub fn render(&self, syllable: Syllable) -> String {
        let mut out = String::new();
        self.render_into(syllable, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hangul::{decompose, SILENT_LEAD};

    #[test]
    fn test_script_ids() {
        assert_eq!(Script::from_id(0), Some(Script::Latin));
        assert_eq!(Script::from_id(1), Some(Script::Cyrillic));
        assert_eq!(Script::from_id(2), None);
    }

    #[test]
    fn test_latin_render() {
        let table = ComponentTable::global(Script::Latin);
        let render = |c: char| table.render(decompose(c as u32).unwrap());
        assert_eq!(render('각'), "kak");
        assert_eq!(render('한'), "han");
        assert_eq!(render('글'), "keul");
        assert_eq!(render('아'), "a");
        assert_eq!(render('힣'), "hit");
    }

    #[test]
    fn test_cyrillic_render() {
        let table = ComponentTable::global(Script::Cyrillic);
        let render = |c: char| table.render(decompose(c as u32).unwrap());
        assert_eq!(render('한'), "хан");
        assert_eq!(render('국'), "кук");
        assert_eq!(render('강'), "кан");
        assert_eq!(render('아'), "а");
    }

    #[test]
    fn test_silent_lead_is_empty_in_both_scripts() {
        assert_eq!(ComponentTable::global(Script::Latin).lead(SILENT_LEAD), "");
        assert_eq!(ComponentTable::global(Script::Cyrillic).lead(SILENT_LEAD), "");
    }

    #[test]
    fn test_collapsed_finals_are_kept() {
        let latin = ComponentTable::global(Script::Latin);
        let t_finals: Vec<&str> = [7, 19, 20, 22, 23, 25, 27]
            .into_iter()
            .map(|i| latin.trail(i))
            .collect();
        assert!(t_finals.iter().all(|t| *t == "t"));
        assert_eq!(latin.trail(21), "ng");
        assert_eq!(ComponentTable::global(Script::Cyrillic).trail(21), "н");
    }

    const LATIN_LEAD: [&str; 19] = [
        "k", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t",
        "p", "h",
    ];
    const LATIN_VOWEL: [&str; 21] = [
        "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo",
        "we", "wi", "yu", "eu", "yi", "i",
    ];
    const LATIN_TRAIL: [&str; 28] = [
        "", "k", "k", "ks", "n", "nj", "nh", "t", "l", "lk", "lm", "lb", "ls", "lt", "lp", "lh",
        "m", "p", "ps", "t", "t", "ng", "t", "t", "k", "t", "p", "t",
    ];

    const CYRILLIC_LEAD: [&str; 19] = [
        "к", "кк", "н", "д", "тт", "р", "м", "б", "пп", "с", "сс", "", "ч", "чч", "чх", "г", "т",
        "п", "х",
    ];
    const CYRILLIC_VOWEL: [&str; 21] = [
        "а", "э", "я", "е", "о", "э", "ё", "е", "о", "ва", "вэ", "ве", "ё", "у", "во", "ве", "ви",
        "ю", "ы", "и", "и",
    ];
    const CYRILLIC_TRAIL: [&str; 28] = [
        "", "к", "к", "кс", "н", "ндж", "нх", "т", "ль", "льк", "льм", "льб", "льс", "льт", "льп",
        "льх", "м", "п", "пс", "т", "т", "н", "т", "т", "к", "т", "п", "т",
    ];

    fn assert_table(table: &ComponentTable, lead: &[&str], vowel: &[&str], trail: &[&str]) {
        assert_eq!(table.lead, lead);
        assert_eq!(table.vowel, vowel);
        assert_eq!(table.trail, trail);
    }

    #[test]
    fn test_latin_table_entries() {
        assert_table(
            ComponentTable::global(Script::Latin),
            &LATIN_LEAD,
            &LATIN_VOWEL,
            &LATIN_TRAIL,
        );
    }

    #[test]
    fn test_cyrillic_table_entries() {
        assert_table(
            ComponentTable::global(Script::Cyrillic),
            &CYRILLIC_LEAD,
            &CYRILLIC_VOWEL,
            &CYRILLIC_TRAIL,
        );
    }

    #[test]
    fn test_init_custom_rejects_invalid_toml() {
        let err = ComponentTable::init_custom(Script::Cyrillic, "lead = 1".into()).unwrap_err();
        assert!(matches!(err, TableConfigError::Parse(_)));
    }

    #[test]
    fn test_init_custom_after_global_fails() {
        ComponentTable::global(Script::Latin);
        let err =
            ComponentTable::init_custom(Script::Latin, DEFAULT_LATIN_TOML.to_string()).unwrap_err();
        assert!(matches!(err, TableConfigError::AlreadyInitialized));
    }
}
