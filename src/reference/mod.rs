//! Embedded reference table: normalized term -> (English, Chinese) example pair.

mod entries;

use std::collections::HashMap;

use entries::ENTRIES;

/// An illustrative piece for a term, in English and Chinese.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplePair {
    pub english: &'static str,
    pub chinese: &'static str,
}

impl ExamplePair {
    /// Used for any term without a curated entry.
    pub const FALLBACK: ExamplePair = ExamplePair {
        english: "Classical music piece",
        chinese: "古典音乐作品",
    };
}

/// Lowercases a term for table lookup. No trimming or accent folding:
/// table keys carry punctuation and accents verbatim.
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
}

/// Immutable lookup table built once at startup.
#[derive(Debug)]
pub struct ReferenceTable {
    entries: HashMap<&'static str, ExamplePair>,
}

impl ReferenceTable {
    /// Build the table from the curated entries compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_entries(ENTRIES)
    }

    fn from_entries(entries: &[(&'static str, &'static str, &'static str)]) -> Self {
        let entries = entries
            .iter()
            .map(|&(key, english, chinese)| (key, ExamplePair { english, chinese }))
            .collect();
        Self { entries }
    }

    /// Case-insensitive lookup of a raw catalog term.
    pub fn lookup(&self, term: &str) -> Option<ExamplePair> {
        self.entries.get(normalize(term).as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_curated_entry() {
        let table = ReferenceTable::builtin();
        assert_eq!(table.len(), ENTRIES.len());
        assert_eq!(table.len(), 113);
    }

    #[test]
    fn keys_are_already_normalized() {
        for (key, _, _) in ENTRIES {
            assert_eq!(normalize(key), *key, "key not lowercase: {key}");
        }
    }

    #[test]
    fn values_are_non_empty() {
        for (key, english, chinese) in ENTRIES {
            assert!(!english.is_empty(), "empty english for {key}");
            assert!(!chinese.is_empty(), "empty chinese for {key}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let table = ReferenceTable::builtin();
        let pair = table.lookup("Allegro").unwrap();
        assert_eq!(pair.english, "Beethoven: Symphony No. 5, 1st movement");
        assert_eq!(pair.chinese, "贝多芬：第五交响曲第一乐章");
        assert_eq!(table.lookup("ALLEGRO"), Some(pair));
    }

    #[test]
    fn lookup_keeps_punctuation_and_accents() {
        let table = ReferenceTable::builtin();
        assert_eq!(
            table.lookup("Con / col").unwrap().english,
            "Beethoven: Symphony No. 5"
        );
        assert_eq!(table.lookup("E / ed").unwrap().chinese, "贝多芬：第五交响曲");
        assert_eq!(
            table.lookup("Animé").unwrap().english,
            "Debussy: Clair de lune"
        );
        assert_eq!(
            table.lookup("MÄSSIG").unwrap().english,
            "Mozart: Eine kleine Nachtmusik"
        );
    }

    #[test]
    fn lookup_does_not_trim() {
        let table = ReferenceTable::builtin();
        assert!(table.lookup(" allegro").is_none());
        assert!(table.lookup("allegro ").is_none());
        assert!(table.lookup("anime").is_none());
    }

    #[test]
    fn lookup_misses_unknown_term() {
        let table = ReferenceTable::builtin();
        assert!(table.lookup("xyz-unknown-term").is_none());
    }

    #[test]
    fn single_letter_dynamics_resolve() {
        let table = ReferenceTable::builtin();
        assert_eq!(
            table.lookup("f").unwrap().english,
            "Beethoven: Symphony No. 5, opening"
        );
        assert_eq!(table.lookup("pp").unwrap().chinese, "德彪西：月光");
    }

    #[test]
    fn from_entries_builds_custom_table() {
        let table =
            ReferenceTable::from_entries(&[("tutti", "Holst: The Planets", "霍尔斯特：行星组曲")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("Tutti").unwrap().english, "Holst: The Planets");
    }
}
