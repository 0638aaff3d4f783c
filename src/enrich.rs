use tracing::debug;

use crate::catalog::TermRecord;
use crate::reference::{ExamplePair, ReferenceTable};

/// Per-run counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
    pub fallback: usize,
    /// Records whose example fields differed from what was written.
    pub changed: usize,
}

/// Example pair for a raw term; never fails.
pub fn example_for(table: &ReferenceTable, term: &str) -> (ExamplePair, bool) {
    match table.lookup(term) {
        Some(pair) => (pair, true),
        None => (ExamplePair::FALLBACK, false),
    }
}

/// Set `example` and `exampleChinese` on every record in place.
/// Length and order of `records` are untouched.
pub fn enrich(table: &ReferenceTable, records: &mut [TermRecord]) -> Summary {
    let mut summary = Summary {
        total: records.len(),
        ..Summary::default()
    };

    for record in records.iter_mut() {
        let (pair, matched) = example_for(table, record.term());
        if matched {
            summary.matched += 1;
        } else {
            summary.fallback += 1;
            debug!(term = record.term(), "no curated example, using fallback");
        }
        if record.set_examples(pair) {
            summary.changed += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use serde_json::json;
    use std::path::Path;

    fn records(json: serde_json::Value) -> Vec<TermRecord> {
        catalog::parse(Path::new("test.json"), &json.to_string()).unwrap()
    }

    #[test]
    fn mixed_case_term_uses_table_entry() {
        let table = ReferenceTable::builtin();
        let mut recs = records(json!([{"term": "Allegro"}]));
        enrich(&table, &mut recs);

        assert_eq!(
            recs[0].example(),
            Some("Beethoven: Symphony No. 5, 1st movement")
        );
        assert_eq!(recs[0].example_chinese(), Some("贝多芬：第五交响曲第一乐章"));
    }

    #[test]
    fn unknown_term_uses_fallback() {
        let table = ReferenceTable::builtin();
        let mut recs = records(json!([{"term": "xyz-unknown-term"}]));
        let summary = enrich(&table, &mut recs);

        assert_eq!(recs[0].example(), Some("Classical music piece"));
        assert_eq!(recs[0].example_chinese(), Some("古典音乐作品"));
        assert_eq!(summary.fallback, 1);
        assert_eq!(summary.matched, 0);
    }

    #[test]
    fn existing_examples_are_overwritten() {
        let table = ReferenceTable::builtin();
        let mut recs = records(json!([
            {"term": "Largo", "example": "stale", "exampleChinese": "旧的"}
        ]));
        enrich(&table, &mut recs);

        assert_eq!(recs[0].example(), Some("Handel: Largo from Xerxes"));
        assert_eq!(recs[0].example_chinese(), Some("亨德尔：赛尔斯的广板"));
    }

    #[test]
    fn preserves_order_and_length() {
        let table = ReferenceTable::builtin();
        let input = records(json!([
            {"term": "Presto"},
            {"term": "unknown"},
            {"term": "Dolce"},
            {"term": "Fine"}
        ]));
        let mut output = input.clone();
        enrich(&table, &mut output);

        assert_eq!(output.len(), input.len());
        for (a, b) in input.iter().zip(&output) {
            assert_eq!(a.term(), b.term());
        }
    }

    #[test]
    fn every_record_gets_non_empty_examples() {
        let table = ReferenceTable::builtin();
        let mut recs = records(json!([
            {"term": ""},
            {"term": "Crescendo"},
            {"term": "  spaced  "},
            {"term": "Più mosso"}
        ]));
        enrich(&table, &mut recs);

        for r in &recs {
            assert!(!r.example().unwrap().is_empty(), "term {:?}", r.term());
            assert!(!r.example_chinese().unwrap().is_empty(), "term {:?}", r.term());
        }
    }

    #[test]
    fn other_fields_pass_through() {
        let table = ReferenceTable::builtin();
        let mut recs = records(json!([{
            "id": "42",
            "term": "Staccato",
            "category": "Articulation",
            "grade": 3,
            "abbreviation": "stacc.",
            "termChinese": "断奏"
        }]));
        enrich(&table, &mut recs);

        let r = &recs[0];
        assert_eq!(r.get("id"), Some(&json!("42")));
        assert_eq!(r.get("category"), Some(&json!("Articulation")));
        assert_eq!(r.get("grade"), Some(&json!(3)));
        assert_eq!(r.get("abbreviation"), Some(&json!("stacc.")));
        assert_eq!(r.get("termChinese"), Some(&json!("断奏")));
    }

    #[test]
    fn numbers_pass_through_verbatim() {
        let table = ReferenceTable::builtin();
        let text = r#"[
            {"term": "Allegro", "bigId": 18446744073709551616, "ratio": 1.50, "grade": 2}
        ]"#;
        let mut recs = catalog::parse(Path::new("test.json"), text).unwrap();
        enrich(&table, &mut recs);

        let json = catalog::to_json(&recs, 4).unwrap();
        assert!(json.contains("\"bigId\": 18446744073709551616,"), "got: {json}");
        assert!(json.contains("\"ratio\": 1.50,"), "got: {json}");
        assert!(json.contains("\"grade\": 2,"), "got: {json}");
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let table = ReferenceTable::builtin();
        let mut once = records(json!([
            {"term": "Adagio", "example": "old"},
            {"term": "nope"}
        ]));
        let first = enrich(&table, &mut once);
        let mut twice = once.clone();
        let second = enrich(&table, &mut twice);

        assert_eq!(once, twice);
        assert_eq!(first.changed, 2);
        assert_eq!(second.changed, 0);
    }

    #[test]
    fn summary_counts_add_up() {
        let table = ReferenceTable::builtin();
        let mut recs = records(json!([
            {"term": "Allegro"},
            {"term": "Andante"},
            {"term": "bogus"}
        ]));
        let summary = enrich(&table, &mut recs);

        assert_eq!(
            summary,
            Summary {
                total: 3,
                matched: 2,
                fallback: 1,
                changed: 3,
            }
        );
    }

    #[test]
    fn example_for_reports_match() {
        let table = ReferenceTable::builtin();
        assert!(example_for(&table, "Ritardando").1);
        assert_eq!(example_for(&table, "???"), (ExamplePair::FALLBACK, false));
    }
}
