//! Property tests for stat group derivation.
//!
//! Uses proptest to verify:
//! 1. All absent — no group is produced
//! 2. Present subset — cards are exactly the present identifiers
//! 3. Order preservation — card order equals filtered identifier order
//! 4. Idempotence — repeated derivation gives identical output
//! 5. Flag passthrough — every card carries the panel's description flag

use proptest::prelude::*;
use std::collections::HashMap;
use xray_core::{at_least_one_stat, stat_group, AnalysisResult};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_id() -> impl Strategy<Value = String> {
    "[a-z%?-]{1,8}"
}

/// Identifier list plus a present/absent decision per distinct identifier.
fn arb_case() -> impl Strategy<Value = (Vec<String>, HashMap<String, Option<i64>>)> {
    prop::collection::vec(arb_id(), 0..12).prop_flat_map(|ids| {
        let n = ids.len();
        (
            Just(ids),
            prop::collection::vec(prop::option::of(-5i64..5), n),
        )
            .prop_map(|(ids, values)| {
                let entries = ids.iter().cloned().zip(values).collect::<HashMap<_, _>>();
                (ids, entries)
            })
    })
}

fn build(entries: &HashMap<String, Option<i64>>) -> AnalysisResult<i64> {
    let mut result = AnalysisResult::new();
    for (id, v) in entries {
        result.insert(id.clone(), *v);
    }
    result
}

// ── 1. All absent ────────────────────────────────────────────────────

proptest! {
    /// When every identifier is missing or null, nothing is rendered.
    #[test]
    fn all_absent_renders_nothing(
        ids in prop::collection::vec(arb_id(), 0..12),
        explicit_nulls in prop::bool::ANY,
    ) {
        let mut result = AnalysisResult::<i64>::new();
        if explicit_nulls {
            for id in &ids {
                result.insert(id.clone(), None);
            }
        }
        prop_assert!(stat_group("T", &result, &ids, true).is_none());
        prop_assert!(!at_least_one_stat(&result, &ids));
    }
}

// ── 2 & 3. Present subset, in order ──────────────────────────────────

proptest! {
    /// Cards are the present identifiers, in identifier order, with values passed through.
    #[test]
    fn cards_are_filtered_identifiers_in_order((ids, entries) in arb_case()) {
        let result = build(&entries);
        let expected: Vec<&str> = ids
            .iter()
            .map(String::as_str)
            .filter(|id| matches!(entries.get(*id), Some(Some(_))))
            .collect();

        match stat_group("Title", &result, &ids, false) {
            None => prop_assert!(expected.is_empty()),
            Some(group) => {
                prop_assert_eq!(group.title, "Title");
                prop_assert_eq!(group.ids().collect::<Vec<_>>(), expected);
                for card in &group.cards {
                    prop_assert_eq!(Some(card.stat), result.get(card.id));
                }
            }
        }
    }

    /// Reversing the identifiers reverses the cards.
    #[test]
    fn reversing_identifiers_reverses_cards((ids, entries) in arb_case()) {
        let result = build(&entries);
        let reversed: Vec<String> = ids.iter().rev().cloned().collect();

        let forward = stat_group("T", &result, &ids, false)
            .map(|g| g.ids().map(str::to_string).collect::<Vec<_>>())
            .unwrap_or_default();
        let mut backward = stat_group("T", &result, &reversed, false)
            .map(|g| g.ids().map(str::to_string).collect::<Vec<_>>())
            .unwrap_or_default();
        backward.reverse();

        prop_assert_eq!(forward, backward);
    }
}

// ── 4. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn derivation_is_idempotent((ids, entries) in arb_case(), flag in prop::bool::ANY) {
        let result = build(&entries);
        let first = stat_group("T", &result, &ids, flag);
        let second = stat_group("T", &result, &ids, flag);
        prop_assert_eq!(first, second);
    }
}

// ── 5. Flag passthrough ──────────────────────────────────────────────

proptest! {
    #[test]
    fn flag_reaches_every_card((ids, entries) in arb_case(), flag in prop::bool::ANY) {
        let result = build(&entries);
        if let Some(group) = stat_group("T", &result, &ids, flag) {
            let (_, flags) = group.render_with(|_| false, |_, _, show| show);
            prop_assert!(flags.iter().all(|f| *f == flag));
            prop_assert_eq!(flags.len(), group.len());
        }
    }
}
