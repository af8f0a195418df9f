//! Stat groups: a titled panel listing the statistics of an xray that are
//! actually present.
//!
//! Derivation is pure. Given a title, an [`AnalysisResult`], an ordered list
//! of identifiers and the description flag, [`stat_group`] returns
//! `None` when no identifier resolves to a value, otherwise a [`StatGroup`]
//! whose cards follow the identifier order with absent ones dropped.
//! Rendering the heading and each card is left to the caller.

use serde::Serialize;

use crate::result::AnalysisResult;

/// One card in a stat group: the resolved value plus the display flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatCard<'a, V> {
    pub id: &'a str,
    pub stat: &'a V,
    pub show_description: bool,
}

/// A visible stat group. Holds at least one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatGroup<'a, V> {
    pub title: &'a str,
    pub cards: Vec<StatCard<'a, V>>,
}

impl<'a, V> StatGroup<'a, V> {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Identifiers of the rendered cards, in display order.
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Feed the group through a heading renderer and a card renderer.
    /// The card renderer gets the identifier, the value and the flag.
    pub fn render_with<H, C, Out>(&self, heading: H, mut card: C) -> (Out, Vec<Out>)
    where
        H: FnOnce(&'a str) -> Out,
        C: FnMut(&'a str, &'a V, bool) -> Out,
    {
        let head = heading(self.title);
        let cards = self
            .cards
            .iter()
            .map(|c| card(c.id, c.stat, c.show_description))
            .collect();
        (head, cards)
    }
}

/// True when at least one identifier resolves to a present value.
pub fn at_least_one_stat<V, S: AsRef<str>>(result: &AnalysisResult<V>, ids: &[S]) -> bool {
    ids.iter().any(|id| result.is_present(id.as_ref()))
}

/// Build the stat group for `ids`, or `None` if none of them are present.
pub fn stat_group<'a, V, S: AsRef<str>>(
    title: &'a str,
    result: &'a AnalysisResult<V>,
    ids: &'a [S],
    show_descriptions: bool,
) -> Option<StatGroup<'a, V>> {
    if !at_least_one_stat(result, ids) {
        return None;
    }

    let cards = ids
        .iter()
        .filter_map(|id| {
            let id = id.as_ref();
            result.get(id).map(|stat| StatCard {
                id,
                stat,
                show_description: show_descriptions,
            })
        })
        .collect();

    Some(StatGroup { title, cards })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::StatValue;

    fn xray(pairs: &[(&str, i64)]) -> AnalysisResult {
        pairs
            .iter()
            .map(|(id, v)| (id.to_string(), StatValue::new(*id, *v)))
            .collect()
    }

    #[test]
    fn test_all_absent_renders_nothing() {
        let result = xray(&[("count", 10)]);
        assert!(stat_group("Overview", &result, &["mean", "median"], true).is_none());
        assert!(!at_least_one_stat(&result, &["mean", "median"]));
    }

    #[test]
    fn test_empty_identifier_list_renders_nothing() {
        let result = xray(&[("count", 10)]);
        let ids: [&str; 0] = [];
        assert!(stat_group("Overview", &result, &ids, false).is_none());
    }

    #[test]
    fn test_present_subset_in_order() {
        let result = xray(&[("a", 1), ("c", 3)]);
        let ids = ["a", "b", "c"];
        let group = stat_group("Title", &result, &ids, false).unwrap();
        assert_eq!(group.title, "Title");
        assert_eq!(group.ids().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_explicit_null_is_skipped() {
        let mut result = xray(&[("a", 1)]);
        result.insert("b", None);
        let ids = ["b", "a"];
        let group = stat_group("T", &result, &ids, true).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.cards[0].id, "a");
    }

    #[test]
    fn test_zero_valued_stat_counts_as_present() {
        let result = xray(&[("nulls", 0)]);
        let group = stat_group("T", &result, &["nulls"], false).unwrap();
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_flag_passed_to_every_card() {
        let result = xray(&[("a", 1), ("b", 2), ("c", 3)]);
        let ids = ["c", "a", "b"];
        for flag in [true, false] {
            let group = stat_group("T", &result, &ids, flag).unwrap();
            assert!(group.cards.iter().all(|c| c.show_description == flag));
        }
    }

    #[test]
    fn test_duplicate_identifier_renders_twice() {
        let result = xray(&[("a", 1)]);
        let ids = ["a", "a"];
        let group = stat_group("T", &result, &ids, false).unwrap();
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_render_with_delegates_in_order() {
        let result = xray(&[("count", 10), ("distinct", 3)]);
        let ids = ["count", "nulls", "distinct"];
        let group = stat_group("Summary", &result, &ids, false).unwrap();
        let (head, cards) = group.render_with(
            |title| format!("# {title}"),
            |id, stat, show| format!("{}={} ({show})", stat.label_or(id), stat.value),
        );
        assert_eq!(head, "# Summary");
        assert_eq!(cards, vec!["count=10 (false)", "distinct=3 (false)"]);
    }

    #[test]
    fn test_visibility_matches_at_least_one_stat() {
        let result = xray(&[("a", 1), ("c", 0)]);
        let cases: [&[&str]; 4] = [&[], &["b"], &["b", "c"], &["a", "b", "c"]];
        for ids in cases {
            assert_eq!(
                stat_group("T", &result, ids, false).is_some(),
                at_least_one_stat(&result, ids)
            );
        }
    }

    #[test]
    fn test_unlabeled_stat_renders_with_identifier() {
        let result: AnalysisResult = vec![("count".to_string(), StatValue::unlabeled(10i64))]
            .into_iter()
            .collect();
        let group = stat_group("Summary", &result, &["count"], false).unwrap();
        let (_, cards) = group.render_with(
            |title| title.to_string(),
            |id, stat, _| format!("{}={}", stat.label_or(id), stat.value),
        );
        assert_eq!(cards, vec!["count=10"]);
    }
}
