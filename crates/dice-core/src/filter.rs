//! OR-combined filtering over triple fields

use std::collections::HashSet;

use crate::Triple;

/// Filter criteria over the five triple fields
///
/// A triple matches when ANY of its fields is a member of the corresponding
/// set. An empty set constrains nothing and matches nothing, so the default
/// filter selects no triples.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TripleFilter {
    /// Include triples whose head is in this set
    pub head: HashSet<String>,

    /// Include triples whose arc is in this set
    pub arc: HashSet<String>,

    /// Include triples whose tail is in this set
    pub tail: HashSet<String>,

    /// Include triples whose tail type (`entity` / `value`) is in this set
    pub tail_type: HashSet<String>,

    /// Include triples whose source is in this set
    pub source: HashSet<String>,
}

impl TripleFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add head entities
    pub fn with_heads<I, S>(mut self, heads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.head.extend(heads.into_iter().map(Into::into));
        self
    }

    /// Add arcs
    pub fn with_arcs<I, S>(mut self, arcs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arc.extend(arcs.into_iter().map(Into::into));
        self
    }

    /// Add tails
    pub fn with_tails<I, S>(mut self, tails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tail.extend(tails.into_iter().map(Into::into));
        self
    }

    /// Add tail types
    pub fn with_tail_types<I, S>(mut self, tail_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tail_type.extend(tail_types.into_iter().map(Into::into));
        self
    }

    /// Add sources
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source.extend(sources.into_iter().map(Into::into));
        self
    }

    /// True when every field set is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_empty()
            && self.arc.is_empty()
            && self.tail.is_empty()
            && self.tail_type.is_empty()
            && self.source.is_empty()
    }

    /// Check one triple, testing head, arc, tail, tail type, then source
    pub fn matches(&self, triple: &Triple) -> bool {
        self.head.contains(&triple.head)
            || self.arc.contains(&triple.arc)
            || self.tail.contains(&triple.tail)
            || self.tail_type.contains(triple.tail_type.as_str())
            || self.source.contains(&triple.source)
    }
}

/// Return the triples matching `filter`, in their original order
pub fn filter_triples<'a>(triples: &'a [Triple], filter: &TripleFilter) -> Vec<&'a Triple> {
    if filter.is_empty() {
        return Vec::new();
    }

    triples.iter().filter(|t| filter.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TailType;

    fn sample() -> Vec<Triple> {
        vec![
            Triple::new("apple", "type", "fruit", TailType::Entity, "usda"),
            Triple::new("apple", "calories", "52", TailType::Value, "usda"),
            Triple::new("pear", "type", "fruit", TailType::Entity, "off"),
            Triple::new("kale", "calories", "49", TailType::Value, "off"),
            Triple::new("apple", "type", "fruit", TailType::Entity, "usda"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let triples = sample();
        assert!(filter_triples(&triples, &TripleFilter::new()).is_empty());
    }

    #[test]
    fn test_head_filter_preserves_order_and_duplicates() {
        let triples = sample();
        let filter = TripleFilter::new().with_heads(["apple"]);
        let result = filter_triples(&triples, &filter);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|t| t.head == "apple"));
        assert_eq!(result[0], &triples[0]);
        assert_eq!(result[1], &triples[1]);
        assert_eq!(result[2], &triples[4]);
    }

    #[test]
    fn test_or_semantics_include_each_triple_once() {
        let triples = sample();
        // Triple 0 matches on both head and arc, it must appear once.
        let filter = TripleFilter::new()
            .with_heads(["apple"])
            .with_arcs(["type"]);
        let result = filter_triples(&triples, &filter);
        assert_eq!(result.len(), 4);
        assert_eq!(result[2].head, "pear");
    }

    #[test]
    fn test_tail_type_and_source_filters() {
        let triples = sample();

        let values = filter_triples(&triples, &TripleFilter::new().with_tail_types(["value"]));
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|t| t.tail_type == TailType::Value));

        let off = filter_triples(&triples, &TripleFilter::new().with_sources(["off"]));
        let heads: Vec<&str> = off.iter().map(|t| t.head.as_str()).collect();
        assert_eq!(heads, vec!["pear", "kale"]);
    }

    #[test]
    fn test_unknown_values_match_nothing() {
        let triples = sample();
        let filter = TripleFilter::new()
            .with_tails(["banana"])
            .with_tail_types(["literal"]);
        assert!(filter_triples(&triples, &filter).is_empty());
    }
}
