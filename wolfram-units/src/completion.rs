//! Unit completion - narrow, filter, rank, paginate
//!
//! A request completes either `from_unit` or `to_unit`. When the other
//! argument already holds a value, suggestions are restricted to that
//! value's category; an unrecognised value yields no suggestions at all.
//!
//! Matches are case-insensitive substrings ranked in three tiers:
//! exact, prefix, then anywhere else. Exact matches keep taxonomy order so
//! the conventional spelling leads (`m` before `M`); the other tiers are
//! sorted ascending.

use std::collections::BTreeMap;
use serde::Serialize;
use tracing::trace;
use crate::taxonomy::UnitEntry;
use crate::UnitTaxonomy;

/// Page size for completion results
pub const MAX_COMPLETIONS: usize = 20;

/// The two completable arguments of a unit conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitArgument {
    From,
    To,
}

impl UnitArgument {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "from_unit" => Some(UnitArgument::From),
            "to_unit" => Some(UnitArgument::To),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnitArgument::From => "from_unit",
            UnitArgument::To => "to_unit",
        }
    }

    /// The other side of the conversion
    pub fn sibling(self) -> Self {
        match self {
            UnitArgument::From => UnitArgument::To,
            UnitArgument::To => UnitArgument::From,
        }
    }
}

/// Argument values the client has already resolved
///
/// Unrelated entries (such as `value`) are carried but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionContext {
    arguments: BTreeMap<String, String>,
}

impl CompletionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.arguments.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Value chosen for the argument paired with `argument`, if any
    pub fn sibling_value(&self, argument: UnitArgument) -> Option<&str> {
        self.get(argument.sibling().name())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CompletionContext {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut ctx = CompletionContext::new();
        for (name, value) in iter {
            ctx.insert(name, value);
        }
        ctx
    }
}

/// One page of ranked suggestions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub values: Vec<String>,
    /// More matches exist beyond `values`
    pub has_more: bool,
}

impl Completion {
    pub fn empty() -> Self {
        Self::default()
    }

    fn paginate(ranked: Vec<&str>) -> Self {
        Completion {
            has_more: ranked.len() > MAX_COMPLETIONS,
            values: ranked
                .into_iter()
                .take(MAX_COMPLETIONS)
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Completion service over a validated taxonomy
///
/// Holds no per-request state; share it freely between concurrent requests.
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    taxonomy: UnitTaxonomy,
}

impl CompletionEngine {
    pub fn new(taxonomy: UnitTaxonomy) -> Self {
        CompletionEngine { taxonomy }
    }

    pub fn taxonomy(&self) -> &UnitTaxonomy {
        &self.taxonomy
    }

    /// Complete the argument named `argument_name`.
    ///
    /// Returns `None` when the argument is not a unit argument, which callers
    /// report as "nothing to offer" rather than as an error. A missing
    /// context behaves exactly like a context without the sibling entry.
    pub fn complete(
        &self,
        argument_name: &str,
        partial: &str,
        context: Option<&CompletionContext>,
    ) -> Option<Completion> {
        let argument = UnitArgument::parse(argument_name)?;
        let sibling = context.and_then(|ctx| ctx.sibling_value(argument));
        Some(self.complete_for(argument, partial, sibling))
    }

    /// Complete `argument` given the sibling's current value.
    ///
    /// Surrounding whitespace is ignored on both `partial` and `sibling`.
    /// An empty sibling counts as unset, but one made only of whitespace is
    /// a chosen value that names no unit.
    pub fn complete_for(
        &self,
        argument: UnitArgument,
        partial: &str,
        sibling: Option<&str>,
    ) -> Completion {
        let sibling = sibling.filter(|s| !s.is_empty()).map(str::trim);

        let pool: Vec<&UnitEntry> = match sibling {
            None => self.taxonomy.entries().collect(),
            Some(unit) => match self.taxonomy.resolve_category(unit) {
                Some(category) => {
                    trace!(argument = argument.name(), sibling = unit,
                        category = category.name(), "narrowed to sibling category");
                    category.entries().iter().collect()
                }
                None => {
                    trace!(argument = argument.name(), sibling = unit,
                        "sibling unit not recognised");
                    return Completion::empty();
                }
            },
        };

        let query = partial.trim().to_lowercase();
        if query.is_empty() {
            let mut all: Vec<&str> = pool.iter().map(|e| e.name.as_str()).collect();
            all.sort_unstable();
            return Completion::paginate(all);
        }

        Completion::paginate(rank(&pool, &query))
    }
}

/// Filter `pool` to entries containing `query` and order them by tier.
/// `query` must already be lowercased. Exact matches stay in pool order.
fn rank<'a>(pool: &[&'a UnitEntry], query: &str) -> Vec<&'a str> {
    let mut exact = Vec::new();
    let mut prefix = Vec::new();
    let mut substring = Vec::new();

    for &entry in pool {
        match entry.folded.find(query) {
            None => {}
            Some(_) if entry.folded == query => exact.push(entry.name.as_str()),
            Some(0) => prefix.push(entry.name.as_str()),
            Some(_) => substring.push(entry.name.as_str()),
        }
    }

    prefix.sort_unstable();
    substring.sort_unstable();

    exact.extend(prefix);
    exact.extend(substring);
    exact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CompletionEngine {
        CompletionEngine::new(UnitTaxonomy::builtin().unwrap())
    }

    fn complete(argument: &str, partial: &str, ctx: Option<&CompletionContext>) -> Completion {
        engine().complete(argument, partial, ctx).expect("unit argument")
    }

    fn position(c: &Completion, unit: &str) -> usize {
        c.values
            .iter()
            .position(|v| v == unit)
            .unwrap_or_else(|| panic!("'{}' not in {:?}", unit, c.values))
    }

    #[test]
    fn test_argument_names() {
        assert_eq!(UnitArgument::parse("from_unit"), Some(UnitArgument::From));
        assert_eq!(UnitArgument::parse("to_unit"), Some(UnitArgument::To));
        assert_eq!(UnitArgument::parse("value"), None);
        assert_eq!(UnitArgument::From.sibling(), UnitArgument::To);
        assert_eq!(UnitArgument::To.sibling().name(), "from_unit");
    }

    #[test]
    fn test_other_argument_not_applicable() {
        assert!(engine().complete("some_param", "value", None).is_none());
        assert!(engine().complete("precision", "", None).is_none());
    }

    #[test]
    fn test_empty_query_returns_sorted_first_page() {
        let engine = engine();
        let result = engine.complete("from_unit", "", None).unwrap();

        let mut all: Vec<&str> = engine.taxonomy().units().collect();
        all.sort_unstable();
        let expected: Vec<String> = all[..MAX_COMPLETIONS].iter().map(|s| s.to_string()).collect();

        assert_eq!(result.values, expected);
        assert!(result.has_more);
        assert_eq!(result.values[0], "$");
    }

    #[test]
    fn test_ft_exact_match_first() {
        let result = complete("to_unit", "ft", None);
        assert_eq!(result.values[0], "ft");
        for unit in ["ft/s", "ftm"] {
            position(&result, unit);
        }
        assert!(!result.has_more);
    }

    #[test]
    fn test_meter_ranks_exact_before_others() {
        let result = complete("from_unit", "meter", None);
        assert_eq!(result.values[0], "meter");
        let meters = position(&result, "meters");
        let centimeter = position(&result, "centimeter");
        assert!(meters < centimeter);
        assert!(result.has_more);
    }

    #[test]
    fn test_feet_substring_matches() {
        let result = complete("to_unit", "feet", None);
        for unit in ["feet", "cubic_feet", "square_feet"] {
            position(&result, unit);
        }
    }

    #[test]
    fn test_case_insensitive_query() {
        let upper = complete("from_unit", "METER", None);
        let lower = complete("from_unit", "meter", None);
        assert!(!upper.values.is_empty());
        assert_eq!(upper, lower);

        let hz = complete("to_unit", "hz", None);
        position(&hz, "Hz");
        position(&hz, "kHz");
    }

    #[test]
    fn test_query_whitespace_ignored() {
        assert_eq!(complete("to_unit", "  ft ", None), complete("to_unit", "ft", None));
    }

    #[test]
    fn test_sibling_narrows_to_category() {
        let ctx = CompletionContext::new()
            .with_argument("from_unit", "foot")
            .with_argument("value", "100");
        let result = complete("to_unit", "m", Some(&ctx));

        assert_eq!(result.values[0], "m");
        position(&result, "meter");
        position(&result, "meters");
        assert!(!result.values.iter().any(|v| v == "minute" || v == "mph"));

        let taxonomy = UnitTaxonomy::builtin().unwrap();
        for unit in &result.values {
            assert_eq!(taxonomy.resolve_category(unit).unwrap().name(), "length");
        }
    }

    #[test]
    fn test_sibling_narrows_empty_query() {
        let ctx = CompletionContext::new().with_argument("to_unit", "kg");
        let result = complete("from_unit", "", Some(&ctx));
        let taxonomy = UnitTaxonomy::builtin().unwrap();
        let weight = taxonomy.category("weight").unwrap();

        assert_eq!(result.values.len(), MAX_COMPLETIONS);
        assert_eq!(result.has_more, weight.len() > MAX_COMPLETIONS);
        assert!(result.values.iter().all(|v| weight.contains(v)));
        assert!(result.values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_sibling_yields_nothing() {
        let ctx = CompletionContext::new()
            .with_argument("from_unit", "invalid_unit_xyz")
            .with_argument("value", "100");
        let result = complete("to_unit", "m", Some(&ctx));
        assert!(result.values.is_empty());
        assert!(!result.has_more);

        let empty_query = complete("to_unit", "", Some(&ctx));
        assert_eq!(empty_query, Completion::empty());
    }

    #[test]
    fn test_sibling_lookup_is_case_sensitive() {
        let ctx = CompletionContext::new().with_argument("from_unit", "FOOT");
        assert_eq!(complete("to_unit", "m", Some(&ctx)), Completion::empty());
    }

    #[test]
    fn test_context_without_sibling_uses_all_units() {
        let ctx = CompletionContext::new().with_argument("value", "100");
        let result = complete("from_unit", "fpm", Some(&ctx));
        assert_eq!(result.values, vec!["fpm".to_string()]);
        assert_eq!(result, complete("from_unit", "fpm", None));
    }

    #[test]
    fn test_empty_sibling_counts_as_unset() {
        let ctx = CompletionContext::new().with_argument("from_unit", "");
        assert_eq!(complete("to_unit", "min", Some(&ctx)), complete("to_unit", "min", None));
    }

    #[test]
    fn test_whitespace_sibling_yields_nothing() {
        let ctx = CompletionContext::new().with_argument("from_unit", "   ");
        assert_eq!(complete("to_unit", "m", Some(&ctx)), Completion::empty());
        assert_eq!(complete("to_unit", "", Some(&ctx)), Completion::empty());
    }

    #[test]
    fn test_own_argument_in_context_ignored() {
        // only the sibling narrows; the argument being completed does not
        let ctx = CompletionContext::new().with_argument("to_unit", "foot");
        let result = complete("to_unit", "minute", Some(&ctx));
        assert_eq!(result.values[0], "minute");
    }

    #[test]
    fn test_no_match() {
        let result = complete("to_unit", "xyzzy", None);
        assert!(result.values.is_empty());
        assert!(!result.has_more);
    }

    #[test]
    fn test_ranking_tiers() {
        let taxonomy = UnitTaxonomy::from_categories([(
            "length",
            vec!["xmeter", "meters", "Meter", "centimeter", "meter_b", "ameter"],
        )])
        .unwrap();
        let engine = CompletionEngine::new(taxonomy);
        let result = engine.complete("from_unit", "meter", None).unwrap();
        assert_eq!(
            result.values,
            vec!["Meter", "meter_b", "meters", "ameter", "centimeter", "xmeter"]
        );
    }

    #[test]
    fn test_ranking_law_on_builtin_table() {
        let engine = engine();
        for query in ["m", "l", "per", "°", "s", "kg", "ton"] {
            let result = engine.complete("to_unit", query, None).unwrap();
            let tier = |v: &String| {
                let folded = v.to_lowercase();
                if folded == query { 0 } else if folded.starts_with(query) { 1 } else { 2 }
            };
            for pair in result.values.windows(2) {
                let (a, b) = (tier(&pair[0]), tier(&pair[1]));
                assert!(a <= b, "{:?} before {:?} for '{}'", pair[0], pair[1], query);
                if a == b && a > 0 {
                    assert!(pair[0] < pair[1], "tier not sorted for '{}'", query);
                }
            }
        }
    }

    #[test]
    fn test_exact_case_variants_keep_taxonomy_order() {
        let result = complete("to_unit", "l", None);
        assert_eq!(&result.values[..2], &["L".to_string(), "l".to_string()]);
        assert!(result.has_more);

        for (query, expected) in [
            ("m", ["m", "M"]),
            ("kg", ["kg", "kG"]),
            ("s", ["s", "S"]),
            ("mv", ["mV", "MV"]),
        ] {
            let result = complete("to_unit", query, None);
            assert_eq!(&result.values[..2], &expected, "exact tier for '{}'", query);
        }
    }

    #[test]
    fn test_exact_tier_follows_pool_order() {
        let taxonomy = UnitTaxonomy::from_categories([
            ("first", vec!["x", "xa"]),
            ("second", vec!["X"]),
        ])
        .unwrap();
        let result = CompletionEngine::new(taxonomy).complete("to_unit", "x", None).unwrap();
        assert_eq!(result.values, vec!["x", "X", "xa"]);
    }

    #[test]
    fn test_has_more_only_past_page_size() {
        let units: Vec<String> = (0..MAX_COMPLETIONS).map(|i| format!("unit{:02}", i)).collect();
        let engine = CompletionEngine::new(UnitTaxonomy::from_categories([("x", units)]).unwrap());
        let full = engine.complete("to_unit", "unit", None).unwrap();
        assert_eq!(full.values.len(), MAX_COMPLETIONS);
        assert!(!full.has_more);

        let mut units: Vec<String> = (0..=MAX_COMPLETIONS).map(|i| format!("unit{:02}", i)).collect();
        units.reverse();
        let engine = CompletionEngine::new(UnitTaxonomy::from_categories([("x", units)]).unwrap());
        let over = engine.complete("to_unit", "", None).unwrap();
        assert_eq!(over.values.len(), MAX_COMPLETIONS);
        assert_eq!(over.values[0], "unit00");
        assert!(over.has_more);
    }

    #[test]
    fn test_idempotent() {
        let engine = engine();
        let ctx: CompletionContext = [("from_unit", "joule")].into_iter().collect();
        let first = engine.complete("to_unit", "kilo", Some(&ctx));
        let second = engine.complete("to_unit", "kilo", Some(&ctx));
        assert_eq!(first, second);
        assert!(first.unwrap().values.contains(&"kilojoule".to_string()));
    }

    #[test]
    fn test_serializes_has_more_camel_case() {
        let json = serde_json::to_value(Completion {
            values: vec!["m".to_string()],
            has_more: true,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"values": ["m"], "hasMore": true}));
    }
}
