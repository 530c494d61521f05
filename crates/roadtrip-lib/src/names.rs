//! Country name resolution.
//!
//! Two independent lookups live here: [`NameResolver`] maps a country name
//! onto the state identifier used by the capital distance table, and
//! [`normalize`] rewrites historical or alternate names typed by a user into
//! the spelling used by the border list.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ingest::StateTable;

/// Alternate spellings and superseded names, paired with the border list name.
pub const ALIASES: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    ("USA", "United States"),
    ("The Bahamas", "Bahamas, The"),
    ("Bahamas", "Bahamas, The"),
    ("The Gambia", "Gambia, The"),
    ("Gambia", "Gambia, The"),
    ("Surinam", "Suriname"),
    ("German Federal Republic", "Germany"),
    ("West Germany", "Germany"),
    ("Czech Republic", "Czechia"),
    ("Sardinia", "Italy"),
    ("Macedonia", "North Macedonia"),
    ("Former Yugoslav Republic of Macedonia", "North Macedonia"),
    ("Bosnia-Herzegovina", "Bosnia and Herzegovina"),
    ("Rumania", "Romania"),
    ("Soviet Union", "Russia"),
    ("Byelorussia", "Belarus"),
    ("Cote D\u{2019}Ivoire", "Cote d'Ivoire"),
    ("Ivory Coast", "Cote d'Ivoire"),
    ("Upper Volta", "Burkina Faso"),
    ("Congo", "Congo, Republic of the"),
    ("Republic of the Congo", "Congo, Republic of the"),
    ("Democratic Republic of Zaire", "Congo, Democratic Republic of the"),
    ("Zaire", "Congo, Democratic Republic of the"),
    ("Democratic Republic of the Congo", "Congo, Democratic Republic of the"),
    ("Tanganyika", "Tanzania"),
    ("Rhodesia", "Zimbabwe"),
    ("Swaziland", "Eswatini"),
    ("Persia", "Iran"),
    ("Ottoman Empire", "Turkey"),
    ("Turkiye", "Turkey"),
    ("Arab Republic of Yemen", "Yemen"),
    ("People's Republic of Korea", "Korea, North"),
    ("North Korea", "Korea, North"),
    ("Republic of Korea", "Korea, South"),
    ("South Korea", "Korea, South"),
    ("Myanmar", "Burma"),
    ("Ceylon", "Sri Lanka"),
    ("Kampuchea", "Cambodia"),
    ("Democratic Republic of Vietnam", "Vietnam"),
    ("East Timor", "Timor-Leste"),
];

static ALIAS_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    ALIASES
        .iter()
        .map(|(alias, canonical)| (alias.to_lowercase(), *canonical))
        .collect()
});

/// Map a user-supplied country name onto the border list spelling.
///
/// Matching ignores case and surrounding whitespace. Names that are not an
/// alias come back trimmed but otherwise unchanged.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    match ALIAS_INDEX.get(&trimmed.to_lowercase()) {
        Some(canonical) => (*canonical).to_string(),
        None => trimmed.to_string(),
    }
}

/// Case-insensitive name to state identifier lookup.
///
/// Built from every row of the state table, historical ones included. When a
/// name maps to several identifiers, a row valid at the snapshot date wins;
/// otherwise the later row wins.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    identifiers: HashMap<String, Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    identifier: String,
    current: bool,
}

impl NameResolver {
    pub fn from_states(states: &StateTable) -> Self {
        let mut identifiers: HashMap<String, Entry> = HashMap::new();
        for record in states.records() {
            let key = lookup_key(&record.name);
            let current = states.is_current_record(record);
            if let Some(existing) = identifiers.get(&key) {
                if existing.current && !current {
                    continue;
                }
            }
            identifiers.insert(
                key,
                Entry {
                    identifier: record.identifier.clone(),
                    current,
                },
            );
        }
        Self { identifiers }
    }

    /// Resolve a country name to its state identifier, or `None` when the
    /// name is unknown. A miss means no edge can be established for it.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.identifiers
            .get(&lookup_key(name))
            .map(|entry| entry.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Minimum similarity for a candidate to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Return up to `limit` candidates similar to `name`, best match first.
pub fn fuzzy_matches<'a, I>(candidates: I, name: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = name.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{StateRecord, SNAPSHOT_END_DATE};

    fn record(number: u32, identifier: &str, name: &str, end: &str) -> StateRecord {
        StateRecord {
            number,
            identifier: identifier.to_string(),
            name: name.to_string(),
            start: "1816-01-01".to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn normalize_maps_aliases_case_insensitively() {
        assert_eq!(normalize("Myanmar"), "Burma");
        assert_eq!(normalize("  zaire "), "Congo, Democratic Republic of the");
        assert_eq!(normalize("SOVIET UNION"), "Russia");
    }

    #[test]
    fn normalize_passes_unknown_names_through() {
        assert_eq!(normalize(" France "), "France");
    }

    #[test]
    fn alias_targets_are_never_aliases_themselves() {
        for (_, canonical) in ALIASES {
            assert!(
                !ALIAS_INDEX.contains_key(&canonical.to_lowercase()),
                "{canonical} is both a target and an alias"
            );
        }
    }

    #[test]
    fn resolve_ignores_case_and_whitespace() {
        let states = StateTable::from_records(
            vec![record(2, "USA", "United States of America", SNAPSHOT_END_DATE)],
            SNAPSHOT_END_DATE,
        );
        let resolver = NameResolver::from_states(&states);

        assert_eq!(resolver.resolve(" united states of america "), Some("USA"));
        assert_eq!(resolver.resolve("Canada"), None);
    }

    #[test]
    fn current_rows_take_precedence_over_historical_ones() {
        let states = StateTable::from_records(
            vec![
                record(679, "YEM", "Yemen", SNAPSHOT_END_DATE),
                record(678, "YAR", "Yemen", "1990-05-21"),
            ],
            SNAPSHOT_END_DATE,
        );
        let resolver = NameResolver::from_states(&states);

        assert_eq!(resolver.resolve("Yemen"), Some("YEM"));
    }

    #[test]
    fn historical_names_still_resolve() {
        let states = StateTable::from_records(
            vec![record(260, "GFR", "German Federal Republic", "1990-10-02")],
            SNAPSHOT_END_DATE,
        );
        let resolver = NameResolver::from_states(&states);

        assert_eq!(resolver.resolve("German Federal Republic"), Some("GFR"));
    }

    #[test]
    fn fuzzy_matches_rank_and_limit() {
        let candidates = ["Germany", "Ghana", "Guinea", "Guyana"];

        let matches = fuzzy_matches(candidates, "Germny", 3);
        assert_eq!(matches.first().map(String::as_str), Some("Germany"));

        assert!(fuzzy_matches(candidates, "Xyzzy", 3).is_empty());
        assert!(fuzzy_matches(candidates, "Guyna", 1).len() <= 1);
    }
}
