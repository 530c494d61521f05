use std::collections::HashMap;

use tracing::debug;

use super::strip_parentheses;

/// Land borders keyed by country name, parsed from lines of the form
/// `Country = Neighbour 1,234 km; Other Neighbour 56 km (note)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderTable {
    entries: HashMap<String, Vec<String>>,
}

impl BorderTable {
    /// Parse the border list text.
    ///
    /// Lines without an `=` separator are skipped. A country with nothing
    /// after the separator is kept with an empty neighbour list. When a
    /// country appears twice the later line wins.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((country, neighbours)) = line.split_once('=') else {
                debug!(line = index + 1, "skipping border line without separator");
                continue;
            };

            let country = country.trim();
            if country.is_empty() {
                debug!(line = index + 1, "skipping border line without country name");
                continue;
            }

            let neighbours = parse_neighbours(neighbours);
            entries.insert(country.to_string(), neighbours);
        }

        Self { entries }
    }

    /// Build a table directly from `(country, neighbours)` pairs.
    pub fn from_entries<I, S, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        S: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(country, neighbours)| {
                    (
                        country.into(),
                        neighbours.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Neighbours declared for `country`, in source order.
    pub fn neighbours(&self, country: &str) -> Option<&[String]> {
        self.entries.get(country).map(Vec::as_slice)
    }

    /// Whether `country` is a key of the table.
    pub fn contains(&self, country: &str) -> bool {
        self.entries.contains_key(country)
    }

    /// Iterate over every country name in the table.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(country, neighbours)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(country, neighbours)| (country.as_str(), neighbours.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_neighbours(section: &str) -> Vec<String> {
    let cleaned = strip_parentheses(section);
    cleaned
        .split(';')
        .filter_map(neighbour_name)
        .collect()
}

/// Extract the neighbour name from one `;`-separated segment: every word up
/// to the first distance token.
fn neighbour_name(segment: &str) -> Option<String> {
    let words: Vec<&str> = segment
        .split_whitespace()
        .take_while(|word| !is_distance_token(word))
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn is_distance_token(word: &str) -> bool {
    if word.eq_ignore_ascii_case("km") {
        return true;
    }
    let digits = word.strip_suffix("km").unwrap_or(word);
    !digits.is_empty()
        && digits.starts_with(|c: char| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}
