//! In-memory position → skills catalog.
//!
//! The catalog is built once at startup and shared read-only with every
//! request handler.  It answers two questions:
//! - [`Catalog::resolve`] — which skills belong to a free-text position
//! - [`Catalog::suggest`] — which canonical position names match a query

pub mod categories;
pub mod data;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::gateway::ApiError;

/// Maximum number of names returned by [`Catalog::suggest`].
pub const MAX_SUGGESTIONS: usize = 10;

/// Lowercase + trim, the form used for catalog keys.
pub fn normalize(position: &str) -> String {
    position.trim().to_lowercase()
}

/// Successful resolver result.
///
/// `position` echoes the caller's raw input, not the catalog's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsMatch {
    pub position: String,
    pub skills: Vec<String>,
    pub skills_count: usize,
}

/// Immutable skills catalog plus the canonical position listing.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Skill entries in definition order; the order is the substring
    /// fallback's tie-break.
    entries: Vec<(String, Vec<String>)>,
    /// Catalog key → index into `entries`.
    index: HashMap<String, usize>,
    /// Canonical (display-cased) position names.
    positions: Vec<String>,
}

impl Catalog {
    /// Build a catalog from `(key, skills)` pairs and a display listing.
    ///
    /// Keys are normalized on the way in.  If a key repeats, the first
    /// occurrence keeps its position and the last one's skills win, which
    /// is how a literal dictionary with a duplicate key behaves.
    pub fn new<K, S, P>(entries: impl IntoIterator<Item = (K, S)>, positions: P) -> Self
    where
        K: AsRef<str>,
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut ordered: Vec<(String, Vec<String>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (key, skills) in entries {
            let key = normalize(key.as_ref());
            let skills: Vec<String> = skills.into_iter().map(Into::into).collect();
            match index.get(&key) {
                Some(&i) => ordered[i].1 = skills,
                None => {
                    index.insert(key.clone(), ordered.len());
                    ordered.push((key, skills));
                }
            }
        }

        Self {
            entries: ordered,
            index,
            positions: positions.into_iter().map(Into::into).collect(),
        }
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        Self::new(
            data::JOB_SKILLS
                .iter()
                .map(|(key, skills)| (*key, skills.iter().copied())),
            data::COMMON_POSITIONS.iter().copied(),
        )
    }

    /// Canonical position names in listing order.
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    /// Number of skill entries (not of listed positions).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skills for an exact catalog key.
    pub fn skills(&self, key: &str) -> Option<&[String]> {
        self.index.get(key).map(|&i| self.entries[i].1.as_slice())
    }

    /// Resolve a free-text position to its skills.
    ///
    /// An exact key match wins.  Otherwise the first entry (in definition
    /// order) where either string contains the other is returned, so both
    /// "dev" and "senior software developer" find "software developer".
    pub fn resolve(&self, raw_position: &str) -> Result<SkillsMatch, ApiError> {
        let needle = normalize(raw_position);

        let hit = self.skills(&needle).or_else(|| {
            self.entries
                .iter()
                .find(|(key, _)| key.contains(needle.as_str()) || needle.contains(key.as_str()))
                .map(|(_, skills)| skills.as_slice())
        });

        match hit {
            Some(skills) => Ok(SkillsMatch {
                position: raw_position.to_string(),
                skills: skills.to_vec(),
                skills_count: skills.len(),
            }),
            None => {
                debug!(position = %raw_position, "no catalog entry matched");
                Err(ApiError::NotFound {
                    position: raw_position.to_string(),
                })
            }
        }
    }

    /// Up to [`MAX_SUGGESTIONS`] canonical names containing `query`,
    /// case-insensitively, in listing order.  Blank queries match nothing.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.positions
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> Catalog {
        Catalog::new(
            [("software developer", ["Python", "SQL"])],
            ["Software Developer"],
        )
    }

    #[test]
    fn exact_match_echoes_raw_input() {
        let m = single().resolve("Software Developer").unwrap();
        assert_eq!(
            m,
            SkillsMatch {
                position: "Software Developer".into(),
                skills: vec!["Python".into(), "SQL".into()],
                skills_count: 2,
            }
        );
    }

    #[test]
    fn input_is_trimmed_before_matching() {
        let m = single().resolve("  SOFTWARE developer \t").unwrap();
        assert_eq!(m.position, "  SOFTWARE developer \t");
        assert_eq!(m.skills_count, 2);
    }

    #[test]
    fn abbreviation_matches_longer_key() {
        let cat = Catalog::new([("developer", vec!["Git"])], Vec::<String>::new());
        assert_eq!(cat.resolve("dev").unwrap().skills, vec!["Git"]);
    }

    #[test]
    fn over_specified_query_matches_shorter_key() {
        let m = single().resolve("senior software developer").unwrap();
        assert_eq!(m.position, "senior software developer");
        assert_eq!(m.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn exact_match_beats_earlier_substring_match() {
        let cat = Catalog::new(
            [
                ("data engineer", vec!["Spark"]),
                ("engineer", vec!["Math"]),
            ],
            Vec::<String>::new(),
        );
        assert_eq!(cat.resolve("engineer").unwrap().skills, vec!["Math"]);
    }

    #[test]
    fn substring_fallback_is_first_match_in_definition_order() {
        let cat = Catalog::new(
            [
                ("backend developer", vec!["Go"]),
                ("frontend developer", vec!["CSS"]),
            ],
            Vec::<String>::new(),
        );
        assert_eq!(cat.resolve("developer").unwrap().skills, vec!["Go"]);
        assert_eq!(cat.resolve("frontend").unwrap().skills, vec!["CSS"]);
    }

    #[test]
    fn unmatched_position_is_not_found() {
        let err = single().resolve("astronaut").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref position } if position == "astronaut"));
    }

    #[test]
    fn duplicate_keys_keep_first_slot_last_skills() {
        let cat = Catalog::new(
            [
                ("a", vec!["1"]),
                ("b", vec!["2"]),
                ("A ", vec!["3"]),
            ],
            Vec::<String>::new(),
        );
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.skills("a"), Some(&["3".to_string()][..]));
        assert_eq!(cat.entries[0].0, "a");
    }

    #[test]
    fn blank_queries_suggest_nothing() {
        let cat = Catalog::builtin();
        assert!(cat.suggest("").is_empty());
        assert!(cat.suggest("   ").is_empty());
    }

    #[test]
    fn suggestions_are_capped_and_ordered() {
        let names: Vec<String> = (0..25).map(|i| format!("Role {i:02}")).collect();
        let cat = Catalog::new(Vec::<(String, Vec<String>)>::new(), names.clone());
        let got = cat.suggest("role");
        assert_eq!(got.len(), MAX_SUGGESTIONS);
        assert_eq!(got, names[..MAX_SUGGESTIONS].to_vec());
    }

    #[test]
    fn suggestions_are_case_insensitive_substrings() {
        let cat = Catalog::builtin();
        for q in ["DATA", "engineer", "an", "x", "Manager"] {
            let got = cat.suggest(q);
            assert!(got.len() <= MAX_SUGGESTIONS);
            for name in &got {
                assert!(name.to_lowercase().contains(&q.to_lowercase()), "{name} !~ {q}");
            }
            let expected: Vec<String> = cat
                .positions()
                .iter()
                .filter(|n| n.to_lowercase().contains(&q.to_lowercase()))
                .take(MAX_SUGGESTIONS)
                .cloned()
                .collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn query_whitespace_is_significant_once_non_blank() {
        let cat = Catalog::builtin();
        assert_eq!(cat.suggest(" scientist"), vec!["Data Scientist"]);
        assert!(cat.suggest("scientist ").is_empty());
    }
}
