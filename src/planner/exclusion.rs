//! Exclusion filter
//!
//! Keyword rule tables (injury or allergy → banned lowercase substrings) and
//! the filters that drop catalog entries matching an active keyword.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::{ExerciseTemplate, MealTemplate, MicroExercise};

/// Keyword → banned-substring rule table
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    rules: BTreeMap<String, Vec<String>>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the banned substrings for a keyword
    pub fn with_rule(mut self, keyword: &str, banned: &[&str]) -> Self {
        self.rules.insert(
            keyword.trim().to_lowercase(),
            banned.iter().map(|b| b.to_lowercase()).collect(),
        );
        self
    }

    /// Same banned substrings under several keywords, e.g. singular and plural
    pub fn with_rules(self, keywords: &[&str], banned: &[&str]) -> Self {
        keywords
            .iter()
            .fold(self, |set, keyword| set.with_rule(keyword, banned))
    }

    /// Banned substrings for a keyword, `None` for keywords not in the table
    pub fn banned_for(&self, keyword: &str) -> Option<&[String]> {
        self.rules.get(keyword).map(Vec::as_slice)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// True when any active keyword bans a substring of `haystack`.
    /// `haystack` must already be lowercase; unknown keywords never match.
    pub fn excludes(&self, haystack: &str, active: &[String]) -> bool {
        active.iter().any(|keyword| {
            self.banned_for(keyword)
                .map_or(false, |banned| banned.iter().any(|b| haystack.contains(b.as_str())))
        })
    }
}

/// Lowercase text an exclusion rule is matched against
pub trait Haystack {
    fn haystack(&self) -> String;
}

impl Haystack for ExerciseTemplate {
    fn haystack(&self) -> String {
        self.name.to_lowercase()
    }
}

impl Haystack for MicroExercise {
    fn haystack(&self) -> String {
        self.name.to_lowercase()
    }
}

impl Haystack for MealTemplate {
    /// All item names joined by spaces
    fn haystack(&self) -> String {
        self.items
            .iter()
            .map(|item| item.name.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trim, lowercase and dedupe caller keywords, dropping empty ones
pub fn normalize_keywords<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(raw.len());
    for keyword in raw {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

/// Keep the entries no active keyword excludes, preserving order
pub fn filter_excluded<'a, T: Haystack>(
    pool: impl IntoIterator<Item = &'a T>,
    rules: &ExclusionSet,
    active: &[String],
) -> Vec<&'a T>
where
    T: 'a,
{
    pool.into_iter()
        .filter(|entry| !rules.excludes(&entry.haystack(), active))
        .collect()
}

/// Allergy-filtered meal pool
#[derive(Debug)]
pub struct AllergyFiltered<'a> {
    pub pool: Vec<&'a MealTemplate>,
    /// Every template was excluded and the unfiltered pool was kept instead
    pub fallback: bool,
}

/// Allergy filtering for single-meal generation. When the filter would empty
/// the pool, the full pool is returned and `fallback` is set.
pub fn filter_allergies_or_keep<'a>(
    templates: &'a [MealTemplate],
    rules: &ExclusionSet,
    allergies: &[String],
) -> AllergyFiltered<'a> {
    let safe = filter_excluded(templates, rules, allergies);
    debug!(
        total = templates.len(),
        safe = safe.len(),
        "applied allergy filter"
    );

    if safe.is_empty() && !templates.is_empty() {
        return AllergyFiltered {
            pool: templates.iter().collect(),
            fallback: true,
        };
    }

    AllergyFiltered {
        pool: safe,
        fallback: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MealItemTemplate;
    use crate::models::{Equipment, Intensity, Macros};

    fn rules() -> ExclusionSet {
        ExclusionSet::new()
            .with_rule("knee", &["squats", "Leg Press"])
            .with_rule("dairy", &["paneer", "yogurt"])
    }

    fn exercise(name: &str) -> ExerciseTemplate {
        ExerciseTemplate {
            name: name.to_string(),
            sets: Some(3),
            reps: None,
            duration_minutes: None,
            rest_seconds: Some(45),
            equipment: Equipment::None,
            instructions: String::new(),
            intensity: Intensity::Moderate,
        }
    }

    fn meal(name: &str, items: &[&str]) -> MealTemplate {
        MealTemplate {
            name: name.to_string(),
            items: items
                .iter()
                .map(|i| MealItemTemplate {
                    name: i.to_string(),
                    quantity: "1".to_string(),
                    macros: Macros::new(100.0, 5.0, 10.0, 2.0),
                })
                .collect(),
            instructions: String::new(),
            alternatives: String::new(),
        }
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let pool = vec![exercise("Barbell Squats"), exercise("LEG PRESS"), exercise("Plank")];
        let kept = filter_excluded(&pool, &rules(), &["knee".to_string()]);
        let names: Vec<&str> = kept.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Plank"]);
    }

    #[test]
    fn test_with_rules_shares_banned_list() {
        let set = ExclusionSet::new().with_rules(&["peanut", "Peanuts"], &["peanut"]);
        assert_eq!(set.banned_for("peanuts"), Some(&["peanut".to_string()][..]));
        assert!(set.excludes("roasted peanuts", &["peanut".to_string()]));
        assert!(set.excludes("peanut butter", &["peanuts".to_string()]));
    }

    #[test]
    fn test_unknown_keyword_is_noop() {
        let pool = vec![exercise("Barbell Squats"), exercise("Plank")];
        let kept = filter_excluded(&pool, &rules(), &["elbow".to_string()]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_meal_haystack_uses_item_names() {
        let dish = meal("Tikka Plate", &["Grilled Paneer", "Mint chutney"]);
        assert_eq!(dish.haystack(), "grilled paneer mint chutney");
        assert!(rules().excludes(&dish.haystack(), &["dairy".to_string()]));
    }

    #[test]
    fn test_allergy_fallback_only_when_everything_excluded() {
        let templates = vec![meal("A", &["paneer"]), meal("B", &["rice"])];
        let filtered = filter_allergies_or_keep(&templates, &rules(), &["dairy".to_string()]);
        assert!(!filtered.fallback);
        assert_eq!(filtered.pool.len(), 1);
        assert_eq!(filtered.pool[0].name, "B");

        let all_dairy = vec![meal("A", &["paneer"]), meal("B", &["greek yogurt"])];
        let filtered = filter_allergies_or_keep(&all_dairy, &rules(), &["dairy".to_string()]);
        assert!(filtered.fallback);
        assert_eq!(filtered.pool.len(), 2);
    }

    #[test]
    fn test_normalize_keywords() {
        let raw = [" Knee", "knee", "", "  ", "BACK"];
        assert_eq!(normalize_keywords(&raw), vec!["knee", "back"]);
    }
}
