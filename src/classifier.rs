//! Keyword-table theme classification
//!
//! Pure, deterministic lookup assigning thematic tags to an item by
//! case-insensitive substring matching of its content and attribution text
//! against an ordered `theme -> keywords` table. No learned model.

use crate::domain::entities::AttributedItem;

/// Tag assigned when no theme keyword matches.
pub const GENERAL_TAG: &str = "general";

/// Ordered keyword table. Table order defines which matching theme counts
/// as an item's primary tag.
pub type ThemeTable = Vec<(String, Vec<String>)>;

/// Theme classifier over an injectable keyword table.
#[derive(Clone, Debug)]
pub struct TagClassifier {
    table: ThemeTable,
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self {
            table: default_theme_table(),
        }
    }
}

impl TagClassifier {
    /// Build a classifier over a caller-supplied table, replacing the
    /// built-in themes entirely.
    pub fn with_table(table: ThemeTable) -> Self {
        Self { table }
    }

    /// All matching themes, in table order. Falls back to `["general"]`
    /// when nothing matches.
    pub fn classify(&self, item: &AttributedItem) -> Vec<String> {
        let haystack = format!("{} {}", item.content, item.owner_key).to_lowercase();

        let mut themes: Vec<String> = self
            .table
            .iter()
            .filter(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|kw| haystack.contains(&kw.to_lowercase()))
            })
            .map(|(theme, _)| theme.clone())
            .collect();

        if themes.is_empty() {
            themes.push(GENERAL_TAG.to_string());
        }
        themes
    }

    /// The item's primary theme: the first table theme that matches.
    pub fn primary_tag(&self, item: &AttributedItem) -> String {
        // classify never returns an empty list
        self.classify(item)
            .into_iter()
            .next()
            .unwrap_or_else(|| GENERAL_TAG.to_string())
    }
}

/// Built-in theme table. Treated strictly as configuration; callers with
/// domain-specific vocabularies should inject their own via `with_table`.
fn default_theme_table() -> ThemeTable {
    let themes: [(&str, &[&str]); 6] = [
        (
            "technology",
            &["software", "hardware", "digital", "computing", "cloud", "platform", "app"],
        ),
        (
            "science",
            &["research", "study", "experiment", "physics", "biology", "discovery"],
        ),
        (
            "business",
            &["market", "revenue", "startup", "company", "industry", "sales"],
        ),
        (
            "finance",
            &["bank", "investment", "stock", "trading", "fund", "currency"],
        ),
        (
            "health",
            &["medical", "health", "clinical", "patient", "therapy", "disease"],
        ),
        (
            "policy",
            &["government", "regulation", "law", "policy", "election", "court"],
        ),
    ];

    themes
        .iter()
        .map(|(theme, keywords)| {
            (
                theme.to_string(),
                keywords.iter().map(|kw| kw.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(content: &str) -> AttributedItem {
        AttributedItem::new(0, content, Some("feed".to_string()))
    }

    #[test]
    fn test_single_theme_match() {
        let classifier = TagClassifier::default();
        let tags = classifier.classify(&item("New software platform announced"));
        assert_eq!(tags, vec!["technology".to_string()]);
    }

    #[test]
    fn test_multiple_themes_in_table_order() {
        let classifier = TagClassifier::default();
        let tags = classifier.classify(&item("Research into trading software"));
        assert_eq!(
            tags,
            vec![
                "technology".to_string(),
                "science".to_string(),
                "finance".to_string()
            ]
        );
    }

    #[test]
    fn test_no_match_falls_back_to_general() {
        let classifier = TagClassifier::default();
        let tags = classifier.classify(&item("a quiet afternoon"));
        assert_eq!(tags, vec![GENERAL_TAG.to_string()]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = TagClassifier::default();
        let tags = classifier.classify(&item("CLINICAL TRIAL RESULTS"));
        assert_eq!(tags, vec!["health".to_string()]);
    }

    #[test]
    fn test_owner_text_participates_in_matching() {
        let classifier = TagClassifier::default();
        let mut it = item("untagged body");
        it.owner_key = "HealthWire Medical".to_string();
        assert_eq!(classifier.classify(&it), vec!["health".to_string()]);
    }

    #[test]
    fn test_injected_table_overrides_defaults() {
        let classifier = TagClassifier::with_table(vec![(
            "cooking".to_string(),
            vec!["recipe".to_string(), "oven".to_string()],
        )]);

        assert_eq!(
            classifier.classify(&item("a new oven recipe")),
            vec!["cooking".to_string()]
        );
        // default themes are gone
        assert_eq!(
            classifier.classify(&item("software platform")),
            vec![GENERAL_TAG.to_string()]
        );
    }

    #[test]
    fn test_primary_tag_is_first_match() {
        let classifier = TagClassifier::default();
        assert_eq!(
            classifier.primary_tag(&item("research into trading software")),
            "technology"
        );
        assert_eq!(classifier.primary_tag(&item("plain text")), GENERAL_TAG);
    }
}
