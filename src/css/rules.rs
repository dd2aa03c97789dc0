//! CSS rule accumulation and serialization.
//!
//! Rules are keyed by `(media query, selector)`. Writing to an existing key
//! merges properties: a property written twice keeps the last value, new
//! properties are appended. Keys never merge with each other.

use indexmap::IndexMap;

/// Compound identity of an accumulated rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey {
    /// At-rule prelude (e.g., "@media (min-width: 540px)")
    pub media_query: String,
    /// Full selector text
    pub selector: String,
}

impl RuleKey {
    /// Creates a rule key.
    pub fn new(media_query: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            media_query: media_query.into(),
            selector: selector.into(),
        }
    }
}

/// Ordered CSS declarations of one rule.
pub type Declarations = IndexMap<String, String>;

/// Deduplicating map of generated CSS rules.
///
/// Insertion order is preserved, so rules serialize in the order their key
/// was first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleAccumulator {
    rules: IndexMap<RuleKey, Declarations>,
}

impl RuleAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `properties` into the rule for `(media_query, selector)`.
    pub fn add_rule<I, K, V>(&mut self, media_query: &str, selector: &str, properties: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let declarations = self
            .rules
            .entry(RuleKey::new(media_query, selector))
            .or_default();

        for (property, value) in properties {
            declarations.insert(property.into(), value.into());
        }
    }

    /// Returns the declarations stored for a key.
    pub fn get(&self, media_query: &str, selector: &str) -> Option<&Declarations> {
        self.rules.get(&RuleKey::new(media_query, selector))
    }

    /// Iterates over rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleKey, &Declarations)> {
        self.rules.iter()
    }

    /// Number of distinct rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule has been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Serializes the rules grouped by media query.
    ///
    /// Groups appear in the order their media query was first used; inside a
    /// group each selector produces one block.
    pub fn to_css(&self) -> String {
        let mut groups: IndexMap<&str, Vec<String>> = IndexMap::new();

        for (key, declarations) in &self.rules {
            let body = declarations
                .iter()
                .map(|(property, value)| format!("  {property}: {value};"))
                .collect::<Vec<_>>()
                .join("\n");

            groups
                .entry(key.media_query.as_str())
                .or_default()
                .push(format!("{} {{\n{body}\n}}", key.selector));
        }

        let mut css = String::new();
        for (media_query, blocks) in groups {
            css.push('\n');
            css.push_str(media_query);
            css.push_str(" {\n");
            css.push_str(&blocks.join("\n\n"));
            css.push_str("\n}\n");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MQ: &str = "@media (min-width: 540px)";

    #[test]
    fn test_last_write_wins_and_properties_accumulate() {
        let mut rules = RuleAccumulator::new();
        rules.add_rule(MQ, "lay-out", [("--a", "1"), ("--b", "2")]);
        rules.add_rule(MQ, "lay-out", [("--a", "3"), ("--c", "4")]);

        assert_eq!(rules.len(), 1);
        let declarations = rules.get(MQ, "lay-out").unwrap();
        let entries: Vec<_> = declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(entries, vec![("--a", "3"), ("--b", "2"), ("--c", "4")]);
    }

    #[test]
    fn test_keys_with_delimiter_text_do_not_collide() {
        let mut rules = RuleAccumulator::new();
        rules.add_rule("@media a::b", "c", [("--x", "1")]);
        rules.add_rule("@media a", "b::c", [("--x", "2")]);

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get("@media a::b", "c").unwrap()["--x"], "1");
        assert_eq!(rules.get("@media a", "b::c").unwrap()["--x"], "2");
    }

    #[test]
    fn test_to_css_groups_by_media_query() {
        let mut rules = RuleAccumulator::new();
        rules.add_rule(MQ, "a", [("--x", "1")]);
        rules.add_rule("@media (min-width: 720px)", "a", [("--x", "2")]);
        rules.add_rule(MQ, "b", [("--y", "1"), ("--z", "2")]);

        assert_eq!(
            rules.to_css(),
            "\n@media (min-width: 540px) {\na {\n  --x: 1;\n}\n\nb {\n  --y: 1;\n  --z: 2;\n}\n}\n\
             \n@media (min-width: 720px) {\na {\n  --x: 2;\n}\n}\n"
        );
    }

    #[test]
    fn test_empty_accumulator_serializes_to_nothing() {
        let mut rules = RuleAccumulator::new();
        assert_eq!(rules.to_css(), "");

        rules.add_rule(MQ, "a", [("--x", "1")]);
        rules.clear();
        assert!(rules.is_empty());
    }
}
