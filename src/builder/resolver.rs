//! Breakpoint resolution and per-variant rule generation.
//!
//! Each breakpoint pass expands its layout references into concrete variants
//! (deduplicated within the pass) and writes their rules into the shared
//! [`RuleAccumulator`].

use std::collections::HashSet;

use crate::constants::ITEMS_COUNT_FAMILY;
use crate::css::RuleAccumulator;
use crate::models::{LayoutPattern, LayoutReference, PatternFamily};
use crate::registry::PatternRegistry;

/// A variant selected for a breakpoint, with the family it came from.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVariant<'a> {
    /// Owning family
    pub family: &'a PatternFamily,
    /// Selected pattern
    pub pattern: &'a LayoutPattern,
}

/// Expands layout references against a registry.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointResolver<'a> {
    registry: &'a PatternRegistry,
}

impl<'a> BreakpointResolver<'a> {
    /// Creates a resolver over a loaded registry.
    pub fn new(registry: &'a PatternRegistry) -> Self {
        Self { registry }
    }

    /// Expands references into variants for one breakpoint pass.
    ///
    /// Each `(family, variant)` pair is returned at most once no matter how
    /// many references cover it. Unknown families and variants are logged
    /// and skipped.
    pub fn expand(&self, references: &[LayoutReference]) -> Vec<ResolvedVariant<'a>> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut variants = Vec::new();

        for reference in references {
            let Some(family) = self.registry.find(reference.family()) else {
                tracing::warn!("⚠ Layout '{}' not found", reference.family());
                continue;
            };

            let selected: Vec<&LayoutPattern> = match reference {
                LayoutReference::AllVariants(_) => family.patterns.iter().collect(),
                LayoutReference::SpecificVariants(_, ids) => ids
                    .iter()
                    .filter_map(|id| {
                        let pattern = family.find_variant(id);
                        if pattern.is_none() {
                            tracing::warn!(
                                "⚠ Layout variant '{id}' not found in {}",
                                family.key
                            );
                        }
                        pattern
                    })
                    .collect(),
            };

            for pattern in selected {
                if seen.insert((family.key.as_str(), pattern.original_id.as_str())) {
                    variants.push(ResolvedVariant { family, pattern });
                }
            }
        }

        variants
    }
}

/// Writes the CSS rules of resolved variants for one breakpoint.
#[derive(Debug, Clone, Copy)]
pub struct RuleGenerator<'a> {
    /// Element tag (e.g., "lay-out")
    pub element: &'a str,
    /// Breakpoint name, used as the attribute name
    pub breakpoint: &'a str,
    /// At-rule prelude the rules are grouped under
    pub media_query: &'a str,
}

impl RuleGenerator<'_> {
    /// Emits rules for `variants` into `rules`.
    ///
    /// The family reset block is written once per family per call, before
    /// the first variant of that family.
    pub fn emit(&self, variants: &[ResolvedVariant<'_>], rules: &mut RuleAccumulator) {
        let mut reset_families: HashSet<&str> = HashSet::new();

        for variant in variants {
            let prefix = variant.family.prefix.as_str();

            if reset_families.insert(prefix) {
                let family_selector = format!(
                    "{}[{}*=\"{prefix}(\"]",
                    self.element, self.breakpoint
                );
                rules.add_rule(self.media_query, &family_selector, [("--_ga", "initial")]);
                rules.add_rule(
                    self.media_query,
                    &format!("{family_selector} > *"),
                    [("--layout-ga", "auto")],
                );
            }

            self.emit_variant(variant, rules);
        }
    }

    fn emit_variant(&self, variant: &ResolvedVariant<'_>, rules: &mut RuleAccumulator) {
        let pattern = variant.pattern;
        let base = format!(
            "{}[{}=\"{}\"]",
            self.element,
            self.breakpoint,
            variant.family.composite_id(&pattern.original_id)
        );

        let mut container: Vec<(&str, String)> = Vec::new();
        if let Some(columns) = &pattern.columns {
            container.push(("--layout-gtc", columns.clone()));
        }
        if let Some(rows) = &pattern.rows {
            container.push(("--layout-gtr", rows.clone()));
        }
        if variant.family.prefix == ITEMS_COUNT_FAMILY {
            if let Some(items) = pattern.items {
                container.push(("--_ci", items.to_string()));
            }
        }
        if !container.is_empty() {
            rules.add_rule(self.media_query, &base, container);
        }

        for rule in &pattern.rules {
            let selector = rewrite_selector(&rule.selector, &base, self.element);
            tracing::debug!("{} {selector}", self.media_query);
            rules.add_rule(
                self.media_query,
                &selector,
                rule.properties.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
    }
}

/// Rewrites a pattern-relative selector against the variant's base selector.
///
/// # Examples
///
/// ```
/// use laybuild::builder::rewrite_selector;
///
/// let base = r#"lay-out[md="grid(3c)"]"#;
/// assert_eq!(rewrite_selector("&", base, "lay-out"), base);
/// assert_eq!(rewrite_selector("&>*", base, "lay-out"), format!("{base} > *"));
/// assert_eq!(rewrite_selector("&:hover", base, "lay-out"), format!("{base}:hover"));
/// assert_eq!(
///     rewrite_selector("*:nth-of-type(1)", base, "lay-out"),
///     format!("{base} > *:nth-of-type(1)")
/// );
/// ```
pub fn rewrite_selector(selector: &str, base: &str, element: &str) -> String {
    if selector == "&" || selector == "root" || selector == element {
        base.to_string()
    } else if selector == "&>*" {
        format!("{base} > *")
    } else if let Some(rest) = selector.strip_prefix('&') {
        format!("{base}{rest}")
    } else {
        format!("{base} > {selector}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_pattern_str;

    const MQ: &str = "@media (min-width: 720px)";

    fn registry() -> PatternRegistry {
        let mut registry = PatternRegistry::new();
        registry.insert(
            parse_pattern_str(
                "grid",
                r#"{ "prefix": "grid", "layouts": [
                    { "id": "3a", "columns": "1fr 1fr 1fr" },
                    { "id": "3c", "columns": "2fr 1fr", "items": 3,
                      "rules": [{ "selector": "*:nth-of-type(1)", "properties": { "--layout-ga": "1 / 1 / 3 / 2" } }] }
                ] }"#,
            )
            .unwrap(),
        );
        registry.insert(
            parse_pattern_str(
                "columns",
                r#"{ "prefix": "columns", "layouts": [{ "id": "2", "columns": "1fr 1fr", "items": 2 }] }"#,
            )
            .unwrap(),
        );
        registry
    }

    fn ids(variants: &[ResolvedVariant<'_>]) -> Vec<String> {
        variants.iter().map(|v| v.pattern.id.clone()).collect()
    }

    #[test]
    fn test_expand_all_variants() {
        let registry = registry();
        let variants = BreakpointResolver::new(&registry)
            .expand(&[LayoutReference::AllVariants("grid".to_string())]);
        assert_eq!(ids(&variants), vec!["grid(3a)", "grid(3c)"]);
    }

    #[test]
    fn test_expand_dedups_overlapping_references() {
        let registry = registry();
        let variants = BreakpointResolver::new(&registry).expand(&[
            LayoutReference::SpecificVariants("grid".to_string(), vec!["grid(3c)".to_string()]),
            LayoutReference::AllVariants("grid".to_string()),
            LayoutReference::SpecificVariants("grid".to_string(), vec!["3a".to_string()]),
        ]);
        assert_eq!(ids(&variants), vec!["grid(3c)", "grid(3a)"]);
    }

    #[test]
    fn test_expand_skips_unknowns() {
        let registry = registry();
        let variants = BreakpointResolver::new(&registry).expand(&[
            LayoutReference::AllVariants("bento".to_string()),
            LayoutReference::SpecificVariants(
                "grid".to_string(),
                vec!["9z".to_string(), "3a".to_string()],
            ),
        ]);
        assert_eq!(ids(&variants), vec!["grid(3a)"]);
    }

    #[test]
    fn test_emit_rules() {
        let registry = registry();
        let variants = BreakpointResolver::new(&registry).expand(&[
            LayoutReference::AllVariants("grid".to_string()),
            LayoutReference::AllVariants("columns".to_string()),
        ]);
        let mut rules = RuleAccumulator::new();
        RuleGenerator {
            element: "lay-out",
            breakpoint: "lg",
            media_query: MQ,
        }
        .emit(&variants, &mut rules);

        assert_eq!(rules.get(MQ, r#"lay-out[lg*="grid("]"#).unwrap()["--_ga"], "initial");
        assert_eq!(
            rules.get(MQ, r#"lay-out[lg*="grid("] > *"#).unwrap()["--layout-ga"],
            "auto"
        );

        let grid = rules.get(MQ, r#"lay-out[lg="grid(3c)"]"#).unwrap();
        assert_eq!(grid["--layout-gtc"], "2fr 1fr");
        assert!(!grid.contains_key("--_ci"));

        let columns = rules.get(MQ, r#"lay-out[lg="columns(2)"]"#).unwrap();
        assert_eq!(columns["--_ci"], "2");

        assert_eq!(
            rules
                .get(MQ, r#"lay-out[lg="grid(3c)"] > *:nth-of-type(1)"#)
                .unwrap()["--layout-ga"],
            "1 / 1 / 3 / 2"
        );

        // 2 resets per family + grid(3a) + grid(3c) + its rule + columns(2)
        assert_eq!(rules.len(), 8);
    }

    #[test]
    fn test_rewrite_selector_element_alias() {
        assert_eq!(rewrite_selector("root", "B", "lay-out"), "B");
        assert_eq!(rewrite_selector("lay-out", "B", "lay-out"), "B");
        assert_eq!(rewrite_selector("& > img", "B", "lay-out"), "B > img");
    }
}
