//! Layout references from a breakpoint's `layouts` list.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A reference from a breakpoint to the pattern variants it enables.
///
/// In `layout.config` a bare string names a whole family and an object maps
/// families to the variant ids it wants:
///
/// ```json
/// "layouts": ["columns", { "grid": ["3a", "3c"] }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutReference {
    /// Every variant currently loaded for the family
    AllVariants(String),
    /// Only the named variants (bare or composite ids)
    SpecificVariants(String, Vec<String>),
}

impl LayoutReference {
    /// Returns the referenced family key.
    pub fn family(&self) -> &str {
        match self {
            Self::AllVariants(family) | Self::SpecificVariants(family, _) => family,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLayoutReference {
    Family(String),
    Variants(IndexMap<String, Vec<String>>),
}

/// Deserializes a `layouts` list, splitting multi-family objects into one
/// reference per family in object order.
pub fn deserialize_layout_references<'de, D>(
    deserializer: D,
) -> Result<Vec<LayoutReference>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawLayoutReference>>::deserialize(deserializer)?.unwrap_or_default();

    let mut references = Vec::with_capacity(raw.len());
    for entry in raw {
        match entry {
            RawLayoutReference::Family(family) => {
                references.push(LayoutReference::AllVariants(family));
            }
            RawLayoutReference::Variants(map) => {
                references.extend(
                    map.into_iter()
                        .map(|(family, ids)| LayoutReference::SpecificVariants(family, ids)),
                );
            }
        }
    }

    Ok(references)
}
