//! Srcset strings and responsive-image `sizes` values.
//!
//! A srcset string records, per breakpoint, the width each child of a layout
//! occupies:
//!
//! ```text
//! default:100vw;540:50%;720:66.67%,33.33%,33.33%
//! ```
//!
//! Entries are keyed by a minimum viewport width in pixels (`720`), a pixel
//! range (`720-1023`), or `default`. A single width applies to every child; a
//! comma-separated list gives one width per child position.
//!
//! [`get_sizes_for_child`] turns a srcset string and a child index into a
//! `sizes` attribute, capping percentage widths at the maximum layout width:
//!
//! ```
//! use laybuild::srcset::{get_sizes_for_child, SizesOptions};
//!
//! let sizes = get_sizes_for_child(
//!     "default:100vw;720:66.67%,33.33%,33.33%",
//!     0,
//!     &SizesOptions::default(),
//! );
//! assert_eq!(sizes, "(min-width: 720px) min(66.67vw, 683px), 100vw");
//! ```

pub mod constraints;
pub mod map;

pub use constraints::LayoutConstraints;
pub use map::{LayoutSummary, LayoutsMap, LayoutsMapExport};

use indexmap::IndexMap;
use std::fmt;

use crate::config::{LayoutConfig, PixelConfig};
use crate::constants::{DEFAULT_MAX_LAYOUT_WIDTH, DEFAULT_SRCSET_WIDTH};
use crate::css::units::{length_to_px, parse_percentage};

/// Key of one srcset entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrcsetKey {
    /// Fallback below every breakpoint
    Default,
    /// Applies from this viewport width up
    MinWidth(u32),
    /// Applies between two viewport widths, inclusive
    Range(u32, u32),
}

impl SrcsetKey {
    /// Parses `default`, `N`, or `N-M`.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.eq_ignore_ascii_case("default") {
            return Some(Self::Default);
        }
        match key.split_once('-') {
            Some((min, max)) => Some(Self::Range(min.trim().parse().ok()?, max.trim().parse().ok()?)),
            None => key.parse().ok().map(Self::MinWidth),
        }
    }

    /// Lower pixel bound; `default` sorts below everything.
    pub fn min_px(self) -> Option<u32> {
        match self {
            Self::Default => None,
            Self::MinWidth(min) | Self::Range(min, _) => Some(min),
        }
    }

    /// Media condition for a `sizes` clause.
    pub fn media_condition(self) -> Option<String> {
        match self {
            Self::Default => None,
            Self::MinWidth(min) => Some(format!("(min-width: {min}px)")),
            Self::Range(min, max) => Some(format!("(min-width: {min}px) and (max-width: {max}px)")),
        }
    }
}

impl fmt::Display for SrcsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::MinWidth(min) => write!(f, "{min}"),
            Self::Range(min, max) => write!(f, "{min}-{max}"),
        }
    }
}

/// One `key:w1,w2,...` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcsetEntry {
    /// Entry key
    pub key: SrcsetKey,
    /// Widths by child position
    pub widths: Vec<String>,
}

impl SrcsetEntry {
    /// Width for a child position.
    pub fn width_for_child(&self, index: usize) -> &str {
        pick_width(&self.widths, index)
    }
}

/// A parsed srcset string.
///
/// Entry order is preserved, so parsing and re-serializing a well-formed
/// string yields the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Srcsets {
    entries: Vec<SrcsetEntry>,
}

impl Srcsets {
    /// Creates an empty srcset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a srcset string, skipping malformed entries.
    ///
    /// A legacy `@<max width>` suffix is ignored.
    pub fn parse(text: &str) -> Self {
        let text = text.split_once('@').map_or(text, |(entries, _)| entries);
        let mut srcsets = Self::new();

        for part in text.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let parsed = part.split_once(':').and_then(|(key, widths)| {
                let key = SrcsetKey::parse(key)?;
                let widths = split_widths(widths);
                widths
                    .iter()
                    .any(|width| !width.is_empty())
                    .then_some((key, widths))
            });

            match parsed {
                Some((key, widths)) => srcsets.insert(key, widths),
                None => tracing::debug!("Ignoring malformed srcset entry '{part}'"),
            }
        }

        srcsets
    }

    /// Sets the widths for a key, replacing an existing entry in place.
    pub fn insert(&mut self, key: SrcsetKey, widths: Vec<String>) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.widths = widths,
            None => self.entries.push(SrcsetEntry { key, widths }),
        }
    }

    /// Entries in stored order.
    pub fn entries(&self) -> &[SrcsetEntry] {
        &self.entries
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Widths of the `default` entry.
    pub fn default_widths(&self) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.key == SrcsetKey::Default)
            .map(|entry| entry.widths.as_slice())
    }

    /// Breakpoint entries, widest threshold first.
    pub fn breakpoints_descending(&self) -> Vec<&SrcsetEntry> {
        let mut breakpoints: Vec<&SrcsetEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.key != SrcsetKey::Default)
            .collect();
        breakpoints.sort_by(|a, b| b.key.min_px().cmp(&a.key.min_px()));
        breakpoints
    }

    /// Builds the `sizes` value for a child under the given constraints.
    ///
    /// Breakpoint clauses come first, widest threshold first, followed by
    /// the default width. An empty srcset yields `100vw`.
    pub fn sizes_for_child(&self, index: usize, constraints: &LayoutConstraints) -> String {
        if self.is_empty() {
            return DEFAULT_SRCSET_WIDTH.to_string();
        }

        let mut clauses: Vec<String> = self
            .breakpoints_descending()
            .into_iter()
            .filter_map(|entry| {
                let condition = entry.key.media_condition()?;
                Some(format!(
                    "{condition} {}",
                    constraints.apply(entry.width_for_child(index))
                ))
            })
            .collect();

        let default_width = self
            .default_widths()
            .map_or(DEFAULT_SRCSET_WIDTH, |widths| pick_width(widths, index));
        clauses.push(constraints.apply(default_width));

        clauses.join(", ")
    }

    /// Builds the `sizes` value for a child without width capping.
    pub fn to_plain_sizes(&self, index: usize) -> String {
        self.sizes_for_child(index, &LayoutConstraints::Unconstrained)
    }
}

impl fmt::Display for Srcsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}:{}", entry.key, entry.widths.join(","))?;
        }
        Ok(())
    }
}

/// Splits a width list, keeping empty slots so child positions stay aligned.
fn split_widths(list: &str) -> Vec<String> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(|width| width.trim().to_string()).collect()
}

fn pick_width(widths: &[String], index: usize) -> &str {
    let width = match widths.len() {
        0 => DEFAULT_SRCSET_WIDTH,
        1 => &widths[0],
        len => &widths[if index < len { index } else { index % len }],
    };
    if width.is_empty() {
        DEFAULT_SRCSET_WIDTH
    } else {
        width
    }
}

/// Width of a child from a comma-separated width list.
///
/// An empty list yields `100vw`, a single width applies to every child, and
/// indices past the end wrap around. An empty slot (`50%,,25%`) yields `100vw`
/// for its position.
pub fn get_width_for_child(list: &str, index: usize) -> String {
    pick_width(&split_widths(list), index).to_string()
}

/// Caps a percentage width at the maximum layout width.
///
/// `66.67%` with a `1024px` maximum becomes `min(66.67vw, 683px)`. Widths in
/// `vw` or other non-percentage units are returned unchanged. The maximum may
/// be in `px`, unitless, or `rem`; any other maximum leaves the plain `vw`
/// equivalent.
pub fn calculate_constrained_width(width: &str, max_layout_width: &str) -> String {
    if width.contains("vw") || !width.contains('%') {
        return width.to_string();
    }
    let Some(percent) = parse_percentage(width) else {
        return DEFAULT_SRCSET_WIDTH.to_string();
    };

    match length_to_px(max_layout_width) {
        Some(max_px) => {
            let capped = (max_px * (percent / 100.0)).round() as i64;
            format!("min({percent}vw, {capped}px)")
        }
        _ => format!("{percent}vw"),
    }
}

/// Options for [`get_sizes_for_child`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizesOptions {
    /// Maximum layout width used to cap percentage widths
    pub max_layout_width: String,
}

impl Default for SizesOptions {
    fn default() -> Self {
        Self {
            max_layout_width: DEFAULT_MAX_LAYOUT_WIDTH.to_string(),
        }
    }
}

impl SizesOptions {
    /// Options using the configured maximum layout width.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            max_layout_width: config.max_layout_width().to_string(),
        }
    }
}

/// Computes the `sizes` value for a child from a srcset string.
///
/// Empty or unparseable input yields `100vw`.
pub fn get_sizes_for_child(srcsets: &str, index: usize, options: &SizesOptions) -> String {
    Srcsets::parse(srcsets).sizes_for_child(
        index,
        &LayoutConstraints::MaxWidth(options.max_layout_width.clone()),
    )
}

/// Builds a srcset from a breakpoint → layout pattern map.
///
/// Entries are ordered by ascending pixel threshold. Breakpoints without a
/// pixel value, or whose pattern has no srcset, are left out. When two
/// breakpoints share a threshold, the one declared later wins.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use laybuild::config::PixelConfig;
/// use laybuild::srcset::{build_srcsets, LayoutSummary, LayoutsMap};
///
/// let mut layouts = LayoutsMap::new();
/// layouts.insert("columns(2)", LayoutSummary::with_srcset("50%"));
/// layouts.insert("grid(3c)", LayoutSummary::with_srcset("66.67%,33.33%,33.33%"));
///
/// let pixels = PixelConfig {
///     max_layout_width: "1024px".into(),
///     breakpoints: IndexMap::from([("md".to_string(), 540), ("lg".to_string(), 720)]),
/// };
/// let breakpoints = IndexMap::from([
///     ("lg".to_string(), "grid(3c)".to_string()),
///     ("md".to_string(), "columns(2)".to_string()),
/// ]);
///
/// assert_eq!(
///     build_srcsets(&breakpoints, &layouts, &pixels).to_string(),
///     "default:100vw;540:50%;720:66.67%,33.33%,33.33%"
/// );
/// ```
pub fn build_srcsets(
    breakpoints: &IndexMap<String, String>,
    layouts: &LayoutsMap,
    pixels: &PixelConfig,
) -> Srcsets {
    let mut resolved: Vec<(u32, &str, &str)> = breakpoints
        .iter()
        .filter_map(|(breakpoint, pattern)| {
            let px = pixels.pixels_for(breakpoint)?;
            let srcset = layouts.srcset_for(pattern)?;
            Some((px, breakpoint.as_str(), srcset))
        })
        .collect();
    resolved.sort_by_key(|(px, _, _)| *px);

    let mut srcsets = Srcsets::new();
    srcsets.insert(SrcsetKey::Default, vec![DEFAULT_SRCSET_WIDTH.to_string()]);
    for (px, breakpoint, srcset) in resolved {
        let key = SrcsetKey::MinWidth(px);
        if srcsets.entries().iter().any(|entry| entry.key == key) {
            tracing::debug!("Breakpoint '{breakpoint}' replaces the srcset already set at {px}px");
        }
        srcsets.insert(key, split_widths(srcset));
    }
    srcsets
}

/// Builds the srcset for `breakpoints` and returns the child's `sizes` value.
pub fn auto_generate_sizes(
    breakpoints: &IndexMap<String, String>,
    index: usize,
    layouts: &LayoutsMap,
    pixels: &PixelConfig,
    options: &SizesOptions,
) -> String {
    build_srcsets(breakpoints, layouts, pixels).sizes_for_child(
        index,
        &LayoutConstraints::MaxWidth(options.max_layout_width.clone()),
    )
}
