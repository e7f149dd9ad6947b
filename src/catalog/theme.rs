//! Style token table.
//!
//! Components refer to semantic tokens ([`ColorToken`], [`FontWeight`]); the [`Theme`]
//! resolves them to concrete CSS values. Every field has a default so a configuration file
//! only needs to name the tokens it overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Semantic color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    /// Main accent (sale badge, sale price).
    Primary,
    /// Secondary accent (new release badge).
    Secondary,
    /// Text on accents.
    White,
    /// Neutral shade, e.g. `Gray(700)`.
    Gray(u16),
}

/// Font weight tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Normal,
    Medium,
    Bold,
}

/// Weight values per tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}

/// Concrete values for every style token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub white: String,
    /// Gray scale keyed by shade (`"100"` lightest, `"900"` darkest). String keys keep the
    /// table loadable from YAML and environment sources. Configured shades are merged into
    /// the default scale.
    #[serde(deserialize_with = "deserialize_gray")]
    pub gray: BTreeMap<String, String>,
    pub weights: Weights,
}

fn default_gray() -> BTreeMap<String, String> {
    [
        (100, "hsl(185deg 5% 95%)"),
        (300, "hsl(190deg 5% 80%)"),
        (500, "hsl(196deg 4% 60%)"),
        (700, "hsl(220deg 5% 40%)"),
        (900, "hsl(220deg 3% 20%)"),
    ]
    .into_iter()
    .map(|(shade, value): (u16, &str)| (shade.to_string(), value.to_string()))
    .collect()
}

fn deserialize_gray<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut gray = default_gray();
    gray.extend(BTreeMap::<String, String>::deserialize(deserializer)?);
    Ok(gray)
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
            white: "hsl(0deg 0% 100%)".to_string(),
            gray: default_gray(),
            weights: Weights::default(),
        }
    }
}

impl Theme {
    /// Resolve a color token. Unknown gray shades resolve to `None`.
    #[must_use]
    pub fn color(&self, token: ColorToken) -> Option<&str> {
        match token {
            ColorToken::Primary => Some(&self.primary),
            ColorToken::Secondary => Some(&self.secondary),
            ColorToken::White => Some(&self.white),
            ColorToken::Gray(shade) => self.gray.get(&shade.to_string()).map(String::as_str),
        }
    }

    #[must_use]
    pub fn weight(&self, weight: FontWeight) -> u16 {
        match weight {
            FontWeight::Normal => self.weights.normal,
            FontWeight::Medium => self.weights.medium,
            FontWeight::Bold => self.weights.bold,
        }
    }
}
