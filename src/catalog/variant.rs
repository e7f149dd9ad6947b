//! Display variant classification and the badge table.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::collaborators::ReleaseRecency;
use super::theme::ColorToken;

/// Mutually exclusive display classification of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    /// The listing carries a sale price.
    OnSale,
    /// Released inside the recency window and not on sale.
    NewRelease,
    /// Neither of the above.
    #[default]
    Default,
}

impl DisplayVariant {
    /// Stable tag used in markup and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
            Self::Default => "default",
        }
    }

    /// Badge shown for this variant.
    #[must_use]
    pub fn badge(self) -> BadgeDescriptor {
        badge_for(self)
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge overlay metadata for a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeDescriptor {
    /// Badge copy; empty when hidden.
    pub label: &'static str,
    /// Whether the badge is rendered at all.
    pub visible: bool,
    /// Background accent, if any.
    pub accent: Option<ColorToken>,
}

/// Classify a listing.
///
/// A sale price always wins: the recency oracle is only consulted when there is none, so a
/// shoe that is both discounted and newly released shows as on sale. The canonical price
/// takes no part in the decision.
pub fn classify(
    sale_price: Option<f64>,
    release_date: DateTime<Utc>,
    recency: &dyn ReleaseRecency,
) -> DisplayVariant {
    if sale_price.is_some() {
        DisplayVariant::OnSale
    } else if recency.is_recent_release(release_date) {
        DisplayVariant::NewRelease
    } else {
        DisplayVariant::Default
    }
}

/// Static variant to badge mapping.
#[must_use]
pub fn badge_for(variant: DisplayVariant) -> BadgeDescriptor {
    match variant {
        DisplayVariant::OnSale => BadgeDescriptor {
            label: "Sale",
            visible: true,
            accent: Some(ColorToken::Primary),
        },
        DisplayVariant::NewRelease => BadgeDescriptor {
            label: "Just released!",
            visible: true,
            accent: Some(ColorToken::Secondary),
        },
        DisplayVariant::Default => BadgeDescriptor {
            label: "",
            visible: false,
            accent: None,
        },
    }
}
