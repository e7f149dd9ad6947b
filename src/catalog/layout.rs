//! Card layout description.
//!
//! [`CardLayout::build`] is the whole card as plain data: every region, its text, and the
//! inline styles composed from the theme. The Leptos component only turns this into markup,
//! so layout rules are testable without parsing HTML.

use std::fmt;

use super::collaborators::{CardEnv, NavigationTarget};
use super::listing::ShoeListing;
use super::theme::{ColorToken, FontWeight, Theme};
use super::variant::{BadgeDescriptor, DisplayVariant};

/// Ordered CSS declarations for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet(Vec<(&'static str, String)>);

impl StyleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing an earlier one for the same property.
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
        self
    }

    /// Add a color declaration when the token resolves in `theme`.
    #[must_use]
    pub fn with_color(self, property: &'static str, theme: &Theme, token: ColorToken) -> Self {
        match theme.color(token) {
            Some(value) => self.with(property, value),
            None => self,
        }
    }

    #[must_use]
    pub fn with_weight(self, theme: &Theme, weight: FontWeight) -> Self {
        self.with("font-weight", theme.weight(weight).to_string())
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

/// A text-bearing element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub style: StyleSet,
}

/// Badge overlay; only built for visible badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeNode {
    pub label: &'static str,
    pub style: StyleSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub src: String,
    /// Decorative image; the name row carries the accessible text.
    pub alt: String,
}

/// Fully resolved card, regions in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub variant: DisplayVariant,
    pub badge: Option<BadgeNode>,
    pub target: NavigationTarget,
    pub image: ImageNode,
    pub name: TextNode,
    pub price: TextNode,
    pub color_label: TextNode,
    /// Present only for [`DisplayVariant::OnSale`].
    pub sale_price: Option<TextNode>,
}

impl CardLayout {
    pub const COLOR_UNIT: &'static str = "Color";

    /// Classify the listing and lay out every region.
    pub fn build(listing: &ShoeListing, env: &CardEnv) -> Self {
        let variant = listing.variant(env.recency.as_ref());
        let theme = &env.theme;
        let descriptor = variant.badge();

        let sale_price = match (variant, listing.sale_price) {
            (DisplayVariant::OnSale, Some(amount)) => Some(TextNode {
                text: env.formatter.format_price(amount),
                style: sale_price_style(theme),
            }),
            _ => None,
        };

        Self {
            variant,
            badge: badge_node(&descriptor, theme),
            target: env.router.detail_target(&listing.slug),
            image: ImageNode {
                src: listing.image_url.clone(),
                alt: String::new(),
            },
            name: TextNode {
                text: listing.name.clone(),
                style: name_style(theme),
            },
            price: TextNode {
                text: env.formatter.format_price(listing.price),
                style: price_style(variant, theme),
            },
            color_label: TextNode {
                text: env
                    .pluralizer
                    .pluralize(Self::COLOR_UNIT, listing.color_count),
                style: StyleSet::new().with_color("color", theme, ColorToken::Gray(700)),
            },
            sale_price,
        }
    }
}

/// Badge overlay for a descriptor, or `None` when it is hidden.
pub fn badge_node(descriptor: &BadgeDescriptor, theme: &Theme) -> Option<BadgeNode> {
    if !descriptor.visible {
        return None;
    }

    let mut style = StyleSet::new();
    if let Some(accent) = descriptor.accent {
        style = style.with_color("background-color", theme, accent);
    }
    let style = style
        .with("position", "absolute")
        .with("top", "4px")
        .with("right", "-4px")
        .with("z-index", "2")
        .with("padding", "4px 8px")
        .with_color("color", theme, ColorToken::White)
        .with("font-size", "0.7rem")
        .with_weight(theme, FontWeight::Bold);

    Some(BadgeNode {
        label: descriptor.label,
        style,
    })
}

/// Canonical price styling: struck through and muted once a sale price supersedes it.
pub fn price_style(variant: DisplayVariant, theme: &Theme) -> StyleSet {
    match variant {
        DisplayVariant::OnSale => StyleSet::new()
            .with_color("color", theme, ColorToken::Gray(700))
            .with("text-decoration", "line-through"),
        DisplayVariant::NewRelease | DisplayVariant::Default => StyleSet::new(),
    }
}

fn name_style(theme: &Theme) -> StyleSet {
    StyleSet::new()
        .with_weight(theme, FontWeight::Medium)
        .with_color("color", theme, ColorToken::Gray(900))
        .with("margin", "0")
        .with("margin-right", "auto")
}

fn sale_price_style(theme: &Theme) -> StyleSet {
    StyleSet::new()
        .with_weight(theme, FontWeight::Medium)
        .with_color("color", theme, ColorToken::Primary)
        .with("margin-left", "auto")
}
