//! Catalog card domain: listing input, variant classification, and layout.
//!
//! # Modules
//!
//! - [`listing`]: the [`ShoeListing`] input record
//! - [`variant`]: [`classify`] and the badge table
//! - [`collaborators`]: routing, formatting, pluralization and recency interfaces
//! - [`theme`]: style token table
//! - [`layout`]: [`CardLayout`], the render-ready description of one card

pub mod collaborators;
pub mod layout;
pub mod listing;
pub mod theme;
pub mod variant;

pub use collaborators::{
    CardEnv, Clock, CurrencyFormatter, DetailRouter, EnglishPluralizer, FixedClock,
    NavigationTarget, PathRouter, Pluralizer, PriceFormatter, RecencyWindow, ReleaseRecency,
    SystemClock,
};
pub use layout::{CardLayout, StyleSet};
pub use listing::ShoeListing;
pub use theme::{ColorToken, FontWeight, Theme};
pub use variant::{BadgeDescriptor, DisplayVariant, badge_for, classify};
