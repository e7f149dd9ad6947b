//! Server-rendered catalog card components.
//!
//! # Components
//!
//! - [`ShoeCard`]: product card for one listing
//! - [`VariantBadge`]: sale / new release overlay
//! - [`Spacer`]: fixed gap between blocks

mod badge;
mod shoe_card;
mod spacer;

pub use badge::VariantBadge;
pub use shoe_card::{ShoeCard, render_card_html};
pub use spacer::{Spacer, SpacerAxis};
