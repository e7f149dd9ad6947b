//! Variant badge overlay.

use leptos::prelude::*;

use crate::catalog::layout::BadgeNode;

/// Corner badge flagging a sale or a new release.
///
/// Only visible badges ever become a [`BadgeNode`], so a hidden badge renders no element and
/// leaves sibling layout untouched.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     {layout.badge.map(|badge| view! { <VariantBadge badge=badge /> })}
/// }
/// ```
#[component]
pub fn VariantBadge(
    /// Resolved badge label and styles.
    badge: BadgeNode,
) -> impl IntoView {
    view! {
        <div class="shoe-card__badge" style=badge.style.to_css()>
            {badge.label}
        </div>
    }
}
