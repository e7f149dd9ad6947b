//! Spacer component for fixed gaps between blocks.

use leptos::prelude::*;

/// Spacer axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpacerAxis {
    /// Vertical gap (default).
    #[default]
    Vertical,
    /// Horizontal gap.
    Horizontal,
}

impl SpacerAxis {
    /// Inline style reserving `size` pixels along this axis.
    #[must_use]
    pub fn style(self, size: u16) -> String {
        match self {
            Self::Vertical => {
                format!("display: block; min-height: {size}px; height: {size}px;")
            }
            Self::Horizontal => {
                format!("display: inline-block; min-width: {size}px; width: {size}px;")
            }
        }
    }
}

/// Empty block that only takes up space.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <img src="/shoe.jpg" />
///     <Spacer size=12 />
///     <h3>"Air Zoom"</h3>
/// }
/// ```
#[component]
pub fn Spacer(
    /// Gap in pixels.
    size: u16,
    /// Spacer axis.
    #[prop(default = SpacerAxis::Vertical)]
    axis: SpacerAxis,
) -> impl IntoView {
    view! {
        <span aria-hidden="true" style=axis.style(size) />
    }
}
