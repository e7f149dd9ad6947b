//! UI components.
//!
//! Leptos SSR components that turn a [`CardLayout`](crate::catalog::CardLayout) into markup.
//! HTMX clients swap the rendered fragments straight into the listing page.

pub mod components;
