//! Product card for a single catalog listing.

use leptos::prelude::*;

use super::{Spacer, VariantBadge};
use crate::catalog::{CardEnv, CardLayout, ShoeListing};

const LINK_STYLE: &str = "text-decoration: none; color: inherit; position: relative;";
const WRAPPER_STYLE: &str = "width: 400px;";
const IMAGE_WRAPPER_STYLE: &str = "position: relative;";
const IMAGE_STYLE: &str = "width: 100%;";
const ROW_STYLE: &str = "font-size: 1rem; display: flex;";

/// Shoe card: badge, image, name/price row and color/sale-price row, all inside a link to
/// the shoe's detail page.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ShoeCard listing=listing env=CardEnv::default() />
/// }
/// ```
#[component]
pub fn ShoeCard(
    /// Listing to render.
    listing: ShoeListing,
    /// Routing, formatting, recency and theme collaborators.
    env: CardEnv,
) -> impl IntoView {
    let CardLayout {
        variant,
        badge,
        target,
        image,
        name,
        price,
        color_label,
        sale_price,
    } = CardLayout::build(&listing, &env);

    view! {
        <a
            class="shoe-card"
            href=target.href().to_string()
            data-variant=variant.as_str()
            style=LINK_STYLE
        >
            {badge.map(|badge| view! { <VariantBadge badge=badge /> })}
            <article class="shoe-card__wrapper" style=WRAPPER_STYLE>
                <div class="shoe-card__image" style=IMAGE_WRAPPER_STYLE>
                    <img alt=image.alt src=image.src style=IMAGE_STYLE />
                </div>
                <Spacer size=12 />
                <div class="shoe-card__row" style=ROW_STYLE>
                    <h3 class="shoe-card__name" style=name.style.to_css()>{name.text}</h3>
                    <span class="shoe-card__price" style=price.style.to_css()>
                        {price.text}
                    </span>
                </div>
                <div class="shoe-card__row" style=ROW_STYLE>
                    <p class="shoe-card__colors" style=color_label.style.to_css()>
                        {color_label.text}
                    </p>
                    {sale_price
                        .map(|sale| {
                            view! {
                                <span class="shoe-card__sale-price" style=sale.style.to_css()>
                                    {sale.text}
                                </span>
                            }
                        })}
                </div>
            </article>
        </a>
    }
}

/// Render one card to an HTML fragment.
pub fn render_card_html(listing: ShoeListing, env: CardEnv) -> String {
    view! { <ShoeCard listing=listing env=env /> }.to_html()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;
    use crate::catalog::{CurrencyFormatter, FixedClock, RecencyWindow};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    fn env() -> CardEnv {
        CardEnv::default()
            .with_formatter(CurrencyFormatter::new("$", 0))
            .with_recency(RecencyWindow::days(30, Arc::new(FixedClock(now()))))
    }

    fn air_jordan() -> ShoeListing {
        ShoeListing {
            slug: "air-jordan-1".to_string(),
            name: "Air Jordan 1".to_string(),
            image_url: "/assets/aj1.jpg".to_string(),
            price: 100.0,
            sale_price: None,
            release_date: now() - Duration::days(31),
            color_count: 3,
        }
    }

    fn air_zoom() -> ShoeListing {
        ShoeListing {
            slug: "air-zoom".to_string(),
            name: "Air Zoom".to_string(),
            image_url: "/assets/air-zoom.jpg".to_string(),
            price: 150.0,
            sale_price: Some(120.0),
            release_date: now() - Duration::days(1),
            color_count: 1,
        }
    }

    #[test]
    fn test_default_card_markup() {
        let html = render_card_html(air_jordan(), env());

        assert!(html.contains(r#"href="/shoe/air-jordan-1""#));
        assert!(html.contains(r#"data-variant="default""#));
        assert!(html.contains(r#"src="/assets/aj1.jpg""#));
        assert!(html.contains("Air Jordan 1"));
        assert!(html.contains("$100"));
        assert!(html.contains("3 Colors"));
        assert!(!html.contains("shoe-card__badge"));
        assert!(!html.contains("shoe-card__sale-price"));
        assert!(!html.contains("line-through"));
    }

    #[test]
    fn test_on_sale_card_markup() {
        let html = render_card_html(air_zoom(), env());

        assert!(html.contains(r#"data-variant="on-sale""#));
        assert!(html.contains("Sale"));
        assert!(!html.contains("Just released!"));
        assert!(html.contains("line-through"));
        assert_eq!(html.matches("shoe-card__sale-price").count(), 1);
        assert!(html.contains("$120"));
        assert!(html.contains("$150"));
        assert!(html.contains("1 Color"));
        assert!(!html.contains("1 Colors"));
    }

    #[test]
    fn test_new_release_card_markup() {
        let listing = ShoeListing {
            sale_price: None,
            ..air_zoom()
        };
        let html = render_card_html(listing, env());

        assert!(html.contains(r#"data-variant="new-release""#));
        assert!(html.contains("Just released!"));
        assert!(html.contains("hsl(240deg 60% 63%)"));
        assert!(!html.contains("shoe-card__sale-price"));
    }

    #[test]
    fn test_badge_precedes_card_body() {
        let html = render_card_html(air_zoom(), env());
        let badge = html.find("shoe-card__badge").unwrap();
        let image = html.find("shoe-card__image").unwrap();
        let name = html.find("shoe-card__name").unwrap();
        let colors = html.find("shoe-card__colors").unwrap();

        assert!(badge < image);
        assert!(image < name);
        assert!(name < colors);
    }

    #[test]
    fn test_render_is_idempotent() {
        let env = env();
        assert_eq!(
            render_card_html(air_zoom(), env.clone()),
            render_card_html(air_zoom(), env)
        );
    }
}
