//! Catalog listing record rendered by a single card.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::collaborators::ReleaseRecency;
use super::variant::{DisplayVariant, classify};

/// One catalog item as supplied by the page that lists shoes.
///
/// Values are taken as-is. Prices are in minor currency units (cents by default) and
/// `sale_price <= price` is a convention of the upstream catalog, not something checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    /// Identifier used to address the detail page.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image reference shown in the card.
    #[serde(rename = "imageSrc", alias = "imageUrl")]
    pub image_url: String,
    /// Canonical (non-sale) price.
    pub price: f64,
    /// Discounted price, when the shoe is on sale.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// When the shoe was released.
    #[serde(deserialize_with = "deserialize_release_date")]
    pub release_date: DateTime<Utc>,
    /// Number of available colorways.
    #[serde(rename = "numOfColors", alias = "colorCount")]
    pub color_count: u32,
}

impl ShoeListing {
    /// Classify this listing for badge and styling purposes.
    #[must_use]
    pub fn variant(&self, recency: &dyn ReleaseRecency) -> DisplayVariant {
        classify(self.sale_price, self.release_date, recency)
    }
}

/// Release dates arrive either as RFC 3339 strings or as epoch milliseconds.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawReleaseDate {
    Millis(i64),
    Text(DateTime<Utc>),
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawReleaseDate::deserialize(deserializer)? {
        RawReleaseDate::Text(date) => Ok(date),
        RawReleaseDate::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("release date out of range: {ms}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_catalog_shape() {
        let listing: ShoeListing = serde_json::from_value(json!({
            "slug": "air-zoom",
            "name": "Air Zoom",
            "imageSrc": "/assets/air-zoom.jpg",
            "price": 15000,
            "salePrice": 12000,
            "releaseDate": "2026-10-15T00:00:00Z",
            "numOfColors": 1
        }))
        .unwrap();

        assert_eq!(listing.image_url, "/assets/air-zoom.jpg");
        assert_eq!(listing.sale_price, Some(12000.0));
        assert_eq!(listing.color_count, 1);
        assert_eq!(
            listing.release_date,
            Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_null_sale_price_and_millis_date() {
        let listing: ShoeListing = serde_json::from_value(json!({
            "slug": "air-jordan-1",
            "name": "Air Jordan 1",
            "imageUrl": "/assets/aj1.jpg",
            "price": 10000,
            "salePrice": null,
            "releaseDate": 1_700_000_000_000_i64,
            "colorCount": 3
        }))
        .unwrap();

        assert_eq!(listing.sale_price, None);
        assert_eq!(listing.release_date.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(listing.color_count, 3);
    }

    #[test]
    fn test_missing_sale_price_defaults_to_none() {
        let listing: ShoeListing = serde_json::from_value(json!({
            "slug": "cortez",
            "name": "Cortez",
            "imageSrc": "/assets/cortez.jpg",
            "price": 7000,
            "releaseDate": "2020-01-01T00:00:00Z",
            "numOfColors": 2
        }))
        .unwrap();

        assert!(listing.sale_price.is_none());
    }
}
