//! Seed loader - downloads the product transaction dataset.
//!
//! The remote source serves one JSON array of records. Anything that goes wrong
//! before a body arrives (connect failure, timeout, non-2xx) is a [`Error::Fetch`];
//! a body that is not an array of records is a [`Error::Parse`].

use crate::{
    entities::transaction,
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use sea_orm::Set;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One record as it appears in the seed payload.
///
/// Unknown fields (including the source's own `id`) are ignored; the store assigns ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Sale price
    pub price: f64,
    /// Product category
    pub category: String,
    /// Product image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the item was sold
    pub sold: bool,
    /// Timestamp of the sale; any offset is normalized to UTC
    pub date_of_sale: DateTime<Utc>,
}

impl SeedRecord {
    /// Converts the payload record into an insertable active model, filling the
    /// lowercase search columns from `title` and `description`.
    #[must_use]
    pub fn into_active_model(self) -> transaction::ActiveModel {
        transaction::ActiveModel {
            title_folded: Set(self.title.to_lowercase()),
            description_folded: Set(self.description.to_lowercase()),
            title: Set(self.title),
            description: Set(self.description),
            price: Set(self.price),
            category: Set(self.category),
            image: Set(self.image),
            sold: Set(self.sold),
            date_of_sale: Set(self.date_of_sale),
            ..Default::default()
        }
    }
}

/// HTTP client for the seed source.
#[derive(Debug, Clone)]
pub struct SeedLoader {
    client: Client,
}

impl SeedLoader {
    /// Creates a loader whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Fetch {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Fetches and parses the record array at `source_url`.
    #[instrument(skip(self))]
    pub async fn load(&self, source_url: &str) -> Result<Vec<SeedRecord>> {
        debug!("Requesting seed data");
        let response = self
            .client
            .get(source_url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let records = parse_records(&body)?;
        info!(count = records.len(), "Seed data downloaded");
        Ok(records)
    }
}

/// Parses a seed payload body.
pub fn parse_records(body: &[u8]) -> Result<Vec<SeedRecord>> {
    serde_json::from_slice(body).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::{Datelike, Timelike};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven Foldsack No. 1 Backpack",
            "price": 329.85,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "sold": false,
            "dateOfSale": "2021-11-27T20:29:54+05:30"
        },
        {
            "title": "Solid Gold Petite Micropave",
            "price": 168,
            "description": "Satisfaction Guaranteed.",
            "category": "jewelery",
            "sold": true,
            "dateOfSale": "2022-03-01T00:00:00Z"
        }
    ]"#;

    #[test]
    fn test_parse_records() {
        let records = parse_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.title, "Fjallraven Foldsack No. 1 Backpack");
        assert_eq!(first.price, 329.85);
        assert!(!first.sold);
        assert!(first.image.is_some());
        // 20:29 at +05:30 is 14:59 UTC, same day
        assert_eq!(first.date_of_sale.month(), 11);
        assert_eq!(first.date_of_sale.hour(), 14);

        let second = &records[1];
        assert_eq!(second.price, 168.0);
        assert!(second.image.is_none());
        assert_eq!(second.date_of_sale.month(), 3);
    }

    #[test]
    fn test_active_model_folds_text_for_search() {
        let mut records = parse_records(SAMPLE.as_bytes()).unwrap();
        records[0].title = "Élégant CAFÉ".to_string();
        let model = records.swap_remove(0).into_active_model();

        assert_eq!(model.title_folded, Set("élégant café".to_string()));
        assert_eq!(model.title, Set("Élégant CAFÉ".to_string()));
        assert_eq!(
            model.description_folded,
            Set("your perfect pack for everyday use".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_records(br#"{"title": "not an array"}"#);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let result = parse_records(br#"[{"title": "no price"}]"#);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_from_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/seed.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .mount(&server)
            .await;

        let loader = SeedLoader::new(Duration::from_secs(5)).unwrap();
        let records = loader
            .load(&format!("{}/seed.json", server.uri()))
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_load_non_success_status_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let loader = SeedLoader::new(Duration::from_secs(5)).unwrap();
        let result = loader.load(&server.uri()).await;
        assert!(matches!(result, Err(Error::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_load_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let loader = SeedLoader::new(Duration::from_secs(5)).unwrap();
        let result = loader.load(&server.uri()).await;
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_unreachable_is_fetch_error() {
        let loader = SeedLoader::new(Duration::from_secs(1)).unwrap();
        let result = loader.load("http://127.0.0.1:9/seed.json").await;
        assert!(matches!(result, Err(Error::Fetch { .. })));
    }
}
