use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// A catalog product.
///
/// `rating` and `created_at` are assigned at construction when the caller
/// does not control them: the rating is drawn uniformly from [3.5, 5.0) and
/// rounded to one decimal place, the timestamp is unix-epoch milliseconds.
/// Wire representation uses camelCase field names; `imageUrl` is omitted
/// when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: String,
    name: String,
    title: String,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    rating: f64,
    created_at: i64,
}

impl Product {
    /// Create a new product, enforcing the required-field invariant:
    /// `name` (surrounding whitespace trimmed), `title`, and `description`
    /// must all be non-empty.
    pub fn new(
        name: String,
        title: String,
        description: String,
        image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if title.is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if description.is_empty() {
            return Err(DomainError::validation("description is required"));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            title,
            description,
            image_url,
            rating: default_rating(),
            created_at: current_timestamp_millis(),
        })
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(
        id: String,
        name: String,
        title: String,
        description: String,
        image_url: Option<String>,
        rating: f64,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            name,
            title,
            description,
            image_url,
            rating,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// Uniform draw from [3.5, 5.0), rounded to one decimal place.
fn default_rating() -> f64 {
    let raw: f64 = rand::thread_rng().gen_range(3.5..5.0);
    (raw * 10.0).round() / 10.0
}

fn current_timestamp_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_creation_assigns_id_rating_and_timestamp() {
        let product = Product::new(
            "Trail Bottle".to_string(),
            "Leakproof Trail Bottle".to_string(),
            "Keeps drinks cold for 24 hours.".to_string(),
            None,
        )
        .expect("valid product");

        assert!(!product.id().is_empty());
        assert!(product.rating() >= 3.5 && product.rating() <= 5.0);
        assert!(product.created_at() > 0);
    }

    #[test]
    fn product_name_is_trimmed() {
        let product = Product::new(
            "  Trail Bottle  ".to_string(),
            "Title".to_string(),
            "Description".to_string(),
            None,
        )
        .expect("valid product");

        assert_eq!(product.name(), "Trail Bottle");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let err = Product::new("   ".to_string(), "t".to_string(), "d".to_string(), None)
            .expect_err("blank name");
        assert!(err.is_validation_error());

        let err = Product::new("n".to_string(), String::new(), "d".to_string(), None)
            .expect_err("empty title");
        assert!(err.is_validation_error());

        let err = Product::new("n".to_string(), "t".to_string(), String::new(), None)
            .expect_err("empty description");
        assert!(err.is_validation_error());
    }

    #[test]
    fn default_rating_is_rounded_to_one_decimal() {
        for _ in 0..100 {
            let rating = default_rating();
            assert!(rating >= 3.5 && rating <= 5.0);
            let scaled = rating * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let product = Product::reconstitute(
            "id-1".to_string(),
            "n".to_string(),
            "t".to_string(),
            "d".to_string(),
            Some("https://img.example/p.png".to_string()),
            4.2,
            1700000000000,
        );

        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["imageUrl"], "https://img.example/p.png");
        assert_eq!(json["createdAt"], 1700000000000i64);
    }

    #[test]
    fn image_url_is_omitted_when_absent() {
        let product = Product::reconstitute(
            "id-1".to_string(),
            "n".to_string(),
            "t".to_string(),
            "d".to_string(),
            None,
            4.2,
            1,
        );

        let json = serde_json::to_value(&product).expect("serialize");
        assert!(json.get("imageUrl").is_none());
    }
}
