use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog product as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Set once at creation, never touched by updates.
    pub created_at: NaiveDateTime,
    /// Optimistic-concurrency stamp, incremented by every successful update.
    pub version: i32,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 2, max = 200, message = "name must be between 2 and 200 characters"))]
    pub name: String,
    #[validate(length(
        min = 5,
        max = 1000,
        message = "description must be between 5 and 1000 characters"
    ))]
    pub description: String,
    #[validate(range(
        min = 0.01,
        max = 999_999.99,
        message = "price must be between 0.01 and 999999.99"
    ))]
    pub price: f64,
    /// The store assigns the current time when this is `None`.
    pub created_at: Option<NaiveDateTime>,
}

/// Full-record update payload for an existing [`Product`].
///
/// Updates are not patches: all mutable fields are replaced. `version` must
/// be the stamp the caller loaded; a mismatch at write time means another
/// writer got there first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 2, max = 200, message = "name must be between 2 and 200 characters"))]
    pub name: String,
    #[validate(length(
        min = 5,
        max = 1000,
        message = "description must be between 5 and 1000 characters"
    ))]
    pub description: String,
    #[validate(range(
        min = 0.01,
        max = 999_999.99,
        message = "price must be between 0.01 and 999999.99"
    ))]
    pub price: f64,
    pub version: i32,
}

/// Orderings accepted by the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    DateAsc,
    DateDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::DateDesc => "date_desc",
        }
    }

    /// Parse a sort parameter; unrecognized values fall back to the default
    /// name ordering rather than erroring.
    pub fn parse(value: &str) -> Self {
        match value {
            "name_desc" => SortKey::NameDesc,
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "date_asc" => SortKey::DateAsc,
            "date_desc" => SortKey::DateDesc,
            _ => SortKey::NameAsc,
        }
    }
}
