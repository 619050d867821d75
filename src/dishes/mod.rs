pub mod error;
pub mod http;
#[cfg(test)]
pub mod memory;

pub use error::RemoteError;
pub use http::HttpDishService;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Opaque dish identifier, unique within the dish list
pub type DishId = String;

/// A menu item as stored by the dish API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Dish {
    /// Average star rating across all comments
    #[must_use]
    pub fn average_rating(&self) -> Option<f64> {
        if self.comments.is_empty() {
            return None;
        }
        let total: u32 = self.comments.iter().map(|c| u32::from(c.rating)).sum();
        Some(f64::from(total) / self.comments.len() as f64)
    }
}

/// A user review attached to a dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "rating_from_number_or_text")]
    pub rating: u8,
    pub comment: String,
    pub author: String,
    pub date: String,
}

/// Older web clients stored the rating as text (`"5"`), so both forms are read.
fn rating_from_number_or_text<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Number(u8),
        Text(String),
    }

    match Rating::deserialize(deserializer)? {
        Rating::Number(rating) => Ok(rating),
        Rating::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid rating {:?}", text))),
    }
}

/// Remote store of dishes
///
/// Every call is a single request with no retry. Failures carry only a display message.
pub trait DishService: Send + Sync {
    fn fetch_dishes(&self) -> Result<Vec<Dish>, RemoteError>;

    fn fetch_dish(&self, id: &str) -> Result<Dish, RemoteError>;

    fn fetch_featured_dish(&self) -> Result<Dish, RemoteError>;

    /// Replaces the stored dish with `dish` and returns what the store kept
    fn update_dish(&self, dish: &Dish) -> Result<Dish, RemoteError>;

    /// Ids of all dishes in server order
    fn fetch_all_dish_ids(&self) -> Result<Vec<DishId>, RemoteError> {
        Ok(self
            .fetch_dishes()?
            .into_iter()
            .map(|dish| dish.id)
            .collect())
    }
}
