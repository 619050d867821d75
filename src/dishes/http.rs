use crate::dishes::{Dish, DishService, RemoteError};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Dish store reached over the json-server style REST API
pub struct HttpDishService {
    base_url: String,
    client: Client,
}

impl HttpDishService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn dish_endpoint(&self, id: &str) -> String {
        self.endpoint(&format!("dishes/{}", id))
    }

    fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            warn!(%status, "dish API request failed");
            return Err(RemoteError::from_status(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl DishService for HttpDishService {
    fn fetch_dishes(&self) -> Result<Vec<Dish>, RemoteError> {
        let url = self.endpoint("dishes");
        debug!(%url, "fetching dishes");
        Self::read_json(self.client.get(url).send()?)
    }

    fn fetch_dish(&self, id: &str) -> Result<Dish, RemoteError> {
        let url = self.dish_endpoint(id);
        debug!(%url, "fetching dish");
        Self::read_json(self.client.get(url).send()?)
    }

    fn fetch_featured_dish(&self) -> Result<Dish, RemoteError> {
        let url = self.endpoint("dishes");
        let dishes: Vec<Dish> = Self::read_json(
            self.client
                .get(url)
                .query(&[("featured", "true")])
                .send()?,
        )?;
        dishes
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::new("No featured dish"))
    }

    fn update_dish(&self, dish: &Dish) -> Result<Dish, RemoteError> {
        let url = self.dish_endpoint(&dish.id);
        debug!(%url, comments = dish.comments.len(), "updating dish");
        Self::read_json(self.client.put(url).json(dish).send()?)
    }
}
