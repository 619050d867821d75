use crate::dishes::{Comment, Dish, DishService, RemoteError};
use std::sync::Mutex;

/// In-process dish store used by tests
pub struct MemoryDishService {
    dishes: Mutex<Vec<Dish>>,
    failure: Mutex<Option<String>>,
}

impl MemoryDishService {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            dishes: Mutex::new(dishes),
            failure: Mutex::new(None),
        }
    }

    /// Store with dishes "0".."count" named "Dish N"
    pub fn with_dishes(count: usize) -> Self {
        Self::new((0..count).map(|index| sample_dish(&index.to_string())).collect())
    }

    /// Makes every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.to_string());
        }
    }

    pub fn stored(&self, id: &str) -> Option<Dish> {
        self.dishes
            .lock()
            .ok()?
            .iter()
            .find(|dish| dish.id == id)
            .cloned()
    }

    fn check_failure(&self) -> Result<(), RemoteError> {
        match self.failure.lock() {
            Ok(failure) => match failure.as_deref() {
                Some(message) => Err(RemoteError::new(message)),
                None => Ok(()),
            },
            Err(_) => Err(RemoteError::new("store poisoned")),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Dish>>, RemoteError> {
        self.dishes
            .lock()
            .map_err(|_| RemoteError::new("store poisoned"))
    }
}

pub fn sample_dish(id: &str) -> Dish {
    Dish {
        id: id.to_string(),
        name: format!("Dish {}", id),
        image: format!("images/{}.png", id),
        category: "mains".to_string(),
        featured: id == "0",
        label: String::new(),
        price: "4.99".to_string(),
        description: format!("Description of dish {}", id),
        comments: Vec::new(),
    }
}

pub fn sample_comment(author: &str, rating: u8) -> Comment {
    Comment {
        rating,
        comment: format!("Comment by {}", author),
        author: author.to_string(),
        date: "2012-10-16T17:57:28.556Z".to_string(),
    }
}

impl DishService for MemoryDishService {
    fn fetch_dishes(&self) -> Result<Vec<Dish>, RemoteError> {
        self.check_failure()?;
        Ok(self.lock()?.clone())
    }

    fn fetch_dish(&self, id: &str) -> Result<Dish, RemoteError> {
        self.check_failure()?;
        self.lock()?
            .iter()
            .find(|dish| dish.id == id)
            .cloned()
            .ok_or_else(|| RemoteError::new("404 - Not Found {}"))
    }

    fn fetch_featured_dish(&self) -> Result<Dish, RemoteError> {
        self.check_failure()?;
        self.lock()?
            .iter()
            .find(|dish| dish.featured)
            .cloned()
            .ok_or_else(|| RemoteError::new("No featured dish"))
    }

    fn update_dish(&self, dish: &Dish) -> Result<Dish, RemoteError> {
        self.check_failure()?;
        let mut dishes = self.lock()?;
        let stored = dishes
            .iter_mut()
            .find(|stored| stored.id == dish.id)
            .ok_or_else(|| RemoteError::new("404 - Not Found {}"))?;
        *stored = dish.clone();
        Ok(stored.clone())
    }
}
