use crate::dishes::{Dish, DishId, RemoteError};

/// Application mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    DishDetail,
    CommentForm,
    CommandMenu,
    Help,
}

/// Results coming back from request threads
#[derive(Debug)]
pub enum DishEvent {
    DishesLoaded {
        request: u64,
        result: Result<Vec<Dish>, RemoteError>,
    },
    DishIdsLoaded {
        visit: u64,
        result: Result<Vec<DishId>, RemoteError>,
    },
    DishLoaded {
        request: u64,
        result: Result<Dish, RemoteError>,
    },
    DishUpdated {
        request: u64,
        result: Result<Dish, RemoteError>,
    },
}

/// Menu item for the command palette
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: std::time::Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: std::time::Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}
