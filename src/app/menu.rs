use crate::app::{App, AppMode, DishEvent, Navigable, TextInput};
use crate::dishes::{Dish, RemoteError};
use tracing::{debug, info, warn};

/// The dish list shown in menu mode
///
/// Only the response to the newest `request` is applied.
#[derive(Debug, Default)]
pub struct MenuState {
    pub request: u64,
    pub dishes: Vec<Dish>,
    pub selected: usize,
    pub filter: TextInput,
    pub error: Option<String>,
    pub loading: bool,
}

impl MenuState {
    /// Dishes whose name or category contains the filter, case-insensitively
    #[must_use]
    pub fn visible_dishes(&self) -> Vec<&Dish> {
        let query = self.filter.content().trim().to_lowercase();
        self.dishes
            .iter()
            .filter(|dish| {
                query.is_empty()
                    || dish.name.to_lowercase().contains(&query)
                    || dish.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    #[must_use]
    pub fn selected_dish(&self) -> Option<&Dish> {
        self.visible_dishes().get(self.selected).copied()
    }
}

impl Navigable for MenuState {
    fn item_count(&self) -> usize {
        self.visible_dishes().len()
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

impl App {
    pub fn load_dishes(&mut self) {
        self.menu.request += 1;
        self.menu.loading = true;
        self.menu.error = None;

        let request = self.menu.request;
        self.spawn_request(move |service| DishEvent::DishesLoaded {
            request,
            result: service.fetch_dishes(),
        });
    }

    pub(super) fn apply_dishes(&mut self, request: u64, result: Result<Vec<Dish>, RemoteError>) {
        if request != self.menu.request {
            debug!(request, "dropping stale dish list");
            return;
        }
        self.menu.loading = false;
        match result {
            Ok(dishes) => {
                info!(count = dishes.len(), "dishes loaded");
                self.menu.dishes = dishes;
                self.menu.clamp_selection();
            }
            Err(error) => {
                warn!(%error, "failed to load dishes");
                self.menu.dishes.clear();
                self.menu.selected = 0;
                self.menu.error = Some(error.to_string());
            }
        }
    }

    pub fn open_selected_dish(&mut self) {
        let Some(id) = self.menu.selected_dish().map(|dish| dish.id.clone()) else {
            return;
        };
        self.open_dish_detail(&id);
    }

    pub fn add_menu_filter_char(&mut self, character: char) {
        self.menu.filter.insert(character);
        self.menu.selected = 0;
    }

    pub fn remove_menu_filter_char(&mut self) {
        self.menu.filter.backspace();
        self.menu.selected = 0;
    }

    pub fn clear_menu_filter(&mut self) {
        self.menu.filter.clear();
        self.menu.selected = 0;
    }

    pub fn back_to_menu(&mut self) {
        self.leave_dish_detail();
        self.mode = AppMode::Menu;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::{app_with, settle};
    use crate::app::{AppMode, DishEvent, Navigable};
    use crate::dishes::memory::{MemoryDishService, sample_dish};

    #[test]
    fn test_load_dishes() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(3));
        app.load_dishes();
        assert!(app.is_loading());
        settle(&mut app, 1);

        assert!(!app.is_loading());
        assert_eq!(app.menu.dishes.len(), 3);
        assert_eq!(app.menu.error, None);
    }

    #[test]
    fn test_only_latest_reload_applies() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(3));
        app.load_dishes();
        let first = app.menu.request;
        app.load_dishes();

        app.handle_event(DishEvent::DishesLoaded {
            request: first,
            result: Ok(vec![sample_dish("9")]),
        });
        assert!(app.menu.loading);
        assert!(app.menu.dishes.is_empty());

        settle(&mut app, 2);
        assert!(!app.menu.loading);
        assert_eq!(app.menu.dishes.len(), 3);
    }

    #[test]
    fn test_load_failure_shows_message() {
        let (mut app, service) = app_with(MemoryDishService::with_dishes(3));
        service.fail_with("503 - Service Unavailable");
        app.load_dishes();
        settle(&mut app, 1);

        assert!(app.menu.dishes.is_empty());
        assert_eq!(app.menu.error.as_deref(), Some("503 - Service Unavailable"));
    }

    #[test]
    fn test_filter_matches_name_and_category() {
        let mut pizza = sample_dish("0");
        pizza.name = "Uthappizza".to_string();
        let mut dessert = sample_dish("1");
        dessert.category = "dessert".to_string();
        let (mut app, _) = app_with(MemoryDishService::new(vec![pizza, dessert]));
        app.load_dishes();
        settle(&mut app, 1);

        "PIZZA".chars().for_each(|c| app.add_menu_filter_char(c));
        let names: Vec<&str> = app.menu.visible_dishes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Uthappizza"]);

        app.clear_menu_filter();
        "dess".chars().for_each(|c| app.add_menu_filter_char(c));
        assert_eq!(app.menu.selected_dish().map(|d| d.id.as_str()), Some("1"));
    }

    #[test]
    fn test_open_selected_dish_enters_detail() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(3));
        app.load_dishes();
        settle(&mut app, 1);
        app.menu.next_item();

        app.open_selected_dish();

        assert_eq!(app.mode, AppMode::DishDetail);
        assert_eq!(app.detail.requested_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_open_with_empty_menu_does_nothing() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(0));
        app.open_selected_dish();
        assert_eq!(app.mode, AppMode::Menu);
    }
}
