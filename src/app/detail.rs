use crate::app::{App, AppMode, DishEvent};
use crate::dishes::{Dish, DishId, RemoteError};
use crate::services::navigator::{Adjacent, compute_adjacent};
use tracing::{debug, info, warn};

/// Working data of the dish detail view
///
/// `visit` and `request` only ever grow, so responses that belong to an
/// earlier visit or an earlier dish can be told apart and dropped.
#[derive(Debug, Default)]
pub struct DetailState {
    pub visit: u64,
    pub request: u64,
    pub requested_id: Option<DishId>,
    pub dish: Option<Dish>,
    pub dish_copy: Option<Dish>,
    pub dish_ids: Option<Vec<DishId>>,
    pub adjacent: Option<Adjacent>,
    pub error: Option<String>,
    pub ids_failed: bool,
    pub loading: bool,
    pub submitting: bool,
}

impl DetailState {
    /// Clears the visit; whatever is still in flight becomes stale
    fn reset(&mut self) {
        *self = Self {
            visit: self.visit + 1,
            request: self.request + 1,
            ..Self::default()
        };
    }

    /// Drops the dish and its working copy and shows `error` instead
    fn fail(&mut self, error: &RemoteError) {
        self.dish = None;
        self.dish_copy = None;
        self.adjacent = None;
        self.error = Some(error.to_string());
    }

    fn refresh_adjacent(&mut self) {
        let (Some(ids), Some(dish)) = (&self.dish_ids, &self.dish) else {
            self.adjacent = None;
            return;
        };
        self.adjacent = match compute_adjacent(ids, &dish.id) {
            Ok(adjacent) => Some(adjacent),
            Err(error) => {
                warn!(%error, "prev/next unavailable");
                None
            }
        };
    }
}

impl App {
    /// Starts a detail visit: fetches the id list once and shows `id`
    pub fn open_dish_detail(&mut self, id: &str) {
        self.detail.reset();
        self.comment_form.reset();
        self.mode = AppMode::DishDetail;

        let visit = self.detail.visit;
        self.spawn_request(move |service| DishEvent::DishIdsLoaded {
            visit,
            result: service.fetch_all_dish_ids(),
        });
        self.show_dish(id);
    }

    /// Switches the visit to another dish; only the newest request is applied
    pub fn show_dish(&mut self, id: &str) {
        self.detail.request += 1;
        self.detail.requested_id = Some(id.to_string());
        self.detail.loading = true;
        self.detail.submitting = false;

        let request = self.detail.request;
        let id = id.to_string();
        debug!(dish = %id, request, "requesting dish");
        self.spawn_request(move |service| DishEvent::DishLoaded {
            request,
            result: service.fetch_dish(&id),
        });
    }

    pub fn leave_dish_detail(&mut self) {
        self.detail.reset();
        self.comment_form.reset();
    }

    pub fn go_to_previous_dish(&mut self) {
        if let Some(prev) = self.detail.adjacent.as_ref().map(|a| a.prev.clone()) {
            self.show_dish(&prev);
        }
    }

    pub fn go_to_next_dish(&mut self) {
        if let Some(next) = self.detail.adjacent.as_ref().map(|a| a.next.clone()) {
            self.show_dish(&next);
        }
    }

    /// Name of a dish from the menu list, falling back to its id
    #[must_use]
    pub fn dish_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.menu
            .dishes
            .iter()
            .find(|dish| dish.id == id)
            .map_or(id, |dish| dish.name.as_str())
    }

    pub(super) fn apply_dish_ids(&mut self, visit: u64, result: Result<Vec<DishId>, RemoteError>) {
        if visit != self.detail.visit {
            debug!(visit, "dropping dish ids from an earlier visit");
            return;
        }
        match result {
            Ok(ids) => {
                debug!(count = ids.len(), "dish ids loaded");
                self.detail.dish_ids = Some(ids);
                self.detail.refresh_adjacent();
            }
            Err(error) => {
                warn!(%error, "failed to load dish ids");
                self.detail.ids_failed = true;
                self.detail.fail(&error);
            }
        }
    }

    pub(super) fn apply_dish(&mut self, request: u64, result: Result<Dish, RemoteError>) {
        if request != self.detail.request {
            debug!(request, "dropping stale dish response");
            return;
        }
        self.detail.loading = false;
        if self.detail.ids_failed {
            debug!(request, "dish ids failed for this visit, keeping the error");
            return;
        }
        match result {
            Ok(dish) => {
                info!(dish = %dish.id, "dish loaded");
                self.detail.error = None;
                self.detail.dish_copy = Some(dish.clone());
                self.detail.dish = Some(dish);
                self.detail.refresh_adjacent();
            }
            Err(error) => {
                warn!(%error, "failed to load dish");
                self.detail.fail(&error);
            }
        }
    }

    pub(super) fn apply_updated_dish(&mut self, request: u64, result: Result<Dish, RemoteError>) {
        if request != self.detail.request {
            debug!(request, "dropping update response for a dish no longer shown");
            return;
        }
        self.detail.submitting = false;
        match result {
            Ok(dish) => {
                info!(dish = %dish.id, comments = dish.comments.len(), "comment stored");
                self.detail.dish_copy = Some(dish.clone());
                self.detail.dish = Some(dish);
                self.detail.refresh_adjacent();
                self.show_status_toast("COMMENT POSTED");
            }
            Err(error) => {
                warn!(%error, "failed to store comment");
                self.detail.fail(&error);
                self.show_status_toast("POST FAILED");
            }
        }
    }
}
