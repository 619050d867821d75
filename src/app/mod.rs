mod command;
mod comment_form;
mod detail;
mod help;
mod menu;
mod navigation;
mod text_input;
mod types;

pub use command::CommandPalette;
pub use comment_form::{CommentForm, DEFAULT_RATING, MAX_RATING, MIN_RATING};
pub use detail::DetailState;
pub use menu::MenuState;
pub use navigation::Navigable;
pub use text_input::TextInput;
pub use types::*;

use crate::dishes::DishService;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};
use tracing::debug;

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub previous_mode: Option<AppMode>,
    pub help_return_mode: Option<AppMode>,
    pub should_quit: bool,

    pub menu: MenuState,
    pub detail: DetailState,
    pub comment_form: CommentForm,
    pub commands: CommandPalette,

    pub status_toast: Option<StatusToast>,
    pub loading_frame: u8,
    pub last_loading_tick: Option<Instant>,

    service: Arc<dyn DishService>,
    event_tx: Sender<DishEvent>,
    event_rx: Receiver<DishEvent>,
}

impl App {
    /// Creates the application in menu mode, backed by `service`
    pub fn new(service: Arc<dyn DishService>) -> Self {
        let (event_tx, event_rx) = channel();
        Self {
            mode: AppMode::Menu,
            previous_mode: None,
            help_return_mode: None,
            should_quit: false,
            menu: MenuState::default(),
            detail: DetailState::default(),
            comment_form: CommentForm::new(),
            commands: CommandPalette::new(),
            status_toast: None,
            loading_frame: 0,
            last_loading_tick: None,
            service,
            event_tx,
            event_rx,
        }
    }

    /// Runs `job` against the dish service on a worker thread; its event is
    /// picked up later by `check_dish_events`.
    fn spawn_request<F>(&self, job: F)
    where
        F: FnOnce(&dyn DishService) -> DishEvent + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let event_tx = self.event_tx.clone();
        std::thread::spawn(move || {
            let _ = event_tx.send(job(service.as_ref()));
        });
    }

    /// Applies every finished request without blocking
    pub fn check_dish_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: DishEvent) {
        match event {
            DishEvent::DishesLoaded { request, result } => self.apply_dishes(request, result),
            DishEvent::DishIdsLoaded { visit, result } => self.apply_dish_ids(visit, result),
            DishEvent::DishLoaded { request, result } => self.apply_dish(request, result),
            DishEvent::DishUpdated { request, result } => self.apply_updated_dish(request, result),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.menu.loading || self.detail.loading || self.detail.submitting
    }

    pub fn quit(&mut self) {
        debug!("quit requested");
        self.should_quit = true;
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(Duration::from_secs(3)));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }

    /// Blocks until one request finishes, then applies it
    #[cfg(test)]
    pub(crate) fn wait_for_event(&mut self) -> bool {
        match self.event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::App;
    use crate::dishes::memory::MemoryDishService;
    use std::sync::Arc;

    pub fn app_with(service: MemoryDishService) -> (App, Arc<MemoryDishService>) {
        let service = Arc::new(service);
        let app = App::new(service.clone());
        (app, service)
    }

    /// Applies `count` finished requests, failing the test on timeout
    pub fn settle(app: &mut App, count: usize) {
        for _ in 0..count {
            assert!(app.wait_for_event(), "request did not finish in time");
        }
    }
}
