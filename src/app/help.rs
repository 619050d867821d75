use crate::app::{App, AppMode};

impl App {
    pub fn open_help(&mut self) {
        if self.mode != AppMode::Help {
            self.help_return_mode = Some(self.mode);
        }
        self.mode = AppMode::Help;
    }

    pub fn close_help(&mut self) {
        self.mode = self.help_return_mode.take().unwrap_or(AppMode::Menu);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::AppMode;
    use crate::app::test_support::{app_with, settle};
    use crate::dishes::memory::MemoryDishService;

    #[test]
    fn test_close_help_returns_to_opening_mode() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(1));
        app.open_dish_detail("0");
        settle(&mut app, 2);
        app.open_help();
        app.close_help();
        assert_eq!(app.mode, AppMode::DishDetail);
    }

    #[test]
    fn test_help_from_palette_while_in_help() {
        let (mut app, _) = app_with(MemoryDishService::with_dishes(1));
        app.open_dish_detail("0");
        settle(&mut app, 2);
        app.open_help();

        app.open_command_menu();
        app.execute_command("help");
        assert_eq!(app.mode, AppMode::Help);

        app.close_help();
        assert_eq!(app.mode, AppMode::DishDetail);
        assert!(app.detail.dish.is_some());
    }
}
