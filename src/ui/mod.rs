mod command;
mod comment_form;
mod components;
mod detail;
mod help;
mod menu;
mod utils;

use crate::app::{App, AppMode};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Menu => menu::render_menu_view(f, app),
        AppMode::DishDetail => detail::render_detail_view(f, app),
        AppMode::CommentForm => {
            // Show the dish as background, then overlay the form
            detail::render_detail_view(f, app);
            comment_form::render_comment_form(f, app);
        }
        AppMode::CommandMenu => command::render_command_menu(f, app),
        AppMode::Help => help::render_help_view(f),
    }
}
