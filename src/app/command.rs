use crate::app::types::MenuItem;
use crate::app::{App, AppMode, Navigable};
use tracing::debug;

/// The `/` command palette
#[derive(Debug, Clone)]
pub struct CommandPalette {
    pub input: String,
    pub selected: usize,
    pub items: Vec<MenuItem>,
}

fn menu_item(name: &str, description: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
    }
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPalette {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            selected: 0,
            items: vec![
                menu_item("menu", "Back to the list of dishes"),
                menu_item("reload", "Fetch the dishes again"),
                menu_item("help", "Show keyboard shortcuts"),
                menu_item("quit", "Exit the application"),
            ],
        }
    }

    /// Commands whose name or description contains the typed text
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&MenuItem> {
        let query = self.input.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    fn selected_name(&self) -> Option<String> {
        self.filtered_items()
            .get(self.selected)
            .map(|item| item.name.clone())
    }
}

impl Navigable for CommandPalette {
    fn item_count(&self) -> usize {
        self.filtered_items().len()
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

impl App {
    pub fn open_command_menu(&mut self) {
        if self.mode != AppMode::CommandMenu {
            self.previous_mode = Some(self.mode);
        }
        self.mode = AppMode::CommandMenu;
        self.commands.input.clear();
        self.commands.selected = 0;
    }

    pub fn close_menu(&mut self) {
        self.mode = self.previous_mode.take().unwrap_or(AppMode::Menu);
        self.commands.input.clear();
        self.commands.selected = 0;
    }

    pub fn add_input_char(&mut self, character: char) {
        self.commands.input.push(character);
        self.commands.selected = 0;
    }

    pub fn remove_input_char(&mut self) {
        self.commands.input.pop();
        self.commands.selected = 0;
    }

    pub fn execute_selected(&mut self) {
        if let Some(name) = self.commands.selected_name() {
            self.execute_command(&name);
        }
    }

    /// Runs a palette command by name; unknown names only close the palette
    pub fn execute_command(&mut self, name: &str) {
        debug!(command = name, "executing command");
        self.close_menu();
        match name {
            "menu" => self.back_to_menu(),
            "reload" => {
                self.back_to_menu();
                self.load_dishes();
            }
            "help" => self.open_help(),
            "quit" => self.quit(),
            _ => self.show_status_toast("UNKNOWN COMMAND"),
        }
    }
}
