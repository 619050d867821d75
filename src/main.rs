// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing))]

mod app;
mod config;
mod dishes;
mod logging;
mod services;
mod ui;

use app::{App, AppMode, Navigable};
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dishes::{DishService, HttpDishService};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use services::comments::{CommentDraft, submit_comment};
use services::navigator::compute_adjacent;
use services::validation::{CommentFields, validate};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::{error, info};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Check for command-line arguments; help and version need no config
    let args: Vec<String> = std::env::args().collect();
    if handle_info_flag(&args) {
        return Ok(());
    }

    let config = config::Config::load()?;
    if let Err(error) = logging::init(&config) {
        eprintln!("Logging disabled: {}", error);
    }
    info!(base_url = %config.server.base_url, "starting");

    let service = HttpDishService::new(&config.server.base_url, config.server.timeout())?;

    if args.len() > 1 {
        return handle_cli_args(&args, &service);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(service));
    app.load_dishes();
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "ui loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Prints help or version when asked for; returns whether it did
fn handle_info_flag(args: &[String]) -> bool {
    let program_name = args.first().map_or("confusion", String::as_str);
    match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => print_help(program_name),
        Some("--version" | "-v") => print_version(),
        _ => return false,
    }
    true
}

fn handle_cli_args(args: &[String], service: &dyn DishService) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| color_eyre::eyre::eyre!("No command provided"))?;
    let operand = |index: usize, name: &str| {
        args.get(index).map(String::as_str).ok_or_else(|| {
            color_eyre::eyre::eyre!("Missing <{}>. Run with --help for usage.", name)
        })
    };

    match cmd.as_str() {
        "config" => println!("{}", config::Config::config_path()?.display()),
        "ids" => {
            for id in service.fetch_all_dish_ids()? {
                println!("{}", id);
            }
        }
        "dish" => {
            let dish = service.fetch_dish(operand(2, "id")?)?;
            println!("{}", serde_json::to_string_pretty(&dish)?);
        }
        "featured" => {
            let dish = service.fetch_featured_dish()?;
            println!("{} ({})", dish.name, dish.id);
        }
        "adjacent" => {
            let ids = service.fetch_all_dish_ids()?;
            let adjacent = compute_adjacent(&ids, operand(2, "id")?)?;
            println!("prev: {}", adjacent.prev);
            println!("next: {}", adjacent.next);
        }
        "comment" => {
            let id = operand(2, "id")?;
            let author = operand(3, "author")?;
            let rating: u8 = operand(4, "rating")?.parse()?;
            let text = args.get(5..).map(|words| words.join(" ")).unwrap_or_default();
            post_comment(service, id, author, rating, &text)?;
        }
        unknown => {
            eprintln!("Unknown command: {}", unknown);
            eprintln!("Run with --help for available commands.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn post_comment(
    service: &dyn DishService,
    id: &str,
    author: &str,
    rating: u8,
    text: &str,
) -> Result<()> {
    let rating = (app::MIN_RATING..=app::MAX_RATING)
        .contains(&rating)
        .then_some(rating);
    let errors = validate(&CommentFields {
        author,
        comment: text,
        rating,
    });
    if !errors.is_empty() {
        for (field, message) in &errors {
            eprintln!("{}: {}", field.label(), message);
        }
        std::process::exit(1);
    }

    let draft = CommentDraft {
        author: author.to_string(),
        comment: text.to_string(),
        rating: rating.unwrap_or(app::DEFAULT_RATING),
    };
    let dish = submit_comment(service, service.fetch_dish(id)?, draft, chrono::Utc::now())?;
    println!("{} now has {} comments", dish.name, dish.comments.len());
    Ok(())
}

fn print_version() {
    println!("confusion v{}", env!("CARGO_PKG_VERSION"));
}

fn print_help(program_name: &str) {
    println!("confusion - browse the Ristorante con Fusion menu");
    println!();
    println!("Usage: {} [command]", program_name);
    println!();
    println!("Commands:");
    println!("  ids                               - List dish ids in menu order");
    println!("  dish <id>                         - Print a dish as JSON");
    println!("  featured                          - Print the featured dish");
    println!("  adjacent <id>                     - Print the previous and next dish ids");
    println!("  comment <id> <author> <rating> <text>  - Post a comment (rating 1-5)");
    println!("  config                            - Print the config file path");
    println!("  --help                            - Show this help");
    println!("  --version                         - Show version");
    println!();
    println!("Run without arguments to start interactive mode.");
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.check_dish_events();
        tick_loading_animation(app);
        app.clear_expired_status_toast();

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Only handle KeyPress events to avoid duplicate handling
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(app, key);
        }
    }

    Ok(())
}

fn tick_loading_animation(app: &mut App) {
    if !app.is_loading() {
        app.loading_frame = 0;
        app.last_loading_tick = None;
        return;
    }

    let now = Instant::now();
    let should_tick = app
        .last_loading_tick
        .is_none_or(|last_tick| now.duration_since(last_tick) >= Duration::from_millis(200));

    if should_tick {
        app.loading_frame = app.loading_frame.wrapping_add(1);
        app.last_loading_tick = Some(now);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The palette opens from anywhere except while typing into the form
    if key.code == KeyCode::Char('/')
        && key.modifiers == KeyModifiers::NONE
        && !matches!(app.mode, AppMode::CommentForm | AppMode::CommandMenu)
    {
        app.open_command_menu();
        return;
    }

    match app.mode {
        AppMode::Menu => handle_menu_mode(app, key.code),
        AppMode::DishDetail => handle_detail_mode(app, key.code),
        AppMode::CommentForm => handle_comment_form_mode(app, key.code),
        AppMode::CommandMenu => handle_command_menu(app, key.code),
        AppMode::Help => handle_help_mode(app, key.code),
    }
}

fn handle_menu_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up => app.menu.previous_item(),
        KeyCode::Down => app.menu.next_item(),
        KeyCode::Enter => app.open_selected_dish(),
        KeyCode::F(5) => app.load_dishes(),
        KeyCode::Esc => app.clear_menu_filter(),
        KeyCode::Char(character) => app.add_menu_filter_char(character),
        KeyCode::Backspace => app.remove_menu_filter_char(),
        _ => {}
    }
}

fn handle_detail_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => app.go_to_previous_dish(),
        KeyCode::Right | KeyCode::Char('l') => app.go_to_next_dish(),
        KeyCode::Char('c') => app.open_comment_form(),
        KeyCode::Esc | KeyCode::Backspace => app.back_to_menu(),
        KeyCode::Char('?') => app.open_help(),
        _ => {}
    }
}

fn handle_comment_form_mode(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.close_comment_form(),
        KeyCode::Enter => app.submit_comment_form(),
        KeyCode::Tab | KeyCode::Down => app.comment_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.comment_form.focus_previous(),
        KeyCode::Left => app.comment_form.left(),
        KeyCode::Right => app.comment_form.right(),
        KeyCode::Backspace => app.comment_form.backspace(),
        KeyCode::Delete => app.comment_form.delete(),
        KeyCode::Home => app.comment_form.home(),
        KeyCode::End => app.comment_form.end(),
        KeyCode::Char(character) => app.comment_form.insert_char(character),
        _ => {}
    }
}

fn handle_command_menu(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.close_menu(),
        KeyCode::Enter => app.execute_selected(),
        KeyCode::Up => app.commands.previous_item(),
        KeyCode::Down => app.commands.next_item(),
        KeyCode::Char(character) => app.add_input_char(character),
        KeyCode::Backspace => app.remove_input_char(),
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key_code: KeyCode) {
    if matches!(key_code, KeyCode::Esc | KeyCode::Char('q')) {
        app.close_help();
    }
}
