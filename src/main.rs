mod config;
mod logging;
mod todo;
mod tui;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use todo::models::{AppState, Task};
use tracing::{error, info};
use tui::{
    app::{App, AppEvent},
    ui::{self, Anchors},
};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A terminal task list: add, select, edit, complete and delete tasks")]
struct Cli {
    #[arg(long, help = "Start with the sample tasks")]
    sample: bool,
    #[arg(long = "task", value_name = "TEXT", help = "Start with a pending task (repeatable)")]
    tasks: Vec<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (log_file or sample_tasks)")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app(cli.sample, cli.tasks) {
                error!("{:#}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            for key in config::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

fn run_main_app(sample: bool, tasks: Vec<String>) -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    logging::init(&config)?;

    let state = initial_state(&config, sample, tasks);
    info!(tasks = state.total_tasks(), "starting task list");
    let mut app = App::new(state);

    run_tui(&mut app)?;

    info!(
        tasks = app.state.total_tasks(),
        completed = app.state.completed_tasks(),
        "task list closed"
    );
    Ok(())
}

fn initial_state(config: &Config, sample: bool, tasks: Vec<String>) -> AppState {
    let mut state = if sample || (tasks.is_empty() && config.sample_tasks) {
        AppState::with_sample_tasks()
    } else {
        AppState::default()
    };
    state.tasks.extend(tasks.into_iter().map(Task::new));
    state
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let anchors = Anchors::locate(terminal.size()?, app.form.visible)?;
        terminal.draw(|f| ui::draw(f, app, &anchors))?;

        let app_event = match event::read()? {
            Event::Key(key) => AppEvent::Key(key),
            Event::Mouse(mouse) => AppEvent::Mouse(mouse),
            _ => continue,
        };

        app.handle_event(app_event)?;
        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_seed_tasks() {
        let cli = Cli::try_parse_from(["todo", "--task", "Buy milk", "--task", "Call Ana"]).unwrap();
        assert!(!cli.sample);
        assert_eq!(cli.tasks, vec!["Buy milk".to_string(), "Call Ana".to_string()]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_config_subcommand() {
        let cli = Cli::try_parse_from(["todo", "config", "set", "sample_tasks", "true"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Set { .. }
            })
        ));
    }

    #[test]
    fn test_initial_state_from_flags() {
        let config = Config::default();
        assert!(initial_state(&config, false, Vec::new()).tasks.is_empty());

        let state = initial_state(&config, true, vec!["Extra".to_string()]);
        assert_eq!(state.total_tasks(), 4);
        assert_eq!(state.tasks[3].description, "Extra");
        assert!(!state.tasks[3].completed);
    }

    #[test]
    fn test_config_sample_tasks_yields_to_explicit_tasks() {
        let config = Config {
            sample_tasks: true,
            ..Config::default()
        };
        assert_eq!(initial_state(&config, false, Vec::new()).total_tasks(), 3);

        let state = initial_state(&config, false, vec!["Only".to_string()]);
        assert_eq!(state.total_tasks(), 1);
    }

    #[test]
    fn test_cli_verifies() {
        Cli::command().debug_assert();
    }
}
