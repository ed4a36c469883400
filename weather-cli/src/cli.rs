use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_core::{Config, WeatherProvider, WeatherState, display, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather by city name")]
pub struct Cli {
    /// OpenWeather API key; overrides the configured one.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default location.
    Configure,

    /// Search interactively, starting with the default location (the default command).
    Interactive,

    /// Show weather for a single location and exit.
    Show {
        /// City or place name.
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Interactive => {
                let config = Config::load()?;
                let provider = provider_from_config(&config, self.api_key.as_deref())?;
                interactive(provider.as_ref(), config.default_location()).await
            }
            Command::Show { location } => {
                let config = Config::load()?;
                let provider = provider_from_config(&config, self.api_key.as_deref())?;
                let mut state = WeatherState::new(location);
                state.search(provider.as_ref()).await;
                render(&state);
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let location = Text::new("Default location:")
        .with_initial_value(config.default_location())
        .prompt()
        .context("Failed to read default location")?;
    config.set_default_location(location);

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

/// Search the default location once, then keep prompting. Enter runs a
/// search with whatever is in the prompt; Esc or Ctrl-C ends the session.
async fn interactive(provider: &dyn WeatherProvider, initial: &str) -> anyhow::Result<()> {
    let mut state = WeatherState::new(initial);
    state.search(provider).await;
    render(&state);

    loop {
        let input = Text::new("Location:")
            .with_placeholder("Enter the area name...")
            .with_initial_value(state.query())
            .with_help_message("Enter to search, Esc to quit")
            .prompt();

        match input {
            Ok(query) => {
                state.set_query(query);
                state.search(provider).await;
                render(&state);
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("interactive session ended");
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read location"),
        }
    }
}

fn render(state: &WeatherState) {
    if let Some(card) = state.card(display::today()) {
        println!("\n{card}\n");
    }
}
