use authcode::app::App;
use authcode::{logging, Config};
use clap::Parser;
use color_eyre::eyre::eyre;
use directories::ProjectDirs;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "authcode", version, about = "Obtain a Google OAuth authorization code")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "AUTHCODE_CONFIG")]
    config: Option<PathBuf>,

    /// Start from this URL, e.g. the address the browser was redirected to
    #[arg(long)]
    location: Option<Url>,

    /// Do not listen for the OAuth redirect on the loopback interface
    #[arg(long)]
    no_listen: bool,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "authcode", "authcode")
}

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Some(proj_dirs) = project_dirs() {
        if let Err(e) = logging::init(proj_dirs.data_dir()) {
            eprintln!("Logging disabled: {:#}", e);
        }
    }

    let config_path = cli.config.clone().unwrap_or_else(get_config_path);
    let mut config = Config::load_or_default(&config_path);
    config.apply_env_overrides();
    if cli.no_listen {
        config.callback.listen = false;
    }

    let location = match cli.location {
        Some(location) => location,
        None => config
            .landing_location()
            .map_err(|e| eyre!("{:#}", e))?,
    };

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let mut app = App::new(config, location);
    app.init();
    app.start_callback_listener();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    app.shutdown();
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
            }

            match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => tracing::warn!("Event handling failed: {:#}", e),
            }
        }

        app.process_async_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
