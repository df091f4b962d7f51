use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use edughana::api::{ConfigAction, PortalApi, Selections};
use edughana::commands;
use edughana::config::PortalConfig;
use edughana::error::Result;
use edughana::session::Session;
use edughana::store::fs::FileProvider;
use edughana::store::http::{Credentials, HttpProvider};
use edughana::store::memory::MemoryProvider;
use edughana::store::ContentProvider;
use std::path::{Path, PathBuf};

mod args;
mod cli;

use args::{Cli, Commands};

const TOKEN_ENV_VAR: &str = "EDUGHANA_TOKEN";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = config_dir();
    let config = PortalConfig::load(&config_dir).unwrap_or_default();

    // Login and config don't go through a catalog provider
    match &cli.command {
        Some(Commands::Login { email, password }) => {
            return handle_login(&config, email.clone(), password.clone());
        }
        Some(Commands::Config { key, value }) => {
            return handle_config(&config_dir, key.clone(), value.clone());
        }
        _ => {}
    }

    if cli.remote {
        let session = resolve_session(&cli);
        let provider = HttpProvider::new(config.api_base_url.clone(), session)?;
        dispatch(&cli, &PortalApi::new(provider))
    } else if let Some(dir) = cli.catalog.clone().or_else(|| config.catalog_dir.clone()) {
        dispatch(&cli, &PortalApi::new(FileProvider::new(dir)))
    } else {
        dispatch(&cli, &PortalApi::new(MemoryProvider::seeded()))
    }
}

fn dispatch<P: ContentProvider>(cli: &Cli, api: &PortalApi<P>) -> Result<()> {
    match &cli.command {
        Some(Commands::Levels) => {
            let result = api.levels()?;
            cli::print::print_levels(&result.levels);
        }
        Some(Commands::Subjects) => {
            let result = api.subjects()?;
            cli::print::print_subjects(&result.subjects);
        }
        Some(Commands::Resources {
            search,
            subject,
            level,
            kind,
        }) => {
            let result = api.resources(selections(search, subject, level), kind.as_deref())?;
            cli::print::print_resources(&result.resources);
        }
        Some(Commands::Notes {
            search,
            subject,
            level,
        }) => {
            let result = api.resources(selections(search, subject, level), Some("lesson-note"))?;
            cli::print::print_resources(&result.resources);
        }
        Some(Commands::Assessments {
            search,
            subject,
            level,
            kind,
            difficulty,
        }) => {
            let result = api.assessments(
                selections(search, subject, level),
                kind.as_deref(),
                difficulty.as_deref(),
            )?;
            cli::print::print_assessments(&result.assessments);
        }
        Some(Commands::Tests {
            test_type,
            search,
            subject,
            level,
        }) => {
            let result = api.assessments(
                selections(search, subject, level),
                test_type.as_deref(),
                None,
            )?;
            cli::print::print_assessments(&result.assessments);
        }
        Some(Commands::News {
            search,
            category,
            source,
            featured,
        }) => {
            let result = api.news(
                search.clone(),
                category.clone(),
                source.clone(),
                *featured,
            )?;
            cli::print::print_news(&result.news);
        }
        // Handled in run() before a provider is chosen
        Some(Commands::Login { .. }) | Some(Commands::Config { .. }) => {}
        None => {
            let result = api.resources(Selections::default(), None)?;
            cli::print::print_resources(&result.resources);
        }
    }
    Ok(())
}

fn selections(
    search: &Option<String>,
    subject: &Option<String>,
    level: &Option<String>,
) -> Selections {
    Selections {
        search: search.clone(),
        subject: subject.clone(),
        level: level.clone(),
    }
}

fn resolve_session(cli: &Cli) -> Session {
    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok());
    match token {
        Some(token) if !token.trim().is_empty() => Session::authenticated(token.trim()),
        _ => Session::anonymous(),
    }
}

fn handle_login(config: &PortalConfig, email: String, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => {
            let term = console::Term::stderr();
            term.write_str("Password: ")?;
            term.read_secure_line()?
        }
    };

    let provider = HttpProvider::new(config.api_base_url.clone(), Session::anonymous())?;
    let session = provider.login(&Credentials { email, password })?;

    // The token goes to stdout so it can be captured; the hint stays on stderr
    println!("{}", session.token().unwrap_or_default());
    eprintln!(
        "{}",
        format!(
            "Login successful. Export {}=<token> to authenticate future requests.",
            TOKEN_ENV_VAR
        )
        .dimmed()
    );
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::Show,
        (Some(key), None) => ConfigAction::Get(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(config_dir, action)?;
    if let Some(config) = &result.config {
        println!("api-base-url: {}", config.api_base_url);
        println!(
            "catalog-dir: {}",
            config
                .catalog_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
    cli::print::print_messages(&result.messages);
    Ok(())
}

fn config_dir() -> PathBuf {
    ProjectDirs::from("com", "edughana", "edughana")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".edughana"))
}
