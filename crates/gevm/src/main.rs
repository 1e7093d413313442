mod cli;
mod config;
mod env;
mod logging;
mod services;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gevm_fetch::ReqwestClient;
use gevm_platform::PlatformTarget;
use gevm_version::Semver;
use tabled::{Table, Tabled};

use crate::{
    cli::{App, CacheCommand, Commands, GodotCommand, SettingsCommand, ShortcutsCommand, TemplatesCommand, VersionsCommand},
    config::Config,
    env::GevmEnv,
    services::{cache, godot, semver, settings, shortcuts, templates, versions},
    ui::table::Formatter,
};

fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.log_level);

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: App) -> Result<()> {
    if let Commands::Version = app.cmd {
        println!("gevm {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config_path = match app.config_path {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut config = Config::load_or_init(&config_path)?;

    match app.cmd {
        Commands::Settings(cmd) => {
            return match cmd {
                SettingsCommand::List => {
                    println!("{}", settings::list(&config));
                    Ok(())
                }
                SettingsCommand::Set { key, value } => settings::set(&mut config, &config_path, &key, &value),
                SettingsCommand::Reset => settings::reset(&mut config, &config_path),
            };
        }
        Commands::Cache(CacheCommand::Clear) => return cache::clear(&config),
        _ => {}
    }

    let platform = PlatformTarget::host().context("Unsupported host")?;
    let client = ReqwestClient::new(config.client_setting()?).context("Failed to set up the HTTP client")?;
    let env = GevmEnv::new(config, platform, app.silent, &client);

    match app.cmd {
        Commands::Versions(cmd) => {
            let table = match cmd {
                VersionsCommand::List(args) => versions::list(&env, args.all, args.mono)?,
                VersionsCommand::Detailed(args) => versions::detailed(&env, args.all, args.mono)?,
            };
            println!("{table}");
        }
        Commands::Godot(cmd) => match cmd {
            GodotCommand::Download(args) => {
                godot::download(&env, &semver(&args.version)?, !args.exclude_export_templates)?;
            }
            GodotCommand::Install(args) => {
                godot::install(&env, &semver(&args.version)?, !args.exclude_export_templates)?;
            }
            GodotCommand::Uninstall(args) => {
                godot::uninstall(&env.config, &semver(&args.version)?, !args.exclude_export_templates)?
            }
            GodotCommand::Path(args) => println!("{}", godot::path(&env, &semver(&args)?)?.display()),
            GodotCommand::Use(args) => {
                godot::use_version(&env, &semver(&args)?)?;
            }
            GodotCommand::List => println!("{}", installed_table("Installed Godot versions", godot::list(&env.config)?)),
            GodotCommand::Clear(args) => {
                godot::clear(&env.config, !args.exclude_export_templates)?;
            }
        },
        Commands::ExportTemplates(cmd) => match cmd {
            TemplatesCommand::Download(args) => {
                templates::download(&env, &semver(&args)?)?;
            }
            TemplatesCommand::Install(args) => templates::install(&env, &semver(&args)?)?,
            TemplatesCommand::Uninstall(args) => templates::uninstall(&env.config, &semver(&args)?)?,
            TemplatesCommand::List => println!(
                "{}",
                installed_table("Installed export templates", templates::list(&env.config)?)
            ),
            TemplatesCommand::Clear => {
                templates::clear(&env.config)?;
            }
        },
        Commands::Shortcuts(cmd) => match cmd {
            ShortcutsCommand::Add(args) => {
                shortcuts::add(&env, &semver(&args.version)?, placement(args.application, args.desktop))?;
            }
            ShortcutsCommand::Remove(args) => {
                shortcuts::remove(&env, &semver(&args.version)?, placement(args.application, args.desktop))?;
            }
        },
        Commands::Settings(_) | Commands::Cache(_) | Commands::Version => {}
    }

    Ok(())
}

fn placement(application: bool, desktop: bool) -> shortcuts::Placement { shortcuts::Placement { application, desktop } }

#[derive(Tabled)]
struct InstalledRow {
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Release")]
    release: String,
    #[tabled(rename = "Mono")]
    mono:    &'static str,
}

fn installed_table(header: &str, installed: Vec<Semver>) -> Table {
    let rows = installed.into_iter().map(|s| InstalledRow {
        version: s.relver().version().to_string(),
        release: s.relver().release().to_string(),
        mono:    ui::table::mark(s.is_mono()),
    });
    Formatter::default().with_header(header).build(rows)
}
