use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::logging::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "gevm", version = env!("CARGO_PKG_VERSION"), about = "Godot engine version manager", long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,

    #[arg(long, global = true, help = "Use this config file instead of the default one")]
    pub config_path: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Hide progress bars")]
    pub silent: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(subcommand, alias = "v", about = "Browse published Godot versions")]
    Versions(VersionsCommand),
    #[command(subcommand, alias = "g", about = "Manage Godot installs")]
    Godot(GodotCommand),
    #[command(subcommand, alias = "et", name = "export-templates", about = "Manage export templates")]
    ExportTemplates(TemplatesCommand),
    #[command(subcommand, alias = "sc", about = "Manage desktop shortcuts")]
    Shortcuts(ShortcutsCommand),
    #[command(subcommand, about = "Manage the download cache")]
    Cache(CacheCommand),
    #[command(subcommand, alias = "cfg", about = "Show or change settings")]
    Settings(SettingsCommand),
    #[command(about = "Print the gevm version")]
    Version,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, help = "Include prereleases")]
    pub all:  bool,
    #[arg(short, long, help = "Mono (C#) builds")]
    pub mono: bool,
}

#[derive(Debug, Subcommand)]
pub enum VersionsCommand {
    #[command(alias = "ls", about = "Versions available for this platform")]
    List(ListArgs),
    #[command(about = "Availability per platform")]
    Detailed(ListArgs),
}

/// A version as typed by the user: `4.2.1 --release rc2 --mono`.
#[derive(Debug, Clone, Args)]
pub struct VersionArgs {
    #[arg(id = "semver", value_name = "VERSION", help = "Version number such as 4.2 or 4.2.1")]
    pub version: String,
    #[arg(short, long, default_value = "stable", help = "Release channel such as stable, rc2, beta3")]
    pub release: String,
    #[arg(short, long)]
    pub mono:    bool,
}

#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub version: VersionArgs,
    #[arg(short, long, help = "Skip the matching export templates")]
    pub exclude_export_templates: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ClearArgs {
    #[arg(short, long, help = "Keep installed export templates")]
    pub exclude_export_templates: bool,
}

#[derive(Debug, Subcommand)]
pub enum GodotCommand {
    #[command(alias = "dl", about = "Download an archive into the cache")]
    Download(InstallArgs),
    #[command(alias = "i", about = "Download and install a version")]
    Install(InstallArgs),
    #[command(alias = "rm", about = "Remove an installed version and its export templates")]
    Uninstall(InstallArgs),
    #[command(about = "Print the executable of an installed version")]
    Path(VersionArgs),
    #[command(alias = "u", about = "Make an installed version the `godot` command")]
    Use(VersionArgs),
    #[command(alias = "ls", about = "List installed versions")]
    List,
    #[command(about = "Remove every installed version and all export templates")]
    Clear(ClearArgs),
}

#[derive(Debug, Subcommand)]
pub enum TemplatesCommand {
    #[command(alias = "dl")]
    Download(VersionArgs),
    #[command(alias = "i")]
    Install(VersionArgs),
    #[command(alias = "rm")]
    Uninstall(VersionArgs),
    #[command(alias = "ls")]
    List,
    Clear,
}

#[derive(Debug, Clone, Args)]
pub struct ShortcutArgs {
    #[command(flatten)]
    pub version:     VersionArgs,
    #[arg(long, help = "Only the applications menu entry")]
    pub application: bool,
    #[arg(long, help = "Only the desktop icon")]
    pub desktop:     bool,
}

#[derive(Debug, Subcommand)]
pub enum ShortcutsCommand {
    Add(ShortcutArgs),
    #[command(alias = "rm")]
    Remove(ShortcutArgs),
}

#[derive(Debug, Subcommand)]
pub enum CacheCommand {
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    #[command(alias = "ls")]
    List,
    Set { key: String, value: String },
    Reset,
}
