//! # CLI Layer
//!
//! This module is **one possible UI client** for perfdash, not the application
//! itself. It is the only place that parses arguments, touches the terminal,
//! or decides exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become typed commands via clap
//! 2. **Context Setup**: build `AppContext` from configuration and flags
//! 3. **API Dispatch**: call the matching `DashApi` method
//! 4. **Output**: render the `CmdResult` as text or JSON
//!
//! One-shot commands get a fresh, empty bookmark store; `shell` keeps one for
//! the whole session.
//!
//! ## Structure
//!
//! - `run()`: main dispatch (called by `main.rs`)
//! - `init_context()`: builds `AppContext` with API and configuration
//! - `handle_*()`: per-command handlers that call the API and print

use super::render::{
    print_result, render_analytics, render_config, render_detail, render_employee_list,
    render_summary,
};
use super::setup::{Cli, Commands, OutputFormat};
use super::shell;
use clap::Parser;
use directories::ProjectDirs;
use perfdash::api::{ConfigAction, DashApi, FilterCriteria};
use perfdash::config::DashConfig;
use perfdash::error::{DashError, Result};
use perfdash::model::{Department, Rating};
use perfdash::source::file::FileSource;
use perfdash::source::http::HttpSource;
use perfdash::source::EmployeeSource;
use perfdash::store::memory::InMemoryBookmarks;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the per-user configuration directory.
pub const CONFIG_DIR_ENV: &str = "PERFDASH_CONFIG_DIR";

struct AppContext {
    api: DashApi<Box<dyn EmployeeSource>, InMemoryBookmarks>,
    format: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            departments,
            ratings,
        }) => handle_list(&mut ctx, search, departments, ratings),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Analytics) => handle_analytics(&mut ctx),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id),
        Some(Commands::Promote { id }) => handle_promote(&mut ctx, id),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, Vec::new(), Vec::new()),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "perfdash", "perfdash")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DashError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = DashConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        DashConfig::default()
    });
    debug!(dir = %config_dir.display(), ?config, "configuration loaded");

    let source: Box<dyn EmployeeSource> = match &cli.source_file {
        Some(path) => Box::new(FileSource::new(path.clone(), config.assigner())),
        None => Box::new(HttpSource::new(
            &config.base_url,
            config.limit,
            config.timeout(),
            config.assigner(),
        )?),
    };

    Ok(AppContext {
        api: DashApi::new(source, InMemoryBookmarks::new(), config_dir),
        format: cli.output,
    })
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    departments: Vec<Department>,
    ratings: Vec<Rating>,
) -> Result<()> {
    let search = search.map(|s| s.trim().to_string()).unwrap_or_default();
    let criteria = FilterCriteria::new(search, departments, ratings);
    let result = ctx.api.list_employees(&criteria)?;
    print_result(&result, ctx.format, || {
        render_employee_list(&result.listed_employees)
    })
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.summary()?;
    print_result(&result, ctx.format, || {
        result.summary.as_ref().map(render_summary).unwrap_or_default()
    })
}

fn handle_analytics(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.analytics()?;
    print_result(&result, ctx.format, || {
        result
            .analytics
            .as_ref()
            .map(render_analytics)
            .unwrap_or_default()
    })
}

fn handle_show(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.employee_detail(&id)?;
    print_result(&result, ctx.format, || {
        result.detail.as_ref().map(render_detail).unwrap_or_default()
    })
}

fn handle_promote(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.promote(&id)?;
    print_result(&result, ctx.format, String::new)
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    shell::run(&mut ctx.api, stdin.lock(), interactive, ctx.format)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
        (Some(k), None) => ConfigAction::ShowKey(k),
        (None, _) => ConfigAction::ShowAll,
    };

    let result = ctx.api.config(action)?;
    print_result(&result, ctx.format, || match (&result.config, show_all) {
        (Some(config), true) => render_config(config),
        _ => String::new(),
    })
}
