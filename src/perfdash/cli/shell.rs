//! Interactive session.
//!
//! One-shot commands start from an empty bookmark set, so bookmarking only
//! means something inside a session. The shell keeps one [`DashApi`] alive for
//! its whole run: the employee snapshot is fetched once, bookmarks and filter
//! criteria accumulate until the user quits or stdin closes.

use super::render::{
    print_messages, print_result, render_analytics, render_bookmarks, render_detail,
    render_employee_list, render_summary,
};
use super::setup::OutputFormat;
use colored::Colorize;
use perfdash::api::{DashApi, FilterCriteria};
use perfdash::error::{DashError, Result};
use perfdash::model::{Department, Rating};
use perfdash::source::EmployeeSource;
use perfdash::store::BookmarkStore;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "perfdash> ";

const HELP: &str = "\
Commands:
  list                    employees matching the current filters
  search [TERM]           set the search term (no term clears it)
  dept NAME               toggle a department filter
  rating N                toggle a rating filter (1-5)
  filters                 show the current filters
  clear                   remove every filter
  bookmark ID...          bookmark employees
  unbookmark ID...        remove bookmarks
  toggle ID               flip one bookmark
  bookmarks               list bookmarked employees
  stats                   team overview
  analytics               department and rating breakdown
  show ID                 employee detail
  promote ID              start a promotion
  refresh                 reload employee data
  help                    this text
  quit                    leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Noop,
    List,
    Search(String),
    ToggleDepartment(Department),
    ToggleRating(Rating),
    ShowFilters,
    ClearFilters,
    Bookmark(Vec<String>),
    Unbookmark(Vec<String>),
    Toggle(String),
    Bookmarks,
    Stats,
    Analytics,
    Show(String),
    Promote(String),
    Refresh,
    Help,
    Quit,
}

/// Parse one input line. Errors are meant to be shown to the user as-is.
pub fn parse_line(line: &str) -> std::result::Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(ShellCommand::Noop);
    };
    let args: Vec<String> = words.map(str::to_string).collect();

    let single = |name: &str| -> std::result::Result<String, String> {
        match args.as_slice() {
            [id] => Ok(id.clone()),
            _ => Err(format!("usage: {} ID", name)),
        }
    };
    let many = |name: &str| -> std::result::Result<Vec<String>, String> {
        if args.is_empty() {
            Err(format!("usage: {} ID...", name))
        } else {
            Ok(args.clone())
        }
    };

    let command = match verb.to_lowercase().as_str() {
        "list" | "ls" => ShellCommand::List,
        "search" | "s" => ShellCommand::Search(args.join(" ")),
        "dept" | "department" => {
            let name = args.join(" ");
            if name.is_empty() {
                return Err("usage: dept NAME".to_string());
            }
            ShellCommand::ToggleDepartment(name.parse().map_err(|e: DashError| e.to_string())?)
        }
        "rating" => ShellCommand::ToggleRating(
            single("rating")?
                .parse()
                .map_err(|e: DashError| e.to_string())?,
        ),
        "filters" => ShellCommand::ShowFilters,
        "clear" => ShellCommand::ClearFilters,
        "bookmark" | "bm" => ShellCommand::Bookmark(many("bookmark")?),
        "unbookmark" | "ubm" => ShellCommand::Unbookmark(many("unbookmark")?),
        "toggle" => ShellCommand::Toggle(single("toggle")?),
        "bookmarks" => ShellCommand::Bookmarks,
        "stats" => ShellCommand::Stats,
        "analytics" => ShellCommand::Analytics,
        "show" | "view" => ShellCommand::Show(single("show")?),
        "promote" => ShellCommand::Promote(single("promote")?),
        "refresh" => ShellCommand::Refresh,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };
    Ok(command)
}

/// Run the session until `quit` or end of input. `interactive` turns on the
/// greeting and prompt.
pub fn run<S, B, R>(
    api: &mut DashApi<S, B>,
    input: R,
    interactive: bool,
    format: OutputFormat,
) -> Result<()>
where
    S: EmployeeSource,
    B: BookmarkStore,
    R: BufRead,
{
    let mut criteria = FilterCriteria::default();

    if interactive {
        println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());
        prompt()?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                debug!(?command, "shell command");
                if let Err(e) = execute(api, &mut criteria, command, format) {
                    eprintln!("{}", format!("Error: {}", e).red());
                }
            }
            Err(message) => eprintln!("{}", message.red()),
        }
        if interactive {
            prompt()?;
        }
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("{}", PROMPT);
    std::io::stdout().flush()?;
    Ok(())
}

fn execute<S: EmployeeSource, B: BookmarkStore>(
    api: &mut DashApi<S, B>,
    criteria: &mut FilterCriteria,
    command: ShellCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ShellCommand::Noop | ShellCommand::Quit => Ok(()),
        ShellCommand::List => {
            let result = api.list_employees(criteria)?;
            print_result(&result, format, || {
                render_employee_list(&result.listed_employees)
            })
        }
        ShellCommand::Search(term) => {
            *criteria = std::mem::take(criteria).with_search(term);
            println!("{}", describe_filters(criteria).dimmed());
            Ok(())
        }
        ShellCommand::ToggleDepartment(department) => {
            criteria.toggle_department(department);
            println!("{}", describe_filters(criteria).dimmed());
            Ok(())
        }
        ShellCommand::ToggleRating(rating) => {
            criteria.toggle_rating(rating);
            println!("{}", describe_filters(criteria).dimmed());
            Ok(())
        }
        ShellCommand::ShowFilters => {
            println!("{}", describe_filters(criteria));
            Ok(())
        }
        ShellCommand::ClearFilters => {
            criteria.clear();
            println!("{}", describe_filters(criteria).dimmed());
            Ok(())
        }
        ShellCommand::Bookmark(ids) => {
            let result = api.add_bookmarks(&ids)?;
            print_result(&result, format, String::new)
        }
        ShellCommand::Unbookmark(ids) => {
            let result = api.remove_bookmarks(&ids)?;
            print_result(&result, format, String::new)
        }
        ShellCommand::Toggle(id) => {
            let result = api.toggle_bookmark(&id)?;
            print_result(&result, format, String::new)
        }
        ShellCommand::Bookmarks => {
            let result = api.list_bookmarks()?;
            let entries = api.bookmarks().entries();
            print_result(&result, format, || {
                render_bookmarks(&result.listed_employees, &entries)
            })
        }
        ShellCommand::Stats => {
            let result = api.summary()?;
            print_result(&result, format, || {
                result.summary.as_ref().map(render_summary).unwrap_or_default()
            })
        }
        ShellCommand::Analytics => {
            let result = api.analytics()?;
            print_result(&result, format, || {
                result
                    .analytics
                    .as_ref()
                    .map(render_analytics)
                    .unwrap_or_default()
            })
        }
        ShellCommand::Show(id) => {
            let result = api.employee_detail(&id)?;
            print_result(&result, format, || {
                result.detail.as_ref().map(render_detail).unwrap_or_default()
            })
        }
        ShellCommand::Promote(id) => {
            let result = api.promote(&id)?;
            print_result(&result, format, String::new)
        }
        ShellCommand::Refresh => {
            let count = api.refresh()?;
            print_messages(&[perfdash::api::CmdMessage::success(format!(
                "Reloaded {} employees",
                count
            ))]);
            Ok(())
        }
        ShellCommand::Help => {
            print!("{}", HELP);
            Ok(())
        }
    }
}

fn describe_filters(criteria: &FilterCriteria) -> String {
    if !criteria.is_active() {
        return "Filters: none".to_string();
    }

    let mut parts = Vec::new();
    let term = criteria.search.as_str();
    if !term.is_empty() {
        parts.push(format!("search \"{}\"", term));
    }
    if !criteria.departments.is_empty() {
        let names: Vec<&str> = criteria.departments.iter().map(|d| d.name()).collect();
        parts.push(format!("departments {}", names.join(", ")));
    }
    if !criteria.ratings.is_empty() {
        let ratings: Vec<String> = criteria.ratings.iter().map(|r| r.to_string()).collect();
        parts.push(format!("ratings {}", ratings.join(", ")));
    }
    format!("Filters: {}", parts.join("; "))
}
