//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every dashboard operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns session state**: the employee source, the bookmark store and the
//!   loaded employee snapshot
//! - **Loads once**: the collection is fetched on first use and reused until
//!   [`DashApi::refresh`] is called
//! - **Normalizes inputs**: raw id strings become [`EmployeeId`]s here
//! - **Returns structured types**: `Result<CmdResult>`, never strings
//!
//! Business logic stays in `commands/*.rs`; nothing here prints.
//!
//! ## Generic Over Source and Store
//!
//! `DashApi<S: EmployeeSource, B: BookmarkStore>`:
//! - Production: `DashApi<HttpSource, InMemoryBookmarks>`
//! - Local data: `DashApi<FileSource, InMemoryBookmarks>`
//! - Testing: `DashApi<StaticSource, InMemoryBookmarks>`
//!
//! API tests verify dispatch, id parsing and snapshot handling. The command
//! logic itself is tested in the command modules.

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, EmployeeId};
use crate::source::EmployeeSource;
use crate::store::BookmarkStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// The main API facade for dashboard operations.
pub struct DashApi<S: EmployeeSource, B: BookmarkStore> {
    source: S,
    bookmarks: B,
    config_dir: PathBuf,
    snapshot: Option<Vec<Employee>>,
}

impl<S: EmployeeSource, B: BookmarkStore> DashApi<S, B> {
    pub fn new(source: S, bookmarks: B, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            bookmarks,
            config_dir: config_dir.into(),
            snapshot: None,
        }
    }

    /// The loaded collection, fetching it on first use.
    pub fn employees(&mut self) -> Result<&[Employee]> {
        load_snapshot(&self.source, &mut self.snapshot)
    }

    /// Discard the snapshot and fetch again. On failure the old snapshot is gone.
    pub fn refresh(&mut self) -> Result<usize> {
        self.snapshot = None;
        Ok(self.employees()?.len())
    }

    pub fn list_employees(&mut self, criteria: &FilterCriteria) -> Result<CmdResult> {
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::list::run(employees, &self.bookmarks, criteria)
    }

    pub fn summary(&mut self) -> Result<CmdResult> {
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::overview::run(employees)
    }

    pub fn analytics(&mut self) -> Result<CmdResult> {
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::analytics::run(employees)
    }

    pub fn employee_detail(&self, id: &str) -> Result<CmdResult> {
        let id = EmployeeId::from_str(id)?;
        commands::detail::run(&self.source, id)
    }

    pub fn add_bookmarks<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::bookmarks::add(employees, &mut self.bookmarks, &ids)
    }

    pub fn remove_bookmarks<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::bookmarks::remove(employees, &mut self.bookmarks, &ids)
    }

    pub fn toggle_bookmark(&mut self, id: &str) -> Result<CmdResult> {
        let id = EmployeeId::from_str(id)?;
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::bookmarks::toggle(employees, &mut self.bookmarks, id)
    }

    pub fn list_bookmarks(&mut self) -> Result<CmdResult> {
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::bookmarks::list(employees, &self.bookmarks)
    }

    pub fn promote(&mut self, id: &str) -> Result<CmdResult> {
        let id = EmployeeId::from_str(id)?;
        let employees = load_snapshot(&self.source, &mut self.snapshot)?;
        commands::promote::run(employees, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn bookmarks(&self) -> &B {
        &self.bookmarks
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn load_snapshot<'a, S: EmployeeSource>(
    source: &S,
    snapshot: &'a mut Option<Vec<Employee>>,
) -> Result<&'a [Employee]> {
    if snapshot.is_none() {
        debug!("loading employee snapshot");
        let employees = source.fetch_employees()?;
        info!(count = employees.len(), "employee snapshot loaded");
        *snapshot = Some(employees);
    }
    Ok(snapshot.as_deref().unwrap_or_default())
}

fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<EmployeeId>> {
    inputs
        .iter()
        .map(|s| EmployeeId::from_str(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::filter::FilterCriteria;
pub use commands::{CmdMessage, CmdResult, ListedEmployee, MessageLevel};
