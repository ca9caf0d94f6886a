use super::assign::MetadataAssigner;
use super::{decorate_detail, decorate_page, EmployeeSource, WireUserPage};
use crate::error::{DashError, Result};
use crate::model::{Employee, EmployeeDetail, EmployeeId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a saved `/users` response from disk.
///
/// The document has the same shape as the HTTP payload, so a captured
/// response can be replayed offline.
pub struct FileSource {
    path: PathBuf,
    assigner: MetadataAssigner,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, assigner: MetadataAssigner) -> Self {
        Self {
            path: path.into(),
            assigner,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_page(&self) -> Result<WireUserPage> {
        debug!(path = %self.path.display(), "reading employee document");
        let content = fs::read_to_string(&self.path)
            .map_err(|e| DashError::Fetch(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| DashError::Fetch(format!("{}: {}", self.path.display(), e)))
    }
}

impl EmployeeSource for FileSource {
    fn fetch_employees(&self) -> Result<Vec<Employee>> {
        decorate_page(self.load_page()?, &self.assigner)
    }

    fn fetch_employee_detail(&self, id: EmployeeId) -> Result<EmployeeDetail> {
        let user = self
            .load_page()?
            .users
            .into_iter()
            .find(|u| u.id == id.0)
            .ok_or(DashError::EmployeeNotFound(id))?;
        decorate_detail(user, &self.assigner)
    }
}
