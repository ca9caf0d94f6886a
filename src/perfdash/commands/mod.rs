//! # Command Layer
//!
//! Business logic for each dashboard operation. Commands take plain Rust
//! values (an employee snapshot, a bookmark store, criteria) and return a
//! [`CmdResult`]. They never print and never fetch on their own; loading the
//! snapshot is the API layer's job.
//!
//! The two engines live here as well:
//! - [`filter`]: criteria matching over a collection
//! - [`stats`]: summary, per-department and per-rating aggregation

use crate::config::DashConfig;
use crate::model::{Employee, EmployeeDetail};
use serde::Serialize;

pub mod analytics;
pub mod bookmarks;
pub mod config;
pub mod detail;
pub mod filter;
pub mod helpers;
pub mod list;
pub mod overview;
pub mod promote;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An employee as shown in a list, with its bookmark flag resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    pub bookmarked: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_employees: Vec<ListedEmployee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<EmployeeDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<stats::SummaryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<analytics::Analytics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<DashConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_employees(mut self, employees: Vec<ListedEmployee>) -> Self {
        self.listed_employees = employees;
        self
    }

    pub fn with_detail(mut self, detail: EmployeeDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_summary(mut self, summary: stats::SummaryStats) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_analytics(mut self, analytics: analytics::Analytics) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn with_config(mut self, config: DashConfig) -> Self {
        self.config = Some(config);
        self
    }
}
