use super::assign::MetadataAssigner;
use super::{decorate_detail, decorate_page, EmployeeSource, WireUser, WireUserPage};
use crate::error::{DashError, Result};
use crate::model::{Employee, EmployeeDetail, EmployeeId};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Blocking client for the demo users API.
pub struct HttpSource {
    client: Client,
    base_url: String,
    limit: u32,
    assigner: MetadataAssigner,
}

impl HttpSource {
    pub fn new(
        base_url: &str,
        limit: u32,
        timeout: Duration,
        assigner: MetadataAssigner,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("perfdash/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            limit,
            assigner,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users?limit={}", self.base_url, self.limit)
    }

    fn user_url(&self, id: EmployeeId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

impl EmployeeSource for HttpSource {
    fn fetch_employees(&self) -> Result<Vec<Employee>> {
        let url = self.users_url();
        debug!(%url, "fetching employees");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "employee list request failed");
            return Err(DashError::Fetch(format!("{} returned {}", url, status)));
        }

        let page: WireUserPage = response.json()?;
        let employees = decorate_page(page, &self.assigner)?;
        debug!(count = employees.len(), "employees loaded");
        Ok(employees)
    }

    fn fetch_employee_detail(&self, id: EmployeeId) -> Result<EmployeeDetail> {
        let url = self.user_url(id);
        debug!(%url, "fetching employee detail");

        let response = self.client.get(&url).send()?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(DashError::EmployeeNotFound(id)),
            status if !status.is_success() => {
                warn!(%url, %status, "employee detail request failed");
                Err(DashError::Fetch(format!("{} returned {}", url, status)))
            }
            _ => {
                let user: WireUser = response.json()?;
                decorate_detail(user, &self.assigner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpSource {
        HttpSource::new(
            base,
            20,
            Duration::from_secs(1),
            MetadataAssigner::default(),
        )
        .unwrap()
    }

    #[test]
    fn builds_urls_without_double_slashes() {
        let s = source("https://dummyjson.com/");
        assert_eq!(s.base_url(), "https://dummyjson.com");
        assert_eq!(s.users_url(), "https://dummyjson.com/users?limit=20");
        assert_eq!(s.user_url(EmployeeId(7)), "https://dummyjson.com/users/7");
    }

    #[test]
    fn unreachable_host_is_a_fetch_error() {
        // Port 9 (discard) on localhost is not expected to speak HTTP.
        let s = source("http://127.0.0.1:9");
        assert!(matches!(s.fetch_employees(), Err(DashError::Fetch(_))));
    }
}
