//! # Data Sources
//!
//! The dashboard never talks to the network directly. Everything that produces
//! employee records sits behind the [`EmployeeSource`] trait, so the API layer
//! can be exercised against fixed data.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: the demo users API (`GET /users?limit=N`, `GET /users/{id}`)
//! - [`file::FileSource`]: a local JSON document in the same wire shape
//! - [`memory::StaticSource`]: already-built records, for tests and embedding
//!
//! ## Wire Boundary
//!
//! Upstream users are untyped JSON. They are deserialized into the private
//! `Wire*` structs below, validated, and only then turned into [`Employee`]s.
//! Department and rating do not exist upstream; the [`assign::MetadataAssigner`]
//! supplies them.

use crate::error::{DashError, Result};
use crate::model::{Address, Employee, EmployeeDetail, EmployeeId};
use serde::Deserialize;
use std::collections::HashSet;

pub mod assign;
pub mod file;
pub mod http;
pub mod memory;

use assign::MetadataAssigner;

/// Anything that can supply the employee collection.
pub trait EmployeeSource {
    /// Fetch the full, materialized employee collection.
    fn fetch_employees(&self) -> Result<Vec<Employee>>;

    /// Fetch one employee with the extended detail fields.
    fn fetch_employee_detail(&self, id: EmployeeId) -> Result<EmployeeDetail>;
}

impl<T: EmployeeSource + ?Sized> EmployeeSource for Box<T> {
    fn fetch_employees(&self) -> Result<Vec<Employee>> {
        (**self).fetch_employees()
    }

    fn fetch_employee_detail(&self, id: EmployeeId) -> Result<EmployeeDetail> {
        (**self).fetch_employee_detail(id)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireUserPage {
    pub users: Vec<WireUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireUser {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub address: WireAddress,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireAddress {
    pub city: String,
    pub state: String,
}

impl WireUser {
    fn into_employee(self, assigner: &MetadataAssigner) -> Result<Employee> {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        if first_name.is_empty() && last_name.is_empty() {
            return Err(DashError::Fetch(format!("user {} has no name", self.id)));
        }

        let id = EmployeeId(self.id);
        let (department, rating) = assigner.assign(id);

        Ok(Employee {
            id,
            first_name,
            last_name,
            email: self.email.trim().to_string(),
            age: self.age,
            image: self.image.filter(|url| !url.is_empty()),
            address: Address {
                city: self.address.city,
                state: self.address.state,
            },
            department,
            rating,
        })
    }
}

/// Turn an upstream page into employees, rejecting duplicate ids.
pub(crate) fn decorate_page(
    page: WireUserPage,
    assigner: &MetadataAssigner,
) -> Result<Vec<Employee>> {
    let mut seen = HashSet::with_capacity(page.users.len());
    let mut employees = Vec::with_capacity(page.users.len());

    for user in page.users {
        if !seen.insert(user.id) {
            return Err(DashError::Fetch(format!(
                "duplicate user id {} in response",
                user.id
            )));
        }
        employees.push(user.into_employee(assigner)?);
    }

    Ok(employees)
}

/// Turn one upstream user into a detail record.
pub(crate) fn decorate_detail(
    user: WireUser,
    assigner: &MetadataAssigner,
) -> Result<EmployeeDetail> {
    let phone = user.phone.clone().unwrap_or_default();
    let employee = user.into_employee(assigner)?;
    Ok(assigner.detail(employee, phone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, Rating};

    fn page_json(ids: &[u32]) -> String {
        let users: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"id":{id},"firstName":"First{id}","lastName":"Last{id}","email":"u{id}@x.io","age":30,"image":"","address":{{"city":"Austin","state":"Texas","country":"US"}},"gender":"female"}}"#
                )
            })
            .collect();
        format!(r#"{{"users":[{}],"total":{},"skip":0,"limit":20}}"#, users.join(","), ids.len())
    }

    #[test]
    fn decorates_page_in_order() {
        let page: WireUserPage = serde_json::from_str(&page_json(&[3, 1, 2])).unwrap();
        let employees = decorate_page(page, &MetadataAssigner::default()).unwrap();

        let ids: Vec<u32> = employees.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(employees[0].first_name, "First3");
        assert_eq!(employees[0].address.city, "Austin");
        // Empty image URLs are normalized away
        assert!(employees[0].image.is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let page: WireUserPage = serde_json::from_str(&page_json(&[1, 2, 1])).unwrap();
        match decorate_page(page, &MetadataAssigner::default()) {
            Err(DashError::Fetch(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_nameless_users() {
        let user = WireUser {
            id: 9,
            first_name: "  ".into(),
            last_name: "".into(),
            email: "a@b.c".into(),
            age: 20,
            image: None,
            phone: None,
            address: WireAddress {
                city: "X".into(),
                state: "Y".into(),
            },
        };
        assert!(matches!(
            user.into_employee(&MetadataAssigner::default()),
            Err(DashError::Fetch(_))
        ));
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        let json = r#"{"users":[{"id":1,"firstName":"A"}]}"#;
        assert!(serde_json::from_str::<WireUserPage>(json).is_err());
    }

    #[test]
    fn assigned_metadata_is_in_range() {
        let page: WireUserPage =
            serde_json::from_str(&page_json(&(1..=30).collect::<Vec<_>>())).unwrap();
        let employees = decorate_page(page, &MetadataAssigner::default()).unwrap();
        for e in employees {
            assert!(Department::ALL.contains(&e.department));
            assert!((Rating::MIN..=Rating::MAX).contains(&e.rating.value()));
        }
    }
}
