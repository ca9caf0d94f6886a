use super::assign::MetadataAssigner;
use super::EmployeeSource;
use crate::error::{DashError, Result};
use crate::model::{Employee, EmployeeDetail, EmployeeId};
use std::cell::Cell;

/// Serves a fixed employee collection.
#[derive(Debug, Default)]
pub struct StaticSource {
    employees: Vec<Employee>,
    failure: Option<String>,
    assigner: MetadataAssigner,
    fetches: Cell<usize>,
}

impl StaticSource {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            ..Self::default()
        }
    }

    /// A source whose every call fails with `DashError::Fetch`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Number of times the collection has been requested.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(DashError::Fetch(reason.clone())),
            None => Ok(()),
        }
    }
}

impl EmployeeSource for StaticSource {
    fn fetch_employees(&self) -> Result<Vec<Employee>> {
        self.fetches.set(self.fetches.get() + 1);
        self.check()?;
        Ok(self.employees.clone())
    }

    fn fetch_employee_detail(&self, id: EmployeeId) -> Result<EmployeeDetail> {
        self.check()?;
        let employee = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(DashError::EmployeeNotFound(id))?;
        Ok(self.assigner.detail(employee, String::new()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Address, Department, Employee, EmployeeId, Rating};

    /// Build an employee with just the fields the engines care about.
    pub fn employee(id: u32, first: &str, last: &str, dept: Department, rating: u8) -> Employee {
        Employee {
            id: EmployeeId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!(
                "{}.{}@example.com",
                first.to_lowercase(),
                last.to_lowercase()
            ),
            age: 30 + id % 20,
            image: None,
            address: Address {
                city: "Springfield".to_string(),
                state: "Illinois".to_string(),
            },
            department: dept,
            rating: Rating::clamped(rating),
        }
    }

    /// The three-person team used throughout the tests:
    /// ratings [5, 3, 4], departments [Engineering, Engineering, Sales].
    pub fn small_team() -> Vec<Employee> {
        vec![
            employee(1, "Emily", "Johnson", Department::Engineering, 5),
            employee(2, "Michael", "Williams", Department::Engineering, 3),
            employee(3, "Sophia", "Brown", Department::Sales, 4),
        ]
    }

    /// A wider team touching every department and rating.
    pub fn full_team() -> Vec<Employee> {
        vec![
            employee(1, "Emily", "Johnson", Department::Engineering, 5),
            employee(2, "Michael", "Williams", Department::Marketing, 2),
            employee(3, "Sophia", "Brown", Department::Sales, 4),
            employee(4, "James", "Davis", Department::Hr, 1),
            employee(5, "Emma", "Miller", Department::Finance, 3),
            employee(6, "Olivia", "Wilson", Department::Engineering, 4),
            employee(7, "Alexander", "Jones", Department::Sales, 3),
            employee(8, "Ava", "Taylor", Department::Marketing, 5),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::small_team;
    use super::*;

    #[test]
    fn serves_collection_and_counts_fetches() {
        let source = StaticSource::new(small_team());
        assert_eq!(source.fetch_employees().unwrap().len(), 3);
        assert_eq!(source.fetch_employees().unwrap().len(), 3);
        assert_eq!(source.fetch_count(), 2);
    }

    #[test]
    fn detail_lookup() {
        let source = StaticSource::new(small_team());
        let detail = source.fetch_employee_detail(EmployeeId(3)).unwrap();
        assert_eq!(detail.employee.first_name, "Sophia");

        assert!(matches!(
            source.fetch_employee_detail(EmployeeId(42)),
            Err(DashError::EmployeeNotFound(_))
        ));
    }

    #[test]
    fn failing_source() {
        let source = StaticSource::failing("upstream down");
        match source.fetch_employees() {
            Err(DashError::Fetch(msg)) => assert_eq!(msg, "upstream down"),
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }
}
