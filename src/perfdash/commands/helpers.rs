use crate::commands::ListedEmployee;
use crate::error::{DashError, Result};
use crate::model::{Employee, EmployeeId};
use crate::store::BookmarkStore;

pub fn find_employee(employees: &[Employee], id: EmployeeId) -> Result<&Employee> {
    employees
        .iter()
        .find(|e| e.id == id)
        .ok_or(DashError::EmployeeNotFound(id))
}

/// Attach bookmark flags, keeping the given order.
pub fn with_bookmark_flags<B: BookmarkStore + ?Sized>(
    employees: Vec<Employee>,
    bookmarks: &B,
) -> Vec<ListedEmployee> {
    employees
        .into_iter()
        .map(|employee| ListedEmployee {
            bookmarked: bookmarks.is_bookmarked(employee.id),
            employee,
        })
        .collect()
}
