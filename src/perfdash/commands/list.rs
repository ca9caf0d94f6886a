use crate::commands::filter::{filter, FilterCriteria};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Employee;
use crate::store::BookmarkStore;

use super::helpers::with_bookmark_flags;

pub fn run<B: BookmarkStore + ?Sized>(
    employees: &[Employee],
    bookmarks: &B,
    criteria: &FilterCriteria,
) -> Result<CmdResult> {
    let matched = filter(employees, criteria);
    let mut result = CmdResult::default();

    if matched.is_empty() {
        result.add_message(CmdMessage::info(
            "No employees found matching your criteria.",
        ));
    } else if criteria.is_active() {
        result.add_message(CmdMessage::info(format!(
            "{} of {} employees match",
            matched.len(),
            employees.len()
        )));
    }

    Ok(result.with_listed_employees(with_bookmark_flags(matched, bookmarks)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, EmployeeId};
    use crate::source::memory::fixtures::full_team;
    use crate::store::memory::InMemoryBookmarks;

    #[test]
    fn lists_everyone_without_criteria() {
        let team = full_team();
        let store = InMemoryBookmarks::new();

        let result = run(&team, &store, &FilterCriteria::default()).unwrap();
        assert_eq!(result.listed_employees.len(), team.len());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn flags_bookmarked_rows() {
        let team = full_team();
        let mut store = InMemoryBookmarks::new();
        store.add(EmployeeId(3));

        let result = run(&team, &store, &FilterCriteria::default()).unwrap();
        let flagged: Vec<u32> = result
            .listed_employees
            .iter()
            .filter(|row| row.bookmarked)
            .map(|row| row.employee.id.0)
            .collect();
        assert_eq!(flagged, vec![3]);
    }

    #[test]
    fn reports_match_counts_and_empty_results() {
        let team = full_team();
        let store = InMemoryBookmarks::new();

        let criteria = FilterCriteria::default().with_departments([Department::Engineering]);
        let result = run(&team, &store, &criteria).unwrap();
        assert_eq!(result.listed_employees.len(), 2);
        assert_eq!(result.messages[0].content, "2 of 8 employees match");

        let criteria = FilterCriteria::default().with_search("nobody-by-this-name");
        let result = run(&team, &store, &criteria).unwrap();
        assert!(result.listed_employees.is_empty());
        assert!(result.messages[0].content.contains("No employees found"));
    }
}
