//! Filter engine.
//!
//! Maps an employee collection and a set of criteria to the matching subset.
//! Three independent predicates are ANDed together; the department and rating
//! selections are each an OR over their members. An empty selection places no
//! constraint. Output always follows input order.

use crate::model::{Department, Employee, EmployeeId, Rating};
use crate::store::BookmarkStore;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub search: String,
    pub departments: BTreeSet<Department>,
    pub ratings: BTreeSet<Rating>,
}

impl FilterCriteria {
    pub fn new(
        search: impl Into<String>,
        departments: impl IntoIterator<Item = Department>,
        ratings: impl IntoIterator<Item = Rating>,
    ) -> Self {
        Self {
            search: search.into(),
            departments: departments.into_iter().collect(),
            ratings: ratings.into_iter().collect(),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_departments(mut self, departments: impl IntoIterator<Item = Department>) -> Self {
        self.departments = departments.into_iter().collect();
        self
    }

    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = Rating>) -> Self {
        self.ratings = ratings.into_iter().collect();
        self
    }

    /// Select the department if unselected, unselect it otherwise.
    pub fn toggle_department(&mut self, department: Department) {
        if !self.departments.remove(&department) {
            self.departments.insert(department);
        }
    }

    /// Select the rating if unselected, unselect it otherwise.
    pub fn toggle_rating(&mut self, rating: Rating) {
        if !self.ratings.remove(&rating) {
            self.ratings.insert(rating);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any predicate constrains the result.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.departments.is_empty() || !self.ratings.is_empty()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee)
            && (self.departments.is_empty() || self.departments.contains(&employee.department))
            && (self.ratings.is_empty() || self.ratings.contains(&employee.rating))
    }

    /// Plain substring match on the raw term. Only the empty term matches
    /// everyone; surrounding whitespace is part of the term.
    fn matches_search(&self, employee: &Employee) -> bool {
        let term = self.search.to_lowercase();
        if term.is_empty() {
            return true;
        }

        [
            employee.first_name.as_str(),
            employee.last_name.as_str(),
            employee.email.as_str(),
            employee.department.name(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Employees satisfying every active criterion, in input order.
pub fn filter(employees: &[Employee], criteria: &FilterCriteria) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}

/// Bookmarked employees, in collection order. Bookmarks whose id is not in
/// the collection are skipped.
pub fn bookmarked<B: BookmarkStore + ?Sized>(employees: &[Employee], bookmarks: &B) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| bookmarks.is_bookmarked(e.id))
        .cloned()
        .collect()
}

/// Bookmarked ids that resolve to no employee in the collection.
pub fn dangling_bookmarks<B: BookmarkStore + ?Sized>(
    employees: &[Employee],
    bookmarks: &B,
) -> Vec<EmployeeId> {
    bookmarks
        .list()
        .into_iter()
        .filter(|id| !employees.iter().any(|e| e.id == *id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::{employee, full_team, small_team};
    use crate::store::memory::InMemoryBookmarks;

    fn rating(n: u8) -> Rating {
        Rating::new(n).unwrap()
    }

    fn ids(employees: &[Employee]) -> Vec<u32> {
        employees.iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let team = full_team();
        let result = filter(&team, &FilterCriteria::default());
        assert_eq!(result, team);
        assert!(!FilterCriteria::default().is_active());
    }

    #[test]
    fn search_matches_department_case_insensitively() {
        let team = vec![
            employee(1, "Ann", "Lee", Department::Engineering, 3),
            employee(2, "Bob", "Ray", Department::Sales, 3),
            employee(3, "Cat", "Fox", Department::Finance, 3),
        ];
        let result = filter(&team, &FilterCriteria::default().with_search("eng"));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn search_covers_names_and_email() {
        let team = full_team();

        let by_first = filter(&team, &FilterCriteria::default().with_search("EMILY"));
        assert_eq!(ids(&by_first), vec![1]);

        let by_last = filter(&team, &FilterCriteria::default().with_search("wil"));
        assert_eq!(ids(&by_last), vec![2, 6]);

        let by_email = filter(&team, &FilterCriteria::default().with_search("ava.taylor@"));
        assert_eq!(ids(&by_email), vec![8]);

        let none = filter(&team, &FilterCriteria::default().with_search("zzz"));
        assert!(none.is_empty());
    }

    #[test]
    fn whitespace_is_part_of_the_term() {
        let team = full_team();

        let spaces = FilterCriteria::default().with_search(" ");
        assert!(spaces.is_active());
        assert!(filter(&team, &spaces).is_empty());

        let trailing = filter(&team, &FilterCriteria::default().with_search("emily "));
        assert!(trailing.is_empty());
    }

    #[test]
    fn empty_term_matches_everything() {
        let team = small_team();
        assert_eq!(filter(&team, &FilterCriteria::default().with_search("")), team);
    }

    #[test]
    fn department_selection_is_or_within() {
        let team = full_team();
        let criteria = FilterCriteria::default().with_departments([Department::Sales, Department::Hr]);
        assert_eq!(ids(&filter(&team, &criteria)), vec![3, 4, 7]);
    }

    #[test]
    fn rating_selection_is_sound_and_complete() {
        let team = full_team();
        let selected: BTreeSet<Rating> = [rating(4), rating(5)].into_iter().collect();
        let criteria = FilterCriteria::default().with_ratings(selected.iter().copied());
        let result = filter(&team, &criteria);

        assert!(result.iter().all(|e| selected.contains(&e.rating)));
        let expected: Vec<u32> = team
            .iter()
            .filter(|e| selected.contains(&e.rating))
            .map(|e| e.id.0)
            .collect();
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn predicates_are_anded() {
        let team = full_team();
        let criteria = FilterCriteria::new("o", [Department::Engineering], [rating(4)]);
        // Emily (5) is Engineering but wrong rating; Olivia matches all three.
        assert_eq!(ids(&filter(&team, &criteria)), vec![6]);
    }

    #[test]
    fn toggles_mirror_multi_select() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_department(Department::Hr);
        criteria.toggle_rating(rating(2));
        assert!(criteria.is_active());
        assert!(criteria.departments.contains(&Department::Hr));

        criteria.toggle_department(Department::Hr);
        assert!(criteria.departments.is_empty());

        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn bookmarked_follows_collection_order_and_skips_unknown_ids() {
        let team = full_team();
        let mut store = InMemoryBookmarks::new();
        store.add(EmployeeId(7));
        store.add(EmployeeId(99));
        store.add(EmployeeId(2));

        assert_eq!(ids(&bookmarked(&team, &store)), vec![2, 7]);
        assert_eq!(dangling_bookmarks(&team, &store), vec![EmployeeId(99)]);
    }
}
