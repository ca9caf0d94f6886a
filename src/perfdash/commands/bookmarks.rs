use crate::commands::filter::{bookmarked, dangling_bookmarks};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, EmployeeId};
use crate::store::BookmarkStore;

use super::helpers::{find_employee, with_bookmark_flags};

/// Bookmark employees present in the snapshot.
pub fn add<B: BookmarkStore + ?Sized>(
    employees: &[Employee],
    store: &mut B,
    ids: &[EmployeeId],
) -> Result<CmdResult> {
    // Resolve everything first so a bad id leaves the store untouched.
    let targets = ids
        .iter()
        .map(|id| find_employee(employees, *id))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    for employee in targets {
        if store.is_bookmarked(employee.id) {
            result.add_message(CmdMessage::info(format!(
                "Already bookmarked ({}): {}",
                employee.id,
                employee.full_name()
            )));
            continue;
        }
        store.add(employee.id);
        result.add_message(CmdMessage::success(format!(
            "Bookmark added ({}): {} added to bookmarks",
            employee.id,
            employee.full_name()
        )));
    }
    Ok(result)
}

/// Remove bookmarks. Ids that are not bookmarked, or that no longer resolve
/// to an employee, are accepted.
pub fn remove<B: BookmarkStore + ?Sized>(
    employees: &[Employee],
    store: &mut B,
    ids: &[EmployeeId],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        let was_bookmarked = store.is_bookmarked(*id);
        store.remove(*id);

        let name = find_employee(employees, *id)
            .map(|e| e.full_name())
            .unwrap_or_else(|_| format!("employee {}", id));
        if was_bookmarked {
            result.add_message(CmdMessage::success(format!(
                "Bookmark removed ({}): {} removed from bookmarks",
                id, name
            )));
        } else {
            result.add_message(CmdMessage::info(format!("Not bookmarked ({}): {}", id, name)));
        }
    }
    Ok(result)
}

/// Flip the bookmark on a single employee, the way the card button does.
pub fn toggle<B: BookmarkStore + ?Sized>(
    employees: &[Employee],
    store: &mut B,
    id: EmployeeId,
) -> Result<CmdResult> {
    if store.is_bookmarked(id) {
        remove(employees, store, &[id])
    } else {
        add(employees, store, &[id])
    }
}

/// The bookmarks view: bookmarked employees in collection order.
pub fn list<B: BookmarkStore + ?Sized>(employees: &[Employee], store: &B) -> Result<CmdResult> {
    let marked = bookmarked(employees, store);
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::info(
            "No bookmarked employees yet. Bookmark employees from the list to see them here.",
        ));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Total bookmarks: {}",
            store.len()
        )));
        let dangling = dangling_bookmarks(employees, store);
        if !dangling.is_empty() {
            let ids: Vec<String> = dangling.iter().map(|id| id.to_string()).collect();
            result.add_message(CmdMessage::warning(format!(
                "Not in the current data: {}",
                ids.join(", ")
            )));
        }
    }

    Ok(result.with_listed_employees(with_bookmark_flags(marked, store)))
}
