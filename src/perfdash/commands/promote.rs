use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, EmployeeId};

use super::helpers::find_employee;

/// Acknowledge a promotion request. Nothing is recorded.
pub fn run(employees: &[Employee], id: EmployeeId) -> Result<CmdResult> {
    let employee = find_employee(employees, id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Promotion initiated: promotion process started for {}",
        employee.full_name()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use crate::source::memory::fixtures::small_team;

    #[test]
    fn acknowledges_known_employee() {
        let result = run(&small_team(), EmployeeId(3)).unwrap();
        assert!(result.messages[0].content.contains("Sophia Brown"));
    }

    #[test]
    fn rejects_unknown_employee() {
        assert!(matches!(
            run(&small_team(), EmployeeId(10)),
            Err(DashError::EmployeeNotFound(_))
        ));
    }
}
