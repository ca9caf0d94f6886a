use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::EmployeeId;
use crate::source::EmployeeSource;

/// Fetch the extended record for one employee.
pub fn run<S: EmployeeSource + ?Sized>(source: &S, id: EmployeeId) -> Result<CmdResult> {
    let detail = source.fetch_employee_detail(id)?;
    Ok(CmdResult::default().with_detail(detail))
}
