use crate::commands::stats::summary_stats;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Employee;

/// Headline numbers for the dashboard overview.
pub fn run(employees: &[Employee]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(summary_stats(employees)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::small_team;

    #[test]
    fn produces_summary() {
        let result = run(&small_team()).unwrap();
        let summary = result.summary.unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.department_count, 2);
    }

    #[test]
    fn empty_snapshot_is_not_an_error() {
        let result = run(&[]).unwrap();
        assert_eq!(result.summary.unwrap().avg_rating, 0.0);
    }
}
