use crate::commands::stats::{
    department_breakdown, rating_histogram, summary_stats, DepartmentStats, RatingBucket,
    SummaryStats,
};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Employee;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub summary: SummaryStats,
    /// Percentage of employees rated 4 or higher.
    pub performance_rate: u32,
    pub departments: Vec<DepartmentStats>,
    pub ratings: [RatingBucket; 5],
}

pub fn run(employees: &[Employee]) -> Result<CmdResult> {
    let summary = summary_stats(employees);
    let analytics = Analytics {
        performance_rate: summary.performance_rate(),
        summary,
        departments: department_breakdown(employees),
        ratings: rating_histogram(employees),
    };
    Ok(CmdResult::default().with_analytics(analytics))
}
