//! Aggregation engine.
//!
//! Pure statistics over an employee collection. An empty collection is an
//! ordinary input: averages come back as `0.0` and every count as `0`.

use crate::model::{Department, Employee, Rating};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    /// Mean rating rounded to one decimal place.
    pub avg_rating: f64,
    pub top_performer_count: usize,
    /// Distinct departments actually present.
    pub department_count: usize,
}

impl SummaryStats {
    /// Share of top performers as a whole percentage.
    pub fn performance_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.top_performer_count as f64 * 100.0 / self.total as f64).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStats {
    pub department: Department,
    pub avg_rating: f64,
    pub employee_count: usize,
    pub top_performer_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    pub rating: Rating,
    pub count: usize,
}

impl RatingBucket {
    pub fn label(&self) -> String {
        let n = self.rating.value();
        format!("{} Star{}", n, if n == 1 { "" } else { "s" })
    }
}

pub fn summary_stats(employees: &[Employee]) -> SummaryStats {
    let mut departments: Vec<Department> = employees.iter().map(|e| e.department).collect();
    departments.sort();
    departments.dedup();

    SummaryStats {
        total: employees.len(),
        avg_rating: average_rating(employees.iter()),
        top_performer_count: employees.iter().filter(|e| e.is_top_performer()).count(),
        department_count: departments.len(),
    }
}

/// One entry per department present, in order of first appearance.
pub fn department_breakdown(employees: &[Employee]) -> Vec<DepartmentStats> {
    let mut order: Vec<Department> = Vec::new();
    for e in employees {
        if !order.contains(&e.department) {
            order.push(e.department);
        }
    }

    order
        .into_iter()
        .map(|department| {
            let members = || employees.iter().filter(move |e| e.department == department);
            DepartmentStats {
                department,
                avg_rating: average_rating(members()),
                employee_count: members().count(),
                top_performer_count: members().filter(|e| e.is_top_performer()).count(),
            }
        })
        .collect()
}

/// Exactly five buckets, ratings 1 through 5 ascending.
pub fn rating_histogram(employees: &[Employee]) -> [RatingBucket; 5] {
    let mut counts = [0usize; 5];
    for e in employees {
        counts[usize::from(e.rating.value() - Rating::MIN)] += 1;
    }

    std::array::from_fn(|i| RatingBucket {
        rating: Rating::clamped(Rating::MIN + i as u8),
        count: counts[i],
    })
}

fn average_rating<'a>(employees: impl Iterator<Item = &'a Employee>) -> f64 {
    let (sum, count) = employees.fold((0u32, 0u32), |(sum, count), e| {
        (sum + u32::from(e.rating.value()), count + 1)
    });
    if count == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(sum) / f64::from(count))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
