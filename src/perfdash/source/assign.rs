//! Department and rating assignment.
//!
//! The upstream users carry neither a department nor a rating, so both are
//! drawn at load time. In [`AssignMode::Stable`] the draw is seeded from the
//! employee id (and a configurable seed), which makes the list view and the
//! detail view agree for the same id across fetches. [`AssignMode::Random`]
//! draws fresh values on every call.

use crate::error::{DashError, Result};
use crate::model::{Department, Employee, EmployeeDetail, EmployeeId, Feedback, Rating};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PROJECTS: [&str; 3] = [
    "Project Alpha - Q4 2023",
    "Digital Transformation Initiative",
    "Customer Experience Enhancement",
];

const FEEDBACK: [(&str, &str); 3] = [
    ("2023-Q4", "Excellent performance this quarter!"),
    ("2023-Q3", "Strong team collaboration."),
    ("2023-Q2", "Met all project deadlines."),
];

// Independent draw streams per id. The metadata stream must stay identical
// between list and detail fetches.
const METADATA_STREAM: u64 = 0;
const DETAIL_STREAM: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignMode {
    #[default]
    Stable,
    Random,
}

impl fmt::Display for AssignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignMode::Stable => f.write_str("stable"),
            AssignMode::Random => f.write_str("random"),
        }
    }
}

impl FromStr for AssignMode {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(AssignMode::Stable),
            "random" => Ok(AssignMode::Random),
            other => Err(DashError::Config(format!(
                "Unknown assign mode: {} (expected stable or random)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetadataAssigner {
    mode: AssignMode,
    seed: u64,
}

impl MetadataAssigner {
    pub fn new(mode: AssignMode, seed: u64) -> Self {
        Self { mode, seed }
    }

    pub fn mode(&self) -> AssignMode {
        self.mode
    }

    fn rng_for(&self, id: EmployeeId, stream: u64) -> StdRng {
        match self.mode {
            AssignMode::Stable => StdRng::seed_from_u64(mix(self.seed, id, stream)),
            AssignMode::Random => StdRng::from_entropy(),
        }
    }

    pub fn assign(&self, id: EmployeeId) -> (Department, Rating) {
        let mut rng = self.rng_for(id, METADATA_STREAM);
        let department = Department::ALL[rng.gen_range(0..Department::ALL.len())];
        (department, random_rating(&mut rng))
    }

    /// Extend an already-decorated employee with the detail-only fields.
    pub fn detail(&self, employee: Employee, phone: String) -> EmployeeDetail {
        let mut rng = self.rng_for(employee.id, DETAIL_STREAM);

        let years_of_experience: u8 = rng.gen_range(1..=10);
        let project_count = rng.gen_range(1..=PROJECTS.len());
        let projects = PROJECTS[..project_count]
            .iter()
            .map(|p| p.to_string())
            .collect();
        let feedback = FEEDBACK
            .iter()
            .map(|(period, comment)| Feedback {
                period: period.to_string(),
                rating: random_rating(&mut rng),
                comment: comment.to_string(),
            })
            .collect();

        EmployeeDetail {
            employee,
            phone,
            bio: format!(
                "Experienced professional with {} years in the industry. \
                 Known for excellent teamwork and innovative problem-solving skills.",
                years_of_experience
            ),
            years_of_experience,
            projects,
            feedback,
        }
    }
}

fn random_rating(rng: &mut StdRng) -> Rating {
    Rating::clamped(rng.gen_range(Rating::MIN..=Rating::MAX))
}

/// SplitMix64 finalizer over seed, id and stream.
fn mix(seed: u64, id: EmployeeId, stream: u64) -> u64 {
    let mut z = seed
        ^ u64::from(id.0).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ stream.wrapping_mul(0xD1B5_4A32_D192_ED03);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
