//! Composite scoring: skill, experience and role sub-scores fused into one
//! weighted match score

use crate::processing::entity_extractor::EntitySet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weight of the skill-overlap sub-score
pub const SKILL_WEIGHT: f64 = 0.60;

/// Weight of the experience-sufficiency sub-score
pub const EXPERIENCE_WEIGHT: f64 = 0.25;

/// Weight of the role-overlap sub-score
pub const ROLE_WEIGHT: f64 = 0.15;

/// Minimum final score for a candidate to be considered eligible
pub const ELIGIBILITY_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub role_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    #[serde(rename = "Eligible")]
    Eligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
}

impl Eligibility {
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= ELIGIBILITY_THRESHOLD {
            Eligibility::Eligible
        } else {
            Eligibility::NotEligible
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eligibility::Eligible => write!(f, "Eligible"),
            Eligibility::NotEligible => write!(f, "Not Eligible"),
        }
    }
}

impl ScoreBreakdown {
    /// Compare a resume's entities against the job's.
    ///
    /// A job without skills scores 0 on skills, while a job without roles
    /// scores 100 on roles.
    pub fn score(job: &EntitySet, resume: &EntitySet) -> Self {
        let skill_score = overlap_percentage(&job.skills, &resume.skills).unwrap_or(0.0);

        let experience_score = if job.experience == 0 {
            100.0
        } else {
            (resume.experience as f64 / job.experience as f64 * 100.0).min(100.0)
        };

        let role_score = overlap_percentage(&job.roles, &resume.roles).unwrap_or(100.0);

        Self {
            skill_score: round2(skill_score),
            experience_score: round2(experience_score),
            role_score: round2(role_score),
        }
    }

    /// Weighted final score, rounded to 2 decimals
    pub fn final_score(&self) -> f64 {
        round2(
            self.skill_score * SKILL_WEIGHT
                + self.experience_score * EXPERIENCE_WEIGHT
                + self.role_score * ROLE_WEIGHT,
        )
    }

    pub fn eligibility(&self) -> Eligibility {
        Eligibility::from_score(self.final_score())
    }
}

/// Share of `required` present in `offered`, or `None` when nothing is required
fn overlap_percentage(required: &BTreeSet<String>, offered: &BTreeSet<String>) -> Option<f64> {
    if required.is_empty() {
        return None;
    }
    let matched = required.intersection(offered).count();
    Some(matched as f64 / required.len() as f64 * 100.0)
}

/// Round to 2 decimals, ties to even on the exact binary value
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
