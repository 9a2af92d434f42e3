//! Report structure wrapping a ranked result set for output

use crate::processing::matcher::{MatchOutcome, MatchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ranked,
    NoInput,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    /// Where the job signal came from (file name or keyword list)
    pub job_source: String,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub eligible_count: usize,
    pub results: Vec<MatchResult>,
}

impl MatchReport {
    /// Build a report, attaching `sources[resume_index]` to each result
    pub fn new(job_source: String, outcome: MatchOutcome, sources: &[String]) -> Self {
        let (status, reason, mut results) = match outcome {
            MatchOutcome::Ranked(results) => (ReportStatus::Ranked, None, results),
            MatchOutcome::NoInput => (ReportStatus::NoInput, None, Vec::new()),
            MatchOutcome::Degraded { reason } => (ReportStatus::Degraded, Some(reason), Vec::new()),
        };

        for result in &mut results {
            if let Some(source) = sources.get(result.resume_index) {
                result.source = Some(source.clone());
            }
        }

        let eligible_count = results.iter().filter(|r| r.eligibility.is_eligible()).count();

        Self {
            generated_at: Utc::now(),
            job_source,
            status,
            reason,
            eligible_count,
            results,
        }
    }
}
