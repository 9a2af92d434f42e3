//! Batch matching of resumes against one job, and ranking of the results

use crate::error::Result;
use crate::processing::entity_extractor::{EntityExtractor, EntitySet};
use crate::processing::scoring::{round2, Eligibility, ScoreBreakdown};
use crate::processing::similarity::DocumentSimilarity;
use crate::processing::text_processor::NormalizerMode;
use crate::processing::vocabulary::Vocabulary;
use log::{debug, error, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub skill_match: f64,
    pub experience_match: f64,
    pub role_similarity: f64,
    /// TF-IDF cosine similarity as a percentage; informational only
    pub semantic_score: f64,
    pub matched_skills: Vec<String>,
    pub years_of_experience: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the resume in the caller's input list
    pub resume_index: usize,
    pub match_score: f64,
    pub eligibility: Eligibility,
    pub details: MatchDetails,
    /// Identifier attached by the caller (e.g. a file name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result of a matching run
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Ranked results, one per resume
    Ranked(Vec<MatchResult>),
    /// No job text or keywords, or no resumes
    NoInput,
    /// An internal fault stopped scoring; there is no usable signal
    Degraded { reason: String },
}

impl MatchOutcome {
    /// Plain result list: empty unless the run produced a ranking
    pub fn into_results(self) -> Vec<MatchResult> {
        match self {
            MatchOutcome::Ranked(results) => results,
            MatchOutcome::NoInput | MatchOutcome::Degraded { .. } => Vec::new(),
        }
    }

    pub fn results(&self) -> &[MatchResult] {
        match self {
            MatchOutcome::Ranked(results) => results,
            MatchOutcome::NoInput | MatchOutcome::Degraded { .. } => &[],
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, MatchOutcome::Degraded { .. })
    }
}

/// Stable sort by descending match score; ties keep input order
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results
}

pub struct MatchEngine {
    extractor: EntityExtractor,
    similarity: DocumentSimilarity,
}

impl MatchEngine {
    pub fn new(vocabulary: &Vocabulary, mode: NormalizerMode) -> Result<Self> {
        Ok(Self {
            extractor: EntityExtractor::new(vocabulary, mode)?,
            similarity: DocumentSimilarity::new(vocabulary.stop_words().clone())?,
        })
    }

    pub fn extractor(&self) -> &EntityExtractor {
        &self.extractor
    }

    /// Score every resume against the job and rank the results.
    ///
    /// When `job_text` is missing or blank the keywords are joined into the
    /// target text. Internal faults are logged and reported as
    /// `MatchOutcome::Degraded` instead of being returned as errors.
    pub fn match_resumes(
        &self,
        job_text: Option<&str>,
        resume_texts: &[String],
        job_keywords: Option<&[String]>,
    ) -> MatchOutcome {
        let target_text = match Self::target_text(job_text, job_keywords) {
            Some(text) => text,
            None => {
                debug!("No job text or keywords supplied; nothing to match");
                return MatchOutcome::NoInput;
            }
        };

        if resume_texts.is_empty() {
            debug!("No resumes supplied; nothing to match");
            return MatchOutcome::NoInput;
        }

        Self::outcome(self.score_batch(&target_text, resume_texts))
    }

    /// Fold a scoring run into the caller-facing outcome
    fn outcome(scored: Result<Vec<MatchResult>>) -> MatchOutcome {
        match scored {
            Ok(results) => {
                info!("Ranked {} resumes", results.len());
                MatchOutcome::Ranked(rank(results))
            }
            Err(e) => {
                error!("Error in matching: {}", e);
                MatchOutcome::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn target_text(job_text: Option<&str>, job_keywords: Option<&[String]>) -> Option<String> {
        if let Some(text) = job_text.filter(|t| !t.trim().is_empty()) {
            return Some(text.to_string());
        }

        let keywords: Vec<&str> = job_keywords
            .unwrap_or_default()
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            None
        } else {
            Some(keywords.join(" "))
        }
    }

    fn score_batch(&self, target_text: &str, resume_texts: &[String]) -> Result<Vec<MatchResult>> {
        // The similarity space needs the whole batch; extraction does not,
        // so the two run side by side.
        let (semantic_scores, (job_entities, resume_entities)) = rayon::join(
            || self.similarity.similarities(target_text, resume_texts),
            || {
                rayon::join(
                    || self.extractor.extract(target_text),
                    || {
                        resume_texts
                            .par_iter()
                            .map(|text| self.extractor.extract(text))
                            .collect::<Vec<EntitySet>>()
                    },
                )
            },
        );
        let semantic_scores = semantic_scores?;
        debug!("Job entities: {:?}", job_entities);

        let results = resume_entities
            .iter()
            .zip(semantic_scores)
            .enumerate()
            .map(|(i, (entities, semantic))| {
                let breakdown = ScoreBreakdown::score(&job_entities, entities);
                let final_score = breakdown.final_score();

                debug!(
                    "Resume {} - Final Score: {}% (Skills: {}, Exp: {}, Role: {})",
                    i, final_score, breakdown.skill_score, breakdown.experience_score, breakdown.role_score
                );

                MatchResult {
                    resume_index: i,
                    match_score: final_score,
                    eligibility: Eligibility::from_score(final_score),
                    details: MatchDetails {
                        skill_match: breakdown.skill_score,
                        experience_match: breakdown.experience_score,
                        role_similarity: breakdown.role_score,
                        semantic_score: round2(semantic * 100.0),
                        matched_skills: job_entities.skills.intersection(&entities.skills).cloned().collect(),
                        years_of_experience: entities.experience,
                    },
                    source: None,
                }
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatcherError;

    fn engine() -> MatchEngine {
        MatchEngine::new(&Vocabulary::default(), NormalizerMode::Linguistic).unwrap()
    }

    fn result(index: usize, score: f64) -> MatchResult {
        MatchResult {
            resume_index: index,
            match_score: score,
            eligibility: Eligibility::from_score(score),
            details: MatchDetails {
                skill_match: 0.0,
                experience_match: 0.0,
                role_similarity: 0.0,
                semantic_score: 0.0,
                matched_skills: Vec::new(),
                years_of_experience: 0,
            },
            source: None,
        }
    }

    #[test]
    fn test_rank_is_stable_and_descending() {
        let ranked = rank(vec![result(0, 40.0), result(1, 90.0), result(2, 40.0), result(3, 75.5)]);
        let order: Vec<usize> = ranked.iter().map(|r| r.resume_index).collect();

        assert_eq!(order, vec![1, 3, 0, 2]);
        assert!(ranked.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_senior_python_engineer_scenario() {
        let resumes = vec![
            "Python developer with 6 years of experience".to_string(),
            "Java developer, 1 year experience".to_string(),
        ];
        let outcome = engine().match_resumes(
            Some("Senior Python Engineer, 5+ years of experience required"),
            &resumes,
            None,
        );
        let results = outcome.into_results();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].resume_index, 0);
        assert!(results[0].match_score > results[1].match_score);
        assert!(results[0].details.matched_skills.contains(&"python".to_string()));
        assert_eq!(results[0].details.years_of_experience, 6);

        assert_eq!(results[0].details.skill_match, 100.0);
        assert_eq!(results[0].details.experience_match, 100.0);
        assert_eq!(results[0].details.role_similarity, 0.0);
        assert_eq!(results[0].match_score, 85.0);
        assert_eq!(results[0].eligibility, Eligibility::Eligible);

        assert_eq!(results[1].details.experience_match, 20.0);
        assert_eq!(results[1].match_score, 5.0);
        assert_eq!(results[1].eligibility, Eligibility::NotEligible);
    }

    #[test]
    fn test_no_input() {
        let engine = engine();
        let resumes = vec!["Python developer".to_string()];
        let blank_keywords = vec!["  ".to_string()];

        assert_eq!(engine.match_resumes(None, &resumes, None), MatchOutcome::NoInput);
        assert_eq!(
            engine.match_resumes(Some("   "), &resumes, Some(blank_keywords.as_slice())),
            MatchOutcome::NoInput
        );
        assert_eq!(engine.match_resumes(Some("Python role"), &[], None), MatchOutcome::NoInput);
        assert!(engine.match_resumes(None, &[], None).into_results().is_empty());
    }

    #[test]
    fn test_keywords_replace_missing_job_text() {
        let resumes = vec!["Docker and Kubernetes operator".to_string(), "Painter".to_string()];
        let keywords = vec!["docker".to_string(), "kubernetes".to_string()];
        let results = engine()
            .match_resumes(None, &resumes, Some(keywords.as_slice()))
            .into_results();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].resume_index, 0);
        assert_eq!(results[0].details.skill_match, 100.0);
        assert!(results[0].details.semantic_score > 0.0);
        assert_eq!(results[1].details.semantic_score, 0.0);
    }

    #[test]
    fn test_all_not_eligible_is_not_empty() {
        let resumes = vec!["Gardener".to_string()];
        let outcome = engine().match_resumes(Some("Python and Docker, 3 years"), &resumes, None);

        assert!(!outcome.is_degraded());
        assert_eq!(outcome.results().len(), 1);
        assert_eq!(outcome.results()[0].eligibility, Eligibility::NotEligible);
    }

    #[test]
    fn test_degenerate_corpus_still_ranks() {
        let resumes = vec!["the and".to_string()];
        let outcome = engine().match_resumes(Some("of the"), &resumes, None);

        let results = outcome.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].details.semantic_score, 0.0);
    }

    #[test]
    fn test_tied_final_score_rounds_half_to_even() {
        let resumes = vec!["Cook, 1 year".to_string()];
        let results = engine()
            .match_resumes(Some("Kitchen work, 8 years"), &resumes, None)
            .into_results();

        assert_eq!(results[0].details.experience_match, 12.5);
        assert_eq!(results[0].details.role_similarity, 100.0);
        assert_eq!(results[0].match_score, 18.12);
    }

    #[test]
    fn test_scoring_failure_degrades() {
        let outcome = MatchEngine::outcome(Err(MatcherError::Vectorization(
            "Non-finite similarity value: NaN".to_string(),
        )));

        assert!(outcome.is_degraded());
        assert_eq!(
            outcome,
            MatchOutcome::Degraded {
                reason: "Vectorization error: Non-finite similarity value: NaN".to_string()
            }
        );
        assert!(outcome.into_results().is_empty());
    }

    #[test]
    fn test_successful_run_is_ranked() {
        let outcome = MatchEngine::outcome(Ok(vec![result(0, 10.0), result(1, 80.0)]));
        let order: Vec<usize> = outcome.results().iter().map(|r| r.resume_index).collect();

        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn test_resume_index_survives_sorting() {
        let resumes = vec![
            "Cook".to_string(),
            "Cashier".to_string(),
            "Python, Django, AWS developer with 8 years".to_string(),
        ];
        let results = engine()
            .match_resumes(Some("Python Django AWS, 4 years"), &resumes, None)
            .into_results();

        assert_eq!(results[0].resume_index, 2);
        let mut indices: Vec<usize> = results.iter().map(|r| r.resume_index).collect();
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
