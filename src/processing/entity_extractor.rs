//! Entity extraction: skills, years of experience and role titles

use crate::error::Result;
use crate::processing::edit_distance::within_distance;
use crate::processing::text_processor::{NormalizedText, NormalizerMode, TextProcessor};
use crate::processing::vocabulary::Vocabulary;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Skills and tokens must both be longer than this to be fuzzy-matched
const FUZZY_MIN_LEN: usize = 4;

/// Largest edit distance accepted for a fuzzy skill match
const FUZZY_MAX_DISTANCE: usize = 1;

/// Structured entities found in one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySet {
    pub skills: BTreeSet<String>,
    pub experience: u32,
    pub roles: BTreeSet<String>,
}

pub struct EntityExtractor {
    processor: TextProcessor,
    skills: Vec<String>,
    experience_regex: Regex,
    role_regex: Option<Regex>,
}

impl EntityExtractor {
    pub fn new(vocabulary: &Vocabulary, mode: NormalizerMode) -> Result<Self> {
        let processor = TextProcessor::new(vocabulary.stop_words().clone(), mode);

        let experience_regex = Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)(?:\s+of\s+experience)?")?;

        let role_regex = if vocabulary.role_suffixes().is_empty() {
            None
        } else {
            let suffixes: Vec<String> = vocabulary
                .role_suffixes()
                .iter()
                .map(|s| regex::escape(s))
                .collect();
            let pattern = format!(
                r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:{})\b",
                suffixes.join("|")
            );
            Some(Regex::new(&pattern)?)
        };

        Ok(Self {
            processor,
            skills: vocabulary.skills().to_vec(),
            experience_regex,
            role_regex,
        })
    }

    pub fn mode(&self) -> NormalizerMode {
        self.processor.mode()
    }

    /// Extract the entity set of a document.
    ///
    /// Never fails: missing information leaves the field empty or zero.
    pub fn extract(&self, text: &str) -> EntitySet {
        if text.trim().is_empty() {
            return EntitySet::default();
        }

        let normalized = self.processor.normalize(text);

        EntitySet {
            skills: self.extract_skills(&normalized),
            experience: self.extract_experience(text),
            roles: self.extract_roles(text),
        }
    }

    /// Match catalog skills against the normalized variants, falling back
    /// to near-exact spelling matches for longer skill names
    pub fn extract_skills(&self, normalized: &NormalizedText) -> BTreeSet<String> {
        let variants = normalized.variants();
        let mut found = BTreeSet::new();

        for skill in &self.skills {
            if variants.contains(skill.as_str()) || Self::contains_phrase(&normalized.tokens, skill) {
                found.insert(skill.clone());
                continue;
            }

            if skill.chars().count() > FUZZY_MIN_LEN {
                let fuzzy = normalized.tokens.iter().find(|token| {
                    token.chars().count() > FUZZY_MIN_LEN
                        && within_distance(skill, token, FUZZY_MAX_DISTANCE)
                });

                if let Some(token) = fuzzy {
                    debug!("Fuzzy skill match: '{}' -> '{}'", token, skill);
                    found.insert(skill.clone());
                }
            }
        }

        found
    }

    /// Highest year count stated in the text, 0 when none
    pub fn extract_experience(&self, text: &str) -> u32 {
        let lowered = text.to_lowercase();

        self.experience_regex
            .captures_iter(&lowered)
            .filter_map(|cap| cap.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
            .max()
            .unwrap_or(0)
    }

    /// Capitalized role titles, lowercased for storage
    pub fn extract_roles(&self, text: &str) -> BTreeSet<String> {
        match &self.role_regex {
            Some(regex) => regex
                .find_iter(text)
                .map(|m| m.as_str().to_lowercase())
                .collect(),
            None => BTreeSet::new(),
        }
    }

    /// Multi-word skills match consecutive tokens ("machine learning")
    fn contains_phrase(tokens: &[String], skill: &str) -> bool {
        let words: Vec<&str> = skill.split_whitespace().collect();
        if words.len() < 2 || tokens.len() < words.len() {
            return false;
        }

        tokens
            .windows(words.len())
            .any(|window| window.iter().zip(&words).all(|(t, w)| t == w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(&Vocabulary::default(), NormalizerMode::Linguistic).unwrap()
    }

    #[test]
    fn test_empty_text() {
        let entities = extractor().extract("");

        assert!(entities.skills.is_empty());
        assert_eq!(entities.experience, 0);
        assert!(entities.roles.is_empty());
    }

    #[test]
    fn test_exact_skill_matching() {
        let entities = extractor().extract("I have experience with Python, Docker and AWS.");

        assert!(entities.skills.contains("python"));
        assert!(entities.skills.contains("docker"));
        assert!(entities.skills.contains("aws"));
        assert!(!entities.skills.contains("java"));
    }

    #[test]
    fn test_fuzzy_skill_matching() {
        let entities = extractor().extract("Skilled in Kubernets and Tensorflw deployments");

        assert!(entities.skills.contains("kubernetes"));
        assert!(entities.skills.contains("tensorflow"));
    }

    #[test]
    fn test_short_skills_are_not_fuzzy_matched() {
        // "jav" is one edit from "java" but java is too short for fuzzy matching
        let entities = extractor().extract("Wrote jav and gitt scripts");

        assert!(!entities.skills.contains("java"));
        assert!(!entities.skills.contains("git"));
    }

    #[test]
    fn test_multi_word_and_compound_skills() {
        let entities = extractor().extract("Research in Machine Learning with C++ and CI/CD tooling");

        assert!(entities.skills.contains("machine learning"));
        assert!(entities.skills.contains("c++"));
        assert!(entities.skills.contains("ci/cd"));
    }

    #[test]
    fn test_experience_extraction_takes_maximum() {
        let extractor = extractor();

        assert_eq!(extractor.extract_experience("5+ years of experience"), 5);
        assert_eq!(extractor.extract_experience("2 yrs Python, 7 years overall, 3 year lead"), 7);
        assert_eq!(extractor.extract_experience("1 year experience"), 1);
        assert_eq!(extractor.extract_experience("10Years in industry"), 10);
        assert_eq!(extractor.extract_experience("no numbers here"), 0);
        assert_eq!(extractor.extract_experience("99999999999999999999 years"), 0);
    }

    #[test]
    fn test_role_extraction() {
        let roles = extractor().extract_roles("Senior Python Engineer at Acme, previously Data Scientist. developer");

        assert!(roles.contains("senior python engineer"));
        assert!(roles.contains("data scientist"));
        assert_eq!(roles.len(), 2);
    }

    #[test]
    fn test_roles_require_capitalized_prefix() {
        let roles = extractor().extract_roles("python developer, Tech Leader");

        assert!(roles.is_empty());
    }

    #[test]
    fn test_small_custom_catalog() {
        let vocabulary = Vocabulary::new(
            vec!["rust".to_string(), "tokio".to_string()],
            HashSet::new(),
            vec!["Engineer".to_string()],
        );
        let extractor = EntityExtractor::new(&vocabulary, NormalizerMode::Whitespace).unwrap();
        let entities = extractor.extract("Rust and Python, Backend Engineer");

        assert_eq!(entities.skills.len(), 1);
        assert!(entities.skills.contains("rust"));
        assert!(entities.roles.contains("backend engineer"));
        assert_eq!(extractor.mode(), NormalizerMode::Whitespace);
    }
}
