//! Domain vocabularies: skill catalog, stopword list and role suffixes
//!
//! A `Vocabulary` is built once at startup (from defaults or from the config
//! file) and is only ever read afterwards, so it can be shared freely between
//! threads.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configurable part of the vocabulary, as stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub skills: Vec<String>,
    pub role_suffixes: Vec<String>,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            skills: Vocabulary::default_skill_catalog(),
            role_suffixes: Vocabulary::default_role_suffixes(),
            extra_stopwords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    skills: Vec<String>,
    stop_words: HashSet<String>,
    role_suffixes: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_config(&VocabularyConfig::default())
    }
}

impl Vocabulary {
    /// Build a vocabulary from explicit lists.
    ///
    /// Skills are lowercased and deduplicated while keeping catalog order.
    pub fn new(skills: Vec<String>, stop_words: HashSet<String>, role_suffixes: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();

        let stop_words = stop_words.into_iter().map(|w| w.to_lowercase()).collect();

        let role_suffixes = role_suffixes
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            skills,
            stop_words,
            role_suffixes,
        }
    }

    pub fn from_config(config: &VocabularyConfig) -> Self {
        let mut stop_words = Self::default_stop_words();
        stop_words.extend(config.extra_stopwords.iter().map(|w| w.to_lowercase()));

        Self::new(config.skills.clone(), stop_words, config.role_suffixes.clone())
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn role_suffixes(&self) -> &[String] {
        &self.role_suffixes
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Default skill catalog
    pub fn default_skill_catalog() -> Vec<String> {
        vec![
            "python", "javascript", "react", "node.js", "java", "c++", "sql", "mongodb",
            "aws", "azure", "docker", "kubernetes", "tensorflow", "pytorch", "nlp",
            "machine learning", "deep learning", "flask", "fastapi", "django", "typescript",
            "html", "css", "tailwind", "git", "ci/cd", "agile", "scrum", "algorithms",
            "debugging", "clean code", "stemming", "tokenization", "lemmatization",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Role nouns that terminate a capitalized job title
    pub fn default_role_suffixes() -> Vec<String> {
        vec!["Engineer", "Developer", "Scientist", "Analyst", "Manager", "Lead", "Designer"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Standard English stop words
    pub fn default_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "about", "above", "across", "after", "afterwards", "again", "against",
            "all", "almost", "alone", "along", "already", "also", "although", "always",
            "am", "among", "amongst", "amoungst", "amount", "an", "and", "another", "any",
            "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around", "as",
            "at", "back", "be", "became", "because", "become", "becomes", "becoming",
            "been", "before", "beforehand", "behind", "being", "below", "beside",
            "besides", "between", "beyond", "both", "bottom", "but", "by", "call", "can",
            "cannot", "cant", "co", "con", "could", "couldnt", "de", "describe", "detail",
            "do", "done", "down", "due", "during", "each", "eg", "eight", "either",
            "eleven", "else", "elsewhere", "empty", "enough", "etc", "even", "ever",
            "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
            "fifty", "fill", "find", "first", "five", "for", "former", "formerly",
            "forty", "found", "four", "from", "front", "full", "further", "get", "give",
            "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
            "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
            "himself", "his", "how", "however", "hundred", "i", "ie", "if", "in", "inc",
            "indeed", "into", "is", "it", "its", "itself", "keep", "last", "latter",
            "latterly", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile",
            "might", "mine", "more", "moreover", "most", "mostly", "move", "much",
            "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless",
            "next", "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing",
            "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
            "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
            "over", "own", "part", "per", "perhaps", "please", "put", "rather", "re",
            "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
            "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so",
            "some", "somehow", "someone", "something", "sometime", "sometimes",
            "somewhere", "still", "such", "take", "ten", "than", "that", "the", "their",
            "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
            "therefore", "therein", "thereupon", "these", "they", "third", "this",
            "those", "though", "three", "through", "throughout", "thru", "thus", "to",
            "together", "too", "top", "toward", "towards", "twelve", "twenty", "two",
            "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we",
            "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
            "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
            "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
            "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
            "your", "yours", "yourself", "yourselves",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}
