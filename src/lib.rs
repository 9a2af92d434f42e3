//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use processing::entity_extractor::{EntityExtractor, EntitySet};
pub use processing::matcher::{rank, MatchDetails, MatchEngine, MatchOutcome, MatchResult};
pub use processing::scoring::{Eligibility, ScoreBreakdown};
pub use processing::text_processor::{NormalizedText, NormalizerMode};
pub use processing::vocabulary::Vocabulary;
