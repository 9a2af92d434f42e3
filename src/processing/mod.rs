//! Matching engine: normalization, entity extraction, similarity and scoring

pub mod text_processor;
pub mod lemmatizer;
pub mod edit_distance;
pub mod vocabulary;
pub mod entity_extractor;
pub mod similarity;
pub mod scoring;
pub mod matcher;
