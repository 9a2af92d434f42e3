//! Routes job and resume files to the matching text extractor

use crate::error::{MatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read one job or resume file as plain text
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(MatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match Self::detect_file_type(path)? {
            FileType::Text => {
                info!("Reading resume text: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Reading markdown text: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Unknown => Err(MatcherError::UnsupportedFormat(format!(
                "Only .txt and .md files can be matched: {}",
                path.display()
            ))),
        }
    }

    /// Read a batch of files; position `i` of the result is the text of `paths[i]`,
    /// which is what `resume_index` later refers to
    pub async fn extract_all(&self, paths: &[impl AsRef<Path>]) -> Result<Vec<String>> {
        let mut texts = Vec::with_capacity(paths.len());
        for path in paths {
            texts.push(self.extract_text(path.as_ref()).await?);
        }
        Ok(texts)
    }

    fn detect_file_type(path: &Path) -> Result<FileType> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(FileType::from_extension)
            .ok_or_else(|| {
                MatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })
    }
}
