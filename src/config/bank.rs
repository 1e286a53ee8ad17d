//! Question bank loading
//!
//! Reads a question set from a TOML or JSON file. Every record is validated
//! while deserializing, so a bank that loads contains only valid questions.

use crate::models::{total_score, Question};
use crate::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk question set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Load a question bank, picking the format from the file extension.
    /// Files without a `.json` extension are read as TOML.
    pub fn load(path: &Path) -> Result<Vec<Question>> {
        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::Config(format!(
                "Failed to read question bank {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let bank = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
        .map_err(|e| {
            QuizError::Config(format!(
                "Invalid question bank {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(path = %path.display(), questions = bank.questions.len(), "loaded question bank");
        Ok(bank.questions)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let bank: Self = toml::from_str(content)?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let bank: Self = serde_json::from_str(content)?;
        bank.validate()?;
        Ok(bank)
    }

    fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(QuizError::Validation(
                "Question bank contains no questions".to_string(),
            ));
        }

        if total_score(&self.questions).is_none() {
            return Err(QuizError::Validation(format!(
                "Question bank scores add up to more than {}",
                u32::MAX
            )));
        }
        Ok(())
    }
}
