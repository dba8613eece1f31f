//! Application form payload and the validation shared by client and server.
//!
//! The web client runs [`validate_character_name`] before it sends anything, and the
//! server runs [`ApplicationDto::validate`] again on receipt since the client check is
//! trivially bypassed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::model::question::QUESTIONS_PER_DRAW;

/// Firstname_Lastname, each part a capital followed by lowercase letters.
static CHARACTER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+_[A-Z][a-z]+$").expect("character name pattern is valid")
});

/// Reasons a submitted application is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Character name does not follow the `Firstname_Lastname` shape.
    #[error("Character name must be in Firstname_Lastname format")]
    CharacterName,

    /// Wrong number of question/answer pairs.
    #[error("Expected {expected} answered questions, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    /// The questions answered are not a valid draw from the question pools.
    #[error("Submitted questions do not match the application questions")]
    UnexpectedQuestions,
}

/// One randomized question and the applicant's answer to it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnswerDto {
    pub question: String,
    pub answer: String,
}

/// A filled-in application form.
///
/// Lives only for the duration of one submission; nothing here is ever stored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDto {
    pub real_name: String,
    pub dob: String,
    pub char_name: String,
    pub storyline: String,
    pub read_rules: String,
    pub char_gender: String,
    pub rp_years: String,
    /// Discord username. The server overwrites this with the session identity.
    pub discord: String,
    pub answers: Vec<AnswerDto>,
}

/// Checks a character name against the `Firstname_Lastname` pattern.
pub fn validate_character_name(name: &str) -> Result<(), ValidationError> {
    if CHARACTER_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::CharacterName)
    }
}

impl ApplicationDto {
    /// Returns a copy with surrounding whitespace stripped from every free-text value.
    pub fn trimmed(self) -> Self {
        Self {
            real_name: self.real_name.trim().to_string(),
            dob: self.dob.trim().to_string(),
            char_name: self.char_name.trim().to_string(),
            storyline: self.storyline.trim().to_string(),
            read_rules: self.read_rules.trim().to_string(),
            char_gender: self.char_gender.trim().to_string(),
            rp_years: self.rp_years.trim().to_string(),
            discord: self.discord.trim().to_string(),
            answers: self
                .answers
                .into_iter()
                .map(|a| AnswerDto {
                    question: a.question.trim().to_string(),
                    answer: a.answer.trim().to_string(),
                })
                .collect(),
        }
    }

    /// Validates the parts of the form that have a hard shape requirement.
    ///
    /// Checks the character name first, matching the order the client reports errors in,
    /// then that exactly one full draw of questions was answered.
    ///
    /// # Returns
    /// - `Ok(())` - Application is well-formed
    /// - `Err(ValidationError::CharacterName)` - Character name has the wrong shape
    /// - `Err(ValidationError::AnswerCount)` - Not exactly one draw of answers
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_character_name(&self.char_name)?;

        if self.answers.len() != QUESTIONS_PER_DRAW {
            return Err(ValidationError::AnswerCount {
                expected: QUESTIONS_PER_DRAW,
                actual: self.answers.len(),
            });
        }

        Ok(())
    }
}
