use serde::{Deserialize, Serialize};

/// Number of questions in every draw: 3 + 2 + 2 across the three pools.
pub const QUESTIONS_PER_DRAW: usize = 7;

/// A fresh random selection of questions, in the order they should be rendered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionDrawDto {
    pub questions: Vec<String>,
}
