//! Randomized application questions.
//!
//! Every page load gets a fresh draw of [`QUESTIONS_PER_DRAW`] questions: a fixed
//! number picked without replacement from each of three pools. The draw is not
//! security sensitive, so any [`Rng`] will do.

use rand::{seq::index, Rng};
use std::collections::HashSet;

use crate::model::{
    application::{AnswerDto, ValidationError},
    question::QUESTIONS_PER_DRAW,
};

/// A fixed set of questions and how many of them each draw takes.
pub struct QuestionPool {
    pub questions: &'static [&'static str],
    pub picks: usize,
}

/// Rules and punishments.
const RULES_QUESTIONS: [&str; 10] = [
    "What are the biggest (most common) reasons a new player gets banned?",
    "What are the rules regarding 'Fear RP'?",
    "How much money do I need to start buying essential items?",
    "How do I get my first legitimate job?",
    "What happens when my character dies?",
    "Are we allowed to use voice chat? If so, is it IC or OOC?",
    "Is it against the rules to 'Drive-by' a player?",
    "What is the correct command for interacting with objects or people?",
    "What is the minimum punishment for serious rulebreaks?",
    "How do I report a player who is breaking the rules?",
];

/// In-character life in the city.
const IN_CHARACTER_QUESTIONS: [&str; 5] = [
    "Where is a good IC spot for a new character to hang out?",
    "What are the basic etiquette rules for starting a conversation IC?",
    "What is the IC equivalent of the local police/emergency number?",
    "What are common IC jobs for a new player to earn money?",
    "Are there official/unofficial safe zones in the city?",
];

/// Out-of-character conduct.
const OUT_OF_CHARACTER_QUESTIONS: [&str; 5] = [
    "What is the specific OOC chat command?",
    "How do I contact a player OOC during RP without breaking immersion?",
    "How do I tell if a player is Admin/Moderator and how to address them?",
    "Is the official server Discord used for IC or OOC discussion?",
    "If I encounter a bug or glitch, what is the proper way to report it?",
];

pub const QUESTION_POOLS: [QuestionPool; 3] = [
    QuestionPool {
        questions: &RULES_QUESTIONS,
        picks: 3,
    },
    QuestionPool {
        questions: &IN_CHARACTER_QUESTIONS,
        picks: 2,
    },
    QuestionPool {
        questions: &OUT_OF_CHARACTER_QUESTIONS,
        picks: 2,
    },
];

pub struct QuestionService;

impl QuestionService {
    /// Draws a new set of questions.
    ///
    /// Picks uniformly without replacement from each pool in turn, keeping pool order
    /// and the order each question was drawn in.
    ///
    /// # Arguments
    /// - `rng` - Source of randomness
    ///
    /// # Returns
    /// - `Vec<String>` - [`QUESTIONS_PER_DRAW`] distinct questions
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
        let mut questions = Vec::with_capacity(QUESTIONS_PER_DRAW);

        for pool in &QUESTION_POOLS {
            let picks = pool.picks.min(pool.questions.len());
            questions.extend(
                index::sample(rng, pool.questions.len(), picks)
                    .into_iter()
                    .map(|i| pool.questions[i].to_string()),
            );
        }

        questions
    }

    /// Returns the index of the pool `question` belongs to.
    pub fn pool_of(question: &str) -> Option<usize> {
        QUESTION_POOLS
            .iter()
            .position(|pool| pool.questions.iter().any(|q| *q == question))
    }

    /// Checks that a set of answers covers exactly one valid draw.
    ///
    /// Each question must come from the pools, appear once, and each pool must be
    /// represented by exactly its pick count.
    ///
    /// # Returns
    /// - `Ok(())` - Answers match the shape of a draw
    /// - `Err(ValidationError::UnexpectedQuestions)` - Unknown, repeated or
    ///   unbalanced questions
    pub fn validate_answers(answers: &[AnswerDto]) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        let mut per_pool = [0usize; QUESTION_POOLS.len()];

        for answer in answers {
            let pool =
                Self::pool_of(&answer.question).ok_or(ValidationError::UnexpectedQuestions)?;
            if !seen.insert(answer.question.as_str()) {
                return Err(ValidationError::UnexpectedQuestions);
            }
            per_pool[pool] += 1;
        }

        let balanced = QUESTION_POOLS
            .iter()
            .zip(per_pool)
            .all(|(pool, count)| pool.picks == count);

        if balanced {
            Ok(())
        } else {
            Err(ValidationError::UnexpectedQuestions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn answers(questions: &[String]) -> Vec<AnswerDto> {
        questions
            .iter()
            .map(|q| AnswerDto {
                question: q.clone(),
                answer: "answer".to_string(),
            })
            .collect()
    }

    #[test]
    fn pools_have_expected_sizes() {
        let sizes: Vec<usize> = QUESTION_POOLS.iter().map(|p| p.questions.len()).collect();
        let picks: usize = QUESTION_POOLS.iter().map(|p| p.picks).sum();

        assert_eq!(sizes, vec![10, 5, 5]);
        assert_eq!(picks, QUESTIONS_PER_DRAW);
    }

    #[test]
    fn pools_do_not_share_questions() {
        let all: Vec<&str> = QUESTION_POOLS
            .iter()
            .flat_map(|p| p.questions.iter().copied())
            .collect();
        let unique: HashSet<&str> = all.iter().copied().collect();

        assert_eq!(all.len(), unique.len());
    }

    /// Tests 1000 draws each have 7 unique questions split 3/2/2 across the pools,
    /// in pool order.
    #[test]
    fn draws_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..1000 {
            let draw = QuestionService::draw(&mut rng);

            assert_eq!(draw.len(), QUESTIONS_PER_DRAW);

            let unique: HashSet<&String> = draw.iter().collect();
            assert_eq!(unique.len(), QUESTIONS_PER_DRAW);

            let pools: Vec<usize> = draw
                .iter()
                .map(|q| QuestionService::pool_of(q).unwrap())
                .collect();
            assert_eq!(pools, vec![0, 0, 0, 1, 1, 2, 2]);

            assert_eq!(QuestionService::validate_answers(&answers(&draw)), Ok(()));
        }
    }

    /// Tests every question is reachable over many draws.
    #[test]
    fn draws_cover_every_question() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            seen.extend(QuestionService::draw(&mut rng));
        }

        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn draws_differ_between_page_loads() {
        let mut rng = StdRng::seed_from_u64(7);

        let draws: HashSet<Vec<String>> =
            (0..20).map(|_| QuestionService::draw(&mut rng)).collect();

        assert!(draws.len() > 1);
    }

    #[test]
    fn rejects_unknown_question() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut answers = answers(&QuestionService::draw(&mut rng));
        answers[0].question = "What is your favourite colour?".to_string();

        assert_eq!(
            QuestionService::validate_answers(&answers),
            Err(ValidationError::UnexpectedQuestions)
        );
    }

    #[test]
    fn rejects_repeated_question() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut answers = answers(&QuestionService::draw(&mut rng));
        answers[1].question = answers[0].question.clone();

        assert_eq!(
            QuestionService::validate_answers(&answers),
            Err(ValidationError::UnexpectedQuestions)
        );
    }

    #[test]
    fn rejects_unbalanced_pools() {
        // Seven questions, but all from the first pool
        let questions: Vec<String> = RULES_QUESTIONS[..7]
            .iter()
            .map(|q| q.to_string())
            .collect();

        assert_eq!(
            QuestionService::validate_answers(&answers(&questions)),
            Err(ValidationError::UnexpectedQuestions)
        );
    }
}
