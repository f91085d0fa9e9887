use super::domain::Answer;
use super::questions::{Question, QuestionSet};

/// Walks a [`QuestionSet`] one question at a time, collecting one answer per question.
#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    questions: &'q QuestionSet,
    answers: Vec<Answer>,
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep<'q> {
    Next(&'q Question),
    Complete(Vec<Answer>),
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q QuestionSet) -> Self {
        Self {
            questions,
            answers: Vec::with_capacity(questions.len()),
        }
    }

    pub fn current(&self) -> Option<&'q Question> {
        self.questions.at(self.answers.len())
    }

    /// One-based position of the question on screen and the total number of questions.
    pub fn position(&self) -> (usize, usize) {
        let total = self.questions.len();
        ((self.answers.len() + 1).min(total), total)
    }

    pub fn progress_percent(&self) -> f32 {
        let (shown, total) = self.position();
        shown as f32 / total as f32 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Records `value` for the current question. The value must be one of the question's
    /// options.
    pub fn answer(&mut self, value: &str) -> Result<SessionStep<'q>, SessionError> {
        let question = self.current().ok_or(SessionError::Complete)?;
        if question.option(value).is_none() {
            return Err(SessionError::UnknownOption {
                question_id: question.id,
                value: value.to_string(),
            });
        }

        self.answers.push(Answer::new(question.id, value));

        match self.current() {
            Some(next) => Ok(SessionStep::Next(next)),
            None => Ok(SessionStep::Complete(self.answers.clone())),
        }
    }

    pub fn restart(&mut self) {
        self.answers.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("'{value}' is not an option for question {question_id}")]
    UnknownOption { question_id: u32, value: String },
    #[error("every question has already been answered")]
    Complete,
}
