use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

/// Selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// The fixed, ordered question sequence presented to every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        let mut ids = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !ids.insert(question.id) {
                return Err(QuestionSetError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(QuestionSetError::NoOptions(question.id));
            }
            let mut values = HashSet::with_capacity(question.options.len());
            for option in &question.options {
                if !values.insert(option.value.as_str()) {
                    return Err(QuestionSetError::DuplicateOption {
                        question_id: question.id,
                        value: option.value.clone(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    pub fn builtin() -> Result<Self, QuestionSetError> {
        Self::from_json_reader(BUILTIN_QUESTIONS.as_bytes())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, QuestionSetError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionSetError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn get(&self, question_id: u32) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub(crate) fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionSetError {
    #[error("question set contains no questions")]
    Empty,
    #[error("question {0} appears more than once")]
    DuplicateQuestion(u32),
    #[error("question {0} has no options")]
    NoOptions(u32),
    #[error("question {question_id} lists option '{value}' more than once")]
    DuplicateOption { question_id: u32, value: String },
    #[error("failed to read questions: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid questions JSON: {0}")]
    Json(#[from] serde_json::Error),
}
