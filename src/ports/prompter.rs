use crate::domain::{AppError, Confirmation};

/// Port for asking the operator y/n questions.
pub trait Prompter {
    /// Ask `question` and interpret the free-text answer.
    fn confirm(&self, question: &str) -> Result<Confirmation, AppError>;
}
