use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::{AppError, Confirmation};
use crate::ports::Prompter;

/// Replays canned answers and records the questions asked.
///
/// Once the script runs out every further question is declined.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    pub questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str) -> Result<Confirmation, AppError> {
        self.questions.lock().unwrap().push(question.to_string());
        let answer = self.answers.lock().unwrap().pop_front().unwrap_or_default();
        Ok(Confirmation::parse(&answer))
    }
}
