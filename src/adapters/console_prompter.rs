use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, Confirmation};
use crate::ports::Prompter;

/// Asks questions on the console.
///
/// Interactive terminals get a dialoguer prompt. When stdin is piped the
/// question is printed and one line is read, so answers can be scripted.
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }

    fn interactive() -> bool {
        io::stdin().is_terminal() && io::stderr().is_terminal()
    }
}

impl Prompter for ConsolePrompter {
    fn confirm(&self, question: &str) -> Result<Confirmation, AppError> {
        if !Self::interactive() {
            let stdin = io::stdin();
            let stdout = io::stdout();
            return read_answer(question, &mut stdin.lock(), &mut stdout.lock());
        }

        let prompt = format!("{} (y/n)", question);
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(answer) => Ok(Confirmation::parse(&answer)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Ok(Confirmation::No)
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}

/// Print `question` to `out` and interpret one line from `input`.
///
/// End of input reads as an empty, negative answer.
pub fn read_answer<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Confirmation, AppError> {
    write!(out, "{} (y/n): ", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| AppError::Prompt(e.to_string()))?;
    writeln!(out)?;
    Ok(Confirmation::parse(&line))
}
