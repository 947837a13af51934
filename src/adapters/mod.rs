pub mod console_prompter;
pub mod process_runner;

pub use console_prompter::ConsolePrompter;
pub use process_runner::ProcessCommandRunner;
