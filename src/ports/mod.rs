mod command_runner;
mod prompter;

pub use command_runner::CommandRunner;
pub use prompter::Prompter;
