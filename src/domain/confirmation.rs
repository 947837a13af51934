/// Operator answer to a y/n gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// Only a literal `y` (any case, surrounding whitespace ignored) is affirmative.
    pub fn parse(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("y") { Confirmation::Yes } else { Confirmation::No }
    }

    pub fn is_yes(self) -> bool {
        self == Confirmation::Yes
    }
}
