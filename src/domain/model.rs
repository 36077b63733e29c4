use std::fmt;

/// Which of the two values the shell is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl Operand {
    pub fn prompt(self) -> &'static str {
        match self {
            Operand::First => "Enter the first number: ",
            Operand::Second => "Enter the second number: ",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// How a session ended. Every variant is a clean exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Sum(f64),
    InvalidInput,
    NoInput,
}
