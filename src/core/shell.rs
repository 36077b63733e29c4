use crate::core::calculator::add;
use crate::domain::model::{Operand, Outcome};
use crate::utils::error::{Result, SumError};
use crate::utils::format::format_sum;
use crate::utils::validation::parse_operand;
use std::io::{self, BufRead, Write};

/// Prompts for two operands, adds them and prints the result.
///
/// The reader and writer are generic so the binary can drive the shell over
/// stdin/stdout while tests use in-memory buffers.
pub struct Shell<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes the prompt for `operand`, reads one line and parses it.
    pub fn read_operand(&mut self, operand: Operand) -> Result<f64> {
        write!(self.writer, "{}", operand.prompt())?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = match self.reader.read_line(&mut line) {
            Ok(read) => read,
            // Bytes that are not UTF-8 cannot be a number.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(SumError::InvalidInput {
                    operand,
                    value: line,
                });
            }
            Err(e) => return Err(e.into()),
        };

        if read == 0 {
            return Err(SumError::NoInput { operand });
        }

        let text = line.strip_suffix('\n').unwrap_or(&line);
        let value = parse_operand(operand, text)?;
        tracing::debug!("{} operand: {}", operand, value);
        Ok(value)
    }

    /// Reads both operands and returns their sum. The second prompt is only
    /// shown once the first operand is valid.
    pub fn compute(&mut self) -> Result<f64> {
        let first = self.read_operand(Operand::First)?;
        let second = self.read_operand(Operand::Second)?;
        Ok(add(first, second))
    }

    /// Runs one session and prints its terminal message.
    ///
    /// Invalid and missing input are reported to the user and turned into an
    /// [`Outcome`]; only I/O failures come back as errors.
    pub fn run(&mut self) -> Result<Outcome> {
        let outcome = match self.compute() {
            Ok(sum) => {
                writeln!(self.writer, "The sum is: {}", format_sum(sum))?;
                Outcome::Sum(sum)
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!("{}", e);
                writeln!(self.writer, "{}", e.user_friendly_message())?;
                match e {
                    SumError::NoInput { .. } => Outcome::NoInput,
                    _ => Outcome::InvalidInput,
                }
            }
            Err(e) => return Err(e),
        };

        self.writer.flush()?;
        Ok(outcome)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Runs a session over the process's stdin and stdout.
pub fn run_stdio() -> Result<Outcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock()).run()
}
