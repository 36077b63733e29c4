pub mod calculator;
pub mod shell;
