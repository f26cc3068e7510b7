//! The interactive shell: argument parsing, the read-eval-print loop and output.

pub mod args;
pub mod print;
pub mod repl;
