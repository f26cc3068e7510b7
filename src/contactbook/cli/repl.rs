use super::print::{print_error, print_result};
use contactbook::error::{ContactsError, Result};
use contactbook::session::Session;
use contactbook::store::BookStore;
use std::io::{self, BufRead, Write};

/// Reads commands from `input` until `close`/`exit` or end of input.
///
/// End of input behaves like `exit`, so piped sessions still save. So does a
/// read error on `input`, after it has been reported. Bytes that are not valid
/// UTF-8 are replaced rather than rejected, so a garbled line is just another
/// unknown command. A failed save on `close`/`exit` is reported and the loop
/// keeps going, except at end of input where there is nobody left to retry and
/// the error is returned.
pub fn run<S: BookStore, R: BufRead>(
    session: &mut Session<S>,
    mut input: R,
    prompt: &str,
) -> Result<()> {
    println!("Welcome to the assistant bot!");
    let mut buf = Vec::new();

    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        buf.clear();
        let read = match input.read_until(b'\n', &mut buf) {
            Ok(read) => read,
            Err(e) => {
                print_error(&ContactsError::Io(e));
                0
            }
        };
        if read == 0 {
            println!();
            let outcome = session.execute("exit")?;
            print_result(outcome.result());
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        match session.execute(line.trim_end_matches(|c| c == '\r' || c == '\n')) {
            Ok(outcome) => {
                print_result(outcome.result());
                if outcome.is_exit() {
                    return Ok(());
                }
            }
            Err(e) => print_error(&e),
        }
    }
}
