//! Printing fetched jokes to the console.

use crate::domain::{AppError, word_wrap};
use crate::ports::Console;

/// Print each result wrapped to the console width, followed by an empty line.
///
/// Results are pulled one at a time, so earlier jokes are already on screen
/// when a later one fails; the failure is returned as is.
pub fn print_results<C, I>(console: &mut C, results: I) -> Result<(), AppError>
where
    C: Console,
    I: IntoIterator<Item = Result<String, AppError>>,
{
    let width = console.width();

    for result in results {
        for line in word_wrap(result?.as_str(), width)? {
            console.write_line(&line)?;
        }
        console.write_line("")?;
    }

    console.write_line("")
}
