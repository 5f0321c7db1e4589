//! The interactive joke session.

use crate::app::AppContext;
use crate::app::output::print_results;
use crate::app::prompt::Prompter;
use crate::domain::{AppError, SessionConfig};
use crate::ports::{Console, ErrorLog, JokeFeed, NameFeed};

pub const WELCOME: &str = "Welcome to Joke Company's Chuck Norris Joke Generator.";
pub const ASK_RANDOM_NAME: &str = "Would you like to use a random name?";
pub const ASK_CATEGORY: &str = "Would you like to specify a category?";
pub const CATEGORY_HEADER: &str = "Available categories:";
pub const ASK_COUNT: &str = "How many jokes would you like?";
pub const THINKING: &str = "Thinking up some good jokes...";
pub const ASK_MORE: &str = "Would you like more jokes?";
pub const APOLOGY: &str =
    "Sorry, an error occurred. If this continues, please contact Joke Company support.";
pub const FLAVOR: &str = "\"It works on my machine\" always holds true for Chuck Norris.";
pub const FAREWELL: &str = "Thanks for playing Chuck Norris Joke Generator.";

/// Run rounds of questions and jokes until the user declines more jokes.
///
/// A failing round is apologised for, recorded in `log`, and started over.
/// The session also ends when console input is closed.
pub fn run_session<J, N, C, L>(
    ctx: &AppContext<J, N>,
    settings: &SessionConfig,
    console: &mut C,
    log: &mut L,
) -> Result<(), AppError>
where
    J: JokeFeed,
    N: NameFeed,
    C: Console,
    L: ErrorLog,
{
    console.write_line(WELCOME)?;
    console.write_line("")?;

    let mut more_jokes = true;
    while more_jokes {
        match play_round(ctx, settings, console) {
            Ok(again) => more_jokes = again,
            Err(AppError::InputClosed) => break,
            Err(e) => {
                console.write_line(APOLOGY)?;
                console.write_line(FLAVOR)?;
                log.record(&e);
            }
        }
    }

    console.write_line(FAREWELL)
}

/// One pass through the questions; returns whether the user wants more jokes.
fn play_round<J, N, C>(
    ctx: &AppContext<J, N>,
    settings: &SessionConfig,
    console: &mut C,
) -> Result<bool, AppError>
where
    J: JokeFeed,
    N: NameFeed,
    C: Console,
{
    let mut prompter = Prompter::new(console);
    let use_random_name = prompter.is_yes(ASK_RANDOM_NAME)?;
    let category = if prompter.is_yes(ASK_CATEGORY)? {
        Some(prompter.prompt_list(CATEGORY_HEADER, ctx.categories()?.iter().cloned())?)
    } else {
        None
    };
    let count = prompter.prompt_digit(ASK_COUNT)?;

    console.write_line(THINKING)?;

    let name_to_replace = use_random_name.then_some(settings.replace_name.as_str());
    let jokes = ctx.jokes().random_jokes(usize::from(count), category.as_deref(), name_to_replace);
    print_results(console, jokes)?;

    Prompter::new(console).is_yes(ASK_MORE)
}
