//! Interactive user prompting components
//!
//! Prompts only make sense on a terminal; every helper here degrades to a
//! non-interactive answer when stdin is piped.

use std::env;
use std::io::{self, BufRead, Write};

use crate::error::{LostFoundError, Result};

/// Environment variable consulted before prompting for a password
pub const PASSWORD_ENV: &str = "LOSTFOUND_PASSWORD";

fn stdin_is_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Prompt user for yes/no confirmation
///
/// # Returns
/// * `true` if user confirms with 'y' or 'Y'
/// * `false` otherwise
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{}? [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Gate for destructive actions.
///
/// `--yes` skips the prompt. Without it, a terminal gets a y/N prompt and a
/// piped stdin gets nothing: the action is declined and a hint is printed.
pub fn confirm_destructive(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !stdin_is_tty() {
        eprintln!("{prompt}: refusing without confirmation (pass --yes)");
        return Ok(false);
    }
    confirm(prompt)
}

/// Read a password from `LOSTFOUND_PASSWORD`, else one line of stdin.
pub fn read_password() -> Result<String> {
    if let Ok(password) = env::var(PASSWORD_ENV)
        && !password.is_empty()
    {
        return Ok(password);
    }

    if stdin_is_tty() {
        eprint!("Password: ");
        io::stderr().flush()?;
    }

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let password = input.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(LostFoundError::validation("password", "cannot be empty"));
    }
    Ok(password)
}
