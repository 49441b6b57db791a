//! Where the tour gets its login from.
//!
//! `MPP_USERNAME` and `MPP_PASSWORD` win; whatever is missing is asked for
//! on the terminal, the password without echo.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use mpp_client::Credentials;

pub const USERNAME_VAR: &str = "MPP_USERNAME";
pub const PASSWORD_VAR: &str = "MPP_PASSWORD";

/// Whether a prompt should echo what is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    Visible,
    Hidden,
}

/// Read credentials from the environment, prompting for anything unset.
pub fn acquire() -> Result<Credentials> {
    resolve(|name| std::env::var(name).ok(), prompt_terminal)
}

/// Credential resolution with injectable sources.
pub fn resolve(
    env: impl Fn(&str) -> Option<String>,
    mut prompt: impl FnMut(&str, Echo) -> Result<String>,
) -> Result<Credentials> {
    let username = match env(USERNAME_VAR) {
        Some(username) => username,
        None => prompt("Username: ", Echo::Visible)?,
    };
    if username.trim().is_empty() {
        bail!("no username given (set {USERNAME_VAR} or answer the prompt)");
    }
    let password = match env(PASSWORD_VAR) {
        Some(password) => password,
        None => prompt("Password: ", Echo::Hidden)?,
    };
    if password.is_empty() {
        bail!("no password given (set {PASSWORD_VAR} or answer the prompt)");
    }
    Credentials::new(username, password).context("credentials rejected")
}

fn prompt_terminal(label: &str, echo: Echo) -> Result<String> {
    match echo {
        Echo::Hidden => rpassword::prompt_password(label).context("failed to read password"),
        Echo::Visible => {
            eprint!("{label}");
            io::stderr().flush()?;
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read username")?;
            Ok(line.trim().to_string())
        }
    }
}
