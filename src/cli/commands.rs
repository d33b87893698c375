//! Command execution: one client call per command, result rendered as text.

use thiserror::Error;

use super::args::{CliCommand, USAGE};
use super::render;
use crate::api::MovieApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, ProfileUpdate, Registration};

/// Why a command produced no output.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to read password: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    /// Text for stderr. API failures stay generic plus a hint for their
    /// category; details go to the log.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::Api(e) => {
                format!("{}\n{}", e.user_message(), e.category().recovery_hint())
            }
            CommandError::Prompt(e) => format!("Could not read password: {}", e),
            CommandError::Usage(message) => format!("{}\n\n{}", message, USAGE),
        }
    }
}

/// Asks the user for a secret. The binary uses rpassword; tests pass a closure.
pub trait PasswordPrompt {
    fn prompt(&self, label: &str) -> std::io::Result<String>;
}

impl<F> PasswordPrompt for F
where
    F: Fn(&str) -> std::io::Result<String>,
{
    fn prompt(&self, label: &str) -> std::io::Result<String> {
        self(label)
    }
}

/// Terminal prompt without echo.
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&self, label: &str) -> std::io::Result<String> {
        rpassword::prompt_password(label)
    }
}

/// Run a command against the API and return what to print on success.
pub async fn execute(
    client: &MovieApiClient,
    command: CliCommand,
    prompt: &dyn PasswordPrompt,
) -> Result<String, CommandError> {
    let output = match command {
        CliCommand::Register {
            username,
            email,
            birthday,
        } => {
            let password = prompt.prompt("Password: ")?;
            let mut details = Registration::new(username, password, email);
            if let Some(date) = birthday {
                details = details.with_birthday(date);
            }
            let user = client.register_user(&details).await?;
            format!("Registered {}. Log in with `myflix login {}`.", user.username, user.username)
        }
        CliCommand::Login { username } => {
            let password = prompt.prompt("Password: ")?;
            let login = client
                .login_user(&Credentials::new(username, password))
                .await?;
            format!("Logged in as {}.", login.user.username)
        }
        CliCommand::Logout => {
            client.logout()?;
            "Logged out.".to_string()
        }
        CliCommand::Movies => render::movie_list(&client.list_movies().await?),
        CliCommand::Movie { title } => render::movie(&client.get_movie(&title).await?),
        CliCommand::Director { name } => render::director(&client.get_director(&name).await?),
        CliCommand::Genre { name } => render::genre(&client.get_genre(&name).await?),
        CliCommand::Profile { username } => {
            let user = match username {
                Some(username) => client.get_profile(&username).await?,
                None => client.current_profile().await?,
            };
            render::profile(&user)
        }
        CliCommand::Favorites => render::favorites(&client.favorite_movies().await?),
        CliCommand::AddFavorite { movie_id } => {
            render::favorites(&client.add_favorite(&movie_id).await?)
        }
        CliCommand::RemoveFavorite { movie_id } => {
            render::favorites(&client.remove_favorite(&movie_id).await?)
        }
        CliCommand::EditProfile {
            username,
            email,
            birthday,
            password,
        } => {
            let mut update = ProfileUpdate::new();
            if let Some(username) = username {
                update = update.with_username(username);
            }
            if let Some(email) = email {
                update = update.with_email(email);
            }
            if let Some(date) = birthday {
                update = update.with_birthday(date);
            }
            if password {
                update = update.with_password(prompt.prompt("New password: ")?);
            }
            render::profile(&client.edit_profile(&update).await?)
        }
        CliCommand::DeleteProfile => client.delete_profile().await?,
        CliCommand::Version => super::version_line(),
        CliCommand::Help => USAGE.to_string(),
        CliCommand::Usage(message) => return Err(CommandError::Usage(message)),
    };
    Ok(output)
}
