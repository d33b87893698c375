//! Command-line argument parsing for the myflix CLI.
//!
//! This module turns `std::env::args()` into a [`CliCommand`]. Anything it
//! cannot make sense of becomes [`CliCommand::Usage`] with the reason.

use chrono::NaiveDate;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Create an account (password is prompted)
    Register {
        username: String,
        email: String,
        birthday: Option<NaiveDate>,
    },
    /// Log in (password is prompted)
    Login { username: String },
    /// Forget the stored session
    Logout,
    /// List the catalog
    Movies,
    /// Show one movie by title
    Movie { title: String },
    /// Show a director by name
    Director { name: String },
    /// Show a genre by name
    Genre { name: String },
    /// Show a profile; the logged-in user's when no username is given
    Profile { username: Option<String> },
    /// List the logged-in user's favorite movie ids
    Favorites,
    /// Add a movie to favorites
    AddFavorite { movie_id: String },
    /// Remove a movie from favorites
    RemoveFavorite { movie_id: String },
    /// Update profile fields; `password` asks for a new password
    EditProfile {
        username: Option<String>,
        email: Option<String>,
        birthday: Option<NaiveDate>,
        password: bool,
    },
    /// Delete the account and the stored session
    DeleteProfile,
    /// Show version information
    Version,
    /// Show help
    Help,
    /// Arguments could not be parsed
    Usage(String),
}

/// Help text printed by `--help` and after usage errors.
pub const USAGE: &str = "\
Usage: myflix <command> [args]

Commands:
  register <username> <email> [birthday]   Create an account
  login <username>                         Log in and store the session
  logout                                   Forget the stored session
  movies                                   List all movies
  movie <title>                            Show one movie
  director <name>                          Show a director
  genre <name>                             Show a genre
  profile [username]                       Show a profile
  favorites                                List your favorite movie ids
  favorite add <movie-id>                  Add a favorite
  favorite remove <movie-id>               Remove a favorite
  edit-profile [--username U] [--email E] [--birthday YYYY-MM-DD] [--password]
                                           Update your profile
  delete-profile                           Delete your account

Options:
  -h, --help       Show this help
  -V, --version    Show version

Environment:
  MYFLIX_API_URL        API base URL
  MYFLIX_SESSION_FILE   Session file location
  MYFLIX_VERBOSE        Enable debug logging
  RUST_LOG              Log filter (overrides MYFLIX_VERBOSE)";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use myflix::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["myflix".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    // Global flags only count before the command, so `movie -h` is a title
    if let Some(flag) = args.first().filter(|a| a.starts_with('-')) {
        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            other => return usage(&format!("unknown option '{}'", other)),
        }
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Help;
    };

    match command.as_str() {
        "register" => parse_register(rest),
        "login" => match rest {
            [username] => CliCommand::Login {
                username: username.clone(),
            },
            _ => usage("login takes exactly one <username>"),
        },
        "logout" => no_args(rest, "logout", CliCommand::Logout),
        "movies" => no_args(rest, "movies", CliCommand::Movies),
        "movie" => joined(rest, "movie <title>", |title| CliCommand::Movie { title }),
        "director" => joined(rest, "director <name>", |name| CliCommand::Director { name }),
        "genre" => joined(rest, "genre <name>", |name| CliCommand::Genre { name }),
        "profile" => match rest {
            [] => CliCommand::Profile { username: None },
            [username] => CliCommand::Profile {
                username: Some(username.clone()),
            },
            _ => usage("profile takes at most one [username]"),
        },
        "favorites" => no_args(rest, "favorites", CliCommand::Favorites),
        "favorite" => match rest {
            [action, movie_id] if action == "add" => CliCommand::AddFavorite {
                movie_id: movie_id.clone(),
            },
            [action, movie_id] if action == "remove" => CliCommand::RemoveFavorite {
                movie_id: movie_id.clone(),
            },
            _ => usage("expected favorite add <movie-id> or favorite remove <movie-id>"),
        },
        "edit-profile" => parse_edit_profile(rest),
        "delete-profile" => no_args(rest, "delete-profile", CliCommand::DeleteProfile),
        other => usage(&format!("unknown command '{}'", other)),
    }
}

fn usage(message: &str) -> CliCommand {
    CliCommand::Usage(message.to_string())
}

fn no_args(rest: &[String], name: &str, command: CliCommand) -> CliCommand {
    if rest.is_empty() {
        command
    } else {
        usage(&format!("{} takes no arguments", name))
    }
}

/// Remaining words joined with spaces, so `movie Blade Runner` needs no quotes.
fn joined(rest: &[String], form: &str, build: impl FnOnce(String) -> CliCommand) -> CliCommand {
    let value = rest.join(" ");
    if value.trim().is_empty() {
        usage(&format!("expected {}", form))
    } else {
        build(value)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, CliCommand> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| usage(&format!("invalid date '{}', expected YYYY-MM-DD", value)))
}

fn parse_register(rest: &[String]) -> CliCommand {
    let (username, email, birthday) = match rest {
        [username, email] => (username, email, None),
        [username, email, birthday] => match parse_date(birthday) {
            Ok(date) => (username, email, Some(date)),
            Err(command) => return command,
        },
        _ => return usage("expected register <username> <email> [birthday]"),
    };
    CliCommand::Register {
        username: username.clone(),
        email: email.clone(),
        birthday,
    }
}

fn parse_edit_profile(rest: &[String]) -> CliCommand {
    let mut username = None;
    let mut email = None;
    let mut birthday = None;
    let mut password = false;

    let mut iter = rest.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--password" => password = true,
            "--username" | "--email" | "--birthday" => {
                let Some(value) = iter.next() else {
                    return usage(&format!("{} needs a value", flag));
                };
                match flag.as_str() {
                    "--username" => username = Some(value.clone()),
                    "--email" => email = Some(value.clone()),
                    _ => match parse_date(value) {
                        Ok(date) => birthday = Some(date),
                        Err(command) => return command,
                    },
                }
            }
            other => return usage(&format!("unknown edit-profile option '{}'", other)),
        }
    }

    if username.is_none() && email.is_none() && birthday.is_none() && !password {
        return usage("edit-profile needs at least one of --username, --email, --birthday, --password");
    }

    CliCommand::EditProfile {
        username,
        email,
        birthday,
        password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["myflix".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
        assert_eq!(parse(&["-V", "movies"]), CliCommand::Version);
    }

    #[test]
    fn test_flags_after_command_are_arguments() {
        assert_eq!(
            parse(&["movie", "-h"]),
            CliCommand::Movie {
                title: "-h".to_string()
            }
        );
        assert_eq!(
            parse(&["genre", "-V"]),
            CliCommand::Genre {
                name: "-V".to_string()
            }
        );
        assert!(matches!(parse(&["movies", "-V"]), CliCommand::Usage(_)));
    }

    #[test]
    fn test_unknown_leading_option() {
        assert!(matches!(parse(&["--verbose", "movies"]), CliCommand::Usage(msg) if msg.contains("--verbose")));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&[]), CliCommand::Help);
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h", "login"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_register() {
        assert_eq!(
            parse(&["register", "alice", "alice@example.com"]),
            CliCommand::Register {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                birthday: None,
            }
        );
        assert_eq!(
            parse(&["register", "alice", "alice@example.com", "1990-04-02"]),
            CliCommand::Register {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                birthday: NaiveDate::from_ymd_opt(1990, 4, 2),
            }
        );
    }

    #[test]
    fn test_parse_register_bad_date() {
        let command = parse(&["register", "alice", "a@b.c", "02/04/1990"]);
        assert!(matches!(command, CliCommand::Usage(msg) if msg.contains("02/04/1990")));
    }

    #[test]
    fn test_parse_login_and_logout() {
        assert_eq!(
            parse(&["login", "alice"]),
            CliCommand::Login {
                username: "alice".to_string()
            }
        );
        assert!(matches!(parse(&["login"]), CliCommand::Usage(_)));
        assert_eq!(parse(&["logout"]), CliCommand::Logout);
        assert!(matches!(parse(&["logout", "now"]), CliCommand::Usage(_)));
    }

    #[test]
    fn test_parse_catalog_lookups_join_words() {
        assert_eq!(parse(&["movies"]), CliCommand::Movies);
        assert_eq!(
            parse(&["movie", "Blade", "Runner"]),
            CliCommand::Movie {
                title: "Blade Runner".to_string()
            }
        );
        assert_eq!(
            parse(&["director", "Ridley Scott"]),
            CliCommand::Director {
                name: "Ridley Scott".to_string()
            }
        );
        assert_eq!(
            parse(&["genre", "Thriller"]),
            CliCommand::Genre {
                name: "Thriller".to_string()
            }
        );
        assert!(matches!(parse(&["movie"]), CliCommand::Usage(_)));
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!(parse(&["profile"]), CliCommand::Profile { username: None });
        assert_eq!(
            parse(&["profile", "bob"]),
            CliCommand::Profile {
                username: Some("bob".to_string())
            }
        );
    }

    #[test]
    fn test_parse_favorites() {
        assert_eq!(parse(&["favorites"]), CliCommand::Favorites);
        assert_eq!(
            parse(&["favorite", "add", "m1"]),
            CliCommand::AddFavorite {
                movie_id: "m1".to_string()
            }
        );
        assert_eq!(
            parse(&["favorite", "remove", "m1"]),
            CliCommand::RemoveFavorite {
                movie_id: "m1".to_string()
            }
        );
        assert!(matches!(parse(&["favorite", "toggle", "m1"]), CliCommand::Usage(_)));
    }

    #[test]
    fn test_parse_edit_profile() {
        assert_eq!(
            parse(&["edit-profile", "--email", "new@example.com", "--password"]),
            CliCommand::EditProfile {
                username: None,
                email: Some("new@example.com".to_string()),
                birthday: None,
                password: true,
            }
        );
        assert_eq!(
            parse(&["edit-profile", "--birthday", "2000-01-31"]),
            CliCommand::EditProfile {
                username: None,
                email: None,
                birthday: NaiveDate::from_ymd_opt(2000, 1, 31),
                password: false,
            }
        );
    }

    #[test]
    fn test_parse_edit_profile_errors() {
        assert!(matches!(parse(&["edit-profile"]), CliCommand::Usage(_)));
        assert!(matches!(parse(&["edit-profile", "--email"]), CliCommand::Usage(_)));
        assert!(matches!(parse(&["edit-profile", "--age", "3"]), CliCommand::Usage(_)));
    }

    #[test]
    fn test_parse_delete_profile() {
        assert_eq!(parse(&["delete-profile"]), CliCommand::DeleteProfile);
    }

    #[test]
    fn test_parse_unknown_command() {
        let command = parse(&["watch"]);
        assert_eq!(command, CliCommand::Usage("unknown command 'watch'".to_string()));
    }
}
