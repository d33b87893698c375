use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{deserialize_birthday, deserialize_id, deserialize_nullable_string, MovieId};

/// An account as the service returns it.
///
/// `favorite_movies` is passed through exactly as the server sends it; the
/// client does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(rename = "Username")]
    pub username: String,
    /// Password hash, when the service chooses to echo it.
    #[serde(rename = "Password", default, skip_serializing)]
    pub password: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
    #[serde(
        rename = "Birthday",
        default,
        deserialize_with = "deserialize_birthday",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "FavoriteMovies", default)]
    pub favorite_movies: Vec<MovieId>,
}

impl User {
    pub fn has_favorite(&self, movie_id: &str) -> bool {
        self.favorite_movies.iter().any(|id| id == movie_id)
    }
}
