use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string, deserialize_year};

/// Identifier the service assigns to a movie (`_id`).
pub type MovieId = String;

/// A catalog entry. Read-only from the client's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(rename = "_id", deserialize_with = "deserialize_id")]
    pub id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub description: String,
    #[serde(rename = "Genre")]
    pub genre: Genre,
    #[serde(rename = "Director")]
    pub director: Director,
    #[serde(
        rename = "ImagePath",
        alias = "ImageURL",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub image_url: String,
    #[serde(rename = "Featured", default)]
    pub featured: bool,
}

impl Movie {
    /// Reject entries missing the references every view relies on.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err(format!("movie {} has an empty title", self.id));
        }
        self.genre.validate()?;
        self.director.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub description: String,
}

impl Genre {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("genre has an empty name".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Director {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Bio", default, deserialize_with = "deserialize_nullable_string")]
    pub bio: String,
    #[serde(
        rename = "Birth",
        default,
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_year: Option<i32>,
    #[serde(
        rename = "Death",
        default,
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub death_year: Option<i32>,
}

impl Director {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("director has an empty name".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIE_JSON: &str = r#"{
        "_id": "5f1a2b3c",
        "Title": "Silence of the Lambs",
        "Description": "A young FBI cadet must receive the help of an incarcerated cannibal.",
        "Genre": { "Name": "Thriller", "Description": "Suspense and excitement." },
        "Director": { "Name": "Jonathan Demme", "Bio": "American director.", "Birth": "1944", "Death": "2017" },
        "ImagePath": "silenceofthelambs.png",
        "Featured": true
    }"#;

    #[test]
    fn test_movie_deserialize() {
        let movie: Movie = serde_json::from_str(MOVIE_JSON).unwrap();
        assert_eq!(movie.id, "5f1a2b3c");
        assert_eq!(movie.title, "Silence of the Lambs");
        assert_eq!(movie.genre.name, "Thriller");
        assert_eq!(movie.director.name, "Jonathan Demme");
        assert_eq!(movie.director.birth_year, Some(1944));
        assert_eq!(movie.director.death_year, Some(2017));
        assert_eq!(movie.image_url, "silenceofthelambs.png");
        assert!(movie.featured);
        assert!(movie.validate().is_ok());
    }

    #[test]
    fn test_movie_optional_fields_default() {
        let json = r#"{
            "_id": "m1",
            "Title": "Heat",
            "Genre": { "Name": "Crime" },
            "Director": { "Name": "Michael Mann", "Bio": null }
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.description, "");
        assert_eq!(movie.image_url, "");
        assert!(!movie.featured);
        assert_eq!(movie.director.bio, "");
        assert!(movie.director.birth_year.is_none());
    }

    #[test]
    fn test_movie_missing_genre_is_rejected() {
        let json = r#"{ "_id": "m1", "Title": "Heat", "Director": { "Name": "Michael Mann" } }"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut movie: Movie = serde_json::from_str(MOVIE_JSON).unwrap();
        movie.title = "  ".to_string();
        assert!(movie.validate().unwrap_err().contains("empty title"));
    }

    #[test]
    fn test_validate_empty_director() {
        let mut movie: Movie = serde_json::from_str(MOVIE_JSON).unwrap();
        movie.director.name.clear();
        assert!(movie.validate().is_err());
    }

    #[test]
    fn test_director_serializes_wire_names() {
        let director = Director {
            name: "Ridley Scott".to_string(),
            bio: String::new(),
            birth_year: Some(1937),
            death_year: None,
        };
        let json = serde_json::to_value(&director).unwrap();
        assert_eq!(json["Name"], "Ridley Scott");
        assert_eq!(json["Birth"], 1937);
        assert!(json.get("Death").is_none());
    }
}
