//! Plain-text rendering of API results for the terminal.

use crate::models::{Director, Genre, Movie, MovieId, User};

/// One line per movie: id, title, genre and director.
pub fn movie_list(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies found.".to_string();
    }
    movies
        .iter()
        .map(|m| {
            let star = if m.featured { " *" } else { "" };
            format!(
                "{}  {}{} ({}, dir. {})",
                m.id, m.title, star, m.genre.name, m.director.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn movie(movie: &Movie) -> String {
    let mut lines = vec![
        movie.title.clone(),
        format!("  id:       {}", movie.id),
        format!("  genre:    {}", movie.genre.name),
        format!("  director: {}", movie.director.name),
    ];
    if !movie.image_url.is_empty() {
        lines.push(format!("  image:    {}", movie.image_url));
    }
    if movie.featured {
        lines.push("  featured".to_string());
    }
    if !movie.description.is_empty() {
        lines.push(String::new());
        lines.push(movie.description.clone());
    }
    lines.join("\n")
}

pub fn director(director: &Director) -> String {
    let years = match (director.birth_year, director.death_year) {
        (Some(birth), Some(death)) => format!(" ({}-{})", birth, death),
        (Some(birth), None) => format!(" (born {})", birth),
        (None, Some(death)) => format!(" (died {})", death),
        (None, None) => String::new(),
    };
    let mut text = format!("{}{}", director.name, years);
    if !director.bio.is_empty() {
        text.push_str("\n\n");
        text.push_str(&director.bio);
    }
    text
}

pub fn genre(genre: &Genre) -> String {
    if genre.description.is_empty() {
        genre.name.clone()
    } else {
        format!("{}\n\n{}", genre.name, genre.description)
    }
}

pub fn profile(user: &User) -> String {
    let birthday = user
        .birthday
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let email = if user.email.is_empty() { "-" } else { &user.email };
    format!(
        "{}\n  email:     {}\n  birthday:  {}\n  favorites: {}",
        user.username,
        email,
        birthday,
        user.favorite_movies.len()
    )
}

/// Favorite ids, one per line.
pub fn favorites(ids: &[MovieId]) -> String {
    if ids.is_empty() {
        "No favorite movies yet.".to_string()
    } else {
        ids.join("\n")
    }
}
