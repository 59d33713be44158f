//! Render-ready projections of a movie for list cards and detail screens.

use crate::genres;
use crate::types::MovieEntity;

/// Separator between genre labels on a card.
pub const GENRE_SEPARATOR: &str = " • ";

/// Known genre labels joined for a card subtitle. Unknown ids are skipped.
pub fn genre_line(genre_ids: &[u32]) -> String {
    genre_ids
        .iter()
        .filter_map(|id| genres::lookup(*id))
        .collect::<Vec<_>>()
        .join(GENRE_SEPARATOR)
}

/// One-decimal rating, hidden for unrated movies.
pub fn rating_badge(vote_average: f64) -> Option<String> {
    (vote_average > 0.0).then(|| format!("{vote_average:.1}"))
}

/// What a grid cell shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub genres: String,
    pub rating: Option<String>,
}

impl From<&MovieEntity> for MovieCard {
    fn from(movie: &MovieEntity) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url(),
            genres: genre_line(&movie.genre_ids),
            rating: rating_badge(movie.vote_average),
        }
    }
}

/// What the detail screen shows. Unlike the card, every genre id gets a
/// label, with unmapped ids shown as "Unknown".
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub title: String,
    pub release_date: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub genres: Vec<&'static str>,
}

impl From<&MovieEntity> for MovieDetail {
    fn from(movie: &MovieEntity) -> Self {
        Self {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            overview: movie.overview.clone(),
            poster_url: movie.poster_url(),
            genres: movie.genre_ids.iter().map(|id| genres::genre_name(*id)).collect(),
        }
    }
}
