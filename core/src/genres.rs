//! Static genre lookup.
//!
//! The upstream list endpoint only returns numeric genre ids; the labels are
//! fixed client-side configuration.

/// Label used for ids missing from [`GENRES`].
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Genre id to display label.
pub const GENRES: [(u32, &str); 19] = [
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Label for a known genre id.
pub fn lookup(id: u32) -> Option<&'static str> {
    GENRES
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, label)| *label)
}

/// Label for `id`, or [`UNKNOWN_GENRE`].
pub fn genre_name(id: u32) -> &'static str {
    lookup(id).unwrap_or(UNKNOWN_GENRE)
}
