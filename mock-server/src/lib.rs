use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub vote_average: f64,
    pub genre_ids: Vec<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TopRatedPage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status_code: u32,
    pub status_message: String,
    pub success: bool,
}

#[derive(Deserialize)]
pub struct TopRatedParams {
    pub language: Option<String>,
}

#[derive(Clone)]
pub struct Catalog {
    token: Arc<str>,
    movies: Arc<Vec<Movie>>,
}

/// Router serving the fixture page behind `token`.
pub fn app(token: &str) -> Router {
    app_with(token, fixture())
}

pub fn app_with(token: &str, movies: Vec<Movie>) -> Router {
    let catalog = Catalog {
        token: Arc::from(token),
        movies: Arc::new(movies),
    };
    Router::new()
        .route("/movie/top_rated", get(top_rated))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

async fn top_rated(
    State(catalog): State<Catalog>,
    headers: HeaderMap,
    Query(params): Query<TopRatedParams>,
) -> Result<Json<TopRatedPage>, (StatusCode, Json<ErrorBody>)> {
    let expected = format!("Bearer {}", catalog.token);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                status_code: 7,
                status_message: "Invalid API key: You must be granted a valid key.".to_string(),
                success: false,
            }),
        ));
    }

    println!(
        "GET /movie/top_rated language={}",
        params.language.as_deref().unwrap_or("-")
    );
    Ok(Json(TopRatedPage {
        page: 1,
        results: catalog.movies.as_ref().clone(),
        total_pages: 1,
        total_results: catalog.movies.len(),
    }))
}

fn movie(
    id: u64,
    title: &str,
    overview: &str,
    poster_path: Option<&str>,
    release_date: &str,
    vote_average: f64,
    genre_ids: &[u32],
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        poster_path: poster_path.map(str::to_string),
        release_date: release_date.to_string(),
        vote_average,
        genre_ids: genre_ids.to_vec(),
    }
}

/// One page of top-rated movies, ordered by rating as the upstream returns it.
pub fn fixture() -> Vec<Movie> {
    vec![
        movie(
            278,
            "Cadena perpetua",
            "Acusado del asesinato de su mujer, Andrew Dufresne ingresa en la prisión de Shawshank.",
            Some("/cadena-perpetua.jpg"),
            "1994-09-23",
            8.7,
            &[18, 80],
        ),
        movie(
            238,
            "El padrino",
            "Don Vito Corleone es el respetado jefe de una de las cinco familias de la mafia de Nueva York.",
            Some("/el-padrino.jpg"),
            "1972-03-14",
            8.7,
            &[18, 80],
        ),
        movie(
            240,
            "El padrino. Parte II",
            "Continuación de la historia de los Corleone.",
            Some("/el-padrino-2.jpg"),
            "1974-12-20",
            8.6,
            &[18, 80],
        ),
        movie(
            424,
            "La lista de Schindler",
            "Oskar Schindler, un empresario alemán, salva a más de mil judíos.",
            Some("/schindler.jpg"),
            "1993-12-15",
            8.6,
            &[18, 36, 10752],
        ),
        movie(
            389,
            "12 hombres sin piedad",
            "Un jurado debe decidir la culpabilidad de un joven acusado de parricidio.",
            None,
            "1957-04-10",
            8.5,
            &[18],
        ),
        movie(
            129,
            "El viaje de Chihiro",
            "Chihiro y sus padres llegan a un pueblo abandonado.",
            Some("/chihiro.jpg"),
            "2001-07-20",
            8.5,
            &[16, 10751, 14],
        ),
        movie(
            693134,
            "Dune: Parte dos",
            "Paul Atreides se une a los Fremen.",
            Some("/dune-2.jpg"),
            "2024-02-27",
            8.2,
            &[878, 12],
        ),
        movie(
            438631,
            "Dune",
            "",
            Some("/dune.jpg"),
            "2021-09-15",
            7.8,
            &[878, 12],
        ),
    ]
}
