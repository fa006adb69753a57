use crate::controller::Exhaust;
use application::transfer::BookDto;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: Uuid,
    title: String,
    authors: String,
    isbn13: i64,
    genre: String,
    average_rating: f64,
    num_pages: i32,
    synopsis: Option<String>,
    image_url: Option<String>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            authors: value.authors,
            isbn13: value.isbn13,
            genre: value.genre,
            average_rating: value.average_rating,
            num_pages: value.num_pages,
            synopsis: value.synopsis,
            image_url: value.image_url,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, output: Option<BookDto>) -> Self::To {
        output.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, output: Vec<BookDto>) -> Self::To {
        axum::Json(output.into_iter().map(BookResponse::from).collect())
    }
}
