use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook, SelectLimit, SelectOffset};

#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub authors: String,
    pub isbn13: i64,
    pub genre: String,
    pub average_rating: f64,
    pub num_pages: i32,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            authors,
            isbn13,
            genre,
            average_rating,
            num_pages,
            synopsis,
            image_url,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            isbn13: isbn13.into(),
            genre: genre.into(),
            average_rating: average_rating.into(),
            num_pages: num_pages.into(),
            synopsis: synopsis.map(Into::into),
            image_url: image_url.map(Into::into),
        }
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

pub struct GetAllBookDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}
