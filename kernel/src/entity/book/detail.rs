use serde::Serialize;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Fromln, AsRefln)]
pub struct BookGenre(String);

impl BookGenre {
    pub fn new(genre: impl Into<String>) -> Self {
        Self(genre.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Fromln, AsRefln)]
pub struct BookRating(f64);

impl BookRating {
    pub fn new(rating: impl Into<f64>) -> Self {
        Self(rating.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Fromln, AsRefln)]
pub struct BookPages(i32);

impl BookPages {
    pub fn new(pages: impl Into<i32>) -> Self {
        Self(pages.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Fromln, AsRefln)]
pub struct BookSynopsis(String);

impl BookSynopsis {
    pub fn new(synopsis: impl Into<String>) -> Self {
        Self(synopsis.into())
    }
}
