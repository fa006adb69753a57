mod authors;
mod detail;
mod id;
mod image;
mod isbn;
mod title;

pub use self::{authors::*, detail::*, id::*, image::*, isbn::*, title::*};
use destructure::Destructure;
use vodca::References;

/// Catalog entry. Read-only from the point of view of this service.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    authors: BookAuthors,
    isbn13: Isbn13,
    genre: BookGenre,
    average_rating: BookRating,
    num_pages: BookPages,
    synopsis: Option<BookSynopsis>,
    image_url: Option<ImageUrl>,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        title: BookTitle,
        authors: BookAuthors,
        isbn13: Isbn13,
        genre: BookGenre,
        average_rating: BookRating,
        num_pages: BookPages,
        synopsis: Option<BookSynopsis>,
        image_url: Option<ImageUrl>,
    ) -> Self {
        Self {
            id,
            title,
            authors,
            isbn13,
            genre,
            average_rating,
            num_pages,
            synopsis,
            image_url,
        }
    }
}
