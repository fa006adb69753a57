use serde::Serialize;
use vodca::{AsRefln, Fromln};

/// Author line as printed on the cover, e.g. `"Terry Pratchett/Neil Gaiman"`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Fromln, AsRefln)]
pub struct BookAuthors(String);

impl BookAuthors {
    pub fn new(authors: impl Into<String>) -> Self {
        Self(authors.into())
    }
}
