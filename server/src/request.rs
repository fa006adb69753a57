mod book;
mod cart;

pub use self::{book::*, cart::*};
