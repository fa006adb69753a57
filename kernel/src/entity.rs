mod book;
mod cart;
mod common;

pub use self::{book::*, cart::*, common::*};
