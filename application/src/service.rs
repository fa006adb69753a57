mod book;
mod cart;
#[cfg(test)]
mod mock;

pub use self::{book::*, cart::*};
