mod book;
mod cart;
mod root;

pub use self::{book::*, cart::*, root::*};

const CART: &str = "/cart";
const CART_ITEM_DECREMENT: &str = "/cart/:id/add";
const CART_ITEM_REMOVE: &str = "/cart/:id/remove";
const BOOKS: &str = "/books";
const BOOK: &str = "/books/:id";
