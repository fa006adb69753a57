mod id;
mod price;
mod quantity;

pub use self::{id::*, price::*, quantity::*};
use crate::entity::book::{BookAuthors, BookTitle, ImageUrl, Isbn13};
use crate::entity::common::CreatedAt;
use destructure::Destructure;
use vodca::References;

/// One book line inside the cart.
///
/// A persisted `CartItem` always carries a quantity of at least one; the
/// last [`CartItem::decrement`] hands the item back as
/// [`CartItemDecrement::Exhausted`] instead of producing a zero quantity.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct CartItem {
    id: CartItemId,
    title: BookTitle,
    authors: BookAuthors,
    price: Option<CartItemPrice>,
    quantity: CartItemQuantity,
    isbn13: Isbn13,
    image_url: Option<ImageUrl>,
    created_at: CreatedAt<CartItem>,
}

impl CartItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CartItemId,
        title: BookTitle,
        authors: BookAuthors,
        price: Option<CartItemPrice>,
        quantity: CartItemQuantity,
        isbn13: Isbn13,
        image_url: Option<ImageUrl>,
        created_at: CreatedAt<CartItem>,
    ) -> Self {
        Self {
            id,
            title,
            authors,
            price,
            quantity,
            isbn13,
            image_url,
            created_at,
        }
    }

    pub fn decrement(self) -> CartItemDecrement {
        match self.quantity.decrement() {
            Some(quantity) => CartItemDecrement::Decremented(Self { quantity, ..self }),
            None => CartItemDecrement::Exhausted(self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartItemDecrement {
    /// Quantity went down by one and the item stays in the cart.
    Decremented(CartItem),
    /// Quantity was one; the item has to leave the cart.
    Exhausted(CartItem),
}
