use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{CartItem, DestructCartItem};

#[derive(Debug, Clone, PartialEq)]
pub struct CartItemDto {
    pub id: Uuid,
    pub title: String,
    pub authors: String,
    pub price: Option<f64>,
    pub quantity: i32,
    pub isbn13: i64,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<CartItem> for CartItemDto {
    fn from(value: CartItem) -> Self {
        let DestructCartItem {
            id,
            title,
            authors,
            price,
            quantity,
            isbn13,
            image_url,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            price: price.map(Into::into),
            quantity: quantity.into(),
            isbn13: isbn13.into(),
            image_url: image_url.map(Into::into),
            created_at: created_at.into(),
        }
    }
}

/// Checked shape of an add-to-cart request. Field contents are validated
/// again when the [`CartItem`] is built.
#[derive(Debug, Clone)]
pub struct CreateCartItemDto {
    pub title: String,
    pub authors: String,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub isbn13: i64,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DecrementCartItemDto {
    pub id: Uuid,
}

#[derive(Debug, Clone)]
pub struct RemoveCartItemDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecrementedCartItemDto {
    Updated(CartItemDto),
    Removed(CartItemDto),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedCartDto {
    pub deleted: u64,
}
