use crate::controller::Exhaust;
use application::transfer::{CartItemDto, ClearedCartDto, DecrementedCartItemDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    id: Uuid,
    title: String,
    authors: String,
    price: Option<f64>,
    quantity: i32,
    isbn13: i64,
    image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl From<CartItemDto> for CartItemResponse {
    fn from(value: CartItemDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            authors: value.authors,
            price: value.price,
            quantity: value.quantity,
            isbn13: value.isbn13,
            image_url: value.image_url,
            created_at: value.created_at,
        }
    }
}

/// Answer to every cart write that hands back a single item.
#[derive(Debug, Serialize)]
pub struct CartItemChangedResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<bool>,
    item: Option<CartItemResponse>,
}

impl IntoResponse for CartItemChangedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ClearedCartResponse {
    message: String,
    deleted: u64,
}

impl IntoResponse for ClearedCartResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    message: String,
    cart_items: Vec<CartItemResponse>,
}

impl IntoResponse for CartResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct CartPresenter;

impl Exhaust<CartItemDto> for CartPresenter {
    type To = CartItemChangedResponse;
    fn emit(&self, output: CartItemDto) -> Self::To {
        CartItemChangedResponse {
            message: String::from("Book added to your cart"),
            removed: None,
            item: Some(output.into()),
        }
    }
}

impl Exhaust<DecrementedCartItemDto> for CartPresenter {
    type To = CartItemChangedResponse;
    fn emit(&self, output: DecrementedCartItemDto) -> Self::To {
        match output {
            DecrementedCartItemDto::Updated(item) => CartItemChangedResponse {
                message: format!("Updated shopping cart with book id:{}", item.id),
                removed: Some(false),
                item: Some(item.into()),
            },
            DecrementedCartItemDto::Removed(item) => CartItemChangedResponse {
                message: String::from("Book removed from shopping cart"),
                removed: Some(true),
                item: Some(item.into()),
            },
        }
    }
}

impl Exhaust<(Uuid, Option<CartItemDto>)> for CartPresenter {
    type To = CartItemChangedResponse;
    fn emit(&self, (id, output): (Uuid, Option<CartItemDto>)) -> Self::To {
        let message = match output {
            Some(_) => format!("Book with id:{id} deleted from shopping cart"),
            None => format!("Book with id:{id} was not in the shopping cart"),
        };
        CartItemChangedResponse {
            message,
            removed: None,
            item: output.map(CartItemResponse::from),
        }
    }
}

impl Exhaust<ClearedCartDto> for CartPresenter {
    type To = ClearedCartResponse;
    fn emit(&self, output: ClearedCartDto) -> Self::To {
        ClearedCartResponse {
            message: String::from("Your shopping cart is empty"),
            deleted: output.deleted,
        }
    }
}

impl Exhaust<Vec<CartItemDto>> for CartPresenter {
    type To = CartResponse;
    fn emit(&self, output: Vec<CartItemDto>) -> Self::To {
        let message = match output.len() {
            0 => String::from("Your shopping cart is empty"),
            _ => String::from("Found some books in your shopping cart!"),
        };
        CartResponse {
            message,
            cart_items: output.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}
