use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::route::{BOOK, BOOKS, CART, CART_ITEM_DECREMENT, CART_ITEM_REMOVE};

#[derive(Debug, Serialize)]
pub struct Endpoint {
    method: &'static str,
    path: &'static str,
    description: &'static str,
}

static ENDPOINTS: [Endpoint; 7] = [
    Endpoint {
        method: "GET",
        path: CART,
        description: "List the books in the shopping cart",
    },
    Endpoint {
        method: "POST",
        path: CART,
        description: "Put a book into the shopping cart",
    },
    Endpoint {
        method: "PUT",
        path: CART_ITEM_DECREMENT,
        description: "Take one copy of a book out of the shopping cart",
    },
    Endpoint {
        method: "DELETE",
        path: CART_ITEM_REMOVE,
        description: "Remove a book from the shopping cart",
    },
    Endpoint {
        method: "DELETE",
        path: CART,
        description: "Empty the shopping cart",
    },
    Endpoint {
        method: "GET",
        path: BOOKS,
        description: "Browse the catalog, paged with limit and offset",
    },
    Endpoint {
        method: "GET",
        path: BOOK,
        description: "Look up a single book",
    },
];

pub trait RootRouter {
    fn route_root(self) -> Self;
}

impl<S> RootRouter for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn route_root(self) -> Self {
        self.route("/", get(|| async { Json(&ENDPOINTS) }))
    }
}
