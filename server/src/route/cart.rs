use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CartTransformer, CreateCartItemRequest, DecrementCartItemRequest, RemoveCartItemRequest,
};
use crate::response::CartPresenter;
use application::service::{
    AddCartItemService, ClearCartService, DecrementCartItemService, GetCartService,
    RemoveCartItemService,
};
use crate::route::{CART, CART_ITEM_DECREMENT, CART_ITEM_REMOVE};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use uuid::Uuid;

pub trait CartRouter {
    fn route_cart(self) -> Self;
}

impl CartRouter for Router<AppModule> {
    fn route_cart(self) -> Self {
        self.route(
            CART,
            get(|State(module): State<AppModule>| async move {
                Controller::new(CartTransformer, CartPresenter)
                    .bypass(|| module.database().get_cart())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 req: Result<Json<CreateCartItemRequest>, JsonRejection>| async move {
                    let Json(req) = req.map_err(ErrorStatus::from)?;
                    Controller::new(CartTransformer, CartPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| module.database().add_cart_item(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(|State(module): State<AppModule>| async move {
                Controller::new(CartTransformer, CartPresenter)
                    .bypass(|| module.database().clear_cart())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        // Named "add" by the storefront, but takes one copy out of the cart.
        .route(
            CART_ITEM_DECREMENT,
            put(
                |State(module): State<AppModule>,
                 id: Result<Path<Uuid>, PathRejection>| async move {
                    let Path(id) = id.map_err(ErrorStatus::from)?;
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(DecrementCartItemRequest::new(id))
                        .handle(|dto| module.database().decrement_cart_item(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            CART_ITEM_REMOVE,
            delete(
                |State(module): State<AppModule>,
                 id: Result<Path<Uuid>, PathRejection>| async move {
                    let Path(id) = id.map_err(ErrorStatus::from)?;
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(RemoveCartItemRequest::new(id))
                        .handle(|dto| async move {
                            let removed = module.database().remove_cart_item(dto).await;
                            removed.map(|removed| (id, removed))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
