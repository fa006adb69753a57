use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookTransformer, GetAllBookRequest, GetBookRequest};
use crate::response::BookPresenter;
use application::service::GetBookService;
use crate::route::{BOOK, BOOKS};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Router;
use error_stack::Report;
use kernel::KernelError;
use uuid::Uuid;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            BOOKS,
            get(
                |State(module): State<AppModule>,
                 req: Result<Query<GetAllBookRequest>, QueryRejection>| async move {
                    let Query(req) = req.map_err(ErrorStatus::from)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().get_all_books(&dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            BOOK,
            get(
                |State(module): State<AppModule>,
                 id: Result<Path<Uuid>, PathRejection>| async move {
                    let Path(id) = id.map_err(ErrorStatus::from)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.database().get_book(&dto).await })
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| {
                            ErrorStatus::from(
                                Report::new(KernelError::NotFound)
                                    .attach_printable(format!("no book with id {id}")),
                            )
                        })
                },
            ),
        )
    }
}
