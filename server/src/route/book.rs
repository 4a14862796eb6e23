use crate::controller::Controller;
use crate::error::{ErrorStatus, Rejection};
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CommentBookRequest, CreateBookRequest, DeleteBookRequest, FormOrJson,
    GetBookRequest,
};
use crate::response::BookPresenter;
use application::service::{
    CommentBookService, CreateBookService, DeleteBookService, GetAllBookService, GetBookService,
};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

/// Everything the book routes need from the database behind [`AppModule`].
pub trait BookServices:
    GetAllBookService + GetBookService + CreateBookService + CommentBookService + DeleteBookService
{
}

impl<T> BookServices for T where
    T: GetAllBookService
        + GetBookService
        + CreateBookService
        + CommentBookService
        + DeleteBookService
{
}

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<D: BookServices> BookRouter for Router<AppModule<D>> {
    fn route_book(self) -> Self {
        self.route(
            "/api/books",
            get(|State(module): State<AppModule<D>>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.database().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule<D>>,
                 FormOrJson(req): FormOrJson<CreateBookRequest>| async move {
                    let transformed =
                        Controller::new(BookTransformer, BookPresenter).try_intake(req)?;
                    transformed
                        .handle(|dto| async move { module.database().create_book(dto).await })
                        .await
                        .map_err(Rejection::from)
                },
            )
            .delete(|State(module): State<AppModule<D>>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.database().delete_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/api/books/:id",
            get(
                |State(module): State<AppModule<D>>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.database().get_book(dto).await })
                        .await
                        .map_err(Rejection::from)
                        .and_then(|res| res.ok_or(Rejection::NotFound))
                },
            )
            .post(
                |State(module): State<AppModule<D>>,
                 Path(id): Path<String>,
                 FormOrJson(req): FormOrJson<CommentBookRequest>| async move {
                    let transformed =
                        Controller::new(BookTransformer, BookPresenter).try_intake((id, req))?;
                    transformed
                        .handle(|dto| async move { module.database().comment_book(dto).await })
                        .await
                        .map_err(Rejection::from)
                        .and_then(|res| res.ok_or(Rejection::NotFound))
                },
            )
            .delete(
                |State(module): State<AppModule<D>>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.database().delete_book(dto).await })
                        .await
                        .map_err(Rejection::from)
                        .and_then(|res| res.ok_or(Rejection::NotFound))
                },
            ),
        )
    }
}
