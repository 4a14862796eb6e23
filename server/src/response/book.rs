use crate::controller::Exhaust;
use application::transfer::{BookDto, BookSummaryDto, DeletedAllBookDto, DeletedBookDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    comments: Vec<String>,
    #[serde(rename = "commentcount")]
    comment_count: u64,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookSummaryResponse {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(rename = "commentcount")]
    comment_count: u64,
}

#[derive(Debug)]
pub enum DeletedResponse {
    One,
    All,
}

impl IntoResponse for DeletedResponse {
    fn into_response(self) -> Response {
        let message = match self {
            DeletedResponse::One => "delete successful",
            DeletedResponse::All => "complete delete successful",
        };
        (StatusCode::OK, message).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        let BookDto {
            id,
            title,
            comments,
            comment_count,
        } = input;
        BookResponse {
            id,
            title,
            comments,
            comment_count,
        }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(|input| Exhaust::<BookDto>::emit(self, input))
    }
}

impl Exhaust<Vec<BookSummaryDto>> for BookPresenter {
    type To = axum::Json<Vec<BookSummaryResponse>>;
    fn emit(&self, input: Vec<BookSummaryDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(|book| {
                let BookSummaryDto {
                    id,
                    title,
                    comment_count,
                } = book;
                BookSummaryResponse {
                    id,
                    title,
                    comment_count,
                }
            })
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}

impl Exhaust<Option<DeletedBookDto>> for BookPresenter {
    type To = Option<DeletedResponse>;
    fn emit(&self, input: Option<DeletedBookDto>) -> Self::To {
        input.map(|_| DeletedResponse::One)
    }
}

impl Exhaust<DeletedAllBookDto> for BookPresenter {
    type To = DeletedResponse;
    fn emit(&self, _: DeletedAllBookDto) -> Self::To {
        DeletedResponse::All
    }
}
