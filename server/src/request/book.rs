use crate::controller::{Intake, TryIntake};
use crate::error::Rejection;
use application::transfer::{CommentBookDto, CreateBookDto, DeleteBookDto, GetBookDto};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommentBookRequest {
    comment: Option<String>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, Rejection> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(Rejection::MissingField(field))
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Rejection;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        let title = required(input.title, "title")?;
        Ok(CreateBookDto { title })
    }
}

// The comment is checked before the id is ever looked at.
impl TryIntake<(String, CommentBookRequest)> for BookTransformer {
    type To = CommentBookDto;
    type Error = Rejection;
    fn emit(&self, (id, input): (String, CommentBookRequest)) -> Result<Self::To, Self::Error> {
        let comment = required(input.comment, "comment")?;
        Ok(CommentBookDto { id, comment })
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
