use kernel::prelude::entity::{Book, BookSummary, DestructBook, DestructBookSummary};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub comments: Vec<String>,
    pub comment_count: u64,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let comment_count = value.comment_count().into();
        let DestructBook {
            id,
            title,
            comments,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            comments: comments.into_iter().map(String::from).collect(),
            comment_count,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookSummaryDto {
    pub id: String,
    pub title: String,
    pub comment_count: u64,
}

impl From<BookSummary> for BookSummaryDto {
    fn from(value: BookSummary) -> Self {
        let DestructBookSummary {
            id,
            title,
            comment_count,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            comment_count: comment_count.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: String,
}

pub struct CreateBookDto {
    pub title: String,
}

pub struct CommentBookDto {
    pub id: String,
    pub comment: String,
}

pub struct DeleteBookDto {
    pub id: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeletedBookDto {
    pub id: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeletedAllBookDto {
    pub count: u64,
}
