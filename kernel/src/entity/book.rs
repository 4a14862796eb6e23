mod comment;
mod id;
mod title;

pub use self::{comment::*, id::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    comments: BookComments,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, comments: BookComments) -> Self {
        Self {
            id,
            title,
            comments,
        }
    }

    pub fn comment_count(&self) -> CommentCount {
        self.comments.count()
    }
}

/// List projection of a [`Book`]: everything but the comment bodies.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookSummary {
    id: BookId,
    title: BookTitle,
    comment_count: CommentCount,
}

impl BookSummary {
    pub fn new(id: BookId, title: BookTitle, comment_count: CommentCount) -> Self {
        Self {
            id,
            title,
            comment_count,
        }
    }
}

impl From<&Book> for BookSummary {
    fn from(value: &Book) -> Self {
        Self::new(value.id.clone(), value.title.clone(), value.comment_count())
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{
        Book, BookComment, BookComments, BookId, BookSummary, BookTitle, CommentCount,
    };

    #[test]
    fn comment_count_follows_comments() {
        let mut book = Book::new(
            BookId::new("65f1c0ffee0000000000beef"),
            BookTitle::new("Dune"),
            BookComments::default(),
        );
        assert_eq!(book.comment_count(), CommentCount::new(0u64));

        book.substitute(|book| {
            book.comments.push(BookComment::new("first"));
            book.comments.push(BookComment::new("second"));
        });
        assert_eq!(book.comment_count(), CommentCount::new(2u64));

        let comments = book
            .comments()
            .clone()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        assert_eq!(comments, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn summary_drops_comment_bodies() {
        let book = Book::new(
            BookId::new("65f1c0ffee0000000000beef"),
            BookTitle::new("Dune"),
            BookComments::new(vec![BookComment::new("great")]),
        );
        let summary = BookSummary::from(&book);
        assert_eq!(summary.id(), book.id());
        assert_eq!(summary.title(), book.title());
        assert_eq!(summary.comment_count(), &CommentCount::new(1u64));
    }
}
