use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookComment(String);

impl BookComment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self(comment.into())
    }
}

/// Comments in the order they were posted.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookComments(Vec<BookComment>);

impl BookComments {
    pub fn new(comments: impl Into<Vec<BookComment>>) -> Self {
        Self(comments.into())
    }

    pub fn push(&mut self, comment: BookComment) {
        self.0.push(comment);
    }

    pub fn count(&self) -> CommentCount {
        CommentCount::new(self.0.len() as u64)
    }
}

impl IntoIterator for BookComments {
    type Item = BookComment;
    type IntoIter = std::vec::IntoIter<BookComment>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CommentCount(u64);

impl CommentCount {
    pub fn new(count: impl Into<u64>) -> Self {
        Self(count.into())
    }
}
