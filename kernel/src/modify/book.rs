use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Book, BookComment, BookId, BookTitle};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    type Connection: Send;

    /// Persists a new book with no comments. The id is assigned here.
    async fn create(
        &self,
        con: &mut Self::Connection,
        title: &BookTitle,
    ) -> error_stack::Result<Book, KernelError>;

    /// Appends in a single write and returns the book as stored afterwards.
    async fn append_comment(
        &self,
        con: &mut Self::Connection,
        book_id: &BookId,
        comment: &BookComment,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    async fn delete(
        &self,
        con: &mut Self::Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Option<BookId>, KernelError>;

    /// Returns how many books were removed. An empty collection is not an error.
    async fn delete_all(&self, con: &mut Self::Connection)
        -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
