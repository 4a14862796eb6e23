use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Book, BookId, BookSummary};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection: Send>: Sync + Send + 'static {
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<BookSummary>, KernelError>;

    /// `None` both when nothing is stored under `id` and when `id` is not
    /// an identifier the store could ever have issued.
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;
}

pub trait DependOnBookQuery: Sync + Send + 'static + DependOnDatabaseConnection {
    type BookQuery: BookQuery<<Self::DatabaseConnection as DatabaseConnection>::Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
