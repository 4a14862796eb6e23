use std::ops::Deref;
use std::sync::Arc;

use tokio::sync::RwLock;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::prelude::entity::Book;
use kernel::KernelError;

pub use self::book::*;

mod book;

/// Process local store issuing the same id format as
/// [`MongoDatabase`](crate::database::MongoDatabase). Clones share their contents.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Connection = InMemoryConnection;
    async fn acquire(&self) -> error_stack::Result<Self::Connection, KernelError> {
        Ok(InMemoryConnection(Arc::clone(&self.books)))
    }
}

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

pub struct InMemoryConnection(Arc<RwLock<Vec<Book>>>);

impl Deref for InMemoryConnection {
    type Target = RwLock<Vec<Book>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
