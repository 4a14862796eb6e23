use driver::database::MongoDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

/// Router state. The database is opened once at startup and shared by every request.
pub struct AppModule<D>(Arc<Handler<D>>);

impl AppModule<MongoDatabase> {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self::with_database(MongoDatabase::new().await?))
    }
}

impl<D> AppModule<D> {
    pub fn with_database(database: D) -> Self {
        Self(Arc::new(Handler { database }))
    }
}

impl<D> Clone for AppModule<D> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<D> Deref for AppModule<D> {
    type Target = Handler<D>;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler<D> {
    database: D,
}

impl<D> Handler<D> {
    pub fn database(&self) -> &D {
        &self.database
    }
}
