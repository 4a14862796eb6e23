use std::ops::Deref;

use error_stack::ResultExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

pub use self::book::*;

mod book;

static DATABASE_URL: &str = "DB";
static DATABASE_NAME: &str = "DB_NAME";
static DEFAULT_DATABASE_NAME: &str = "library";

#[derive(Clone)]
pub struct MongoDatabase {
    database: Database,
}

impl MongoDatabase {
    /// Connects to the database named by the `DB` connection string.
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(DATABASE_URL)
            .convert_error()
            .attach_printable_lazy(|| format!("{DATABASE_URL} must be set"))?;
        let name = env(DATABASE_NAME).ok();
        Self::connect(&url, name).await
    }

    pub async fn connect(
        url: &str,
        name: Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let options = ClientOptions::parse(url).await.convert_error()?;
        let client = Client::with_options(options).convert_error()?;
        let database = match name {
            Some(name) => client.database(&name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME)),
        };
        database
            .run_command(doc! { "ping": 1 })
            .await
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to reach database {}", database.name()))?;
        tracing::info!(database = database.name(), "db connection established");
        Ok(Self { database })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MongoDatabase {
    type Connection = MongoConnection;
    async fn acquire(&self) -> error_stack::Result<Self::Connection, KernelError> {
        Ok(MongoConnection(self.database.clone()))
    }
}

impl DependOnBookQuery for MongoDatabase {
    type BookQuery = MongoBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MongoBookRepository
    }
}

impl DependOnBookModifier for MongoDatabase {
    type BookModifier = MongoBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MongoBookRepository
    }
}

/// Handle to the configured database. The driver pools sockets internally,
/// so acquiring one is a cheap clone.
pub struct MongoConnection(Database);

impl Deref for MongoConnection {
    type Target = Database;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> ConvertError for Result<T, mongodb::error::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(DriverError::from).convert_error()
    }
}
