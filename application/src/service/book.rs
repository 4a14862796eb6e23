use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookComment, BookId, BookTitle};
use kernel::KernelError;

use crate::transfer::{
    BookDto, BookSummaryDto, CommentBookDto, CreateBookDto, DeleteBookDto, DeletedAllBookDto,
    DeletedBookDto, GetBookDto,
};

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookSummaryDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        Ok(books.into_iter().map(BookSummaryDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let title = BookTitle::new(dto.title);
        let book = self
            .book_modifier()
            .create(&mut connection, &title)
            .await?;

        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait CommentBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn comment_book(
        &self,
        dto: CommentBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let id = BookId::new(dto.id);
        let comment = BookComment::new(dto.comment);
        let book = self
            .book_modifier()
            .append_comment(&mut connection, &id, &comment)
            .await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> CommentBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnBookModifier
{
    async fn delete_book(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<Option<DeletedBookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let id = BookId::new(dto.id);
        let deleted = self.book_modifier().delete(&mut connection, &id).await?;

        Ok(deleted.map(|id| DeletedBookDto { id: id.into() }))
    }

    async fn delete_all_books(&self) -> error_stack::Result<DeletedAllBookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        let count = self.book_modifier().delete_all(&mut connection).await?;
        Ok(DeletedAllBookDto { count })
    }
}

impl<T> DeleteBookService for T where T: DependOnDatabaseConnection + DependOnBookModifier {}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::{
        CommentBookService, CreateBookService, DeleteBookService, GetAllBookService,
        GetBookService,
    };
    use crate::transfer::{CommentBookDto, CreateBookDto, DeleteBookDto, GetBookDto};

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();

        let created = db
            .create_book(CreateBookDto {
                title: "test-title".to_string(),
            })
            .await?;
        assert_eq!(created.title, "test-title");
        assert!(created.comments.is_empty());
        assert_eq!(created.comment_count, 0);

        let commented = db
            .comment_book(CommentBookDto {
                id: created.id.clone(),
                comment: "test-comment".to_string(),
            })
            .await?
            .expect("book should exist");
        assert_eq!(commented.comments, vec!["test-comment".to_string()]);
        assert_eq!(commented.comment_count, 1);

        let all = db.get_all_books().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].comment_count, 1);

        let found = db
            .get_book(GetBookDto {
                id: created.id.clone(),
            })
            .await?;
        assert_eq!(found, Some(commented));

        let deleted = db
            .delete_book(DeleteBookDto {
                id: created.id.clone(),
            })
            .await?
            .expect("book should exist");
        assert_eq!(deleted.id, created.id);

        let found = db.get_book(GetBookDto { id: created.id }).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn delete_all_reports_removed_books() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        for title in ["one", "two", "three"] {
            db.create_book(CreateBookDto {
                title: title.to_string(),
            })
            .await?;
        }

        let deleted = db.delete_all_books().await?;
        assert_eq!(deleted.count, 3);
        assert!(db.get_all_books().await?.is_empty());

        let deleted = db.delete_all_books().await?;
        assert_eq!(deleted.count, 0);

        Ok(())
    }
}
