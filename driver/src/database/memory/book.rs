use mongodb::bson::oid::ObjectId;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookComment, BookComments, BookId, BookSummary, BookTitle};
use kernel::KernelError;

use crate::database::memory::InMemoryConnection;

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery<InMemoryConnection> for InMemoryBookRepository {
    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
    ) -> error_stack::Result<Vec<BookSummary>, KernelError> {
        let books = con.read().await;
        Ok(books.iter().map(BookSummary::from).collect())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let books = con.read().await;
        Ok(books.iter().find(|book| book.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Connection = InMemoryConnection;

    async fn create(
        &self,
        con: &mut InMemoryConnection,
        title: &BookTitle,
    ) -> error_stack::Result<Book, KernelError> {
        let book = Book::new(
            BookId::new(ObjectId::new().to_hex()),
            title.clone(),
            BookComments::default(),
        );
        con.write().await.push(book.clone());
        Ok(book)
    }

    async fn append_comment(
        &self,
        con: &mut InMemoryConnection,
        book_id: &BookId,
        comment: &BookComment,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let mut books = con.write().await;
        let Some(book) = books.iter_mut().find(|book| book.id() == book_id) else {
            return Ok(None);
        };
        book.substitute(|book| book.comments.push(comment.clone()));
        Ok(Some(book.clone()))
    }

    async fn delete(
        &self,
        con: &mut InMemoryConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Option<BookId>, KernelError> {
        let mut books = con.write().await;
        let Some(position) = books.iter().position(|book| book.id() == book_id) else {
            return Ok(None);
        };
        let removed = books.remove(position);
        Ok(Some(removed.id().clone()))
    }

    async fn delete_all(
        &self,
        con: &mut InMemoryConnection,
    ) -> error_stack::Result<u64, KernelError> {
        let mut books = con.write().await;
        let count = books.len() as u64;
        books.clear();
        Ok(count)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{BookComment, BookId, BookTitle, CommentCount};
    use kernel::KernelError;

    use crate::database::memory::book::InMemoryBookRepository;
    use crate::database::memory::InMemoryDatabase;

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;

        let book = InMemoryBookRepository
            .create(&mut con, &BookTitle::new("test"))
            .await?;
        assert_eq!(book.title(), &BookTitle::new("test"));
        assert_eq!(book.comment_count(), CommentCount::new(0u64));

        let found = InMemoryBookRepository.find_by_id(&mut con, book.id()).await?;
        assert_eq!(found, Some(book.clone()));

        let deleted = InMemoryBookRepository.delete(&mut con, book.id()).await?;
        assert_eq!(deleted.as_ref(), Some(book.id()));
        let found = InMemoryBookRepository.find_by_id(&mut con, book.id()).await?;
        assert!(found.is_none());
        let deleted = InMemoryBookRepository.delete(&mut con, book.id()).await?;
        assert!(deleted.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn comments_keep_their_order() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;
        let book = InMemoryBookRepository
            .create(&mut con, &BookTitle::new("test"))
            .await?;

        for comment in ["first", "second", "third"] {
            InMemoryBookRepository
                .append_comment(&mut con, book.id(), &BookComment::new(comment))
                .await?;
        }

        let found = InMemoryBookRepository
            .find_by_id(&mut con, book.id())
            .await?
            .expect("book should exist");
        let comments = found
            .comments()
            .clone()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        assert_eq!(comments, ["first", "second", "third"]);

        let listed = InMemoryBookRepository.find_all(&mut con).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].comment_count(), &CommentCount::new(3u64));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_ids_resolve_to_nothing() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;

        for id in ["invalidID", "5f43a1c0c0ffee0000000000"] {
            let id = BookId::new(id);
            assert!(InMemoryBookRepository.find_by_id(&mut con, &id).await?.is_none());
            let commented = InMemoryBookRepository
                .append_comment(&mut con, &id, &BookComment::new("lost"))
                .await?;
            assert!(commented.is_none());
            assert!(InMemoryBookRepository.delete(&mut con, &id).await?.is_none());
        }

        Ok(())
    }

    #[tokio::test]
    async fn delete_all_empties_the_collection() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;

        assert_eq!(InMemoryBookRepository.delete_all(&mut con).await?, 0);

        for title in ["one", "two"] {
            InMemoryBookRepository
                .create(&mut con, &BookTitle::new(title))
                .await?;
        }
        assert_eq!(InMemoryBookRepository.delete_all(&mut con).await?, 2);
        assert!(InMemoryBookRepository.find_all(&mut con).await?.is_empty());

        Ok(())
    }
}
