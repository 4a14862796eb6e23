use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookComment, BookComments, BookId, BookSummary, BookTitle, CommentCount,
};
use kernel::KernelError;

use crate::database::mongo::MongoConnection;
use crate::error::ConvertError;

static BOOK_COLLECTION: &str = "books";

pub struct MongoBookRepository;

#[async_trait::async_trait]
impl BookQuery<MongoConnection> for MongoBookRepository {
    async fn find_all(
        &self,
        con: &mut MongoConnection,
    ) -> error_stack::Result<Vec<BookSummary>, KernelError> {
        MongoBookInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut MongoConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        MongoBookInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl BookModifier for MongoBookRepository {
    type Connection = MongoConnection;

    async fn create(
        &self,
        con: &mut MongoConnection,
        title: &BookTitle,
    ) -> error_stack::Result<Book, KernelError> {
        MongoBookInternal::create(con, title).await
    }

    async fn append_comment(
        &self,
        con: &mut MongoConnection,
        book_id: &BookId,
        comment: &BookComment,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        MongoBookInternal::append_comment(con, book_id, comment).await
    }

    async fn delete(
        &self,
        con: &mut MongoConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Option<BookId>, KernelError> {
        MongoBookInternal::delete(con, book_id).await
    }

    async fn delete_all(&self, con: &mut MongoConnection) -> error_stack::Result<u64, KernelError> {
        MongoBookInternal::delete_all(con).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BookDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    #[serde(default)]
    comments: Vec<String>,
}

impl From<BookDocument> for Book {
    fn from(value: BookDocument) -> Self {
        Book::new(
            BookId::new(value.id.to_hex()),
            BookTitle::new(value.title),
            BookComments::new(
                value
                    .comments
                    .into_iter()
                    .map(BookComment::new)
                    .collect::<Vec<_>>(),
            ),
        )
    }
}

#[derive(Debug, Deserialize)]
struct BookSummaryDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    commentcount: u64,
}

impl From<BookSummaryDocument> for BookSummary {
    fn from(value: BookSummaryDocument) -> Self {
        BookSummary::new(
            BookId::new(value.id.to_hex()),
            BookTitle::new(value.title),
            CommentCount::new(value.commentcount),
        )
    }
}

pub(in crate::database) struct MongoBookInternal;

impl MongoBookInternal {
    fn collection(con: &MongoConnection) -> Collection<BookDocument> {
        con.collection::<BookDocument>(BOOK_COLLECTION)
    }

    // Ids that are not ObjectIds can never match a stored book.
    fn object_id(id: &BookId) -> Option<ObjectId> {
        let id: &String = id.as_ref();
        ObjectId::parse_str(id).ok()
    }

    async fn find_all(
        con: &mut MongoConnection,
    ) -> error_stack::Result<Vec<BookSummary>, KernelError> {
        let pipeline = [
            doc! { "$sort": { "_id": 1 } },
            doc! {
                "$project": {
                    "title": 1,
                    "commentcount": { "$size": { "$ifNull": ["$comments", []] } },
                }
            },
        ];
        let books = Self::collection(con)
            .aggregate(pipeline)
            .with_type::<BookSummaryDocument>()
            .await
            .convert_error()?
            .map_ok(BookSummary::from)
            .try_collect::<Vec<_>>()
            .await
            .convert_error()?;
        tracing::debug!(count = books.len(), "listed books");
        Ok(books)
    }

    async fn find_by_id(
        con: &mut MongoConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let Some(object_id) = Self::object_id(id) else {
            return Ok(None);
        };
        let found = Self::collection(con)
            .find_one(doc! { "_id": object_id })
            .await
            .convert_error()?;
        Ok(found.map(Book::from))
    }

    async fn create(
        con: &mut MongoConnection,
        title: &BookTitle,
    ) -> error_stack::Result<Book, KernelError> {
        let document = BookDocument {
            id: ObjectId::new(),
            title: String::from(title.clone()),
            comments: Vec::new(),
        };
        Self::collection(con)
            .insert_one(&document)
            .await
            .convert_error()?;
        tracing::debug!(id = %document.id, "created book");
        Ok(Book::from(document))
    }

    async fn append_comment(
        con: &mut MongoConnection,
        book_id: &BookId,
        comment: &BookComment,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let Some(object_id) = Self::object_id(book_id) else {
            return Ok(None);
        };
        let comment: &String = comment.as_ref();
        let updated = Self::collection(con)
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$push": { "comments": comment.as_str() } },
            )
            .return_document(ReturnDocument::After)
            .await
            .convert_error()?;
        Ok(updated.map(Book::from))
    }

    async fn delete(
        con: &mut MongoConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Option<BookId>, KernelError> {
        let Some(object_id) = Self::object_id(book_id) else {
            return Ok(None);
        };
        let result = Self::collection(con)
            .delete_one(doc! { "_id": object_id })
            .await
            .convert_error()?;
        Ok((result.deleted_count > 0).then(|| book_id.clone()))
    }

    async fn delete_all(con: &mut MongoConnection) -> error_stack::Result<u64, KernelError> {
        let result = Self::collection(con)
            .delete_many(doc! {})
            .await
            .convert_error()?;
        tracing::debug!(count = result.deleted_count, "deleted every book");
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{BookComment, BookId, BookTitle, CommentCount};
    use kernel::KernelError;

    use crate::database::mongo::book::MongoBookRepository;
    use crate::database::mongo::MongoDatabase;

    #[test_with::env(MONGO_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = MongoDatabase::new().await?;
        let mut con = db.acquire().await?;

        let book = MongoBookRepository
            .create(&mut con, &BookTitle::new("test"))
            .await?;
        assert!(book.comments().clone().into_iter().next().is_none());

        let found = MongoBookRepository.find_by_id(&mut con, book.id()).await?;
        assert_eq!(found, Some(book.clone()));

        let commented = MongoBookRepository
            .append_comment(&mut con, book.id(), &BookComment::new("first"))
            .await?
            .expect("book should exist");
        assert_eq!(commented.comment_count(), CommentCount::new(1u64));

        let all = MongoBookRepository.find_all(&mut con).await?;
        let summary = all
            .iter()
            .find(|summary| summary.id() == book.id())
            .expect("book should be listed");
        assert_eq!(summary.comment_count(), &CommentCount::new(1u64));

        let malformed = BookId::new("invalidID");
        assert!(MongoBookRepository.find_by_id(&mut con, &malformed).await?.is_none());
        assert!(MongoBookRepository.delete(&mut con, &malformed).await?.is_none());

        let deleted = MongoBookRepository.delete(&mut con, book.id()).await?;
        assert_eq!(deleted.as_ref(), Some(book.id()));
        let found = MongoBookRepository.find_by_id(&mut con, book.id()).await?;
        assert!(found.is_none());

        Ok(())
    }
}
