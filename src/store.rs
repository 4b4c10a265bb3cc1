//! In-memory catalog of books and registered users.
//!
//! Both collections sit behind a single mutex so that every request sees
//! either all or none of another request's change.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{ApiError, Result};
use crate::models::{Book, User};

#[derive(Debug, Default)]
struct Catalog {
    books: Vec<Book>,
    users: HashMap<String, User>,
}

#[derive(Debug, Default)]
pub struct BookStore {
    inner: Mutex<Catalog>,
}

impl BookStore {
    pub fn new(books: Vec<Book>) -> Self {
        BookStore {
            inner: Mutex::new(Catalog {
                books,
                users: HashMap::new(),
            }),
        }
    }

    /// Store holding the two books the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new("1234567890", "Node.js Programming", "John Doe", "Great book!"),
            Book::new(
                "0987654321",
                "Learning JavaScript",
                "Jane Doe",
                "Very informative!",
            ),
        ])
    }

    fn lock(&self) -> Result<MutexGuard<'_, Catalog>> {
        self.inner.lock().map_err(|_| {
            tracing::error!("catalog lock poisoned");
            ApiError::StoreUnavailable
        })
    }

    pub fn all_books(&self) -> Result<Vec<Book>> {
        Ok(self.lock()?.books.clone())
    }

    pub fn book_by_isbn(&self, isbn: &str) -> Result<Book> {
        self.lock()?
            .books
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
            .ok_or(ApiError::BookNotFound)
    }

    pub fn books_by_author(&self, author: &str) -> Result<Vec<Book>> {
        let books = self.filter(|b| b.author == author)?;
        if books.is_empty() {
            return Err(ApiError::NoBooksByAuthor);
        }
        Ok(books)
    }

    pub fn books_by_title(&self, title: &str) -> Result<Vec<Book>> {
        let books = self.filter(|b| b.title == title)?;
        if books.is_empty() {
            return Err(ApiError::NoBooksWithTitle);
        }
        Ok(books)
    }

    fn filter<F>(&self, predicate: F) -> Result<Vec<Book>>
    where
        F: Fn(&Book) -> bool,
    {
        Ok(self
            .lock()?
            .books
            .iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect())
    }

    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let mut catalog = self.lock()?;
        if catalog.users.contains_key(username) {
            return Err(ApiError::UserExists);
        }
        catalog.users.insert(
            username.to_string(),
            User {
                username: username.to_string(),
                password: password.to_string(),
            },
        );
        Ok(())
    }

    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        match self.lock()?.users.get(username) {
            Some(user) if user.password == password => Ok(()),
            _ => Err(ApiError::InvalidCredentials),
        }
    }

    pub fn update_review(&self, isbn: &str, review: &str) -> Result<Book> {
        let mut catalog = self.lock()?;
        let book = catalog
            .books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or(ApiError::BookNotFound)?;
        book.review = review.to_string();
        Ok(book.clone())
    }

    /// Clears the review on `isbn`. Any registered user may do so, as long as
    /// there is a review to clear; ownership of the review is not tracked.
    pub fn delete_review(&self, isbn: &str, username: &str) -> Result<Book> {
        let mut catalog = self.lock()?;
        let Catalog { books, users } = &mut *catalog;
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or(ApiError::BookNotFound)?;
        if book.review.is_empty() || !users.contains_key(username) {
            return Err(ApiError::NotAuthorized);
        }
        book.review.clear();
        Ok(book.clone())
    }
}
