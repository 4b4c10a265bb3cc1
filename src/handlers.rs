use actix_web::{web, HttpResponse, Responder};

use crate::error::{ApiError, Result};
use crate::models::{
    present, Credentials, JsonObject, MessageResponse, ReviewDelete, ReviewResponse, ReviewUpdate,
};
use crate::store::BookStore;

// Bodies are extracted as `Option<web::Json<JsonObject>>`: a missing body, or
// one that is not a JSON object, is handled like `{}`, so the field checks
// below produce the response.

fn object(body: Option<web::Json<JsonObject>>) -> JsonObject {
    body.map(web::Json::into_inner).unwrap_or_default()
}

async fn get_all_books(store: web::Data<BookStore>) -> Result<impl Responder> {
    Ok(HttpResponse::Ok().json(store.all_books()?))
}

async fn get_book_by_isbn(
    isbn: web::Path<String>,
    store: web::Data<BookStore>,
) -> Result<impl Responder> {
    let book = store.book_by_isbn(&isbn)?;
    Ok(HttpResponse::Ok().json(book))
}

async fn get_books_by_author(
    author: web::Path<String>,
    store: web::Data<BookStore>,
) -> Result<impl Responder> {
    let books = store.books_by_author(&author)?;
    Ok(HttpResponse::Ok().json(books))
}

async fn get_books_by_title(
    title: web::Path<String>,
    store: web::Data<BookStore>,
) -> Result<impl Responder> {
    let books = store.books_by_title(&title)?;
    Ok(HttpResponse::Ok().json(books))
}

fn credentials(body: Option<web::Json<JsonObject>>) -> Result<(String, String)> {
    let creds = Credentials::from(&object(body));
    match (present(&creds.username), present(&creds.password)) {
        (Some(username), Some(password)) => Ok((username.to_string(), password.to_string())),
        _ => Err(ApiError::CredentialsRequired),
    }
}

async fn register_user(
    body: Option<web::Json<JsonObject>>,
    store: web::Data<BookStore>,
) -> Result<impl Responder> {
    let (username, password) = credentials(body)?;
    store.register(&username, &password)?;
    tracing::info!(%username, "user registered");
    Ok(HttpResponse::Created().json(MessageResponse {
        message: "User registered successfully",
    }))
}

async fn login(
    body: Option<web::Json<JsonObject>>,
    store: web::Data<BookStore>,
) -> Result<impl Responder> {
    let (username, password) = credentials(body)?;
    if let Err(e) = store.login(&username, &password) {
        tracing::warn!(%username, "failed login attempt");
        return Err(e);
    }
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Login successful",
    }))
}

async fn update_review(
    isbn: web::Path<String>,
    body: Option<web::Json<JsonObject>>,
    store: web::Data<BookStore>,
) -> Result<impl Responder> {
    let update = ReviewUpdate::from(&object(body));
    let review = present(&update.review).ok_or(ApiError::ReviewRequired)?;
    let book = store.update_review(&isbn, review)?;
    tracing::debug!(isbn = %book.isbn, "review updated");
    Ok(HttpResponse::Ok().json(ReviewResponse {
        message: "Review updated successfully",
        book,
    }))
}

async fn delete_review(
    isbn: web::Path<String>,
    body: Option<web::Json<JsonObject>>,
    store: web::Data<BookStore>,
) -> Result<impl Responder> {
    let delete = ReviewDelete::from(&object(body));
    let username = present(&delete.username).ok_or(ApiError::UsernameRequired)?;
    let book = store.delete_review(&isbn, username)?;
    tracing::debug!(isbn = %book.isbn, %username, "review deleted");
    Ok(HttpResponse::Ok().json(ReviewResponse {
        message: "Review deleted successfully",
        book,
    }))
}

async fn not_found() -> Result<HttpResponse> {
    Err(ApiError::RouteNotFound)
}

/// Registers every route of the service. The caller supplies the shared
/// `web::Data<BookStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register_user))
        .route("/login", web::post().to(login))
        .route("/books", web::get().to(get_all_books))
        .route("/books/isbn/{isbn}", web::get().to(get_book_by_isbn))
        .route("/books/author/{author}", web::get().to(get_books_by_author))
        .route("/books/title/{title}", web::get().to(get_books_by_title))
        .route("/books/review/{isbn}", web::put().to(update_review))
        .route("/books/review/{isbn}", web::delete().to(delete_review))
        .default_service(web::to(not_found));
}
