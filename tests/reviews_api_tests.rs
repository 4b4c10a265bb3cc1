use actix_web::{http::StatusCode, test, web, App};
use book_reviews::{handlers, BookStore};
use serde_json::{json, Value};

#[actix_rt::test]
async fn test_update_review_is_visible_on_read() {
    let store = web::Data::new(BookStore::seeded());
    let app =
        test::init_service(App::new().app_data(store.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::put()
        .uri("/books/review/1234567890")
        .set_json(json!({ "review": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Review updated successfully");
    assert_eq!(body["book"]["review"], "x");

    let req = test::TestRequest::get()
        .uri("/books/isbn/1234567890")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["review"], "x");
}

#[actix_rt::test]
async fn test_update_review_validation_precedes_lookup() {
    let store = web::Data::new(BookStore::seeded());
    let app =
        test::init_service(App::new().app_data(store.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::put()
        .uri("/books/review/unknown")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Review is required");

    let req = test::TestRequest::put()
        .uri("/books/review/1234567890")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/books/review/unknown")
        .set_json(json!({ "review": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Book not found");
}

#[actix_rt::test]
async fn test_delete_review_by_unknown_user_is_forbidden() {
    let store = web::Data::new(BookStore::seeded());
    let app =
        test::init_service(App::new().app_data(store.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::delete()
        .uri("/books/review/1234567890")
        .set_json(json!({ "username": "stranger" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "You are not authorized to delete this review");

    // review untouched
    assert_eq!(store.book_by_isbn("1234567890").unwrap().review, "Great book!");
}

#[actix_rt::test]
async fn test_delete_review_clears_once() {
    let store = web::Data::new(BookStore::seeded());
    store.register("reader", "pw").unwrap();
    let app =
        test::init_service(App::new().app_data(store.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::delete()
        .uri("/books/review/0987654321")
        .set_json(json!({ "username": "reader" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "message": "Review deleted successfully",
            "book": {
                "isbn": "0987654321",
                "title": "Learning JavaScript",
                "author": "Jane Doe",
                "review": ""
            }
        })
    );

    // nothing left to delete
    let req = test::TestRequest::delete()
        .uri("/books/review/0987654321")
        .set_json(json!({ "username": "reader" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn test_delete_review_error_precedence() {
    let store = web::Data::new(BookStore::seeded());
    let app =
        test::init_service(App::new().app_data(store.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::delete()
        .uri("/books/review/unknown")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Username is required");

    let req = test::TestRequest::delete()
        .uri("/books/review/unknown")
        .set_json(json!({ "username": "stranger" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Book not found");
}

#[actix_rt::test]
async fn test_delete_on_empty_review_is_forbidden_for_registered_user() {
    let store = web::Data::new(BookStore::seeded());
    store.register("reader", "pw").unwrap();
    store.update_review("1234567890", "temp").unwrap();
    store.delete_review("1234567890", "reader").unwrap();
    let app =
        test::init_service(App::new().app_data(store.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::delete()
        .uri("/books/review/1234567890")
        .set_json(json!({ "username": "reader" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn test_array_body_is_not_a_review_payload() {
    let store = web::Data::new(BookStore::seeded());
    store.register("reader", "pw").unwrap();
    let app =
        test::init_service(App::new().app_data(store.clone()).configure(handlers::configure)).await;

    let req = test::TestRequest::put()
        .uri("/books/review/1234567890")
        .set_json(json!(["hacked"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Review is required");

    let req = test::TestRequest::delete()
        .uri("/books/review/1234567890")
        .set_json(json!(["reader"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Username is required");

    assert_eq!(store.book_by_isbn("1234567890").unwrap().review, "Great book!");
}
