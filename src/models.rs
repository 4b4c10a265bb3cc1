use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub review: String,
}

impl Book {
    pub fn new(isbn: &str, title: &str, author: &str, review: &str) -> Self {
        Book {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            review: review.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// A request body. Only a JSON object is accepted; on repeated keys the
/// last value wins.
pub type JsonObject = Map<String, Value>;

/// Reads `key` as a string. Absent, `null` and non-string values read as `None`.
fn string_field(body: &JsonObject, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Body of `POST /register` and `POST /login`.
#[derive(Debug, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<&JsonObject> for Credentials {
    fn from(body: &JsonObject) -> Self {
        Credentials {
            username: string_field(body, "username"),
            password: string_field(body, "password"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ReviewUpdate {
    pub review: Option<String>,
}

impl From<&JsonObject> for ReviewUpdate {
    fn from(body: &JsonObject) -> Self {
        ReviewUpdate {
            review: string_field(body, "review"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ReviewDelete {
    pub username: Option<String>,
}

impl From<&JsonObject> for ReviewDelete {
    fn from(body: &JsonObject) -> Self {
        ReviewDelete {
            username: string_field(body, "username"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub message: &'static str,
    pub book: Book,
}

/// Returns the field value unless it is absent or empty.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
