//! Request body fixtures for guestbook tests.
#![allow(dead_code)]

use serde_json::{json, Value};

pub fn signature_request(name: &str, message: &str) -> Value {
    json!({ "name": name, "message": message })
}

pub fn signature_request_without_message(name: &str) -> Value {
    json!({ "name": name })
}

pub fn name_patch(name: &str) -> Value {
    json!({ "name": name })
}

pub fn message_patch(message: &str) -> Value {
    json!({ "message": message })
}

/// A well-formed id that no store will ever have issued.
pub fn unknown_id() -> String {
    "00000000-0000-4000-8000-000000000000".to_string()
}
