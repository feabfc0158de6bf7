//! Guestbook signature types.

use serde::{Deserialize, Serialize};

/// A stored guestbook entry.
///
/// `id` is assigned by the store on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST /signatures`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSignature {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `PATCH /signatures/{id}`.
///
/// Omitted (or `null`) fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignaturePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewSignature {
    pub fn new(name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            name: name.into(),
            message,
        }
    }
}

impl SignaturePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.message.is_none()
    }
}

/// Document body as persisted; the id lives in the table key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SignatureDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SignatureDocument {
    pub fn apply(&mut self, patch: SignaturePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(message) = patch.message {
            self.message = Some(message);
        }
    }

    pub fn into_signature(self, id: String) -> Signature {
        Signature {
            id,
            name: self.name,
            message: self.message,
        }
    }
}

impl From<NewSignature> for SignatureDocument {
    fn from(data: NewSignature) -> Self {
        Self {
            name: data.name,
            message: data.message,
        }
    }
}
