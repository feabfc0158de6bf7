//! Dummy signature generation for demos and local development.

use fake::faker::lorem::en::Sentences;
use fake::faker::name::en::Name;
use fake::Fake;

use crate::error::GuestbookResult;
use crate::signature::{NewSignature, Signature};
use crate::storage::SignatureStore;

/// A random full name with a three-sentence message.
pub fn dummy_signature() -> NewSignature {
    let name: String = Name().fake();
    let sentences: Vec<String> = Sentences(3..4).fake();
    NewSignature::new(name, Some(sentences.join(" ")))
}

/// Create `n` dummy signatures, returned in creation order.
pub fn add_dummy_signatures(store: &SignatureStore, n: usize) -> GuestbookResult<Vec<Signature>> {
    let created = (0..n)
        .map(|_| store.create(dummy_signature()))
        .collect::<GuestbookResult<Vec<_>>>()?;

    tracing::info!(count = created.len(), "Added dummy signatures");
    Ok(created)
}
