//! Terminal route handlers.
//!
//! Both handlers return fixed entities unconditionally; there is no error
//! path and no lookup against any store.

use axum::extract::Path;

use crate::http::negotiate::{Entity, MediaType};
use crate::resources::{Resource, ResourceList};

/// `GET /resources` — the fixed two-element listing.
pub async fn list_resources(media: MediaType) -> Entity<ResourceList> {
    tracing::debug!("Listing resources");
    Entity::new(media, ResourceList::fixture())
}

/// `GET /resources/{user-id}` — always the same record.
///
/// The id is bound but ignored, and there is deliberately no not-found
/// path: any id, matching or not, yields the fixture.
pub async fn find_resource(media: MediaType, Path(user_id): Path<String>) -> Entity<Resource> {
    tracing::debug!(%user_id, "Finding resource");
    Entity::new(media, Resource::fixture())
}
