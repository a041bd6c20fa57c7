//! # Document Store Adapter
//!
//! Resources as documents in a MongoDB `resources` collection, keyed by
//! store-assigned ObjectIds.
//!
//! Identifier format validation lives here, not in the generic request
//! validation layer: the 24-hex ObjectId encoding is a property of this
//! backend. An id that fails the format check is [`StoreError::InvalidId`]
//! (HTTP 400), which is distinct from a well-formed id that matches no
//! document ([`StoreError::NotFound`], HTTP 404). The format check happens
//! before any round trip, so a malformed id never reaches the server.
//!
//! Documents carry the native `_id` internally; the adapter surfaces it as
//! the `id` field so both namespaces present the same three-field shape.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use super::ResourceStore;
use crate::config::MongoConfig;
use crate::model::{Resource, ResourceBody};

const COLLECTION: &str = "resources";

/// Wire shape of a resource document.
#[derive(Debug, Serialize, Deserialize)]
struct ResourceDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    description: String,
}

impl ResourceDocument {
    fn into_resource(self) -> Resource<String> {
        Resource {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name,
            description: self.description,
        }
    }
}

/// MongoDB-backed resource store.
///
/// Cheap to clone; clones share the same client.
#[derive(Clone)]
pub struct MongoResourceStore {
    client: Client,
    collection: Collection<ResourceDocument>,
}

impl MongoResourceStore {
    /// Connects to the configured server and binds the collection.
    pub async fn connect(config: &MongoConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(config.url()).await?;
        let collection = client.database(&config.database).collection(COLLECTION);
        Ok(Self { client, collection })
    }

    /// Shuts the client down. Called once at shutdown.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

/// Checks the backend's accepted identifier format: 24 hex characters,
/// the encoding of a 12-byte ObjectId.
fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId)
}

#[async_trait]
impl ResourceStore for MongoResourceStore {
    type Id = String;

    async fn list(&self) -> StoreResult<Vec<Resource<String>>> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut resources = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            resources.push(document.into_resource());
        }
        Ok(resources)
    }

    async fn get(&self, id: &String) -> StoreResult<Resource<String>> {
        let oid = parse_object_id(id)?;

        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        document
            .map(ResourceDocument::into_resource)
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, body: ResourceBody) -> StoreResult<Resource<String>> {
        let document = ResourceDocument {
            id: None,
            name: body.name,
            description: body.description,
        };

        let result = self.collection.insert_one(&document).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend("insert returned a non-ObjectId id".to_string()))?;

        Ok(Resource {
            id: oid.to_hex(),
            name: document.name,
            description: document.description,
        })
    }

    async fn update(&self, id: &String, body: ResourceBody) -> StoreResult<Resource<String>> {
        let oid = parse_object_id(id)?;

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": { "name": &body.name, "description": &body.description } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        updated
            .map(ResourceDocument::into_resource)
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: &String) -> StoreResult<()> {
        let oid = parse_object_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object_id_accepted() {
        assert!(parse_object_id("65f0aa11bb22cc33dd44ee55").is_ok());
    }

    #[test]
    fn test_short_id_rejected() {
        let err = parse_object_id("not-a-valid-id").unwrap_err();
        assert!(matches!(err, StoreError::InvalidId));
    }

    #[test]
    fn test_non_hex_id_rejected() {
        // Right length, wrong alphabet.
        let err = parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, StoreError::InvalidId));
    }

    #[test]
    fn test_document_maps_to_id_field() {
        let oid = ObjectId::parse_str("65f0aa11bb22cc33dd44ee55").unwrap();
        let document = ResourceDocument {
            id: Some(oid),
            name: "A".to_string(),
            description: "d".to_string(),
        };
        let resource = document.into_resource();
        assert_eq!(resource.id, "65f0aa11bb22cc33dd44ee55");
    }
}
