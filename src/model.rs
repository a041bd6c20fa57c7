//! # Resource Model
//!
//! The single domain entity exposed by both backends.

use serde::{Deserialize, Serialize};

/// A persisted resource.
///
/// `Id` is `i32` for the relational backend (auto-increment primary key)
/// and `String` for the document backend (24-hex ObjectId). Everything
/// else is identical between the two: a resource is always exactly an id,
/// a name, and a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<Id> {
    pub id: Id,
    pub name: String,
    pub description: String,
}

/// Client-supplied fields for create and update.
///
/// The id is never part of the body; it is assigned by the backend on
/// create and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceBody {
    pub name: String,
    pub description: String,
}
