//! Items of the generic list service. Created once, never modified.

use serde::{Deserialize, Serialize};

/// A stored item with its storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  pub id:   i64,
  pub data: String,
}

/// Input for inserting a new item; the id is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
  #[serde(default)]
  pub data: String,
}
