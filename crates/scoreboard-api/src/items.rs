//! Handlers for `/items`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/items` | All items |
//! | `POST` | `/items` | Body: `{"data":"..."}`; returns the stored item |

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use scoreboard_core::{
  item::{Item, NewItem},
  store::ItemStore,
};
use serde::Deserialize;

use crate::error::ApiError;

/// JSON body accepted by `POST /items`. Absent or `null` data is stored as
/// an empty string.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub data: Option<String>,
}

impl From<CreateBody> for NewItem {
  fn from(b: CreateBody) -> Self {
    NewItem { data: b.data.unwrap_or_default() }
  }
}

/// `GET /items`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Item>>, ApiError>
where
  S: ItemStore,
{
  let items = store.list_items().await.map_err(ApiError::storage)?;
  Ok(Json(items))
}

/// `POST /items` — body: `{"data":"x"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Json<Item>, ApiError>
where
  S: ItemStore,
{
  let body: CreateBody = serde_json::from_slice(&body)?;
  let item = store
    .create_item(NewItem::from(body))
    .await
    .map_err(ApiError::storage)?;
  tracing::debug!(id = item.id, "item created");
  Ok(Json(item))
}
