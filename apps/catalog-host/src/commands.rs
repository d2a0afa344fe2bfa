//! # Item Commands
//!
//! One function per catalog operation exposed by the host.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create_item / update_item                            │
//! │                                                                         │
//! │  ItemPayload (raw)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_item ── any field bad? ──► ApiError VALIDATION_ERROR         │
//! │       │                                                                 │
//! │       ▼ NewItem                                                         │
//! │  CatalogService ── rule broken? ───► ApiError NOT_FOUND / DUPLICATE_SKU │
//! │       │                                                                 │
//! │       ▼ Item                                                            │
//! │  ApiResponse<ItemDto> { success, message, data, timestamp }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service is never reached with an unvalidated payload.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use catalog_core::validation::{validate_item, validate_stock_quantity};
use catalog_core::{Item, ItemId, ItemPayload, StockPayload};
use catalog_store::CatalogService;

use crate::error::ApiError;

/// Item DTO (Data Transfer Object) for callers of the host.
///
/// Decouples the wire shape from the stored item and renames to camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemDto {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    pub brand: Option<String>,
    pub stock_quantity: u32,
    pub sku: String,
    pub image_url: Option<String>,
    pub active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            id: item.id.get(),
            name: item.name,
            description: item.description,
            price_cents: item.price.cents(),
            category: item.category,
            brand: item.brand,
            stock_quantity: item.stock_quantity,
            sku: item.sku,
            image_url: item.image_url,
            active: item.active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Result of `count_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemStats {
    pub total_items: usize,
}

/// Success envelope around every command result.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }
}

type CommandResult<T> = Result<ApiResponse<T>, ApiError>;

fn dtos(items: Vec<Item>) -> Vec<ItemDto> {
    items.into_iter().map(ItemDto::from).collect()
}

/// Validates and creates an item.
pub fn create_item(catalog: &CatalogService, payload: ItemPayload) -> CommandResult<ItemDto> {
    debug!(sku = ?payload.sku, "create_item command");
    let new_item = validate_item(&payload)?;
    let item = catalog.create(new_item)?;
    Ok(ApiResponse::success("Item created successfully", Some(item.into())))
}

pub fn get_item(catalog: &CatalogService, id: ItemId) -> CommandResult<ItemDto> {
    debug!(id = %id, "get_item command");
    let item = catalog.get_by_id(id)?;
    Ok(ApiResponse::success("Item retrieved successfully", Some(item.into())))
}

pub fn list_items(catalog: &CatalogService) -> CommandResult<Vec<ItemDto>> {
    let items = dtos(catalog.list_all());
    debug!(count = items.len(), "list_items command");
    let message = format!("Retrieved {} items", items.len());
    Ok(ApiResponse::success(message, Some(items)))
}

/// Items in `category`, compared ignoring case.
pub fn list_items_by_category(catalog: &CatalogService, category: &str) -> CommandResult<Vec<ItemDto>> {
    let items = dtos(catalog.list_by_category(category));
    debug!(category = %category, count = items.len(), "list_items_by_category command");
    let message = format!("Retrieved {} items in category: {category}", items.len());
    Ok(ApiResponse::success(message, Some(items)))
}

/// Items whose name contains `name`, ignoring case.
///
/// Linear scan over the whole catalog; the elapsed time is logged so slow
/// scans show up once the catalog grows.
pub fn search_items(catalog: &CatalogService, name: &str) -> CommandResult<Vec<ItemDto>> {
    let start = Instant::now();
    let items = dtos(catalog.search_by_name(name));

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = items.len(),
        query = %name,
        "search_items complete"
    );

    let message = format!("Found {} items matching: {name}", items.len());
    Ok(ApiResponse::success(message, Some(items)))
}

/// Validates a full replacement payload and applies it.
pub fn update_item(catalog: &CatalogService, id: ItemId, payload: ItemPayload) -> CommandResult<ItemDto> {
    debug!(id = %id, sku = ?payload.sku, "update_item command");
    let new_item = validate_item(&payload)?;
    let item = catalog.update(id, new_item)?;
    Ok(ApiResponse::success("Item updated successfully", Some(item.into())))
}

/// Sets the stock level. Missing or negative quantities never reach the service.
pub fn update_stock(catalog: &CatalogService, id: ItemId, payload: StockPayload) -> CommandResult<ItemDto> {
    debug!(id = %id, quantity = ?payload.quantity, "update_stock command");
    let quantity = validate_stock_quantity(payload.quantity)
        .map_err(|_| ApiError::bad_request("Invalid quantity value"))?;
    let item = catalog.update_stock(id, quantity)?;
    Ok(ApiResponse::success("Stock updated successfully", Some(item.into())))
}

pub fn delete_item(catalog: &CatalogService, id: ItemId) -> CommandResult<()> {
    debug!(id = %id, "delete_item command");
    catalog.delete(id)?;
    Ok(ApiResponse::success("Item deleted successfully", None))
}

pub fn count_items(catalog: &CatalogService) -> CommandResult<ItemStats> {
    let stats = ItemStats {
        total_items: catalog.count(),
    };
    Ok(ApiResponse::success("Item count retrieved", Some(stats)))
}
