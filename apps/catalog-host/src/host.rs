//! # JSON-lines Host Loop
//!
//! Reads one request object per line, answers with one response object per
//! line.
//!
//! ## Wire Format
//! ```text
//! → {"command":"create_item","item":{"name":"Desk Lamp", ...}}
//! ← {"success":true,"message":"Item created successfully","data":{...},"timestamp":"..."}
//!
//! → {"command":"get_item","id":42}
//! ← {"success":false,"status":404,"code":"NOT_FOUND","message":"Item not found with id: 42",...}
//!
//! → {"command":"update_stock","id":1,"quantity":12}
//! → {"command":"list_items_by_category","category":"Electronics"}
//! → {"command":"search_items","name":"lamp"}
//! → {"command":"count_items"}
//! ```
//!
//! A line that cannot be decoded, or that is over the size limit, gets a
//! `BAD_REQUEST` answer and the loop keeps going. Blank lines are skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use catalog_core::{ItemId, ItemPayload, StockPayload};
use catalog_store::CatalogService;

use crate::commands;
use crate::error::{ApiError, ErrorResponse};

/// One decoded request line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    CreateItem { item: ItemPayload },
    GetItem { id: ItemId },
    ListItems,
    ListItemsByCategory { category: String },
    SearchItems { name: String },
    UpdateItem { id: ItemId, item: ItemPayload },
    UpdateStock { id: ItemId, quantity: Option<i64> },
    DeleteItem { id: ItemId },
    CountItems,
}

/// Runs a decoded request against the catalog.
pub fn dispatch(catalog: &CatalogService, request: Request) -> Result<Value, ApiError> {
    match request {
        Request::CreateItem { item } => to_value(commands::create_item(catalog, item)?),
        Request::GetItem { id } => to_value(commands::get_item(catalog, id)?),
        Request::ListItems => to_value(commands::list_items(catalog)?),
        Request::ListItemsByCategory { category } => {
            to_value(commands::list_items_by_category(catalog, &category)?)
        }
        Request::SearchItems { name } => to_value(commands::search_items(catalog, &name)?),
        Request::UpdateItem { id, item } => to_value(commands::update_item(catalog, id, item)?),
        Request::UpdateStock { id, quantity } => {
            to_value(commands::update_stock(catalog, id, StockPayload { quantity })?)
        }
        Request::DeleteItem { id } => to_value(commands::delete_item(catalog, id)?),
        Request::CountItems => to_value(commands::count_items(catalog)?),
    }
}

fn to_value<T: Serialize>(response: T) -> Result<Value, ApiError> {
    serde_json::to_value(response).map_err(|err| {
        warn!(error = %err, "Failed to encode response");
        ApiError::internal("Failed to encode response")
    })
}

/// Decodes, dispatches and encodes a single request line.
pub fn handle_line(catalog: &CatalogService, line: &str) -> serde_json::Result<String> {
    let outcome = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(?request, "Dispatching request");
            dispatch(catalog, request)
        }
        Err(err) => {
            warn!(error = %err, "Malformed request line");
            Err(ApiError::bad_request(format!("Malformed request: {err}")))
        }
    };

    encode(outcome)
}

fn encode(outcome: Result<Value, ApiError>) -> serde_json::Result<String> {
    match outcome {
        Ok(value) => serde_json::to_string(&value),
        Err(error) => serde_json::to_string(&ErrorResponse::from(error)),
    }
}

/// Outcome of reading one request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRead {
    Eof,
    Complete,
    /// The line went past the limit; its bytes were drained, not kept.
    Oversized,
}

/// Reads up to the next `\n` into `buf` without the terminator.
///
/// At most `max_line_bytes` are ever buffered. The rest of a longer line is
/// consumed from the reader and dropped.
async fn read_request_line<R>(reader: &mut R, buf: &mut Vec<u8>, max_line_bytes: usize) -> std::io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let mut read_any = false;
    let mut oversized = false;

    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(match (read_any, oversized) {
                (false, _) => LineRead::Eof,
                (true, true) => LineRead::Oversized,
                (true, false) => LineRead::Complete,
            });
        }
        read_any = true;

        let newline = available.iter().position(|&b| b == b'\n');
        let chunk = &available[..newline.unwrap_or(available.len())];

        if !oversized {
            if buf.len() + chunk.len() > max_line_bytes {
                oversized = true;
                buf.clear();
            } else {
                buf.extend_from_slice(chunk);
            }
        }

        let used = chunk.len() + usize::from(newline.is_some());
        reader.consume(used);

        if newline.is_some() {
            return Ok(if oversized { LineRead::Oversized } else { LineRead::Complete });
        }
    }
}

/// Serves requests from `reader` until it reaches end of input.
///
/// Oversized lines and lines that are not UTF-8 are answered with
/// `BAD_REQUEST`; only I/O failures end the loop early.
///
/// ## Returns
/// The number of request lines answered.
pub async fn serve<R, W>(
    catalog: &CatalogService,
    mut reader: R,
    mut writer: W,
    max_line_bytes: usize,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut answered = 0;

    loop {
        let response = match read_request_line(&mut reader, &mut buf, max_line_bytes).await? {
            LineRead::Eof => break,
            LineRead::Oversized => {
                warn!(max_line_bytes, "Request line too long");
                encode(Err(ApiError::bad_request(format!(
                    "Request line exceeds {max_line_bytes} bytes"
                ))))?
            }
            LineRead::Complete => match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    handle_line(catalog, line)?
                }
                Err(err) => {
                    warn!(error = %err, "Request line is not UTF-8");
                    encode(Err(ApiError::bad_request(format!("Malformed request: {err}"))))?
                }
            },
        };

        writer.write_all(response.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        answered += 1;
    }

    Ok(answered)
}
