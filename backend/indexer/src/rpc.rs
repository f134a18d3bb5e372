//! Soroban RPC client: polls `getEvents` and decodes Potluck events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//! * JSON-RPC `-32600` (invalid request) and `-32601` (method not found) are
//!   returned as [`IndexerError::Rpc`] without retrying.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, PotluckEvent};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

/// JSON-RPC error codes that will not succeed on retry.
const HARD_ERROR_CODES: [i64; 2] = [-32600, -32601];

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// XDR-encoded topic list
    pub topic: Vec<String>,
    /// XDR-encoded event value / data
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    /// Unique per emitted event, stable across re-polls.
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
    #[serde(rename = "pagingToken")]
    pub paging_token: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Doubling delay between retries, capped at [`MAX_BACKOFF_SECS`].
#[derive(Debug)]
struct Backoff {
    secs: u64,
}

impl Backoff {
    fn new() -> Self {
        Self {
            secs: INITIAL_BACKOFF_SECS,
        }
    }

    /// Sleep for the current delay, then double it.
    async fn wait(&mut self) {
        tokio::time::sleep(Duration::from_secs(self.secs)).await;
        self.secs = (self.secs * 2).min(MAX_BACKOFF_SECS);
    }
}

/// One page of `getEvents` output.
#[derive(Debug)]
pub struct EventPage {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    pub latest_ledger: Option<u64>,
}

/// Fetch a page of events from the RPC.
///
/// * `start_ledger` — the ledger sequence to scan from (inclusive).
/// * `cursor`       — optional opaque pagination cursor from a previous response.
/// * `limit`        — maximum number of events to return.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_id: &str,
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<EventPage> {
    let mut backoff = Backoff::new();
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getEvents",
        "params": build_params(contract_id, start_ledger, cursor, limit),
    });

    loop {
        let resp = match client.post(rpc_url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("RPC request failed (will retry in {}s): {e}", backoff.secs);
                backoff.wait().await;
                continue;
            }
        };

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate-limited by RPC (will retry in {}s)", backoff.secs);
            backoff.wait().await;
            continue;
        }

        let body: RpcResponse = resp.json().await?;

        if let Some(err) = body.error {
            if HARD_ERROR_CODES.contains(&err.code) {
                return Err(IndexerError::Rpc {
                    code: err.code,
                    message: err.message,
                });
            }
            warn!(
                "RPC soft error (will retry in {}s): {} {}",
                backoff.secs, err.code, err.message
            );
            backoff.wait().await;
            continue;
        }

        let result = body
            .result
            .ok_or_else(|| IndexerError::EventParse("Empty result from getEvents".to_string()))?;

        debug!(
            "Fetched {} events (latest_ledger={:?})",
            result.events.len(),
            result.latest_ledger
        );

        return Ok(EventPage {
            events: result.events,
            cursor: result.cursor,
            latest_ledger: result.latest_ledger,
        });
    }
}

fn build_params(contract_id: &str, start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": [contract_id]
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode a list of raw RPC events into [`PotluckEvent`] structs.
///
/// Events from failed contract calls are skipped.
pub fn decode_events(raw: &[RawEvent], contract_id: &str) -> Vec<PotluckEvent> {
    raw.iter()
        .filter(|e| e.in_successful_contract_call != Some(false))
        .filter_map(|e| decode_single(e, contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, contract_id: &str) -> Option<PotluckEvent> {
    // Leading topic symbol selects the event type.
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));

    // Older RPCs only send `pagingToken`, which carries the same value.
    let Some(event_id) = raw.id.clone().or_else(|| raw.paging_token.clone()) else {
        warn!("Skipping {} event without an id", kind.as_str());
        return None;
    };

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    // Second topic, when present, is the acting account.
    let topic_actor = raw.topic.get(1).map(|t| extract_topic_value(t));
    let decoded = decode_data(&raw.value, kind);

    Some(PotluckEvent {
        event_id,
        event_type: kind.as_str().to_string(),
        actor: decoded.actor.or(topic_actor),
        asset: decoded.asset,
        amount: decoded.amount,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| contract_id.to_string()),
        tx_hash: raw.tx_hash.clone(),
    })
}

#[derive(Debug, Default)]
struct Decoded {
    actor: Option<String>,
    asset: Option<String>,
    amount: Option<String>,
}

/// Pull apart the JSON `value` blob that Soroban returns for event data.
fn decode_data(value: &Value, kind: EventKind) -> Decoded {
    match kind {
        EventKind::PoolCreated => Decoded {
            actor: extract_field(value, &["beneficiary"]),
            asset: None,
            amount: extract_field(value, &["cap"]),
        },
        EventKind::Contributed => Decoded {
            actor: extract_field(value, &["contributor"]),
            asset: value.get("asset").and_then(extract_variant),
            amount: extract_field(value, &["amount"]),
        },
        EventKind::Resolved => Decoded {
            actor: None,
            asset: value.get("phase").and_then(extract_variant),
            amount: extract_field(value, &["total_raised"]),
        },
        EventKind::PayoutClaimed => Decoded {
            actor: extract_field(value, &["beneficiary"]),
            asset: None,
            amount: extract_field(value, &["total"]),
        },
        EventKind::Refunded => Decoded {
            actor: extract_field(value, &["contributor"]),
            asset: None,
            amount: extract_field(value, &["total"]),
        },
        EventKind::Unknown => Decoded::default(),
    }
}

fn extract_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Unit enum variants arrive as `"Native"`, `["Native"]`,
/// `{"vec":[{"symbol":"Native"}]}` or `{"symbol":"Native"}` depending on the RPC.
fn extract_variant(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_lowercase()),
        Value::Array(items) => items.first().and_then(extract_variant),
        Value::Object(map) => map
            .get("symbol")
            .or_else(|| map.get("vec"))
            .or_else(|| map.get("value"))
            .and_then(extract_variant),
        _ => None,
    }
}

/// Extract a Soroban Symbol from the XDR-decoded topic string.
/// The RPC may return `{"type":"symbol","value":"contrib"}` or just the raw string.
fn extract_symbol(raw: &str) -> String {
    extract_topic_value(raw)
}

/// Extract the inner value of a JSON-wrapped topic, falling back to the raw string.
fn extract_topic_value(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        match v.get("value") {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    raw.to_string()
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
