//! Canonical event types emitted by the Potluck pool contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/potluck/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the Potluck contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The pool was constructed (`created` topic).
    PoolCreated,
    /// A contribution was accepted (`contrib` topic).
    Contributed,
    /// The pool was resolved (`resolved` topic).
    Resolved,
    /// The beneficiary pulled the pot (`payout` topic).
    PayoutClaimed,
    /// A contributor was refunded (`refunded` topic).
    Refunded,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::PoolCreated,
            "contrib" => Self::Contributed,
            "resolved" => Self::Resolved,
            "payout" => Self::PayoutClaimed,
            "refunded" => Self::Refunded,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PoolCreated => "pool_created",
            Self::Contributed => "contributed",
            Self::Resolved => "resolved",
            Self::PayoutClaimed => "payout_claimed",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded Potluck event, ready to be stored in the database.
///
/// `asset` carries `native`/`token` for contributions and the outcome
/// (`succeeded`/`failed`) for resolutions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotluckEvent {
    /// RPC-assigned event id; the deduplication key.
    pub event_id: String,
    pub event_type: String,
    pub actor: Option<String>,
    pub asset: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub actor: Option<String>,
    pub asset: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// Count of stored events for one event type.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventCount {
    pub event_type: String,
    pub count: i64,
}
