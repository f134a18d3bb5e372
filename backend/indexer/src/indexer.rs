//! Long-running background task that polls the Soroban RPC and writes
//! decoded Potluck events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Run the indexer loop until `shutdown` is cancelled.
pub async fn run(state: Arc<IndexerState>, shutdown: CancellationToken) {
    info!("Indexer starting — contract: {}", state.config.contract_id);

    // Load the cursor from the DB; fall back to config start_ledger.
    let last_ledger = match db::get_last_ledger(&state.pool).await {
        Ok(ledger) => ledger,
        Err(e) => {
            error!("Failed to read persisted ledger, using configured start: {e}");
            0
        }
    };
    let mut cursor = match db::get_cursor_string(&state.pool).await {
        Ok(cursor) => cursor,
        Err(e) => {
            error!("Failed to read persisted cursor, scanning by ledger: {e}");
            None
        }
    };
    let mut current_ledger = resume_ledger(last_ledger, state.config.start_ledger);

    info!("Resuming from ledger {current_ledger}");

    loop {
        match poll_once(
            &state.pool,
            &state.client,
            &state.config,
            current_ledger,
            cursor.as_deref(),
        )
        .await
        {
            Ok((next_ledger, next_cursor)) => {
                current_ledger = next_ledger;
                cursor = next_cursor;
            }
            Err(e) => {
                error!("Indexer poll error: {e}");
            }
        }

        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Indexer stopping at ledger {current_ledger}");
                return;
            }
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    }
}

/// A persisted ledger wins over the configured start ledger.
fn resume_ledger(persisted: i64, configured: u32) -> u32 {
    if persisted > 0 {
        u32::try_from(persisted).unwrap_or(u32::MAX)
    } else {
        configured
    }
}

/// Perform a single poll iteration.
///
/// Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    pool: &SqlitePool,
    client: &Client,
    config: &Config,
    start_ledger: u32,
    cursor: Option<&str>,
) -> crate::errors::Result<(u32, Option<String>)> {
    let page = rpc::fetch_events(
        client,
        &config.rpc_url,
        &config.contract_id,
        start_ledger,
        cursor,
        config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &config.contract_id);
        let inserted = db::insert_events(pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    let next_ledger = next_start_ledger(page.latest_ledger, start_ledger);

    // Persist cursor so restarts are deterministic.
    db::save_cursor(pool, next_ledger as i64, page.cursor.as_deref()).await?;

    Ok((next_ledger, page.cursor))
}

/// Advance to the latest ledger the RPC has seen, never backwards.
fn next_start_ledger(latest: Option<u64>, start_ledger: u32) -> u32 {
    latest
        .and_then(|l| u32::try_from(l).ok())
        .map(|l| l.max(start_ledger))
        .unwrap_or(start_ledger)
}
