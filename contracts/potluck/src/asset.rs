//! # Asset adapter
//!
//! The pool moves value through exactly two capabilities, `transfer_in` and
//! `transfer_out`, implemented once per [`AssetKind`]:
//!
//! - [`NativeAsset`] — all-or-nothing push through the native asset contract.
//! - [`TokenAsset`]  — the designated token; inbound transfers are checked
//!   against the pool's balance delta so the ledger never records more than
//!   actually arrived.
//!
//! Every call goes through the generated `try_*` client methods. A failing or
//! trapping asset contract surfaces as [`Error::TransferFailed`] and never
//! panics the pool. Callers must have persisted their own state before
//! calling `transfer_out`.

use soroban_sdk::{token, Address, Env};

use crate::pool::Release;
use crate::types::{AssetKind, PoolConfig};
use crate::Error;

pub trait AssetAdapter {
    /// Pull `amount` from `from` into the pool.
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), Error>;
    /// Push `amount` from the pool to `to`.
    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), Error>;
}

pub struct NativeAsset<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

pub struct TokenAsset<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

/// Adapter selected by asset kind.
pub enum Asset<'a> {
    Native(NativeAsset<'a>),
    Token(TokenAsset<'a>),
}

impl<'a> Asset<'a> {
    pub fn for_kind(env: &'a Env, config: &PoolConfig, kind: AssetKind) -> Self {
        match kind {
            AssetKind::Native => Asset::Native(NativeAsset {
                env,
                client: token::Client::new(env, &config.native),
            }),
            AssetKind::Token => Asset::Token(TokenAsset {
                env,
                client: token::Client::new(env, &config.token),
            }),
        }
    }
}

impl AssetAdapter for Asset<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), Error> {
        match self {
            Asset::Native(asset) => asset.transfer_in(from, amount),
            Asset::Token(asset) => asset.transfer_in(from, amount),
        }
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), Error> {
        match self {
            Asset::Native(asset) => asset.transfer_out(to, amount),
            Asset::Token(asset) => asset.transfer_out(to, amount),
        }
    }
}

fn push(client: &token::Client, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

impl AssetAdapter for NativeAsset<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), Error> {
        push(
            &self.client,
            from,
            &self.env.current_contract_address(),
            amount,
        )
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), Error> {
        push(
            &self.client,
            &self.env.current_contract_address(),
            to,
            amount,
        )
    }
}

impl TokenAsset<'_> {
    fn pool_balance(&self) -> Result<i128, Error> {
        match self.client.try_balance(&self.env.current_contract_address()) {
            Ok(Ok(balance)) => Ok(balance),
            _ => Err(Error::TransferFailed),
        }
    }
}

impl AssetAdapter for TokenAsset<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), Error> {
        let pool = self.env.current_contract_address();
        let before = self.pool_balance()?;
        push(&self.client, from, &pool, amount)?;
        let after = self.pool_balance()?;
        // Fee-on-transfer or otherwise non-standard tokens would break the
        // "ledger sums to received amount" invariant.
        if after.checked_sub(before) != Some(amount) {
            return Err(Error::TransferFailed);
        }
        Ok(())
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), Error> {
        push(
            &self.client,
            &self.env.current_contract_address(),
            to,
            amount,
        )
    }
}

/// Push a claim's per-asset amounts to `to`. Zero legs are skipped.
pub fn release_to(
    env: &Env,
    config: &PoolConfig,
    to: &Address,
    release: &Release,
) -> Result<(), Error> {
    if release.native > 0 {
        Asset::for_kind(env, config, AssetKind::Native).transfer_out(to, release.native)?;
    }
    if release.token > 0 {
        Asset::for_kind(env, config, AssetKind::Token).transfer_out(to, release.token)?;
    }
    Ok(())
}
