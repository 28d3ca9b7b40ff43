#![allow(unexpected_cfgs)]

//! # Steelhands — Solana Anchor Program
//!
//! Commitment vault for native SOL:
//!  - per-authority vault PDA with configurable unlock conditions
//!    (unix-time deadline and/or lamport balance threshold)
//!  - explicit activation freezes the configuration and locks the funds
//!  - deposits at any time, payouts only while the vault is unlocked
//!  - on-chain events for off-chain observability

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("GJbHi5bV138ruTeHUWKLSV53HK57P7JNVFNcBXyPWc1L");

#[program]
pub mod steelhands {
    use super::*;

    /// Create a vault for the signing authority with optional unlock conditions.
    pub fn initialize(
        ctx: Context<Initialize>,
        unlock_time: Option<i64>,
        unlock_amount: Option<u64>,
    ) -> Result<()> {
        initialize::handler(ctx, unlock_time, unlock_amount)
    }

    /// Replace the unlock conditions of an inactive vault.
    pub fn update(
        ctx: Context<Update>,
        unlock_time: Option<i64>,
        unlock_amount: Option<u64>,
    ) -> Result<()> {
        update::handler(ctx, unlock_time, unlock_amount)
    }

    /// Arm the vault. From here on the funds stay locked until a condition is met.
    pub fn activate(ctx: Context<Activate>) -> Result<()> {
        activate::handler(ctx)
    }

    /// Move lamports from the authority into the vault PDA.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        deposit::handler(ctx, amount)
    }

    /// Pay lamports back to the authority while the vault is unlocked.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        withdraw::handler(ctx, amount)
    }

    /// Close the vault and send its whole balance to the withdraw address.
    pub fn close(ctx: Context<Close>) -> Result<()> {
        close::handler(ctx)
    }
}
