use crate::{constants::VAULT_SEED, errors::SteelError, events::VaultClosed, state::Vault};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Close<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: plain lamport destination for the closed vault's balance
    #[account(mut)]
    pub withdraw_address: UncheckedAccount<'info>,

    #[account(
        mut,
        close = withdraw_address,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump = vault.bump,
        has_one = authority,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Close>) -> Result<()> {
    let vault = &ctx.accounts.vault;
    let clock = Clock::get()?;
    let vault_balance = vault.to_account_info().lamports();

    // Inactive vaults close unconditionally. Armed vaults only close once
    // the deadline has passed or the balance condition is met.
    if vault.active && !vault.unlock_reached(clock.unix_timestamp, vault_balance) {
        return Err(SteelError::FailedToCloseVault.into());
    }

    emit!(VaultClosed {
        vault: vault.key(),
        authority: vault.authority,
        withdraw_address: ctx.accounts.withdraw_address.key(),
        amount: vault_balance,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "[steelhands] closed amount={} to={}",
        vault_balance,
        ctx.accounts.withdraw_address.key()
    );

    // Lamport transfer and account teardown happen via the close constraint.
    Ok(())
}
