use crate::{constants::VAULT_SEED, errors::SteelError, events::VaultUpdated, state::Vault};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Update<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump = vault.bump,
        has_one = authority,
    )]
    pub vault: Account<'info, Vault>,
}

pub fn handler(
    ctx: Context<Update>,
    unlock_time: Option<i64>,
    unlock_amount: Option<u64>,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let clock = Clock::get()?;

    // Conditions are frozen once the vault is armed.
    require!(!vault.active, SteelError::VaultActive);

    vault.set_conditions(clock.unix_timestamp, unlock_time, unlock_amount)?;

    emit!(VaultUpdated {
        vault: vault.key(),
        unlock_time: vault.unlock_time,
        unlock_amount: vault.unlock_amount,
    });

    msg!(
        "[steelhands] updated unlock_time={} unlock_amount={}",
        vault.unlock_time,
        vault.unlock_amount
    );
    Ok(())
}
