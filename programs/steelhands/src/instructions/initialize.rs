use crate::{
    constants::{VAULT_SEED, VAULT_SPACE},
    events::VaultInitialized,
    state::Vault,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// PDA vault state (seeds validated by Anchor constraint)
    #[account(
        init,
        payer = authority,
        space = VAULT_SPACE,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    unlock_time: Option<i64>,
    unlock_amount: Option<u64>,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let clock = Clock::get()?;

    vault.authority = ctx.accounts.authority.key();
    vault.bump = ctx.bumps.vault;
    vault.active = false;
    vault.set_conditions(clock.unix_timestamp, unlock_time, unlock_amount)?;

    emit!(VaultInitialized {
        vault: vault.key(),
        authority: vault.authority,
        unlock_time: vault.unlock_time,
        unlock_amount: vault.unlock_amount,
    });

    msg!(
        "[steelhands] initialized authority={} unlock_time={} unlock_amount={}",
        vault.authority,
        vault.unlock_time,
        vault.unlock_amount
    );
    Ok(())
}
