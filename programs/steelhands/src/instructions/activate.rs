use crate::{constants::VAULT_SEED, errors::SteelError, events::VaultActivated, state::Vault};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Activate<'info> {
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

pub fn handler(ctx: Context<Activate>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    // Arming a vault with no way to unlock it would strand the funds.
    require!(vault.has_condition(), SteelError::MissingCondition);

    vault.active = true;

    let clock = Clock::get()?;
    emit!(VaultActivated {
        vault: vault.key(),
        unlock_time: vault.unlock_time,
        unlock_amount: vault.unlock_amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "[steelhands] activated unlock_time={} unlock_amount={}",
        vault.unlock_time,
        vault.unlock_amount
    );
    Ok(())
}
