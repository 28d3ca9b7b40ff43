use crate::{
    constants::{VAULT_SEED, VAULT_SPACE},
    errors::SteelError,
    events::WithdrawMade,
    state::Vault,
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, SteelError::ZeroAmount);

    let clock = Clock::get()?;
    let rent = Rent::get()?;
    let vault_ai = ctx.accounts.vault.to_account_info();
    let vault_balance = vault_ai.lamports();
    let vault = &ctx.accounts.vault;

    // An armed vault only pays out once a condition is met.
    if vault.active && !vault.unlock_reached(clock.unix_timestamp, vault_balance) {
        return Err(SteelError::VaultUnlocked.into());
    }

    // The PDA must stay rent exempt or the runtime reaps it.
    let spendable = vault_balance.saturating_sub(rent.minimum_balance(VAULT_SPACE));
    require!(amount <= spendable, SteelError::InsufficientFunds);

    let authority_ai = ctx.accounts.authority.to_account_info();
    let new_vault_balance = vault_balance
        .checked_sub(amount)
        .ok_or(SteelError::Overflow)?;
    let new_authority_balance = authority_ai
        .lamports()
        .checked_add(amount)
        .ok_or(SteelError::Overflow)?;
    **vault_ai.try_borrow_mut_lamports()? = new_vault_balance;
    **authority_ai.try_borrow_mut_lamports()? = new_authority_balance;

    emit!(WithdrawMade {
        vault: vault.key(),
        recipient: vault.authority,
        amount,
        vault_balance: new_vault_balance,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "[steelhands] withdraw amount={} balance={}",
        amount,
        new_vault_balance
    );
    Ok(())
}
