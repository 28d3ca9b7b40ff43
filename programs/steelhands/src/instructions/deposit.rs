use crate::{constants::VAULT_SEED, errors::SteelError, events::DepositMade, state::Vault};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump = vault.bump,
        has_one = authority,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, SteelError::ZeroAmount);

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.authority.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)?;

    let clock = Clock::get()?;
    let vault = &ctx.accounts.vault;
    let vault_balance = vault.to_account_info().lamports();

    emit!(DepositMade {
        vault: vault.key(),
        amount,
        vault_balance,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "[steelhands] deposit amount={} balance={}",
        amount,
        vault_balance
    );
    Ok(())
}
