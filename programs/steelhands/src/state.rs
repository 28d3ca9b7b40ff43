use anchor_lang::prelude::*;

use crate::errors::SteelError;

/// Central vault state account (PDA, seeds = [b"vault", authority])
#[account]
#[derive(Default)]
pub struct Vault {
    /// Vault owner — the only signer allowed to operate on the vault
    pub authority: Pubkey,
    /// Unlock time as a unix timestamp (0 = no time condition)
    pub unlock_time: i64,
    /// Unlock amount in lamports (0 = no amount condition)
    pub unlock_amount: u64,
    /// Whether the vault has been armed
    pub active: bool,
    /// Bump stored to avoid recomputing on every instruction
    pub bump: u8,
}

impl Vault {
    /// True when at least one unlock condition is configured.
    pub fn has_condition(&self) -> bool {
        self.unlock_time != 0 || self.unlock_amount != 0
    }

    /// An armed vault unlocks once its deadline passes or its balance climbs
    /// strictly past the configured amount. `balance` includes rent.
    pub fn unlock_reached(&self, now: i64, balance: u64) -> bool {
        if self.unlock_time != 0 && now >= self.unlock_time {
            return true;
        }
        self.unlock_amount != 0 && self.unlock_amount < balance
    }

    /// Reset and re-apply the unlock conditions. A condition that is not
    /// provided is cleared. `now` rejects deadlines already in the past.
    pub fn set_conditions(
        &mut self,
        now: i64,
        unlock_time: Option<i64>,
        unlock_amount: Option<u64>,
    ) -> Result<()> {
        self.unlock_time = 0;
        self.unlock_amount = 0;

        if let Some(unlock_time) = unlock_time {
            require!(unlock_time >= now, SteelError::InvalidUnlockTime);
            self.unlock_time = unlock_time;
        }

        if let Some(unlock_amount) = unlock_amount {
            require!(unlock_amount > 0, SteelError::InvalidUnlockAmount);
            self.unlock_amount = unlock_amount;
        }

        Ok(())
    }
}
