use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub unlock_time: i64,
    pub unlock_amount: u64,
}

#[event]
pub struct VaultUpdated {
    pub vault: Pubkey,
    pub unlock_time: i64,
    pub unlock_amount: u64,
}

#[event]
pub struct VaultActivated {
    pub vault: Pubkey,
    pub unlock_time: i64,
    pub unlock_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct DepositMade {
    pub vault: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawMade {
    pub vault: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultClosed {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub withdraw_address: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
