/// Seed prefix for the vault PDA, combined with the authority key.
pub const VAULT_SEED: &[u8] = b"vault";

pub const VAULT_SPACE: usize = 8 // discriminator
    + 32                         // authority
    + 8 + 8                      // unlock_time, unlock_amount
    + 1 + 1; // active, bump
