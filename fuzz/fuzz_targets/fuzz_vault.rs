#![no_main]

use libfuzzer_sys::fuzz_target;
use steelhands::state::Vault;

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }

    let unlock_time = i64::from_le_bytes(data[0..8].try_into().unwrap_or([0; 8]));
    let unlock_amount = u64::from_le_bytes(data[8..16].try_into().unwrap_or([0; 8]));
    let balance = u64::from_le_bytes(data[16..24].try_into().unwrap_or([0; 8]));
    let now = i64::from_le_bytes(data[24..32].try_into().unwrap_or([0; 8]));
    let active = data[32] & 1 == 1;

    let vault = Vault {
        unlock_time,
        unlock_amount,
        active,
        ..Default::default()
    };

    let unlocked = vault.unlock_reached(now, balance);

    // A vault with no conditions never reports unlocked.
    if unlock_time == 0 && unlock_amount == 0 {
        assert!(!vault.has_condition());
        assert!(!unlocked);
    }

    // The amount condition is strict: balance == unlock_amount stays locked.
    if unlock_time == 0 && balance <= unlock_amount {
        assert!(!unlocked);
    }

    // Past the deadline the time condition always unlocks.
    if unlock_time != 0 && now >= unlock_time {
        assert!(unlocked);
    }

    // Withdraw-path arithmetic must not panic on any input.
    let _ = balance.checked_sub(unlock_amount);
    let _ = balance.saturating_sub(unlock_amount);
});
