use solana_sdk::pubkey::Pubkey;

pub mod base_account;

/// The size of the Anchor account discriminator prefixed to all program-owned account data.
pub const ACCOUNT_DISCRIMINATOR_SIZE: usize = 8;

pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);
