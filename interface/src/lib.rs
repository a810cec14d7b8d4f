//! Client-side interface to the wish list program.
//!
//! Covers the program id, the fixed base account address, the `BaseAccount` layout and the two
//! instructions the program exposes.

pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    use solana_sdk::pubkey::Pubkey;

    /// `Ch5rSimJ1HJPF8KaJi7amTodFUAgmKxWGw4y9FiukTNc`
    pub const ID: Pubkey = Pubkey::new_from_array([
        173, 181, 70, 119, 144, 49, 20, 162, 68, 121, 72, 153, 73, 217, 237, 181, 184, 178, 38, 63,
        126, 194, 231, 239, 178, 213, 206, 18, 145, 89, 206, 165,
    ]);
}
