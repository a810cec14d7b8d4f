use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::instructions::{
    WishListInstruction,
    INSTRUCTION_DISCRIMINATOR_SIZE,
};

/// Appends a wish to the base account's wish list.
///
/// ### Accounts
///  0. `[WRITE]` Base account
///  1. `[SIGNER]` User account
pub struct AddWish {
    /// The initialized base account.
    pub base_account: Pubkey,
    /// The user adding the wish.
    pub user: Pubkey,
    /// The wish text, stored verbatim.
    pub wish: String,
}

impl AddWish {
    pub fn create_account_metas(&self) -> [AccountMeta; 2] {
        [
            AccountMeta::new(self.base_account, false),
            AccountMeta::new_readonly(self.user, true),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        // Instruction data layout:
        //   - [0..8]: the instruction discriminator, 8 bytes
        //   - [8..12]: the wish's byte length as a little-endian u32, 4 bytes
        //   - [12..]: the wish's UTF-8 bytes
        let wish = self.wish.as_bytes();
        let mut data = Vec::with_capacity(INSTRUCTION_DISCRIMINATOR_SIZE + 4 + wish.len());

        data.extend_from_slice(&WishListInstruction::AddWish.discriminator());
        data.extend_from_slice(&(wish.len() as u32).to_le_bytes());
        data.extend_from_slice(wish);

        data
    }

    pub fn create_instruction(&self, program_id: &Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }
}
