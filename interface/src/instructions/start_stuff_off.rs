use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    instructions::{
        WishListInstruction,
        INSTRUCTION_DISCRIMINATOR_SIZE,
    },
    state::SYSTEM_PROGRAM_ID,
};

/// Creates and initializes the base account that holds the wish list.
///
/// The base account is a fresh system account, so it must sign alongside the user funding it.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Base account
///  1. `[WRITE, SIGNER]` User account
///  2. `[READ]` System program
pub struct StartStuffOff {
    /// The base account to create.
    pub base_account: Pubkey,
    /// The user paying for the base account.
    pub user: Pubkey,
}

impl StartStuffOff {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.base_account, true),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> [u8; INSTRUCTION_DISCRIMINATOR_SIZE] {
        // Instruction data layout:
        //   - [0..8]: the instruction discriminator, 8 bytes
        WishListInstruction::StartStuffOff.discriminator()
    }

    pub fn create_instruction(&self, program_id: &Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program;

    #[test]
    fn start_stuff_off_layout() {
        let base_account = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let instruction = StartStuffOff { base_account, user }.create_instruction(&program::ID);

        assert_eq!(instruction.program_id, program::ID);
        assert_eq!(instruction.data, [126, 54, 85, 33, 226, 32, 195, 32]);
        assert_eq!(
            instruction.accounts,
            vec![
                AccountMeta::new(base_account, true),
                AccountMeta::new(user, true),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ]
        );
    }
}
