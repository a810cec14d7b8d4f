//! Interprets RPC and on-chain errors into readable wish list / Solana instruction error messages.

use std::fmt::Display;

use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError as SolanaInstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_error::TransactionError;
use wishlist_interface::{
    error::ProgramErrorCode,
    instructions::WishListInstruction,
};

use crate::{
    fmt_kv,
    LogColor,
};

enum InstructionError {
    Solana {
        instruction_index: u8,
        error: SolanaInstructionError,
    },
    WishList {
        instruction: Option<WishListInstruction>,
        error: ProgramErrorCode,
    },
}

pub struct PrettyInstructionError(InstructionError);

impl PrettyInstructionError {
    /// Extracts the failing instruction from a preflight failure, if the error is one.
    pub fn new(error: &ClientError, instructions: &[Instruction], program_id: &Pubkey) -> Option<Self> {
        let ClientErrorKind::RpcError(RpcResponseError {
            data:
                RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                    err: Some(ui_err),
                    ..
                }),
            ..
        }) = error.kind()
        else {
            return None;
        };

        let transaction_error: TransactionError = ui_err.clone().into();
        let TransactionError::InstructionError(instruction_index, instruction_error) =
            transaction_error
        else {
            return None;
        };

        let instruction = instructions.get(instruction_index as usize)?;
        let res = match instruction_error {
            SolanaInstructionError::Custom(code) if instruction.program_id == *program_id => {
                match ProgramErrorCode::from_repr(code) {
                    Some(error) => Self(InstructionError::WishList {
                        instruction: WishListInstruction::try_from_instruction_data(
                            &instruction.data,
                        ),
                        error,
                    }),
                    None => Self(InstructionError::Solana {
                        instruction_index,
                        error: SolanaInstructionError::Custom(code),
                    }),
                }
            }
            error => Self(InstructionError::Solana {
                instruction_index,
                error,
            }),
        };

        Some(res)
    }
}

impl Display for PrettyInstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (error_type, instruction, error) = match &self.0 {
            InstructionError::Solana {
                instruction_index,
                error,
            } => (
                "SolanaInstructionError",
                format!("instruction #{instruction_index}"),
                error.to_string(),
            ),
            InstructionError::WishList { instruction, error } => (
                "WishListError",
                instruction.map_or("unknown instruction".into(), |i| i.to_string()),
                format!("{error} ({})", *error as u32),
            ),
        };

        let message = format!("({instruction}, {error})");
        let error_message = fmt_kv!(error_type, message, LogColor::Error);
        write!(f, "{error_message}")
    }
}
