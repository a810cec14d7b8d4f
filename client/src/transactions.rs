//! RPC access: account reads pinned to a minimum slot and single-shot transaction submission.

use anyhow::Context;
use solana_client::{
    client_error::ClientErrorKind,
    nonblocking::rpc_client::RpcClient,
    rpc_config::{
        RpcAccountInfoConfig,
        UiAccountEncoding,
    },
    rpc_custom_error::JSON_RPC_SERVER_ERROR_MIN_CONTEXT_SLOT_NOT_REACHED,
    rpc_request::RpcError,
};
use solana_account::Account;
use solana_commitment_config::CommitmentConfig;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    signature::Signature,
    signer::Signer,
    transaction::Transaction,
};

use crate::{
    cluster::Cluster,
    fmt_kv,
    logs::{
        log_error,
        log_info,
        log_success,
        LogColor,
    },
    pretty::instruction_error::PrettyInstructionError,
};

/// Where a confirmed transaction landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Confirmed {
    pub signature: Signature,
    /// The slot the transaction was processed in, when the node still reports it.
    pub slot: Option<u64>,
}

/// The outcome of an account read pinned to a minimum slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountRead {
    Served {
        /// The slot the node served the read at.
        slot: u64,
        account: Option<Account>,
    },
    /// The node hasn't processed `min_context_slot` yet and refused the read.
    Behind { min_context_slot: u64 },
}

/// Whether the node rejected a read because it hasn't reached the requested minimum slot.
pub fn min_context_slot_not_reached(kind: &ClientErrorKind) -> bool {
    matches!(
        kind,
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, .. })
            if *code == JSON_RPC_SERVER_ERROR_MIN_CONTEXT_SLOT_NOT_REACHED
    )
}

pub struct SendTransactionConfig {
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            debug_logs: Some(true),
        }
    }
}

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl CustomRpcClient {
    pub fn new(
        cluster: &Cluster,
        commitment: CommitmentConfig,
        config: Option<SendTransactionConfig>,
    ) -> Self {
        Self {
            client: RpcClient::new_with_commitment(cluster.url().to_string(), commitment),
            config: config.unwrap_or_default(),
        }
    }

    /// Fetches an account along with the slot the node served it at.
    ///
    /// With `min_context_slot` set, a node that hasn't reached that slot answers right away with an
    /// error. That error is returned as [`AccountRead::Behind`] rather than as a failure.
    pub async fn get_account_at(
        &self,
        address: &Pubkey,
        min_context_slot: Option<u64>,
    ) -> anyhow::Result<AccountRead> {
        let config = RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: None,
            commitment: Some(self.client.commitment()),
            min_context_slot,
        };

        match self.client.get_account_with_config(address, config).await {
            Ok(response) => Ok(AccountRead::Served {
                slot: response.context.slot,
                account: response.value,
            }),
            Err(error) => match min_context_slot {
                Some(min_context_slot) if min_context_slot_not_reached(error.kind()) => {
                    Ok(AccountRead::Behind { min_context_slot })
                }
                _ => Err(error).with_context(|| format!("Couldn't fetch account {address}")),
            },
        }
    }

    /// Signs with `payer` first, then `signers`, and sends the transaction once.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &dyn Signer,
        signers: &[&dyn Signer],
        instructions: &[Instruction],
        program_id: &Pubkey,
    ) -> anyhow::Result<Confirmed> {
        let payer_address = payer.try_pubkey().context("Payer isn't available to sign")?;
        let blockhash = self
            .client
            .get_latest_blockhash()
            .await
            .context("Couldn't fetch the latest blockhash")?;

        let msg = Message::new(instructions, Some(&payer_address));
        let mut tx = Transaction::new_unsigned(msg);
        let all_signers = std::iter::once(payer)
            .chain(signers.iter().copied())
            .collect::<Vec<_>>();
        tx.try_sign(&all_signers, blockhash)
            .context("Couldn't sign the transaction")?;

        match self.client.send_and_confirm_transaction(&tx).await {
            Ok(signature) => {
                let slot = self.signature_slot(&signature).await;
                if matches!(self.config.debug_logs, Some(true)) {
                    let sender_info = fmt_kv!("sender", payer_address, LogColor::Gray);
                    log_success("Signature", format!("{signature}\n{sender_info}"));
                }
                Ok(Confirmed { signature, slot })
            }
            Err(error) => {
                if let Some(pretty) = PrettyInstructionError::new(&error, instructions, program_id)
                {
                    log_error("Transaction failed", pretty);
                }
                log_info("Payer", payer_address);

                Err(error).context("Failed transaction submission")
            }
        }
    }

    async fn signature_slot(&self, signature: &Signature) -> Option<u64> {
        match self.client.get_signature_statuses(&[*signature]).await {
            Ok(response) => response
                .value
                .into_iter()
                .next()
                .flatten()
                .map(|status| status.slot),
            Err(error) => {
                log_error("Couldn't fetch signature status", error);
                None
            }
        }
    }
}
