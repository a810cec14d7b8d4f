//! The remote account client: one read and two writes against the shared base account.

use anyhow::Context;
use solana_account::Account;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
};
use wishlist_interface::{
    error::WishListError,
    instructions::{
        AddWish,
        StartStuffOff,
    },
    state::base_account::BaseAccount,
};

use crate::{
    logs::log_success,
    transactions::{
        AccountRead,
        Confirmed,
        CustomRpcClient,
    },
};

/// The base account as observed at a specific slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSnapshot {
    /// The slot the read was served at.
    pub slot: u64,
    /// `None` when the account doesn't exist yet.
    pub wishes: Option<Vec<String>>,
}

/// The result of [`WishListRpc::fetch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fetched {
    Snapshot(AccountSnapshot),
    /// The node hadn't reached the requested slot, so there's nothing newer to show yet.
    Behind { min_context_slot: u64 },
}

/// The remote operations the orchestrator depends on.
///
/// Operations are independent and re-entrant; none of them retry.
#[allow(async_fn_in_trait)]
pub trait WishListRpc {
    /// Reads the base account. A node that hasn't reached `min_context_slot` yields
    /// [`Fetched::Behind`] instead of an older snapshot.
    async fn fetch(&self, min_context_slot: Option<u64>) -> anyhow::Result<Fetched>;

    /// Creates the base account, paid for and signed by `user`.
    async fn initialize(&self, user: &dyn Signer) -> anyhow::Result<Confirmed>;

    /// Appends `wish` to the base account, signed by `user`.
    async fn append(&self, user: &dyn Signer, wish: &str) -> anyhow::Result<Confirmed>;
}

pub struct RemoteAccountClient {
    rpc: CustomRpcClient,
    program_id: Pubkey,
    base_account: Keypair,
}

impl RemoteAccountClient {
    pub fn new(rpc: CustomRpcClient, program_id: Pubkey, base_account: Keypair) -> Self {
        Self {
            rpc,
            program_id,
            base_account,
        }
    }

    pub fn base_account(&self) -> Pubkey {
        self.base_account.pubkey()
    }
}

/// Decodes the wishes from a fetched base account, checking that the program owns it.
pub fn decode_wishes(program_id: &Pubkey, account: &Account) -> anyhow::Result<Vec<String>> {
    if account.owner != *program_id {
        return Err(WishListError::InvalidAccountOwner)
            .with_context(|| format!("Base account is owned by {}", account.owner));
    }
    let base_account = BaseAccount::try_from_account_data(&account.data)?;
    Ok(base_account.wishes())
}

impl WishListRpc for RemoteAccountClient {
    async fn fetch(&self, min_context_slot: Option<u64>) -> anyhow::Result<Fetched> {
        let (slot, account) = match self
            .rpc
            .get_account_at(&self.base_account(), min_context_slot)
            .await?
        {
            AccountRead::Served { slot, account } => (slot, account),
            AccountRead::Behind { min_context_slot } => {
                return Ok(Fetched::Behind { min_context_slot })
            }
        };

        let wishes = account
            .map(|account| decode_wishes(&self.program_id, &account))
            .transpose()?;

        Ok(Fetched::Snapshot(AccountSnapshot { slot, wishes }))
    }

    async fn initialize(&self, user: &dyn Signer) -> anyhow::Result<Confirmed> {
        let instruction = StartStuffOff {
            base_account: self.base_account(),
            user: user.try_pubkey()?,
        }
        .create_instruction(&self.program_id);

        let confirmed = self
            .rpc
            .send_and_confirm_txn(
                user,
                &[&self.base_account as &dyn Signer],
                &[instruction],
                &self.program_id,
            )
            .await?;
        log_success("Created a new BaseAccount w/ address", self.base_account());

        Ok(confirmed)
    }

    async fn append(&self, user: &dyn Signer, wish: &str) -> anyhow::Result<Confirmed> {
        let instruction = AddWish {
            base_account: self.base_account(),
            user: user.try_pubkey()?,
            wish: wish.to_string(),
        }
        .create_instruction(&self.program_id);

        self.rpc
            .send_and_confirm_txn(user, &[], &[instruction], &self.program_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use wishlist_interface::{
        program,
        state::base_account::WishItem,
    };

    use super::*;

    fn account(owner: Pubkey, data: Vec<u8>) -> Account {
        Account {
            lamports: 1_000_000,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn decodes_program_owned_accounts() -> anyhow::Result<()> {
        let user = Pubkey::new_unique();
        let data = BaseAccount {
            total_wishes: 2,
            wish_list: vec![WishItem::new("skis", &user), WishItem::new("skis", &user)],
        }
        .pack()?;

        assert_eq!(
            decode_wishes(&program::ID, &account(program::ID, data))?,
            vec!["skis", "skis"]
        );
        Ok(())
    }

    #[test]
    fn rejects_foreign_accounts() -> anyhow::Result<()> {
        let data = BaseAccount::default().pack()?;
        let err = decode_wishes(&program::ID, &account(Pubkey::new_unique(), data))
            .expect_err("Foreign owner should be rejected");

        assert_eq!(
            err.downcast_ref::<WishListError>(),
            Some(&WishListError::InvalidAccountOwner)
        );
        Ok(())
    }
}
