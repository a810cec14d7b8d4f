//! In-memory stand-ins for the wallet and the remote program, for driving [`crate::app::App`]
//! without a validator.
//!
//! The mock program stores the base account as real account data, so every fetch goes through the
//! same decoding as the RPC-backed client.

use std::cell::{
    Cell,
    RefCell,
};

use solana_account::Account;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
    signer::{
        Signer,
        SignerError,
    },
};
use wishlist_interface::{
    error::ProgramErrorCode,
    program,
    state::base_account::{
        BaseAccount,
        WishItem,
    },
};

use crate::{
    remote::{
        decode_wishes,
        AccountSnapshot,
        Fetched,
        WishListRpc,
    },
    transactions::Confirmed,
    wallet::{
        WalletBridge,
        WalletError,
    },
};

pub struct MockWallet {
    keypair: Keypair,
    pub installed: bool,
    pub trusted: Cell<bool>,
    pub approves: bool,
    pub connect_calls: Cell<usize>,
}

impl MockWallet {
    /// An installed wallet that approves connection requests but hasn't approved one yet.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::new(),
            installed: true,
            trusted: Cell::new(false),
            approves: true,
            connect_calls: Cell::new(0),
        }
    }

    pub fn trusted() -> Self {
        let wallet = Self::new();
        wallet.trusted.set(true);
        wallet
    }

    pub fn not_installed() -> Self {
        Self {
            installed: false,
            ..Self::new()
        }
    }

    pub fn rejecting() -> Self {
        Self {
            approves: false,
            ..Self::new()
        }
    }

    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletBridge for MockWallet {
    async fn restore_session(&self) -> Result<Pubkey, WalletError> {
        if !self.installed {
            return Err(WalletError::NotInstalled("mock".into()));
        }
        match self.trusted.get() {
            true => Ok(self.address()),
            false => Err(WalletError::NotTrusted(self.address())),
        }
    }

    async fn connect(&self) -> Result<Pubkey, WalletError> {
        self.connect_calls.set(self.connect_calls.get() + 1);
        if !self.installed {
            return Err(WalletError::NotInstalled("mock".into()));
        }
        if !self.trusted.get() && !self.approves {
            return Err(WalletError::Rejected(self.address()));
        }
        self.trusted.set(true);
        Ok(self.address())
    }
}

impl Signer for MockWallet {
    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        self.keypair.try_pubkey()
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.keypair.try_sign_message(message)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// A mock wish list program holding a single base account.
///
/// Every successful write advances the slot by one.
#[derive(Default)]
pub struct MockRemote {
    account: RefCell<Option<Account>>,
    slot: Cell<u64>,
    pub fail_fetches: Cell<bool>,
    pub fail_writes: Cell<bool>,
    /// Serve the next fetch as if read at this slot.
    pub stale_read_slot: Cell<Option<u64>>,
    /// Refuse pinned fetches like a node that hasn't reached the pinned slot.
    pub lagging: Cell<bool>,
    pub fetches: RefCell<Vec<Option<u64>>>,
    pub appends: RefCell<Vec<String>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// A remote whose base account already holds `wishes`.
    pub fn with_wishes(wishes: &[&str]) -> anyhow::Result<Self> {
        let remote = Self::new();
        let user = Pubkey::new_unique();
        remote.store(&BaseAccount {
            total_wishes: wishes.len() as u64,
            wish_list: wishes.iter().map(|wish| WishItem::new(*wish, &user)).collect(),
        })?;
        Ok(remote)
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.borrow().len()
    }

    pub fn slot(&self) -> u64 {
        self.slot.get()
    }

    fn store(&self, base_account: &BaseAccount) -> anyhow::Result<()> {
        let mut data = base_account.pack()?;
        // Leave unused space behind the wish list the way a fixed-size allocation would.
        data.resize(data.len() + 64, 0);
        *self.account.borrow_mut() = Some(Account {
            lamports: 1_000_000,
            data,
            owner: program::ID,
            executable: false,
            rent_epoch: 0,
        });
        Ok(())
    }

    fn load(&self) -> anyhow::Result<Option<BaseAccount>> {
        match self.account.borrow().as_ref() {
            Some(account) => Ok(Some(BaseAccount::try_from_account_data(&account.data)?)),
            None => Ok(None),
        }
    }

    fn land(&self) -> Confirmed {
        self.slot.set(self.slot.get() + 1);
        Confirmed {
            signature: Signature::default(),
            slot: Some(self.slot.get()),
        }
    }
}

impl WishListRpc for MockRemote {
    async fn fetch(&self, min_context_slot: Option<u64>) -> anyhow::Result<Fetched> {
        self.fetches.borrow_mut().push(min_context_slot);
        if self.fail_fetches.get() {
            anyhow::bail!("Mock fetch failure");
        }
        if let Some(min_context_slot) = min_context_slot.filter(|_| self.lagging.get()) {
            return Ok(Fetched::Behind { min_context_slot });
        }

        let slot = self.stale_read_slot.take().unwrap_or(self.slot.get());
        let wishes = self
            .account
            .borrow()
            .as_ref()
            .map(|account| decode_wishes(&program::ID, account))
            .transpose()?;

        Ok(Fetched::Snapshot(AccountSnapshot { slot, wishes }))
    }

    async fn initialize(&self, user: &dyn Signer) -> anyhow::Result<Confirmed> {
        user.try_pubkey()?;
        if self.fail_writes.get() {
            anyhow::bail!("Mock write failure");
        }
        if self.account.borrow().is_some() {
            anyhow::bail!(ProgramErrorCode::AccountAlreadyInUse);
        }

        self.store(&BaseAccount::default())?;
        Ok(self.land())
    }

    async fn append(&self, user: &dyn Signer, wish: &str) -> anyhow::Result<Confirmed> {
        let user = user.try_pubkey()?;
        self.appends.borrow_mut().push(wish.to_string());
        if self.fail_writes.get() {
            anyhow::bail!("Mock write failure");
        }

        let Some(mut base_account) = self.load()? else {
            anyhow::bail!(ProgramErrorCode::AccountNotInitialized);
        };
        base_account.total_wishes += 1;
        base_account.wish_list.push(WishItem::new(wish, &user));
        self.store(&base_account)?;

        Ok(self.land())
    }
}
