//! A [`WalletBridge`] backed by a Solana CLI key pair file.
//!
//! The wallet remembers which addresses the user approved in a small JSON trust store, which is what
//! lets [`WalletBridge::restore_session`] succeed without prompting on the next start.

use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::PathBuf,
};

use anyhow::Context;
use serde::{
    Deserialize,
    Serialize,
};
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

use crate::{
    keypairs::read_keypair_file,
    logs::log_success,
    wallet::{
        WalletBridge,
        WalletError,
    },
};

/// Asks the user whether the given address may connect.
pub type Approve = Box<dyn Fn(&Pubkey) -> bool>;

#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
struct TrustedSessions {
    trusted: BTreeSet<String>,
}

pub struct TrustStore {
    path: PathBuf,
}

impl TrustStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> anyhow::Result<TrustedSessions> {
        if !self.path.exists() {
            return Ok(TrustedSessions::default());
        }
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Couldn't read {}", self.path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("Invalid {}", self.path.display()))
    }

    pub fn is_trusted(&self, address: &Pubkey) -> anyhow::Result<bool> {
        Ok(self.load()?.trusted.contains(&address.to_string()))
    }

    pub fn trust(&self, address: &Pubkey) -> anyhow::Result<()> {
        let mut sessions = self.load()?;
        sessions.trusted.insert(address.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Couldn't create {}", parent.display()))?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&sessions)?)
            .with_context(|| format!("Couldn't write {}", self.path.display()))
    }
}

pub struct KeypairWallet {
    keypair_path: PathBuf,
    trust_store: TrustStore,
    approve: Approve,
    session: OnceCell<Keypair>,
}

impl KeypairWallet {
    pub fn new(keypair_path: impl Into<PathBuf>, trust_store: TrustStore, approve: Approve) -> Self {
        Self {
            keypair_path: keypair_path.into(),
            trust_store,
            approve,
            session: OnceCell::new(),
        }
    }

    /// `~/.config/solana/id.json`, the Solana CLI's default key pair.
    pub fn default_keypair_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/solana/id.json"))
    }

    /// `wishlist/trusted.json` under the platform's config directory.
    pub fn default_trust_store_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("wishlist/trusted.json"))
    }

    fn load_keypair(&self) -> Result<Keypair, WalletError> {
        if !self.keypair_path.exists() {
            return Err(WalletError::NotInstalled(self.keypair_path.clone()));
        }
        read_keypair_file(&self.keypair_path).map_err(WalletError::Keypair)
    }

    /// The first established session sticks for the lifetime of the wallet.
    fn establish(&self, keypair: Keypair) -> Pubkey {
        self.session.get_or_init(|| keypair).pubkey()
    }

    fn connected(&self) -> Result<&Keypair, SignerError> {
        self.session
            .get()
            .ok_or_else(|| SignerError::Connection("Wallet isn't connected".into()))
    }
}

impl WalletBridge for KeypairWallet {
    async fn restore_session(&self) -> Result<Pubkey, WalletError> {
        let keypair = self.load_keypair()?;
        let address = keypair.pubkey();
        let trusted = self
            .trust_store
            .is_trusted(&address)
            .map_err(WalletError::TrustStore)?;

        if !trusted {
            return Err(WalletError::NotTrusted(address));
        }
        Ok(self.establish(keypair))
    }

    async fn connect(&self) -> Result<Pubkey, WalletError> {
        let keypair = self.load_keypair()?;
        let address = keypair.pubkey();
        let trusted = self
            .trust_store
            .is_trusted(&address)
            .map_err(WalletError::TrustStore)?;

        if !trusted {
            if !(self.approve)(&address) {
                return Err(WalletError::Rejected(address));
            }
            self.trust_store
                .trust(&address)
                .map_err(WalletError::TrustStore)?;
            log_success("Approved connection for", address);
        }
        Ok(self.establish(keypair))
    }
}

impl Signer for KeypairWallet {
    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        self.connected()?.try_pubkey()
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.connected()?.try_sign_message(message)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_resolve_without_home_set() {
        let home = std::env::var_os("HOME");
        std::env::remove_var("HOME");
        let keypair_path = KeypairWallet::default_keypair_path();
        let trust_store_path = KeypairWallet::default_trust_store_path();
        if let Some(home) = home {
            std::env::set_var("HOME", home);
        }

        let keypair_path = keypair_path.expect("Home directory should resolve from the user database");
        assert!(keypair_path.ends_with(".config/solana/id.json"));
        let trust_store_path =
            trust_store_path.expect("Config directory should resolve from the user database");
        assert!(trust_store_path.ends_with("wishlist/trusted.json"));
    }
}
