//! The wallet bridge: the only way the client obtains an address and signatures.

use std::{
    fmt,
    path::PathBuf,
};

use solana_sdk::{
    pubkey::Pubkey,
    signer::Signer,
};

pub mod keypair_wallet;

pub use keypair_wallet::KeypairWallet;

#[derive(Debug)]
pub enum WalletError {
    /// There's no wallet to talk to at all.
    NotInstalled(PathBuf),
    /// The wallet exists but hasn't approved this client before.
    NotTrusted(Pubkey),
    /// The user declined the connection request.
    Rejected(Pubkey),
    /// The wallet's key pair couldn't be loaded.
    Keypair(anyhow::Error),
    /// The wallet's record of approved connections couldn't be read or written.
    TrustStore(anyhow::Error),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled(path) => write!(f, "No wallet key pair found at {}", path.display()),
            Self::NotTrusted(address) => write!(f, "Wallet {address} hasn't approved this app yet"),
            Self::Rejected(address) => write!(f, "Connection to wallet {address} was rejected"),
            Self::Keypair(e) => write!(f, "Couldn't load the wallet key pair: {e:#}"),
            Self::TrustStore(e) => write!(f, "Couldn't access the wallet trust store: {e:#}"),
        }
    }
}

impl std::error::Error for WalletError {}

/// An injected wallet capability.
///
/// Besides signing, a wallet only has to hand out its address: either silently, for a session the
/// user approved earlier, or after asking the user.
#[allow(async_fn_in_trait)]
pub trait WalletBridge: Signer {
    /// Restores a previously approved session without prompting the user.
    async fn restore_session(&self) -> Result<Pubkey, WalletError>;

    /// Requests a new session, prompting the user if needed.
    async fn connect(&self) -> Result<Pubkey, WalletError>;
}
