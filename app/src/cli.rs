use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use client::{
    cluster::Cluster,
    keypairs::{
        base_account_keypair,
        read_keypair_file,
    },
    wallet::KeypairWallet,
};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
};
use wishlist_interface::program;

/// Christmas wish list: connect a wallet, initialize the shared list and add wishes to it.
#[derive(Parser, Debug)]
#[command(name = "wishlist", version)]
pub struct Cli {
    /// Cluster moniker (devnet, testnet, mainnet-beta, localhost) or an RPC URL.
    #[arg(short = 'u', long, default_value_t = Cluster::Devnet)]
    pub url: Cluster,

    /// Wallet key pair file. Defaults to the Solana CLI key pair.
    #[arg(short, long)]
    pub keypair: Option<PathBuf>,

    /// File recording which wallets approved this app.
    #[arg(long)]
    pub trust_store: Option<PathBuf>,

    /// The deployed wish list program.
    #[arg(long, default_value_t = program::ID)]
    pub program_id: Pubkey,

    /// Key pair file of the shared base account. Defaults to the embedded key pair.
    #[arg(long)]
    pub base_account: Option<PathBuf>,

    #[arg(long, default_value_t = Commitment::Processed)]
    pub commitment: Commitment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl Cli {
    pub fn keypair_path(&self) -> anyhow::Result<PathBuf> {
        self.keypair
            .clone()
            .or_else(KeypairWallet::default_keypair_path)
            .context("No --keypair given and $HOME isn't set")
    }

    pub fn trust_store_path(&self) -> anyhow::Result<PathBuf> {
        self.trust_store
            .clone()
            .or_else(KeypairWallet::default_trust_store_path)
            .context("No --trust-store given and $HOME isn't set")
    }

    pub fn base_account_keypair(&self) -> anyhow::Result<Keypair> {
        match &self.base_account {
            Some(path) => read_keypair_file(path),
            None => base_account_keypair(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_build_configuration() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["wishlist"])?;
        assert_eq!(cli.url, Cluster::Devnet);
        assert_eq!(cli.program_id, program::ID);
        assert_eq!(cli.commitment, Commitment::Processed);
        assert_eq!(CommitmentConfig::from(cli.commitment), CommitmentConfig::processed());
        Ok(())
    }

    #[test]
    fn overrides() -> anyhow::Result<()> {
        let program_id = Pubkey::new_unique();
        let cli = Cli::try_parse_from([
            "wishlist",
            "-u",
            "localhost",
            "--keypair",
            "/tmp/me.json",
            "--program-id",
            &program_id.to_string(),
            "--commitment",
            "finalized",
        ])?;
        assert_eq!(cli.url, Cluster::Localhost);
        assert_eq!(cli.keypair_path()?, PathBuf::from("/tmp/me.json"));
        assert_eq!(cli.program_id, program_id);
        assert_eq!(cli.commitment, Commitment::Finalized);
        assert!(Cli::try_parse_from(["wishlist", "--commitment", "eventually"]).is_err());
        Ok(())
    }
}
