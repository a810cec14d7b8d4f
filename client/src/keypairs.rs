//! Key pair loading for the user's wallet and the shared base account.
//!
//! Two JSON encodings are accepted: the Solana CLI's plain array of 64 bytes, and the object dumped
//! by `@solana/web3.js` (`{"_keypair": {"secretKey": {"0": .., "1": .., ..}}}`).

use std::{
    collections::BTreeMap,
    path::Path,
};

use anyhow::Context;
use serde::Deserialize;
use solana_sdk::signature::Keypair;

const BASE_ACCOUNT_KEYPAIR_JSON: &str = include_str!("../assets/base_account.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum KeypairJson {
    Bytes(Vec<u8>),
    Web3 {
        #[serde(rename = "_keypair")]
        keypair: Web3Keypair,
    },
}

#[derive(Deserialize)]
struct Web3Keypair {
    #[serde(rename = "secretKey")]
    secret_key: BTreeMap<String, u8>,
}

impl Web3Keypair {
    /// Orders the secret key bytes by their numeric object keys.
    fn into_bytes(self) -> anyhow::Result<Vec<u8>> {
        let mut indexed = self
            .secret_key
            .into_iter()
            .map(|(index, byte)| {
                index
                    .parse::<usize>()
                    .map(|index| (index, byte))
                    .with_context(|| format!("Invalid secret key index {index:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        indexed.sort_unstable_by_key(|(index, _)| *index);

        if indexed.iter().enumerate().any(|(i, (index, _))| i != *index) {
            anyhow::bail!("Secret key indices aren't contiguous");
        }

        Ok(indexed.into_iter().map(|(_, byte)| byte).collect())
    }
}

pub fn keypair_from_json(json: &str) -> anyhow::Result<Keypair> {
    let bytes = match serde_json::from_str::<KeypairJson>(json).context("Invalid key pair JSON")? {
        KeypairJson::Bytes(bytes) => bytes,
        KeypairJson::Web3 { keypair } => keypair.into_bytes()?,
    };

    Keypair::try_from(bytes.as_slice()).map_err(|e| anyhow::anyhow!("Invalid key pair bytes: {e}"))
}

pub fn read_keypair_file(path: &Path) -> anyhow::Result<Keypair> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read key pair file {}", path.display()))?;
    keypair_from_json(&json).with_context(|| format!("Couldn't load {}", path.display()))
}

/// The key pair embedded at build time that addresses the shared wish list account.
pub fn base_account_keypair() -> anyhow::Result<Keypair> {
    keypair_from_json(BASE_ACCOUNT_KEYPAIR_JSON).context("Embedded base account key pair is invalid")
}
