//! Network endpoint selection.

use std::{
    fmt,
    str::FromStr,
};

/// A well-known Solana cluster, or an arbitrary RPC endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localhost,
    Custom(String),
}

impl Cluster {
    pub fn url(&self) -> &str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Self::Localhost => "http://localhost:8899",
            Self::Custom(url) => url,
        }
    }
}

impl FromStr for Cluster {
    type Err = anyhow::Error;

    /// Accepts the same monikers as the Solana CLI's `--url` flag, or a full `http(s)` URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" | "devnet" => Ok(Self::Devnet),
            "t" | "testnet" => Ok(Self::Testnet),
            "m" | "mainnet-beta" => Ok(Self::MainnetBeta),
            "l" | "localhost" => Ok(Self::Localhost),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Self::Custom(url.to_string()))
            }
            other => anyhow::bail!("Unknown cluster moniker or URL: {other}"),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Devnet => f.write_str("devnet"),
            Self::Testnet => f.write_str("testnet"),
            Self::MainnetBeta => f.write_str("mainnet-beta"),
            Self::Localhost => f.write_str("localhost"),
            Self::Custom(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monikers_and_urls() -> anyhow::Result<()> {
        assert_eq!(Cluster::default().url(), "https://api.devnet.solana.com");
        assert_eq!("l".parse::<Cluster>()?, Cluster::Localhost);
        assert_eq!("mainnet-beta".parse::<Cluster>()?, Cluster::MainnetBeta);
        assert_eq!(
            "http://127.0.0.1:8899".parse::<Cluster>()?.url(),
            "http://127.0.0.1:8899"
        );
        assert!("moon".parse::<Cluster>().is_err());
        Ok(())
    }

    #[test]
    fn display_round_trips() -> anyhow::Result<()> {
        for cluster in [
            Cluster::Devnet,
            Cluster::Testnet,
            Cluster::MainnetBeta,
            Cluster::Localhost,
        ] {
            assert_eq!(cluster.to_string().parse::<Cluster>()?, cluster);
        }
        Ok(())
    }
}
