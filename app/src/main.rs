use clap::Parser;
use client::{
    app::App,
    print_kv,
    LogColor,
    remote::RemoteAccountClient,
    transactions::CustomRpcClient,
    wallet::{
        keypair_wallet::TrustStore,
        KeypairWallet,
    },
};
use solana_sdk::signer::Signer;

use crate::cli::Cli;

mod cli;
mod terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let wallet = KeypairWallet::new(
        cli.keypair_path()?,
        TrustStore::new(cli.trust_store_path()?),
        Box::new(terminal::approve_connection),
    );
    let base_account = cli.base_account_keypair()?;

    print_kv!("Cluster", cli.url.url());
    print_kv!("Program", cli.program_id);
    print_kv!("Base account", base_account.pubkey());
    print_kv!("Commitment", cli.commitment, LogColor::Gray);

    let rpc = CustomRpcClient::new(&cli.url, cli.commitment.into(), None);
    let remote = RemoteAccountClient::new(rpc, cli.program_id, base_account);
    let mut app = App::new(wallet, remote);

    terminal::run(&mut app).await
}
