//! The orchestrator: owns the session and the wish list, and decides what to render.
//!
//! State only changes in response to a handler call ([`App::start`], [`App::connect`],
//! [`App::initialize`], [`App::submit`], [`App::refresh`]). Every remote failure is logged and
//! leaves the app in a renderable state.

use solana_sdk::pubkey::Pubkey;

use crate::{
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
    },
    remote::{
        AccountSnapshot,
        Fetched,
        WishListRpc,
    },
    views::submission_form::SubmissionForm,
    wallet::{
        WalletBridge,
        WalletError,
    },
};

pub const WALLET_NOT_FOUND_NOTICE: &str =
    "Solana wallet not found! Create one with `solana-keygen new` 👻";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppState {
    Disconnected,
    /// Connected, but the base account doesn't exist or couldn't be read.
    Uninitialized { session: Pubkey },
    Populated {
        session: Pubkey,
        wishes: Vec<String>,
    },
}

impl AppState {
    pub fn session(&self) -> Option<&Pubkey> {
        match self {
            Self::Disconnected => None,
            Self::Uninitialized { session } | Self::Populated { session, .. } => Some(session),
        }
    }
}

/// What the app should currently show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View<'a> {
    ConnectPrompt,
    InitializePrompt {
        session: &'a Pubkey,
    },
    WishList {
        session: &'a Pubkey,
        input: &'a str,
        wishes: &'a [String],
    },
}

pub struct App<W, R> {
    wallet: W,
    remote: R,
    state: AppState,
    form: SubmissionForm,
    /// The context slot of the newest snapshot applied so far.
    latest_slot: Option<u64>,
    notice: Option<String>,
}

impl<W: WalletBridge, R: WishListRpc> App<W, R> {
    pub fn new(wallet: W, remote: R) -> Self {
        Self {
            wallet,
            remote,
            state: AppState::Disconnected,
            form: SubmissionForm::new(),
            latest_slot: None,
            notice: None,
        }
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            AppState::Disconnected => View::ConnectPrompt,
            AppState::Uninitialized { session } => View::InitializePrompt { session },
            AppState::Populated { session, wishes } => View::WishList {
                session,
                input: self.form.input(),
                wishes,
            },
        }
    }

    /// A message the user has to acknowledge before continuing, if one was raised.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.form.set_input(value);
    }

    /// Silently restores a previously approved wallet session.
    pub async fn start(&mut self) {
        match self.wallet.restore_session().await {
            Ok(address) => {
                log_info("Connected with Public Key", address);
                self.on_session(address).await;
            }
            Err(error) => {
                if let WalletError::NotInstalled(_) = error {
                    self.notice = Some(WALLET_NOT_FOUND_NOTICE.to_string());
                }
                log_error("Couldn't restore the wallet session", error);
            }
        }
    }

    /// Interactively connects the wallet.
    pub async fn connect(&mut self) {
        match self.wallet.connect().await {
            Ok(address) => {
                log_info("Connected with Public Key", address);
                self.on_session(address).await;
            }
            Err(error) => log_error("Couldn't connect the wallet", error),
        }
    }

    pub async fn refresh(&mut self) {
        self.fetch(None).await;
    }

    /// Creates the base account and refreshes once the creation has landed.
    pub async fn initialize(&mut self) {
        if self.state.session().is_none() {
            log_warning("Initialize", "Connect a wallet first");
            return;
        }

        match self.remote.initialize(&self.wallet).await {
            Ok(confirmed) => self.fetch(confirmed.slot).await,
            Err(error) => log_error("Error creating BaseAccount account", format!("{error:#}")),
        }
    }

    /// Submits the form's input as a new wish, if it isn't blank.
    pub async fn submit(&mut self) {
        if let Some(wish) = self.form.submit() {
            self.append(&wish).await;
        }
    }

    /// Appends `wish` and refreshes once the append has landed.
    pub async fn append(&mut self, wish: &str) {
        if wish.is_empty() {
            return;
        }
        if self.state.session().is_none() {
            log_warning("Append", "Connect a wallet first");
            return;
        }

        match self.remote.append(&self.wallet, wish).await {
            Ok(confirmed) => self.fetch(confirmed.slot).await,
            Err(error) => log_error("Error sending your wish", format!("{error:#}")),
        }
    }

    /// Fetches only when the session address actually changes.
    async fn on_session(&mut self, address: Pubkey) {
        if self.state.session() == Some(&address) {
            return;
        }
        self.state = AppState::Uninitialized { session: address };
        self.fetch(None).await;
    }

    async fn fetch(&mut self, min_context_slot: Option<u64>) {
        if self.state.session().is_none() {
            return;
        }

        match self.remote.fetch(min_context_slot).await {
            Ok(Fetched::Snapshot(snapshot)) => self.apply(snapshot),
            Ok(Fetched::Behind { min_context_slot }) => log_warning(
                "Ignoring stale wish list",
                format!("the node hasn't reached slot {min_context_slot} yet"),
            ),
            Err(error) => {
                log_error("Error in fetching the wish list", format!("{error:#}"));
                self.set_wishes(None);
            }
        }
    }

    fn apply(&mut self, AccountSnapshot { slot, wishes }: AccountSnapshot) {
        if self.latest_slot.is_some_and(|latest| slot < latest) {
            log_warning(
                "Ignoring stale wish list",
                format!("read at slot {slot}, already showing slot {:?}", self.latest_slot),
            );
            return;
        }
        self.latest_slot = Some(slot);

        match &wishes {
            Some(wishes) => log_success("Fetched wishes", wishes.len()),
            None => log_info("Wish list", "The base account hasn't been initialized yet"),
        }
        self.set_wishes(wishes);
    }

    fn set_wishes(&mut self, wishes: Option<Vec<String>>) {
        let Some(session) = self.state.session().copied() else {
            return;
        };
        self.state = match wishes {
            Some(wishes) => AppState::Populated { session, wishes },
            None => AppState::Uninitialized { session },
        };
    }
}
