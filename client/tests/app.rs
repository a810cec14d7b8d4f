use client::{
    app::{
        App,
        AppState,
        View,
        WALLET_NOT_FOUND_NOTICE,
    },
    mock_helpers::{
        MockRemote,
        MockWallet,
    },
};

async fn started(wallet: MockWallet, remote: MockRemote) -> App<MockWallet, MockRemote> {
    let mut app = App::new(wallet, remote);
    app.start().await;
    app
}

fn wishes_of(app: &App<MockWallet, MockRemote>) -> Option<Vec<String>> {
    match app.state() {
        AppState::Populated { wishes, .. } => Some(wishes.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn restores_trusted_session_and_fetches_once() -> anyhow::Result<()> {
    let app = started(MockWallet::trusted(), MockRemote::with_wishes(&["a sled"])?).await;

    assert_eq!(app.remote().fetch_count(), 1);
    assert_eq!(app.state().session(), Some(&app.wallet().address()));
    assert_eq!(wishes_of(&app), Some(vec!["a sled".to_string()]));
    Ok(())
}

#[tokio::test]
async fn missing_wallet_raises_a_notice_once() {
    let mut app = started(MockWallet::not_installed(), MockRemote::new()).await;

    assert_eq!(app.view(), View::ConnectPrompt);
    assert_eq!(app.remote().fetch_count(), 0);
    assert_eq!(app.take_notice().as_deref(), Some(WALLET_NOT_FOUND_NOTICE));
    assert_eq!(app.take_notice(), None);
}

#[tokio::test]
async fn untrusted_wallet_stays_disconnected_quietly() {
    let mut app = started(MockWallet::new(), MockRemote::new()).await;

    assert_eq!(app.view(), View::ConnectPrompt);
    assert_eq!(app.remote().fetch_count(), 0);
    assert_eq!(app.take_notice(), None);
}

#[tokio::test]
async fn connect_triggers_exactly_one_fetch() -> anyhow::Result<()> {
    let mut app = started(MockWallet::new(), MockRemote::with_wishes(&[])?).await;
    assert_eq!(app.remote().fetch_count(), 0);

    app.connect().await;
    assert_eq!(app.wallet().connect_calls.get(), 1);
    assert_eq!(app.remote().fetch_count(), 1);
    assert_eq!(wishes_of(&app), Some(vec![]));

    // Reconnecting with the same address doesn't refetch.
    app.connect().await;
    assert_eq!(app.remote().fetch_count(), 1);
    Ok(())
}

#[tokio::test]
async fn rejected_connection_stays_disconnected() {
    let mut app = started(MockWallet::rejecting(), MockRemote::new()).await;

    app.connect().await;
    assert_eq!(app.state(), &AppState::Disconnected);
    assert_eq!(app.remote().fetch_count(), 0);
}

#[tokio::test]
async fn missing_account_shows_initialize_prompt_never_the_form() {
    let app = started(MockWallet::trusted(), MockRemote::new()).await;

    let session = app.wallet().address();
    assert_eq!(app.view(), View::InitializePrompt { session: &session });
}

#[tokio::test]
async fn fetch_failure_is_treated_as_uninitialized() -> anyhow::Result<()> {
    let remote = MockRemote::with_wishes(&["cocoa"])?;
    remote.fail_fetches.set(true);
    let app = started(MockWallet::trusted(), remote).await;

    let session = app.wallet().address();
    assert_eq!(app.state(), &AppState::Uninitialized { session });
    Ok(())
}

#[tokio::test]
async fn initialize_then_empty_list_shows_the_form() {
    let mut app = started(MockWallet::trusted(), MockRemote::new()).await;

    app.initialize().await;

    let session = app.wallet().address();
    assert_eq!(
        app.view(),
        View::WishList {
            session: &session,
            input: "",
            wishes: &[],
        }
    );
    // The refresh is pinned to the slot the initialization landed in.
    assert_eq!(app.remote().fetches.borrow().last(), Some(&Some(1)));
}

#[tokio::test]
async fn failed_initialize_leaves_the_state_alone() {
    let remote = MockRemote::new();
    remote.fail_writes.set(true);
    let mut app = started(MockWallet::trusted(), remote).await;
    let before = app.state().clone();

    app.initialize().await;
    assert_eq!(app.state(), &before);
    assert_eq!(app.remote().fetch_count(), 1);
}

#[tokio::test]
async fn blank_input_never_appends() -> anyhow::Result<()> {
    let mut app = started(MockWallet::trusted(), MockRemote::with_wishes(&["tea"])?).await;

    for blank in ["", " ", "\t\t", " \n \r "] {
        app.set_input(blank);
        app.submit().await;
    }

    assert!(app.remote().appends.borrow().is_empty());
    assert_eq!(app.remote().fetch_count(), 1);
    assert_eq!(wishes_of(&app), Some(vec!["tea".to_string()]));
    Ok(())
}

#[tokio::test]
async fn submit_appends_raw_value_and_clears_input() -> anyhow::Result<()> {
    let mut app = started(MockWallet::trusted(), MockRemote::with_wishes(&[])?).await;

    app.set_input("  a telescope ");
    app.submit().await;

    assert_eq!(*app.remote().appends.borrow(), vec!["  a telescope ".to_string()]);
    assert_eq!(wishes_of(&app), Some(vec!["  a telescope ".to_string()]));
    let View::WishList { input, .. } = app.view() else {
        anyhow::bail!("Expected the wish list view");
    };
    assert_eq!(input, "");
    Ok(())
}

#[tokio::test]
async fn appended_wish_is_last_after_refresh() -> anyhow::Result<()> {
    for prior in [&[][..], &["a"][..], &["a", "b", "X"][..]] {
        let mut app = started(MockWallet::trusted(), MockRemote::with_wishes(prior)?).await;

        app.append("X").await;

        let wishes = wishes_of(&app).unwrap_or_default();
        assert_eq!(wishes.len(), prior.len() + 1);
        assert_eq!(wishes.last().map(String::as_str), Some("X"));
        assert_eq!(
            app.remote().fetches.borrow().last(),
            Some(&Some(app.remote().slot()))
        );
    }
    Ok(())
}

#[tokio::test]
async fn failed_append_keeps_the_list() -> anyhow::Result<()> {
    let mut app = started(MockWallet::trusted(), MockRemote::with_wishes(&["tea"])?).await;
    app.remote().fail_writes.set(true);

    app.set_input("coffee");
    app.submit().await;

    assert_eq!(wishes_of(&app), Some(vec!["tea".to_string()]));
    assert_eq!(app.remote().fetch_count(), 1);
    Ok(())
}

#[tokio::test]
async fn append_without_session_does_nothing() {
    let mut app = started(MockWallet::new(), MockRemote::new()).await;

    app.append("X").await;
    app.initialize().await;

    assert!(app.remote().appends.borrow().is_empty());
    assert_eq!(app.state(), &AppState::Disconnected);
}

#[tokio::test]
async fn stale_reads_are_ignored() -> anyhow::Result<()> {
    let mut app = started(MockWallet::trusted(), MockRemote::with_wishes(&[])?).await;
    app.append("first").await;
    app.append("second").await;

    // A lagging node answers from before both appends landed.
    app.remote().stale_read_slot.set(Some(0));
    app.refresh().await;

    assert_eq!(
        wishes_of(&app),
        Some(vec!["first".to_string(), "second".to_string()])
    );
    Ok(())
}

#[tokio::test]
async fn lagging_node_after_append_keeps_the_list() -> anyhow::Result<()> {
    let mut app = started(MockWallet::trusted(), MockRemote::with_wishes(&["tea"])?).await;
    app.remote().lagging.set(true);

    app.append("coffee").await;

    // The append landed but the node can't serve its slot yet, so the list stays as it was.
    let session = app.wallet().address();
    assert_eq!(
        app.view(),
        View::WishList {
            session: &session,
            input: "",
            wishes: &["tea".to_string()],
        }
    );

    app.remote().lagging.set(false);
    app.refresh().await;
    assert_eq!(
        wishes_of(&app),
        Some(vec!["tea".to_string(), "coffee".to_string()])
    );
    Ok(())
}

#[tokio::test]
async fn duplicate_wishes_are_all_kept() -> anyhow::Result<()> {
    let mut app = started(MockWallet::trusted(), MockRemote::with_wishes(&["socks"])?).await;

    app.append("socks").await;

    let View::WishList { wishes, .. } = app.view() else {
        anyhow::bail!("Expected the wish list view");
    };
    assert_eq!(wishes, ["socks", "socks"]);
    Ok(())
}
