//! Line-oriented terminal front end: renders a [`Frame`] and reads one line per interaction.

use std::io::{
    self,
    BufRead,
    Write,
};

use client::{
    app::{
        App,
        View,
    },
    logs::{
        log_divider,
        log_warning,
    },
    remote::WishListRpc,
    views::Frame,
    wallet::WalletBridge,
    LogColor,
};
use colored::Colorize;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Refresh,
    /// Anything else: the prompt's button press, or the wish to submit.
    Line(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "/quit" | "/q" => Self::Quit,
            "/refresh" => Self::Refresh,
            _ => Self::Line(line.to_string()),
        }
    }
}

/// Reads one line without its terminator, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&line);
    Ok(Some(trimmed.to_string()))
}

/// Asks on the terminal whether `address` may connect. Anything but `y`/`yes` declines.
pub fn approve_connection(address: &Pubkey) -> bool {
    print!(
        "Approve connection for {}? [y/N] ",
        address.to_string().color(LogColor::Highlight)
    );
    if io::stdout().flush().is_err() {
        return false;
    }

    match read_line(&mut io::stdin().lock()) {
        Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

/// Blocks until the user acknowledges `notice`.
fn show_notice(notice: &str) -> io::Result<()> {
    println!("{}", notice.color(LogColor::Warning).bold());
    print!("{}", "Press Enter to continue".color(LogColor::FadedGray));
    io::stdout().flush()?;
    read_line(&mut io::stdin().lock()).map(|_| ())
}

enum Action {
    Connect,
    Initialize,
    Submit,
}

pub async fn run<W: WalletBridge, R: WishListRpc>(app: &mut App<W, R>) -> anyhow::Result<()> {
    app.start().await;

    loop {
        if let Some(notice) = app.take_notice() {
            show_notice(&notice)?;
        }

        log_divider();
        println!("{}", Frame { view: app.view() });
        io::stdout().flush()?;

        let Some(line) = read_line(&mut io::stdin().lock())? else {
            break;
        };

        let text = match Command::parse(&line) {
            Command::Quit => break,
            Command::Refresh => {
                app.refresh().await;
                continue;
            }
            Command::Line(text) => text,
        };

        let action = match app.view() {
            View::ConnectPrompt => Action::Connect,
            View::InitializePrompt { .. } => Action::Initialize,
            View::WishList { .. } => Action::Submit,
        };
        match action {
            Action::Connect => app.connect().await,
            Action::Initialize => app.initialize().await,
            Action::Submit => {
                app.set_input(text);
                app.submit().await;
            }
        }
    }

    log_warning("Goodbye", "🎅");
    Ok(())
}
