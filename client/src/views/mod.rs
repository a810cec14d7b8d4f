//! Terminal rendering of the app's current [`View`].

use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::Colorize;

use crate::{
    app::View,
    fmt_kv,
    logs::LogColor,
};

pub mod list_view;
pub mod submission_form;

pub use list_view::WishListView;
pub use submission_form::SubmissionForm;

pub const HEADER: &str = "🎄 Christmas wish list 🎄";
pub const CONNECT_PROMPT: &str = "Connect to Wallet";
pub const INITIALIZE_PROMPT: &str =
    "Do One-Time Initialization For Christmas wish list Program Account";
pub const INPUT_PLACEHOLDER: &str = "what do you wish?";

/// One full screen: header, then whichever of the three bodies the view calls for.
pub struct Frame<'a> {
    pub view: View<'a>,
}

impl Display for Frame<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER.bold())?;

        match self.view {
            View::ConnectPrompt => {
                writeln!(f, "[{}]", CONNECT_PROMPT.color(LogColor::Highlight))?;
                write!(f, "{}", "Press Enter to connect".color(LogColor::FadedGray))
            }
            View::InitializePrompt { session } => {
                writeln!(f, "{}", fmt_kv!("wallet", session, LogColor::Gray))?;
                writeln!(f, "[{}]", INITIALIZE_PROMPT.color(LogColor::Highlight))?;
                write!(f, "{}", "Press Enter to initialize".color(LogColor::FadedGray))
            }
            View::WishList {
                session,
                input,
                wishes,
            } => {
                writeln!(f, "{}", fmt_kv!("wallet", session, LogColor::Gray))?;
                write!(
                    f,
                    "{}",
                    WishListView {
                        indent_size: 2,
                        wishes,
                    }
                )?;
                let input = match input.is_empty() {
                    true => INPUT_PLACEHOLDER.color(LogColor::FadedGray),
                    false => input.normal(),
                };
                write!(f, "> {input} [{}]", "Submit".color(LogColor::Highlight))
            }
        }
    }
}
