use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::Colorize;

use crate::logs::LogColor;

/// One rendered row of the wish list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Rows are keyed by their text, so identical wishes share a key. Both rows still render.
    pub key: &'a str,
    pub wish: &'a str,
}

pub fn list_items(wishes: &[String]) -> Vec<ListItem<'_>> {
    wishes
        .iter()
        .map(|wish| ListItem {
            key: wish.as_str(),
            wish: wish.as_str(),
        })
        .collect()
}

pub struct WishListView<'a> {
    /// The amount of spaces preceding each row.
    pub indent_size: usize,
    pub wishes: &'a [String],
}

impl Display for WishListView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "My wish list:".color(LogColor::Header))?;
        let indent = " ".repeat(self.indent_size);
        for item in list_items(self.wishes) {
            writeln!(f, "{indent}🎁 {}", item.wish)?;
        }
        Ok(())
    }
}
