/// A single-line text input that only submits non-blank values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    input: String,
}

/// Whether `value` is empty or made up entirely of whitespace. A byte order mark counts as
/// whitespace.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Takes the raw, untrimmed input and clears the field, unless the input is blank. Blank input
    /// is left in place and nothing is submitted.
    pub fn submit(&mut self) -> Option<String> {
        if is_blank(&self.input) {
            return None;
        }
        Some(std::mem::take(&mut self.input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_never_submitted() {
        let blanks = [
            "",
            " ",
            "\t",
            "\n",
            " \t\r\n ",
            "\u{a0}",
            "\u{2003}\u{3000}",
            "\u{feff}",
            " \u{feff}\t",
        ];
        for blank in blanks {
            let mut form = SubmissionForm::new();
            form.set_input(blank);
            assert_eq!(form.submit(), None, "{blank:?} should be rejected");
            assert_eq!(form.input(), blank);
        }
    }

    #[test]
    fn submits_raw_value_and_clears() {
        for wish in ["a pony", "  padded  ", "\tsnow globe", "🎁"] {
            let mut form = SubmissionForm::new();
            form.set_input(wish);
            assert_eq!(form.submit().as_deref(), Some(wish));
            assert_eq!(form.input(), "");
            assert_eq!(form.submit(), None);
        }
    }
}
