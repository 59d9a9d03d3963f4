//! Field formatters for operator-facing output

use clap::ValueEnum;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatMode {
    /// Mask the middle digits of the account number
    Masked,
    /// Print the full account number
    Full,
}

impl FormatMode {
    pub fn description(&self) -> &'static str {
        match self {
            FormatMode::Masked => "Masked",
            FormatMode::Full => "Full",
        }
    }
}

/// Format an account number according to the output mode
///
/// Masked output keeps the issuer prefix (first six) and the last four
/// digits, the usual receipt form.
pub fn format_account(account: &str, mode: &FormatMode) -> String {
    match mode {
        FormatMode::Full => account.to_string(),
        FormatMode::Masked => {
            if account.len() <= 10 {
                return "*".repeat(account.len());
            }
            format!(
                "{}{}{}",
                &account[..6],
                "*".repeat(account.len() - 10),
                &account[account.len() - 4..]
            )
        }
    }
}
