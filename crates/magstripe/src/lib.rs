//! Magstripe - ISO 7813 financial card track parsing
//!
//! This crate decodes the raw track 1 and track 2 data a USB
//! keyboard-emulator card reader types out, validates the card number
//! (brand pattern plus Luhn checksum), and cross-checks the redundant
//! fields both tracks carry before returning a single normalized record.
//!
//! Parsing is pure computation over the input string: no I/O, no shared
//! state, safe to call from any number of threads.

pub mod card_number;
pub mod error;
pub mod track;

pub use card_number::{brand, validate, CardBrand};
pub use error::{ParseError, Result};
pub use track::{Track1Data, Track2Data};

/// A parsed and cross-validated card
///
/// Carries track 1's fields (the richer track); track 2 is only used to
/// confirm them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCard {
    pub account: String,
    pub expiry_month: String,
    pub expiry_year: String,
    /// Cardholder name, "first last", whitespace trimmed
    pub name: String,
}

/// Parse a full two-track swipe into a validated card record
///
/// The input is the string exactly as the reader emits it:
/// `%B<track1>?;<track2>?`, optionally followed by further `?`-delimited
/// segments, which are ignored. The first failing stage wins; no partial
/// record is ever returned.
///
/// # Example
/// ```
/// let swipe = "%B4242424242424242^SURNAME/FIRSTNAME I^15052011000000000000?\
///              ;4242424242424242=15052011000000000000?";
/// let card = magstripe::parse(swipe).unwrap();
/// assert_eq!(card.account, "4242424242424242");
/// assert_eq!(card.name, "FIRSTNAME I SURNAME");
/// ```
pub fn parse(raw: &str) -> Result<ParsedCard> {
    let (track1, track2) = track::split_tracks(raw)?;
    let track1 = track::parse_track1(track1)?;
    let track2 = track::parse_track2(track2)?;
    reconcile(track1, &track2)
}

/// Check that the fields both tracks carry agree, and promote track 1's
/// record to the final result
fn reconcile(track1: Track1Data, track2: &Track2Data) -> Result<ParsedCard> {
    let matched = track1.account == track2.account
        && track1.expiry_month == track2.expiry_month
        && track1.expiry_year == track2.expiry_year;

    if !matched {
        return Err(ParseError::Validation("track 1 and 2 data did not match"));
    }

    Ok(ParsedCard {
        account: track1.account,
        expiry_month: track1.expiry_month,
        expiry_year: track1.expiry_year,
        name: track1.name,
    })
}
