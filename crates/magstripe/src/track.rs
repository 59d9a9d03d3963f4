//! ISO 7813 track decoding
//!
//! Track 1 is alphanumeric and carries the cardholder name; track 2 is the
//! numeric-only redundant copy. Both decoders take the raw substring a USB
//! keyboard-emulator reader types out, sentinels included.

use crate::card_number;
use crate::error::{ParseError, Result};

/// Delimiter between tracks in a raw swipe (the track end sentinel)
const TRACK_DELIMITER: char = '?';
/// Field separator inside track 1
const TRACK1_SEPARATOR: char = '^';
/// Field separator inside track 2
const TRACK2_SEPARATOR: char = '=';
/// Separator between surname and first name in the track 1 name field
const NAME_SEPARATOR: char = '/';
/// Track 1 format code for financial cards
const FORMAT_CODE: char = 'B';

/// Fields decoded from track 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track1Data {
    pub account: String,
    pub expiry_month: String,
    pub expiry_year: String,
    /// Cardholder name, normalized to "first last"
    pub name: String,
}

/// Fields decoded from track 2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track2Data {
    pub account: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

/// Split a raw swipe into its track 1 and track 2 substrings
///
/// Tracks are delimited by `?`. Anything after the second track (a track 3
/// remnant, trailing noise) is ignored.
pub fn split_tracks(raw: &str) -> Result<(&str, &str)> {
    let mut tracks = raw.split(TRACK_DELIMITER);
    match (tracks.next(), tracks.next()) {
        (Some(track1), Some(track2)) => Ok((track1, track2)),
        _ => Err(ParseError::Format("did not get expected track 1 and 2")),
    }
}

/// Decode a track 1 string: `%B<pan>^<surname>/<first>^<discretionary>`
/// plus a one-character end sentinel.
pub fn parse_track1(track: &str) -> Result<Track1Data> {
    if track.is_empty() {
        return Err(ParseError::Format("blank track 1 data"));
    }

    if track.chars().nth(1) != Some(FORMAT_CODE) {
        return Err(ParseError::Format("wrong track 1 format (not B)"));
    }

    // Remove the two-character start sentinel and the end sentinel
    let payload = drop_last_char(skip_chars(track, 2));

    let fields: Vec<&str> = payload.split(TRACK1_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(ParseError::Format("could not parse track 1"));
    }
    let (account, name, discretionary) = (fields[0], fields[1], fields[2]);

    let name_fields: Vec<&str> = name.split(NAME_SEPARATOR).collect();
    if name_fields.len() != 2 {
        return Err(ParseError::Format("could not parse cardholder name"));
    }
    let (surname, first_name) = (name_fields[0], name_fields[1]);

    let expiry_year = substr(discretionary, 0, 2);
    let expiry_month = substr(discretionary, 2, 2);

    if !card_number::validate(account) {
        return Err(ParseError::Validation(
            "card number in track 1 did not validate",
        ));
    }

    Ok(Track1Data {
        account: account.to_string(),
        expiry_month: expiry_month.to_string(),
        expiry_year: expiry_year.to_string(),
        name: format!("{} {}", first_name.trim(), surname.trim()),
    })
}

/// Decode a track 2 string: `;<pan>=<discretionary>`
///
/// The leading sentinel is stripped without being checked; readers disagree
/// on what they emit there. A payload with more than one `=` is rejected,
/// even though some issuers embed extra `=` characters in discretionary
/// data.
pub fn parse_track2(track: &str) -> Result<Track2Data> {
    if track.is_empty() {
        return Err(ParseError::Format("blank track 2 data"));
    }

    // Remove the one-character start sentinel
    let payload = skip_chars(track, 1);

    let fields: Vec<&str> = payload.split(TRACK2_SEPARATOR).collect();
    if fields.len() != 2 {
        return Err(ParseError::Format("could not parse track 2"));
    }
    let (account, discretionary) = (fields[0], fields[1]);

    let expiry_year = substr(discretionary, 0, 2);
    let expiry_month = substr(discretionary, 2, 2);

    if !card_number::validate(account) {
        return Err(ParseError::Validation(
            "card number in track 2 did not validate",
        ));
    }

    Ok(Track2Data {
        account: account.to_string(),
        expiry_month: expiry_month.to_string(),
        expiry_year: expiry_year.to_string(),
    })
}

/// Substring by character position, saturating at the end of the string
///
/// Readers deliver short or garbled discretionary data often enough that
/// hard slicing would panic; a truncated result mirrors what the reader
/// actually produced.
fn substr(s: &str, start: usize, len: usize) -> &str {
    let begin = s.char_indices().nth(start).map_or(s.len(), |(i, _)| i);
    let end = s[begin..]
        .char_indices()
        .nth(len)
        .map_or(s.len(), |(i, _)| begin + i);
    &s[begin..end]
}

/// Skip the first `n` characters, or everything if the string is shorter
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}

/// Drop the final character, if any
fn drop_last_char(s: &str) -> &str {
    s.char_indices().last().map_or(s, |(i, _)| &s[..i])
}
