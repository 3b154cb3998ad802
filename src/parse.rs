//! Turns one raw line of a card-list file into a `(name, quantity)` pair.
//!
//! A card entry line looks like one of
//! ```text
//! 1 Aftermath Analyst (EOC) 91
//! 1x Aftermath Analyst (mkm) 148 [Recursion,Creature]
//! ```
//! that is: a quantity (with optional `x` suffix), the card name, and then
//! optional set-code and tag metadata we mostly ignore. The one tag we do care
//! about is `Sideboard` (and the `{noDeck}` marker some exporters emit), which
//! excludes the line entirely.

use bstr::ByteSlice;
use memchr::memchr;

/// Parses a card entry line, returning `None` for blank lines, lines without a
/// leading quantity, and lines tagged as not part of the deck.
///
/// Double-faced and split card names (`Bala Ged Recovery // Bala Ged
/// Sanctuary`, `Fire/Ice`) are truncated to their first face.
#[must_use]
pub fn parse_card_line(line: &[u8]) -> Option<(String, u32)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(tags) = bracketed_tags(line) {
        if tags.contains_str("{noDeck}") {
            return None;
        }
        if tags.split_str(",").any(|tag| tag.trim() == b"Sideboard") {
            return None;
        }
    }

    let (quantity, rest) = leading_quantity(line)?;
    let name_end = memchr(b'(', rest).unwrap_or(rest.len());
    let name = rest[..name_end].trim();
    if name.is_empty() {
        return None;
    }
    Some((normalized(&String::from_utf8_lossy(name)), quantity))
}

/// Returns the text of the first (non-empty) bracket pair in `line`, or `None`
/// if there is none. We look at the first pair rather than the last; set codes
/// and card names don't legitimately contain brackets.
fn bracketed_tags(mut line: &[u8]) -> Option<&[u8]> {
    loop {
        let open = memchr(b'[', line)?;
        let after = &line[open + 1..];
        match memchr(b']', after) {
            None => return None,
            Some(0) => line = after, // `[]` has no tags; keep scanning
            Some(close) => return Some(&after[..close]),
        }
    }
}

/// Matches the leading quantity token: one or more digits, an optional `x`,
/// and at least one whitespace byte. Returns the quantity and the text after
/// the token.
fn leading_quantity(line: &[u8]) -> Option<(u32, &[u8])> {
    let digits_end = line.iter().position(|b| !b.is_ascii_digit()).unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let quantity = line[..digits_end].to_str().ok()?.parse().ok()?;
    let mut rest = &line[digits_end..];
    if rest.first() == Some(&b'x') {
        rest = &rest[1..];
    }
    match rest.first() {
        Some(b) if b.is_ascii_whitespace() => Some((quantity, &rest[1..])),
        _ => None,
    }
}

/// Keeps only the first face of a double-faced or split card name: the part
/// before `" // "` if that separator is present, otherwise the part before the
/// first `/`.
fn normalized(name: &str) -> String {
    if let Some((first_face, _)) = name.split_once(" // ") {
        first_face.trim().to_string()
    } else if let Some((first_face, _)) = name.split_once('/') {
        first_face.trim().to_string()
    } else {
        name.to_string()
    }
}
