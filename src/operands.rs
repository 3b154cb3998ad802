//! Reads the file operands: each card-list file becomes a `CardTally`, and the
//! optional filter file becomes an `ExclusionSet`. Files are read whole; a
//! UTF-16 file (detected by its Byte Order Mark) is decoded to UTF-8 first, so
//! exports from Windows deck builders parse like everything else.

use anyhow::{Context, Result};
use bstr::ByteSlice;
use std::{fs, path::Path};

use crate::parse::parse_card_line;
use crate::tally::{CardTally, ExclusionSet};

/// The five basic lands are filler in almost every list, so they never take
/// part in a comparison.
const BASIC_LANDS: [&str; 5] = ["Forest", "Island", "Swamp", "Plains", "Mountain"];

/// Reads the card-list file at `path` into a `CardTally`, skipping lines the
/// parser rejects and the five basic lands. A read failure here is fatal: the
/// error propagates to `main` and the process exits nonzero.
pub fn read_card_file(path: &Path) -> Result<CardTally> {
    let contents = contents_of(path)?;
    let mut cards = CardTally::new();
    for line in contents.lines() {
        if let Some((name, quantity)) = parse_card_line(line) {
            if !BASIC_LANDS.contains(&name.as_str()) {
                cards.add(name, quantity);
            }
        }
    }
    Ok(cards)
}

/// Reads the filter file at `path` into an `ExclusionSet`, keeping names and
/// discarding quantities. A read failure is not fatal: we warn and return an
/// empty set, and the comparison proceeds unfiltered.
#[must_use]
pub fn read_filter_file(path: &Path) -> ExclusionSet {
    match contents_of(path) {
        Ok(contents) => {
            contents.lines().filter_map(parse_card_line).map(|(name, _quantity)| name).collect()
        }
        Err(err) => {
            eprintln!("Warning: {err:#}; no cards will be filtered");
            ExclusionSet::default()
        }
    }
}

/// Returns the contents of the file at `path` as UTF-8 bytes with any leading
/// Byte Order Mark removed.
fn contents_of(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("Can't read file: {}", path.display()))
        .map(decode_if_utf16)
        .map(strip_utf8_bom)
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning
/// of `candidate`. Otherwise return `candidate` unchanged.
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // Note: `decode_without_bom_handling` will change malformed sequences to
    // the Unicode REPLACEMENT CHARACTER, and translates the UTF-16 BOM to a
    // UTF-8 BOM (which `strip_utf8_bom` then removes).
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Removes a leading (UTF-8) Byte Order Mark, if present, so the first line
/// parses like any other.
fn strip_utf8_bom(mut contents: Vec<u8>) -> Vec<u8> {
    if contents.starts_with(UTF8_BOM) {
        contents.drain(..UTF8_BOM.len());
    }
    contents
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    const UTF8_BOM_STR: &str = "\u{FEFF}";

    fn to_utf_16le(source: &str) -> Vec<u8> {
        let mut result = b"\xff\xfe".to_vec();
        for b in source.as_bytes().iter() {
            result.push(*b);
            result.push(0);
        }
        result
    }

    fn to_utf_16be(source: &str) -> Vec<u8> {
        let mut result = b"\xfe\xff".to_vec();
        for b in source.as_bytes().iter() {
            result.push(0);
            result.push(*b);
        }
        result
    }

    #[test]
    fn utf_16le_is_translated_to_utf8() {
        let expected = "1 Sol Ring (M10) 1\n2 Brainstorm (ICE) 64\n";
        let abominated = UTF8_BOM_STR.to_string() + expected;
        assert_eq!(decode_if_utf16(to_utf_16le(expected)), abominated.as_bytes());
    }

    #[test]
    fn utf_16be_is_translated_to_utf8() {
        let expected = "1 Sol Ring (M10) 1\n2 Brainstorm (ICE) 64\n";
        let abominated = UTF8_BOM_STR.to_string() + expected;
        assert_eq!(decode_if_utf16(to_utf_16be(expected)), abominated.as_bytes());
    }

    fn card_file_with(temp: &TempDir, name: &str, contents: &[u8]) -> CardTally {
        let file = temp.child(name);
        file.write_binary(contents).unwrap();
        read_card_file(file.path()).unwrap()
    }

    #[test]
    fn quantities_for_the_same_name_aggregate_across_lines() {
        let temp = TempDir::new().unwrap();
        let cards = card_file_with(&temp, "a.txt", b"1 Sol Ring (M10) 1\n2x Sol Ring (ABC) 2\n");
        assert_eq!(cards.quantity("Sol Ring"), Some(3));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn basic_lands_never_enter_the_tally() {
        let temp = TempDir::new().unwrap();
        let cards = card_file_with(&temp, "lands.txt", b"10 Forest\n3 Island (UNF) 1\n1 Forestry Ranger\n");
        assert!(!cards.contains("Forest"));
        assert!(!cards.contains("Island"));
        assert_eq!(cards.quantity("Forestry Ranger"), Some(1));
    }

    #[test]
    fn utf_16_card_files_parse_like_utf8_ones() {
        let temp = TempDir::new().unwrap();
        let cards = card_file_with(&temp, "le.txt", &to_utf_16le("1 Sol Ring (M10) 1\n"));
        assert_eq!(cards.quantity("Sol Ring"), Some(1));
    }

    #[test]
    fn missing_card_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(read_card_file(&temp.path().join("nope.txt")).is_err());
    }

    #[test]
    fn missing_filter_file_yields_an_empty_set() {
        let temp = TempDir::new().unwrap();
        assert!(read_filter_file(&temp.path().join("nope.txt")).is_empty());
    }

    #[test]
    fn filter_file_keeps_names_and_drops_quantities() {
        let temp = TempDir::new().unwrap();
        let file = temp.child("filter.txt");
        file.write_str("4 Sol Ring (M10) 1\nnot a card line\n1x Fire/Ice (MH2) 290\n").unwrap();
        let excluded = read_filter_file(file.path());
        assert!(excluded.contains("Sol Ring"));
        assert!(excluded.contains("Fire"));
        assert_eq!(excluded.len(), 2);
    }
}
