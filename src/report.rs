//! Formats and prints a `Comparison`. All presentation decisions live here:
//! each section is sorted lexicographically by card name, and an empty section
//! prints an explicit "None" marker.

use anyhow::Result;
use std::io;

use crate::args::Args;
use crate::compare::Comparison;

/// Writes the comparison report to `out`: a header naming the files compared
/// (and the filter file, if any), then the two unique-card sections and the
/// differing-quantities section.
pub fn write_report(mut out: impl io::Write, args: &Args, mut comparison: Comparison) -> Result<()> {
    let (file1, file2) = (args.file1.display(), args.file2.display());
    match &args.filter {
        Some(filter) => writeln!(
            out,
            "Comparing card lists in '{file1}' and '{file2}', filtering cards from '{}'...",
            filter.display()
        )?,
        None => writeln!(out, "Comparing card lists in '{file1}' and '{file2}'...")?,
    }

    writeln!(out, "\nCards unique to '{file1}':")?;
    comparison.unique_to_first.sort();
    write_quantities(&mut out, &comparison.unique_to_first)?;

    writeln!(out, "\nCards unique to '{file2}':")?;
    comparison.unique_to_second.sort();
    write_quantities(&mut out, &comparison.unique_to_second)?;

    writeln!(out, "\nCards with different quantities:")?;
    comparison.differing.sort();
    if comparison.differing.is_empty() {
        writeln!(out, "  None")?;
    } else {
        for (name, (first, second)) in &comparison.differing {
            writeln!(out, "  {name}: {first}x in '{file1}', {second}x in '{file2}'")?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_quantities(out: &mut impl io::Write, cards: &[(String, u32)]) -> Result<()> {
    if cards.is_empty() {
        writeln!(out, "  None")?;
    } else {
        for (name, quantity) in cards {
            writeln!(out, "  {quantity}x {name}")?;
        }
    }
    Ok(())
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn args(filter: Option<&str>) -> Args {
        Args {
            file1: PathBuf::from("a.txt"),
            file2: PathBuf::from("b.txt"),
            filter: filter.map(PathBuf::from),
        }
    }

    fn report_of(args: &Args, comparison: Comparison) -> String {
        let mut out = Vec::new();
        write_report(&mut out, args, comparison).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sections_are_sorted_by_name_and_empty_sections_say_none() {
        let comparison = Comparison {
            unique_to_first: vec![("Sol Ring".to_string(), 1), ("Brainstorm".to_string(), 4)],
            unique_to_second: vec![],
            differing: vec![("Opt".to_string(), (1, 2)), ("Counterspell".to_string(), (4, 3))],
        };
        let expected = "\
Comparing card lists in 'a.txt' and 'b.txt'...

Cards unique to 'a.txt':
  4x Brainstorm
  1x Sol Ring

Cards unique to 'b.txt':
  None

Cards with different quantities:
  Counterspell: 4x in 'a.txt', 3x in 'b.txt'
  Opt: 1x in 'a.txt', 2x in 'b.txt'
";
        assert_eq!(report_of(&args(None), comparison), expected);
    }

    #[test]
    fn header_names_the_filter_file_when_one_was_supplied() {
        let comparison = Comparison {
            unique_to_first: vec![],
            unique_to_second: vec![],
            differing: vec![],
        };
        let report = report_of(&args(Some("skip.txt")), comparison);
        assert!(report.starts_with(
            "Comparing card lists in 'a.txt' and 'b.txt', filtering cards from 'skip.txt'...\n"
        ));
    }
}
