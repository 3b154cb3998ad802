use anyhow::Result;
use carddiff::compare::compare;
use carddiff::operands::{read_card_file, read_filter_file};
use carddiff::report::write_report;
use carddiff::tally::ExclusionSet;
use is_terminal::IsTerminal;
use std::io;

fn main() -> Result<()> {
    let args = carddiff::args::parsed();

    let first = read_card_file(&args.file1)?;
    let second = read_card_file(&args.file2)?;
    let exclude = match &args.filter {
        Some(path) => read_filter_file(path),
        None => ExclusionSet::default(),
    };

    let comparison = compare(first, second, &exclude);
    if io::stdout().is_terminal() {
        write_report(io::stdout().lock(), &args, comparison)?;
    } else {
        write_report(io::BufWriter::new(io::stdout().lock()), &args, comparison)?;
    }
    Ok(())
}
