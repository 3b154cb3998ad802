//! `carddiff` compares two card-list files. The `parse` module turns raw lines
//! into `(name, quantity)` pairs, the `operands` module reads whole files
//! through the parser, the `compare` module computes what's unique to each
//! file (and what's in both with different counts), and the `report` module
//! prints the result. The `args` module parses the command line.

#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod compare;
pub mod operands;
pub mod parse;
pub mod report;
pub mod tally;
