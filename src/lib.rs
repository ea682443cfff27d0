//! MEDICAMENT.MA SCRAPER
//! Walks the medication listing letter by letter, page by page,
//! and dumps every entry into a single JSON file.

mod error;
mod macros;
pub mod model;
pub mod parse;
pub mod process;
pub mod request;

pub use error::{Error, Result};

/// `{page}` and `{letter}` get substituted for every request.
const BASE_URL: &str = "https://medicament.ma/listing-des-medicaments/page/{page}/?lettre={letter}";
const USER_AGENT: &str = "Mozilla/5.0";
const FILE_PATH: &str = "medications.json";
const LETTERS: std::ops::RangeInclusive<char> = 'A'..='Z';
const START_PAGE: usize = 1;
/// Only used as a capacity hint for the accumulator.
const EXPECTED_NUM_OF_ENTRIES: usize = 6000;
