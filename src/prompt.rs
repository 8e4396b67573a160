//! Interactive search prompt.

use std::io::{self, BufRead, Write};

/// Text shown before reading the search query.
pub const SEARCH_PROMPT: &str = "Write part or whole name or phone number for search: ";

/// Ask for a search query on `output` and read one line from `input`.
///
/// The trailing line break is stripped; other whitespace is kept so phone
/// fragments and names are matched as typed. End of input yields an empty
/// query.
pub fn read_search_query<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    output.write_all(SEARCH_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let query = line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string();
    Ok(query)
}
