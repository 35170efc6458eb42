use std::io::BufRead;

use log::debug;

use crate::{Error, Result, Weight};

/// One `u,v,w` record of an edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub u: String,
    pub v: String,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: Weight) -> Self {
        EdgeRecord {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }

    /// Returns true if both endpoints carry the same label
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

impl<S: Into<String>> From<(S, S, Weight)> for EdgeRecord {
    fn from((u, v, weight): (S, S, Weight)) -> Self {
        EdgeRecord::new(u, v, weight)
    }
}

/// Options controlling how an edge list is read
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Field separator within a record
    delimiter: char,
    /// Lines starting with this prefix are ignored
    comment_prefix: Option<String>,
    /// Whether whitespace-only lines are ignored instead of rejected
    skip_blank_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiter: ',',
            comment_prefix: None,
            skip_blank_lines: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat lines beginning with `prefix` as comments
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    /// Enable or disable skipping of blank lines
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

/// Parses a single edge-list line.
///
/// Returns `Ok(None)` for lines the options say to skip. `line_no` is only used
/// for error reporting and is expected to be 1-based.
pub fn parse_edge_line(
    line: &str,
    line_no: usize,
    options: &ParseOptions,
) -> Result<Option<EdgeRecord>> {
    let line = line.trim_end_matches(['\r', '\n']);

    if options.skip_blank_lines && line.trim().is_empty() {
        return Ok(None);
    }
    if let Some(prefix) = &options.comment_prefix {
        if line.trim_start().starts_with(prefix.as_str()) {
            return Ok(None);
        }
    }

    let fields: Vec<&str> = line.split(options.delimiter).map(str::trim).collect();
    if fields.len() != 3 {
        return Err(Error::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let (u, v, raw_weight) = (fields[0], fields[1], fields[2]);
    if u.is_empty() || v.is_empty() {
        return Err(Error::EmptyLabel { line: line_no });
    }

    let signed: i64 = raw_weight.parse().map_err(|_| Error::InvalidWeight {
        line: line_no,
        value: raw_weight.to_string(),
    })?;
    let weight = Weight::try_from(signed).map_err(|_| Error::NegativeWeight {
        line: line_no,
        value: signed,
    })?;

    Ok(Some(EdgeRecord::new(u, v, weight)))
}

/// Reads every record from `reader`, stopping at the first malformed line
pub fn read_edge_list<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_edge_line(&line, idx + 1, options)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(
        "read {} edge records ({} lines skipped)",
        records.len(),
        skipped
    );
    Ok(records)
}
