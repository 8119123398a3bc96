//! Tabular pattern text (CSV-like) to boolean matrices.
//!
//! Each non-blank line is a row and each delimited field a cell. A field is
//! alive when, trimmed, it is `●` or `1`; every other value, including an
//! empty field, is dead. Short rows are padded with dead cells to the width
//! of the widest row.

use std::fs;
use std::path::Path;

use life_core::Grid;

use crate::error::LoadError;

/// Field values that mark a live cell.
pub const ALIVE_TOKENS: [&str; 2] = ["\u{25cf}", "1"];

/// How to read a pattern table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field separator.
    pub delimiter: char,
    /// Drop the first and last rows when both are entirely dead.
    pub trim_border: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            trim_border: true,
        }
    }
}

impl LoadOptions {
    /// Set the field separator.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable the border trim.
    pub fn with_trim_border(mut self, trim: bool) -> Self {
        self.trim_border = trim;
        self
    }
}

fn is_alive_field(field: &str) -> bool {
    ALIVE_TOKENS.contains(&field.trim())
}

/// Parse pattern text into a rectangular boolean matrix.
pub fn parse_table(text: &str, opts: &LoadOptions) -> Result<Vec<Vec<bool>>, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows: Vec<Vec<bool>> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.split(opts.delimiter).map(is_alive_field).collect())
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, false);
    }

    if opts.trim_border && has_dead_border(&rows) {
        log::debug!("load: trimming dead first and last rows");
        rows.pop();
        if !rows.is_empty() {
            rows.remove(0);
        }
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    log::debug!("load: parsed {}x{} table", rows.len(), width);
    Ok(rows)
}

/// First and last rows both all dead. A single row counts as both.
fn has_dead_border(rows: &[Vec<bool>]) -> bool {
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => {
            first.iter().all(|&c| !c) && last.iter().all(|&c| !c)
        }
        _ => false,
    }
}

/// Parse pattern text straight into a [`Grid`].
pub fn parse_grid(text: &str, opts: &LoadOptions) -> Result<Grid, LoadError> {
    Ok(Grid::from_rows(parse_table(text, opts)?)?)
}

/// Read and parse a pattern file.
pub fn load_file(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("load: read {}", path.display());
    parse_grid(&text, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_trim() -> LoadOptions {
        LoadOptions::default().with_trim_border(false)
    }

    #[test]
    fn alive_tokens() {
        let m = parse_table("1,0,\u{25cf}\n0, 1 ,x", &no_trim()).unwrap();
        assert_eq!(m, vec![vec![true, false, true], vec![false, true, false]]);
    }

    #[test]
    fn blanks_are_dead_and_rows_padded() {
        let m = parse_table("1,,1\n,1\n1", &no_trim()).unwrap();
        assert_eq!(
            m,
            vec![
                vec![true, false, true],
                vec![false, true, false],
                vec![true, false, false],
            ]
        );
    }

    #[test]
    fn blank_lines_and_crlf_skipped() {
        let m = parse_table("\r\n1,0\r\n\r\n0,1\r\n\r\n", &no_trim()).unwrap();
        assert_eq!(m, vec![vec![true, false], vec![false, true]]);
    }

    #[test]
    fn byte_order_mark_ignored() {
        let m = parse_table("\u{feff}1,0", &no_trim()).unwrap();
        assert_eq!(m, vec![vec![true, false]]);
    }

    #[test]
    fn custom_delimiter() {
        let opts = no_trim().with_delimiter(';');
        let m = parse_table("1;0;1", &opts).unwrap();
        assert_eq!(m, vec![vec![true, false, true]]);
    }

    #[test]
    fn trims_when_both_borders_dead() {
        let text = "0,0,0\n0,1,0\n1,1,1\n0,0,0";
        let m = parse_table(text, &LoadOptions::default()).unwrap();
        assert_eq!(m, vec![vec![false, true, false], vec![true, true, true]]);
    }

    #[test]
    fn keeps_rows_when_one_border_live() {
        let text = "0,0,0\n0,1,0\n1,1,1";
        let m = parse_table(text, &LoadOptions::default()).unwrap();
        assert_eq!(m.len(), 3);
        let text = "1,0,0\n0,1,0\n0,0,0";
        let m = parse_table(text, &LoadOptions::default()).unwrap();
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn trims_only_once() {
        let text = "0,0\n0,0\n1,1\n0,0\n0,0";
        let m = parse_table(text, &LoadOptions::default()).unwrap();
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn trim_can_leave_nothing() {
        let m = parse_table("0,0", &LoadOptions::default());
        assert!(matches!(m, Err(LoadError::Empty)));
        let m = parse_table("0,0\n0,0", &LoadOptions::default());
        assert!(matches!(m, Err(LoadError::Empty)));
        assert_eq!(parse_table("0,0", &no_trim()).unwrap(), vec![vec![false; 2]]);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_table("", &no_trim()), Err(LoadError::Empty)));
        assert!(matches!(parse_table("\n \n", &no_trim()), Err(LoadError::Empty)));
    }

    #[test]
    fn parse_grid_builds_grid() {
        let g = parse_grid("0,1,0\n0,1,0\n0,1,0", &no_trim()).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.population(), 3);
    }

    #[test]
    fn load_file_reports_path() {
        let err = load_file("/nonexistent/pattern.csv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pattern.csv"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_file_reads_table() {
        let path = std::env::temp_dir().join(format!("life-load-{}.csv", std::process::id()));
        fs::write(&path, "0,0,0\n1,1,1\n0,0,0\n").unwrap();
        let g = load_file(&path, &LoadOptions::default()).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(g.rows(), 1);
        assert_eq!(g.population(), 3);
    }
}
