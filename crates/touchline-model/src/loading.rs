// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Loader for the literal field representation.
//!
//! This module turns text streams into a validated `Grid`. Each non-empty line
//! is one row of the field and each symbol one cell, `.` for open and `X` for
//! an opponent by default. Whitespace between symbols is ignored, so both
//! `..X.` and `. . X .` describe the same row, and `#` starts a comment that
//! runs to the end of the line. Lines that are empty after stripping comments
//! and whitespace are skipped.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice.
//! Errors point at the offending line and column (both 1-based) so a typo in a
//! hand-written fixture is easy to find.

use crate::grid::{Cell, Grid, MalformedGridError};
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The error type for the grid loading process.
#[derive(Debug)]
pub enum GridLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// A character is neither the open nor the blocked symbol.
    UnknownSymbol(UnknownSymbolError),
    /// The rows read do not form a rectangular, non-empty field.
    Malformed(MalformedGridError),
    /// The configured symbols are equal, whitespace, or the comment marker.
    InvalidSymbols { open: char, blocked: char },
}

/// Starts a comment that runs to the end of the line.
const COMMENT_MARKER: char = '#';

/// Details about a character that is not a cell symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSymbolError {
    /// The 1-based line number in the input.
    pub line: usize,
    /// The 1-based character column within the line.
    pub column: usize,
    /// The offending character.
    pub symbol: char,
}

impl std::fmt::Display for UnknownSymbolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown cell symbol '{}' at line {}, column {}",
            self.symbol, self.line, self.column
        )
    }
}

impl std::error::Error for UnknownSymbolError {}

impl Display for GridLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnknownSymbol(e) => write!(f, "Parse error: {}", e),
            Self::Malformed(e) => write!(f, "Malformed grid: {}", e),
            Self::InvalidSymbols { open, blocked } => write!(
                f,
                "Invalid cell symbols {:?} (open) and {:?} (blocked): they must differ and may not be whitespace or {:?}",
                open, blocked, COMMENT_MARKER
            ),
        }
    }
}

impl std::error::Error for GridLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::UnknownSymbol(e) => Some(e),
            Self::Malformed(e) => Some(e),
            Self::InvalidSymbols { .. } => None,
        }
    }
}

impl From<std::io::Error> for GridLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<UnknownSymbolError> for GridLoaderError {
    fn from(e: UnknownSymbolError) -> Self {
        Self::UnknownSymbol(e)
    }
}

impl From<MalformedGridError> for GridLoaderError {
    fn from(e: MalformedGridError) -> Self {
        Self::Malformed(e)
    }
}

/// A configurable loader for literal fields.
///
/// The format is one row per line:
///
/// ```raw
/// # opponent field
/// ......X.X
/// X........
/// ...X...X.
/// ```
///
/// # Configuration
/// * `open_symbol`: the character for an open cell (default `.`).
/// * `blocked_symbol`: the character for a blocked cell (default `X`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLoader {
    open_symbol: char,
    blocked_symbol: char,
}

impl Default for GridLoader {
    fn default() -> Self {
        Self {
            open_symbol: Cell::OPEN_SYMBOL,
            blocked_symbol: Cell::BLOCKED_SYMBOL,
        }
    }
}

impl GridLoader {
    /// Creates a new `GridLoader` with the default `.`/`X` symbols.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character that denotes an open cell.
    ///
    /// The symbol is checked when loading: it must differ from the blocked
    /// symbol and may not be whitespace or `#`.
    #[inline]
    pub fn open_symbol(mut self, symbol: char) -> Self {
        self.open_symbol = symbol;
        self
    }

    /// Sets the character that denotes a blocked cell.
    #[inline]
    pub fn blocked_symbol(mut self, symbol: char) -> Self {
        self.blocked_symbol = symbol;
        self
    }

    /// Loads a field from a type implementing `BufRead`.
    ///
    /// # Errors
    ///
    /// Returns `GridLoaderError::InvalidSymbols` before reading anything if
    /// the configured symbols cannot be told apart from each other, from
    /// whitespace or from comments.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Grid, GridLoaderError> {
        self.validate_symbols()?;
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for (line_index, line) in rdr.lines().enumerate() {
            let line = line?;
            let content = match line.find(COMMENT_MARKER) {
                Some(comment_start) => &line[..comment_start],
                None => line.as_str(),
            };

            let mut row = Vec::with_capacity(content.len());
            for (column_index, symbol) in content.chars().enumerate() {
                if symbol.is_whitespace() {
                    continue;
                }
                row.push(self.parse_symbol(symbol, line_index + 1, column_index + 1)?);
            }

            if !row.is_empty() {
                rows.push(row);
            }
        }

        let grid = Grid::from_table(&rows)?;
        log::debug!(
            "loaded {}x{} grid with {} blocked cells",
            grid.num_rows(),
            grid.num_cols(),
            grid.num_blocked()
        );
        Ok(grid)
    }

    /// Loads a field from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Grid, GridLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a field from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Grid, GridLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a field from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Grid, GridLoaderError> {
        self.from_bufread(s.as_bytes())
    }

    #[inline]
    fn validate_symbols(&self) -> Result<(), GridLoaderError> {
        let unusable = |c: char| c.is_whitespace() || c == COMMENT_MARKER;
        if self.open_symbol == self.blocked_symbol
            || unusable(self.open_symbol)
            || unusable(self.blocked_symbol)
        {
            return Err(GridLoaderError::InvalidSymbols {
                open: self.open_symbol,
                blocked: self.blocked_symbol,
            });
        }
        Ok(())
    }

    #[inline]
    fn parse_symbol(
        &self,
        symbol: char,
        line: usize,
        column: usize,
    ) -> Result<Cell, UnknownSymbolError> {
        if symbol == self.open_symbol {
            Ok(Cell::Open)
        } else if symbol == self.blocked_symbol {
            Ok(Cell::Blocked)
        } else {
            Err(UnknownSymbolError {
                line,
                column,
                symbol,
            })
        }
    }
}
