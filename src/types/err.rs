//! Error types used in the library.
//!
//! - Malformed input is rejected when a formula is built, and is not recoverable.
//! - Unsatisfiability is *not* an error, and is instead reported through a [Report](crate::reports::Report).
//! - A few errors note violations of internal invariants, e.g. an atom valued both true and false.
//!   These are not expected during use.
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
    Search(SearchError),
    Sudoku(SudokuError),
    Valuation(ValuationError),

    /// A valuation claimed to satisfy the formula fails to satisfy some clause.
    InvalidSolution,

    /// Some action was requested of a context in a state which does not support the action.
    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "build error: {e:?}"),
            Self::Parse(e) => write!(f, "parse error: {e:?}"),
            Self::Search(e) => write!(f, "search error: {e:?}"),
            Self::Sudoku(e) => write!(f, "sudoku error: {e:?}"),
            Self::Valuation(e) => write!(f, "valuation error: {e:?}"),
            Self::InvalidSolution => write!(f, "invalid solution"),
            Self::InvalidState => write!(f, "invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An empty clause was given as input.
    EmptyClause,

    /// A literal of zero was given as input.
    /// Zero terminates clauses in DIMACS, and does not name an atom.
    ZeroLiteral,

    /// An atom greater than the bound of the formula.
    AtomOutOfBounds(Atom),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is not an integer literal, at a specific line.
    Literal(usize),

    /// The input ended inside a clause, without a terminating `0`.
    MissingTerminator,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors which interrupt a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// The search would descend past the configured depth limit.
    DepthExhausted(usize),

    /// The configured time limit has passed.
    TimeUp,
}

impl From<SearchError> for ErrorKind {
    fn from(e: SearchError) -> Self {
        ErrorKind::Search(e)
    }
}

/// Errors when translating a puzzle to clauses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {
    /// The grid has a size the cell encoding does not support.
    UnsupportedGridSize(usize),

    /// The length of a puzzle string does not correspond to any known grid.
    PuzzleLength(usize),

    /// An unexpected character at some index of a puzzle string.
    Cell(usize, char),
}

impl From<SudokuError> for ErrorKind {
    fn from(e: SudokuError) -> Self {
        ErrorKind::Sudoku(e)
    }
}

/// Errors in a valuation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValuationError {
    /// An attempt to value an atom with the opposite of its current value.
    Conflict(Atom),

    /// An atom outside of the valuation.
    UnknownAtom(Atom),
}

impl From<ValuationError> for ErrorKind {
    fn from(e: ValuationError) -> Self {
        ErrorKind::Valuation(e)
    }
}
