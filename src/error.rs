//! Error types.
//!
//! Every fallible operation in the crate returns [`Result`]. Nothing is recovered internally:
//! construction of a [`WordNet`](crate::WordNet) either yields a fully validated value or one of
//! these errors, and query errors are handed back to the caller unchanged.

use std::fmt;
use std::io;
use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which input stream a parse error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Synsets,
    Hypernyms,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Synsets => f.write_str("synsets"),
            Stream::Hypernyms => f.write_str("hypernyms"),
        }
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad argument or malformed / unreadable input.
    InvalidInput,
    /// The hypernym graph is not a rooted DAG.
    Structural,
    /// A broken internal invariant.
    Internal,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {what}: {source}")]
    Io {
        what: String,
        #[source]
        source: io::Error,
    },

    #[error("{stream} line {line}: {message}")]
    Parse { stream: Stream, line: usize, message: String },

    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("vertex set must not be empty")]
    EmptyVertexSet,

    #[error("not a WordNet noun: {0:?}")]
    UnknownNoun(String),

    #[error("unknown synset id {0}")]
    UnknownSynset(u64),

    #[error("duplicate synset id {0}")]
    DuplicateSynset(u64),

    #[error("hypernym graph contains a cycle: {0:?}")]
    Cycle(Vec<usize>),

    #[error("hypernym graph must have exactly one root, found {} ({:?})", .0.len(), .0)]
    RootCount(Vec<usize>),

    #[error("{0:?} and {1:?} have no common ancestor")]
    NoCommonAncestor(String, String),

    #[error("noun list must not be empty")]
    EmptyNounList,

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Cycle(_) | Error::RootCount(_) => ErrorKind::Structural,
            Error::Internal(_) => ErrorKind::Internal,
            _ => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn parse(stream: Stream, line: usize, message: impl Into<String>) -> Self {
        Error::Parse { stream, line, message: message.into() }
    }

    pub(crate) fn io(what: impl Into<String>, source: io::Error) -> Self {
        Error::Io { what: what.into(), source }
    }

    pub(crate) fn io_path(path: &Path, source: io::Error) -> Self {
        Error::io(path.display().to_string(), source)
    }
}
