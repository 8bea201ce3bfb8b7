//! # wordnet-sap
//!
//! Semantic distance over the WordNet noun hierarchy.
//!
//! WordNet groups nouns into synsets and links each synset to its hypernyms (more general
//! synsets), forming a DAG rooted at a single synset such as "entity". The distance between two
//! nouns is the length of the shortest *ancestral path*: up from a synset of one noun to a common
//! ancestor, then down to a synset of the other.
//!
//! - [`Digraph`] / [`GraphRef`]: the graph and the adapter trait the algorithms run on.
//! - [`BreadthFirstPaths`]: multi-source BFS.
//! - [`Sap`]: shortest ancestral paths between vertex sets.
//! - [`WordNet`]: parsing, validation and noun-level queries.
//! - [`Outcast`]: the least related noun of a list.
//!
//! ```
//! use wordnet_sap::{Outcast, WordNet, WordNetConfig};
//!
//! let synsets = "0,a,x\n1,b,x\n2,c,x\n3,d,x\n";
//! let hypernyms = "0,1\n0,3\n1,2\n3,2\n";
//! let wn = WordNet::from_readers(synsets.as_bytes(), hypernyms.as_bytes(), WordNetConfig::default())?;
//!
//! assert_eq!(wn.distance("b", "d")?, 2);
//! assert_eq!(wn.sap("b", "d")?, "c");
//! // Sums are 3, 2, 3: the earliest maximum wins.
//! assert_eq!(Outcast::new(&wn).outcast(&["a", "b", "c"])?, "a");
//! # Ok::<(), wordnet_sap::Error>(())
//! ```

pub mod bfs;
pub mod config;
pub mod dag;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod sap;
pub mod synset;
pub mod wordnet;

pub use bfs::BreadthFirstPaths;
pub use config::{TargetIds, WordNetConfig};
pub use error::{Error, ErrorKind, Result};
pub use graph::{Digraph, GraphRef};
pub use outcast::Outcast;
pub use sap::{AncestralPath, Sap, SapScratch};
pub use synset::{NounIndex, Synset, SynsetTable};
pub use wordnet::WordNet;
