//! The WordNet facade: noun-level distance queries over the hypernym DAG.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::{TargetIds, WordNetConfig};
use crate::dag;
use crate::error::{Error, Result, Stream};
use crate::graph::Digraph;
use crate::sap::{AncestralPath, Sap};
use crate::synset::{parse_id, NounIndex, Synset, SynsetTable};

/// An immutable, validated WordNet.
///
/// Construction reads the synset and hypernym streams once, builds the hypernym digraph and
/// checks that it is acyclic with a single root. Afterwards every query is read-only, so a
/// `WordNet` can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct WordNet {
    synsets: SynsetTable,
    nouns: NounIndex,
    graph: Digraph,
    root: Option<usize>,
}

impl WordNet {
    /// Load from a synsets file and a hypernyms file with the default configuration.
    pub fn open(synsets: impl AsRef<Path>, hypernyms: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(synsets, hypernyms, WordNetConfig::default())
    }

    pub fn open_with(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
        config: WordNetConfig,
    ) -> Result<Self> {
        let (synsets, hypernyms) = (synsets.as_ref(), hypernyms.as_ref());
        let s = File::open(synsets).map_err(|e| Error::io_path(synsets, e))?;
        let h = File::open(hypernyms).map_err(|e| Error::io_path(hypernyms, e))?;
        debug!(synsets = %synsets.display(), hypernyms = %hypernyms.display(), "loading wordnet");
        Self::from_readers(BufReader::new(s), BufReader::new(h), config)
    }

    /// Build from any two line-oriented readers.
    pub fn from_readers<S: BufRead, H: BufRead>(
        synsets: S,
        hypernyms: H,
        config: WordNetConfig,
    ) -> Result<Self> {
        let synsets = SynsetTable::parse(synsets)?;
        let nouns = NounIndex::build(&synsets);
        debug!(synsets = synsets.len(), nouns = nouns.len(), "parsed synsets");

        let mut graph = Digraph::new(synsets.len());
        add_hypernyms(&mut graph, hypernyms, &synsets, config.hypernym_targets)?;
        debug!(edges = graph.edge_count(), "parsed hypernyms");

        let root = if config.require_single_root {
            Some(dag::validate_rooted_dag(&graph)?)
        } else {
            dag::validate_acyclic(&graph)?;
            None
        };
        debug!(root = ?root, "validated hypernym graph");

        Ok(Self { synsets, nouns, graph, root })
    }

    /// Every distinct noun. The order is arbitrary but stable for a given `WordNet`.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.nouns.nouns()
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains(word)
    }

    /// Vertices of the synsets containing `noun`, ascending.
    pub fn synsets_of(&self, noun: &str) -> Result<&[usize]> {
        self.nouns.get(noun).ok_or_else(|| Error::UnknownNoun(noun.to_owned()))
    }

    pub fn synset(&self, vertex: usize) -> Option<&Synset> {
        self.synsets.by_vertex(vertex)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// The unique sink of the hypernym graph (e.g. "entity"), when single-root validation ran.
    pub fn root(&self) -> Option<&Synset> {
        self.root.and_then(|v| self.synsets.by_vertex(v))
    }

    pub fn digraph(&self) -> &Digraph {
        &self.graph
    }

    /// A SAP engine over the hypernym graph, for vertex-level queries.
    pub fn sap_engine(&self) -> Sap<'_, Digraph> {
        Sap::new(&self.graph)
    }

    /// Length of the shortest ancestral path between any synset of `a` and any synset of `b`.
    pub fn distance(&self, a: &str, b: &str) -> Result<usize> {
        Ok(self.shortest(a, b)?.length)
    }

    /// Nouns of the common ancestor on a shortest ancestral path between `a` and `b`,
    /// space-joined in input order.
    pub fn sap(&self, a: &str, b: &str) -> Result<String> {
        let ancestor = self.shortest(a, b)?.ancestor;
        let synset = self.synsets.by_vertex(ancestor).ok_or_else(|| {
            Error::Internal(format!("ancestor vertex {ancestor} has no synset"))
        })?;
        Ok(synset.joined())
    }

    fn shortest(&self, a: &str, b: &str) -> Result<AncestralPath> {
        let va = self.synsets_of(a)?;
        let vb = self.synsets_of(b)?;
        self.sap_engine()
            .shortest_multi(va, vb)?
            .ok_or_else(|| Error::NoCommonAncestor(a.to_owned(), b.to_owned()))
    }
}

/// Parse `<source-id>,<target-id>,...` lines into edges of `graph`.
fn add_hypernyms<R: BufRead>(
    graph: &mut Digraph,
    reader: R,
    synsets: &SynsetTable,
    targets: TargetIds,
) -> Result<()> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(format!("hypernyms stream line {}", idx + 1), e))?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        // Trailing empty fields are dropped (`1,` lists no hypernyms); inner ones are errors.
        let mut fields = line.trim_end_matches(',').split(',');
        let source_id = parse_id(fields.next().unwrap_or_default(), Stream::Hypernyms, lineno)?;
        let source = synsets.vertex_of(source_id).ok_or(Error::UnknownSynset(source_id))?;

        for field in fields {
            let target_id = parse_id(field, Stream::Hypernyms, lineno)?;
            let target = match targets {
                TargetIds::SynsetId => {
                    synsets.vertex_of(target_id).ok_or(Error::UnknownSynset(target_id))?
                }
                // Out-of-range indices are rejected by `add_edge`.
                TargetIds::VertexIndex => usize::try_from(target_id).unwrap_or(usize::MAX),
            };
            graph.add_edge(source, target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn build(synsets: &str, hypernyms: &str) -> Result<WordNet> {
        WordNet::from_readers(synsets.as_bytes(), hypernyms.as_bytes(), WordNetConfig::default())
    }

    fn is_send_sync<T: Send + Sync>() {}

    #[test]
    fn wordnet_is_shareable() {
        is_send_sync::<WordNet>();
    }

    #[test]
    fn chain_queries() {
        let wn = build("0,a,x\n1,b,x\n2,c,x\n", "0,1\n1,2\n").unwrap();
        assert_eq!(wn.synset_count(), 3);
        assert_eq!(wn.root().unwrap().nouns(), &["c".to_string()]);
        assert_eq!(wn.distance("a", "b").unwrap(), 1);
        assert_eq!(wn.distance("a", "c").unwrap(), 2);
        assert_eq!(wn.sap("a", "c").unwrap(), "c");
        assert_eq!(wn.sap("a", "b").unwrap(), "b");
    }

    #[test]
    fn unknown_noun_fails() {
        let wn = build("0,a,x\n1,b,x\n", "0,1\n").unwrap();
        assert!(matches!(wn.distance("a", "zebra"), Err(Error::UnknownNoun(n)) if n == "zebra"));
        assert!(matches!(wn.sap("zebra", "a"), Err(Error::UnknownNoun(_))));
        assert!(wn.synsets_of("zebra").is_err());
    }

    #[test]
    fn source_only_line_adds_no_edges() {
        let wn = build("0,a,x\n1,b,x\n", "0,1\n1\n").unwrap();
        assert_eq!(wn.digraph().edge_count(), 1);
    }

    #[test]
    fn trailing_commas_are_ignored() {
        let wn = build("0,a,x\n1,b,x\n", "0,1,\n1,\n").unwrap();
        assert_eq!(wn.digraph().edge_count(), 1);
        assert_eq!(wn.distance("a", "b").unwrap(), 1);

        let err = build("0,a,x\n1,b,x\n", "0,,1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { stream: Stream::Hypernyms, line: 1, .. }), "{err}");
    }

    #[test]
    fn unreadable_stream_reports_line() {
        let err = WordNet::from_readers(
            "0,a,x\n1,b,x\n".as_bytes(),
            &b"0,1\n1,\xff\n"[..],
            WordNetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "{err}");
        assert!(err.to_string().contains("hypernyms stream line 2"), "{err}");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn hypernym_parse_errors() {
        let err = build("0,a,x\n1,b,x\n", "0,one\n").unwrap_err();
        assert!(matches!(err, Error::Parse { stream: Stream::Hypernyms, line: 1, .. }), "{err}");

        let err = build("0,a,x\n1,b,x\n", "7,1\n").unwrap_err();
        assert!(matches!(err, Error::UnknownSynset(7)), "{err}");

        let err = build("0,a,x\n1,b,x\n", "0,9\n").unwrap_err();
        assert!(matches!(err, Error::UnknownSynset(9)), "{err}");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn targets_translate_through_ids_by_default() {
        // Ids are not 0..N: the target 30 must resolve to vertex 1.
        let synsets = "10,a,x\n30,b,x\n";
        let wn = build(synsets, "10,30\n").unwrap();
        assert_eq!(wn.digraph().adj(0).unwrap(), &[1]);
        assert_eq!(wn.sap("a", "a").unwrap(), "a");
        assert_eq!(wn.distance("a", "b").unwrap(), 1);

        // Raw vertex indices reject 30 as out of range.
        let raw = WordNetConfig { hypernym_targets: TargetIds::VertexIndex, ..Default::default() };
        let err = WordNet::from_readers(synsets.as_bytes(), "10,30\n".as_bytes(), raw).unwrap_err();
        assert!(matches!(err, Error::VertexOutOfRange { vertex: 30, vertex_count: 2 }), "{err}");

        // ...and accept 1.
        let wn = WordNet::from_readers(synsets.as_bytes(), "10,1\n".as_bytes(), raw).unwrap();
        assert_eq!(wn.distance("a", "b").unwrap(), 1);
    }

    #[test]
    fn forest_allowed_when_single_root_not_required() {
        let config = WordNetConfig { require_single_root: false, ..Default::default() };
        let wn = WordNet::from_readers("0,a,x\n1,b,x\n".as_bytes(), "".as_bytes(), config)
            .unwrap();
        assert!(wn.root().is_none());
        assert!(matches!(wn.distance("a", "b"), Err(Error::NoCommonAncestor(_, _))));

        // Cycles are still rejected.
        let err = WordNet::from_readers("0,a,x\n1,b,x\n".as_bytes(), "0,1\n1,0\n".as_bytes(), config)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
    }
}
