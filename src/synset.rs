//! Synset records, the synset-id table and the noun index.

use std::io::BufRead;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result, Stream};

/// One line of the synset stream: a vertex and its synonymous nouns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    id: u64,
    vertex: usize,
    nouns: Vec<String>,
}

impl Synset {
    /// External id (first column of the synset stream).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Vertex in the hypernym graph (position in the synset stream).
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// Nouns in input order.
    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// Nouns joined with single spaces, as they appeared in the input.
    pub fn joined(&self) -> String {
        self.nouns.join(" ")
    }
}

/// All synsets, addressable by external id and by vertex.
#[derive(Debug, Clone, Default)]
pub struct SynsetTable {
    by_vertex: Vec<Synset>,
    by_id: FxHashMap<u64, usize>,
}

impl SynsetTable {
    /// Parse `<id>,<noun noun ...>[,<gloss>...]` lines.
    ///
    /// Vertices are assigned in line order starting at 0. Blank lines are skipped and do not
    /// take a vertex. Fields after the second are ignored.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = SynsetTable::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(format!("synsets stream line {}", idx + 1), e))?;
            if line.trim().is_empty() {
                continue;
            }
            table.push_line(&line, idx + 1)?;
        }
        Ok(table)
    }

    fn push_line(&mut self, line: &str, lineno: usize) -> Result<()> {
        let mut fields = line.splitn(3, ',');
        let (Some(id_field), Some(noun_field)) = (fields.next(), fields.next()) else {
            return Err(Error::parse(Stream::Synsets, lineno, "expected `<id>,<nouns>,<gloss>`"));
        };
        let id = parse_id(id_field, Stream::Synsets, lineno)?;
        let nouns: Vec<String> =
            noun_field.split(' ').filter(|s| !s.is_empty()).map(str::to_owned).collect();
        if nouns.is_empty() {
            return Err(Error::parse(Stream::Synsets, lineno, format!("synset {id} has no nouns")));
        }

        let vertex = self.by_vertex.len();
        if self.by_id.insert(id, vertex).is_some() {
            return Err(Error::DuplicateSynset(id));
        }
        self.by_vertex.push(Synset { id, vertex, nouns });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_vertex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_vertex.is_empty()
    }

    /// Synset with external id `id`.
    pub fn get(&self, id: u64) -> Option<&Synset> {
        self.by_id.get(&id).map(|&v| &self.by_vertex[v])
    }

    /// Vertex of the synset with external id `id`.
    pub fn vertex_of(&self, id: u64) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    pub fn by_vertex(&self, vertex: usize) -> Option<&Synset> {
        self.by_vertex.get(vertex)
    }

    /// Synsets in vertex order.
    pub fn iter(&self) -> std::slice::Iter<'_, Synset> {
        self.by_vertex.iter()
    }
}

/// Noun → vertices of every synset containing it.
#[derive(Debug, Clone, Default)]
pub struct NounIndex {
    vertices: FxHashMap<String, Vec<usize>>,
}

impl NounIndex {
    pub fn build(table: &SynsetTable) -> Self {
        let mut vertices: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        // Vertices are visited in ascending order, so each list comes out sorted.
        for synset in table.iter() {
            for noun in synset.nouns() {
                let list = vertices.entry(noun.clone()).or_default();
                if list.last() != Some(&synset.vertex) {
                    list.push(synset.vertex);
                }
            }
        }
        Self { vertices }
    }

    /// Vertices of the synsets containing `noun`, ascending.
    pub fn get(&self, noun: &str) -> Option<&[usize]> {
        self.vertices.get(noun).map(Vec::as_slice)
    }

    pub fn contains(&self, noun: &str) -> bool {
        self.vertices.contains_key(noun)
    }

    /// Distinct nouns. The order is arbitrary but the same on every call.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

pub(crate) fn parse_id(field: &str, stream: Stream, lineno: usize) -> Result<u64> {
    field
        .parse::<u64>()
        .map_err(|_| Error::parse(stream, lineno, format!("non-numeric id {field:?}")))
}
