//! Loading options for [`WordNet`](crate::WordNet).

/// How the target ids on a hypernym line are turned into vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetIds {
    /// Look each target up in the synset-id table, like the source id.
    #[default]
    SynsetId,
    /// Use each target directly as a vertex index (position in the synset stream).
    ///
    /// Only equivalent to [`TargetIds::SynsetId`] when the synset stream lists ids `0..N` in
    /// order.
    VertexIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WordNetConfig {
    pub hypernym_targets: TargetIds,
    /// Reject hypernym graphs that do not have exactly one sink.
    ///
    /// Acyclicity is checked regardless.
    pub require_single_root: bool,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self { hypernym_targets: TargetIds::SynsetId, require_single_root: true }
    }
}
