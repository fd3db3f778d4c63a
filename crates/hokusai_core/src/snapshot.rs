//! The captured heatmap snapshot.

use std::path::PathBuf;

/// A heatmap snapshot produced by the capture stage.
///
/// Holds the PNG bytes and the path the PNG was written to; the file name
/// carries the run's date stamp (see [`crate::RunProfile::filename`]).
/// Created once per run; consumed by the publish stage and, when analysis is
/// enabled, by the analysis stage. The file on disk is a side effect and is
/// not cleaned up after the run.
///
/// # Examples
///
/// ```
/// use hokusai_core::Snapshot;
///
/// let snapshot = Snapshot::new(
///     vec![0x89, 0x50, 0x4E, 0x47],
///     "nikkei_heatmap_2025-01-15.png".into(),
/// );
/// assert_eq!(snapshot.bytes().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_new::new)]
pub struct Snapshot {
    /// Raw PNG bytes
    bytes: Vec<u8>,
    /// Path the PNG was written to
    path: PathBuf,
}
