use crate::io::read_optional;
use crate::paths;
use std::path::Path;

/// Load the mission document for the project at `root`.
///
/// Candidates are tried in [`paths::MISSION_CANDIDATES`] order and the first
/// existing file wins, even when it cannot be read. An empty string means no
/// usable mission document.
pub fn read_mission_document(root: &Path) -> String {
    if let Some(candidate) = paths::mission_candidates(root)
        .into_iter()
        .find(|p| p.is_file())
    {
        tracing::debug!(path = %candidate.display(), "mission document found");
        return read_optional(&candidate).unwrap_or_default();
    }
    tracing::debug!(root = %root.display(), "no mission document");
    String::new()
}
