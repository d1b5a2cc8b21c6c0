pub mod check;
pub mod run;
pub mod simulate;

use std::path::Path;

use posture_core::Roster;

/// Read and decode a roster file.
fn load_roster(path: &Path) -> Result<Roster, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read roster {}: {e}", path.display()))?;
    let roster =
        Roster::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), participants = roster.len(), "roster loaded");
    Ok(roster)
}
