// Plain-text reports for the `whatnext` binary.
//
// A pose report is a header line, one move name per line (sorted by name),
// then a blank line. Pose names are lowercased in the header:
//
//   What can I do from open position?
//   Cross Body Lead
//   ...
//   <blank>

use crate::DanceCatalog;
use crate::error::CatalogResult;

/// Pose keys reported when the user names none.
pub const DEMO_POSES: [&str; 3] = [
    "open_position",
    "closed_position",
    "half_open_left_to_right",
];

/// Render the report for one pose key.
pub fn render_pose_report(catalog: &DanceCatalog, key: &str) -> CatalogResult<String> {
    let moves = catalog.next(key)?;
    // `next` succeeded, so the key resolves.
    let pose_name = catalog
        .pose(key)
        .map(|p| p.name().to_lowercase())
        .unwrap_or_else(|| key.to_string());

    let mut out = format!("What can I do from {pose_name}?\n");
    for mv in moves {
        out.push_str(mv.name());
        out.push('\n');
    }
    out.push('\n');
    Ok(out)
}

/// Render reports for several pose keys, stopping at the first unknown key.
pub fn render_pose_reports<'a>(
    catalog: &DanceCatalog,
    keys: impl IntoIterator<Item = &'a str>,
) -> CatalogResult<String> {
    keys.into_iter()
        .map(|key| render_pose_report(catalog, key))
        .collect()
}

/// Render a routine: its name as a header, then its moves in order.
pub fn render_routine(catalog: &DanceCatalog, key: &str) -> CatalogResult<String> {
    let moves = catalog.routine_moves(key)?;
    let name = catalog.routine(key).map(|r| r.name.as_str()).unwrap_or(key);

    let mut out = format!("{name}:\n");
    for (step, mv) in moves.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", step + 1, mv.name()));
    }
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_catalog;

    #[test]
    fn pose_report_layout() {
        let catalog = default_catalog();
        let report = render_pose_report(&catalog, "open_position").unwrap();
        assert_eq!(
            report,
            "What can I do from open position?\n\
             Cross Body Lead\n\
             Follower Left Turn\n\
             Follower Right Turn\n\
             Rejection\n\
             \n"
        );
    }

    #[test]
    fn pose_with_no_moves_prints_header_only() {
        let catalog = default_catalog();
        let report = render_pose_report(&catalog, "hammerlock").unwrap();
        assert_eq!(report, "What can I do from hammerlock?\n\n");
    }

    #[test]
    fn reports_stop_at_unknown_key() {
        let catalog = default_catalog();
        assert!(render_pose_reports(&catalog, ["open_position", "dip"]).is_err());
        let both = render_pose_reports(&catalog, ["handshake", "hammerlock"]).unwrap();
        assert_eq!(
            both,
            "What can I do from handshake?\n\nWhat can I do from hammerlock?\n\n"
        );
    }

    #[test]
    fn routine_report_numbers_steps() {
        let catalog = default_catalog();
        let report = render_routine(&catalog, "follower_right_turn_to_cbl").unwrap();
        assert_eq!(
            report,
            "Follower Right Turn To Cross Body Lead:\n\
             \x20 1. Follower Right Turn\n\
             \x20 2. Scoop\n\
             \x20 3. Cross Body Lead\n\
             \n"
        );
    }
}
