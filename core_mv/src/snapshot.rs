//! What survives a host-driven teardown/recreate cycle.

use serde::{Deserialize, Serialize};

/// Persisted view state, restored verbatim. The decode table is not part of
/// the snapshot; the host must re-supply it before the first redraw after a
/// restore.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSnapshot {
    pub maze: String,
    pub robot_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_serde() {
        let snapshot = MazeSnapshot {
            maze: "UUEU".to_string(),
            robot_index: 2,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: MazeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
