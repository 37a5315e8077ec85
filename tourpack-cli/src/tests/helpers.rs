//! Test helpers for writing catalogue files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

/// Temporary directory holding a catalogue file.
pub(super) struct CatalogueWorkspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl CatalogueWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// Write the two-tour sample catalogue and return its path.
    pub(super) fn sample(&self) -> Utf8PathBuf {
        let path = self.root.join("catalogue.json");
        write_utf8(&path, sample_catalogue().to_string().as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Region R1 with tours A (100, 2 days, X=10 Y=20) and B (50, 1 day, Y=20 Z=5),
/// plus an empty region R2.
pub(super) fn sample_catalogue() -> serde_json::Value {
    json!({
        "regions": [
            { "id": "R1", "name": "Lakes" },
            { "id": "R2" }
        ],
        "tours": [
            { "id": 1, "region": "R1", "name": "A", "cost": 100, "duration_days": 2 },
            { "id": 2, "region": "R1", "name": "B", "cost": 50, "duration_days": 1 }
        ],
        "attractions": [
            { "id": 1, "name": "X", "cultural_value": 10 },
            { "id": 2, "name": "Y", "cultural_value": 20 },
            { "id": 3, "name": "Z", "cultural_value": 5 }
        ],
        "relations": [
            { "tour": 1, "attraction": 1 },
            { "tour": 1, "attraction": 2 },
            { "tour": 2, "attraction": 2 },
            { "tour": 2, "attraction": 3 }
        ]
    })
}
