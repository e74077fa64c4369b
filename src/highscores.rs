//! Persisted best score
//!
//! A single integer stored as JSON. Read once at startup, written only
//! when a finished run beats it. Missing or corrupt files start fresh
//! rather than erroring.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// The stored best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u64,
}

impl BestScore {
    /// Default file name, resolved relative to the working directory
    pub const FILE_NAME: &'static str = "runner_best_score.json";

    /// Create an empty record
    pub fn new() -> Self {
        Self { score: 0 }
    }

    /// True if `score` would beat the stored best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.score
    }

    /// Record a finished run. Returns true when it set a new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if self.qualifies(score) {
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Load from disk, falling back to a fresh record on any problem
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(best) => {
                    log::info!("Loaded best score from {}", path.display());
                    best
                }
                Err(e) => {
                    log::warn!("Corrupt best score file, starting fresh: {}", e);
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No best score found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save to disk. Failures are logged, not fatal.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save best score: {}", e);
                } else {
                    log::info!("Best score saved ({})", self.score);
                }
            }
            Err(e) => log::warn!("Failed to serialize best score: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("runner_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_fresh_record_is_zero() {
        let best = BestScore::new();
        assert_eq!(best.score, 0);
    }

    #[test]
    fn test_qualifies_only_above_current() {
        let best = BestScore { score: 100 };
        assert!(best.qualifies(101));
        assert!(!best.qualifies(100));
        assert!(!best.qualifies(99));
    }

    #[test]
    fn test_zero_score_never_qualifies() {
        let best = BestScore::new();
        assert!(!best.qualifies(0));
    }

    #[test]
    fn test_submit_updates_on_new_best() {
        let mut best = BestScore::new();
        assert!(best.submit(50));
        assert_eq!(best.score, 50);
        assert!(!best.submit(30));
        assert_eq!(best.score, 50);
        assert!(best.submit(51));
        assert_eq!(best.score, 51);
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let path = temp_path("missing_best");
        let _ = std::fs::remove_file(&path);
        assert_eq!(BestScore::load(&path), BestScore::new());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_path("roundtrip_best");
        let best = BestScore { score: 1234 };
        best.save(&path);
        assert_eq!(BestScore::load(&path), best);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = temp_path("corrupt_best");
        std::fs::write(&path, "not json at all").unwrap();
        assert_eq!(BestScore::load(&path), BestScore::new());
        let _ = std::fs::remove_file(&path);
    }
}
