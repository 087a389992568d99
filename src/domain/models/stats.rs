use serde::{Deserialize, Serialize};

/// Aggregate view over all stored records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStats {
    pub total_files: u64,
    pub total_size: u64,
}
