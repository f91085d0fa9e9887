use serde::{Deserialize, Serialize};

/// Points awarded per matching answer on each dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub mood: u32,
    pub time: u32,
    pub texture: u32,
    pub sweetness: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            mood: 3,
            time: 2,
            texture: 2,
            sweetness: 2,
        }
    }
}
