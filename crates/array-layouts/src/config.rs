use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs for the four demonstrations. The defaults reproduce the canonical
/// run: `[1..9]`, last element, a 3-element suffix and two 3x3 grids.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub numbers: Vec<i32>,
    /// `1` selects the last element.
    pub from_end_offset: usize,
    pub suffix_len: usize,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub ragged_rows: usize,
    pub ragged_row_len: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: (1..=9).collect(),
            from_end_offset: 1,
            suffix_len: 3,
            grid_rows: 3,
            grid_cols: 3,
            ragged_rows: 3,
            ragged_row_len: 3,
        }
    }
}

pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
