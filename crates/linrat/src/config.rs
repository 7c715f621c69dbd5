use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LinAlgError, Result};

/// Shape and backing of a real matrix built through [`crate::factory::build_matrix`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    pub rows: usize,
    pub cols: usize,

    #[serde(flatten)]
    pub kind: MatrixKind,
}

/// Supported backings and their parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatrixKind {
    Dense,
    Sparse {
        #[serde(default)]
        default_value: f64,
        /// Unbounded sparse matrices ignore `rows`/`cols` and grow on write.
        #[serde(default = "default_bounded")]
        bounded: bool,
    },
}

fn default_bounded() -> bool {
    true
}

impl Default for MatrixKind {
    fn default() -> Self {
        MatrixKind::Dense
    }
}

impl FromStr for MatrixKind {
    type Err = LinAlgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dense" => Ok(MatrixKind::Dense),
            "sparse" => Ok(MatrixKind::Sparse {
                default_value: 0.0,
                bounded: true,
            }),
            "sparse-unbounded" => Ok(MatrixKind::Sparse {
                default_value: 0.0,
                bounded: false,
            }),
            _ => Err(LinAlgError::Config(format!(
                "Unknown matrix kind: {}. Expected one of dense, sparse, sparse-unbounded",
                s
            ))),
        }
    }
}

impl MatrixConfig {
    pub fn new(rows: usize, cols: usize, kind: MatrixKind) -> Self {
        Self { rows, cols, kind }
    }

    /// Parse and validate a JSON config such as
    /// `{"rows": 3, "cols": 3, "kind": "sparse", "default_value": 0.0}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MatrixConfig =
            serde_json::from_str(json).map_err(|e| LinAlgError::Config(e.to_string()))?;
        config.validate()?;
        log::debug!("loaded matrix config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| LinAlgError::Config(e.to_string()))
    }

    /// Dense and bounded sparse matrices need a non-empty declared shape.
    pub fn validate(&self) -> Result<()> {
        let needs_shape = match self.kind {
            MatrixKind::Dense => true,
            MatrixKind::Sparse { bounded, .. } => bounded,
        };
        if needs_shape && (self.rows == 0 || self.cols == 0) {
            return Err(LinAlgError::Config(format!(
                "rows and cols must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            kind: MatrixKind::Dense,
        }
    }
}
