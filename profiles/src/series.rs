//! Paired numeric series handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Two equal-length sequences forming an (x, y) curve. The presentation
/// layer renders these as-is; units are documented at each producer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
