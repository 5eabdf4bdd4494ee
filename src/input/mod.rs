// src/input/mod.rs

//! Reading step instructions into dependency edges.

pub mod parser;

use std::fs;
use std::path::Path;

pub use parser::{parse_edges, parse_line};

use crate::errors::Result;
use crate::types::Edge;

/// Read and parse an instruction file.
pub fn load_edges(path: impl AsRef<Path>) -> Result<Vec<Edge>> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_edges(&contents)
}
