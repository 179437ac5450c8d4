//! Tilecode - Library for identifying Tantrix tiles from edge-color observations
//!
//! This library provides functionality to:
//! - Validate eight-segment edge-color observations with ambiguous entries
//! - Normalize observations into candidate color sequences
//! - Match candidates against shape-class templates under rotation
//! - Canonicalize six-edge codes and look them up in the 56-tile catalog
//! - Run batches from JSON Lines input and report the recognition ratio

pub mod canonical;
pub mod catalog;
pub mod cli;
pub mod code;
pub mod color;
pub mod config;
pub mod identify;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod observation;
pub mod parser;
pub mod report;
pub mod template;
