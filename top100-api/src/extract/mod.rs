//! HTML table extraction
//!
//! One module per upstream page. The pipelines are deliberately independent:
//! each knows the shape of exactly one page and nothing else.

pub mod population;
pub mod songs;
