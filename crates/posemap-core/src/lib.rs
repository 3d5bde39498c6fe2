pub mod config;
pub mod consts;
pub mod dataset;
pub mod error;
pub mod heatmap;
pub mod io;
pub mod labels;
pub mod record;
pub mod sampler;
