pub mod config;
pub mod error;
pub mod formats;
pub mod gen;
pub mod geom;
pub mod oracle;
pub mod scoring;

pub use config::Config;
pub use error::{RangebenchError, Result};
pub use geom::{Circle, Point};
pub use oracle::{compute_truth, TruthSet};
pub use scoring::{score_results, ScoreReport};
