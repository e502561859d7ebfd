//! Batch simulation: repeat games, summarize, report.
//!
//! ## Key Types
//!
//! - `BatchRunner`: plays `game_count` games from one master seed
//! - `BatchStats`: mean, spread and win counts for the chosen metric
//! - `BatchReport`: results plus stats; `Display` renders the text report
//!
//! ## Usage
//!
//! ```
//! use war_sim::batch::BatchRunner;
//! use war_sim::core::SimConfig;
//!
//! let config = SimConfig::new().with_game_count(3).with_seed(1);
//! let report = BatchRunner::new(config).unwrap().run();
//!
//! assert_eq!(report.results.len(), 3);
//! println!("{report}");
//! ```

pub mod runner;
pub mod stats;
pub mod report;

pub use runner::BatchRunner;
pub use stats::BatchStats;
pub use report::{format_series, BatchReport};
