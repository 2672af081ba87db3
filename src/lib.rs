//! adv-qc: quality control for acoustic doppler velocimeter (ADV) bursts.
//!
//! This library runs a battery of data-quality checks over one windowed
//! chunk of ADV measurements and reports a pass/fail verdict per check plus
//! an aggregate verdict for the chunk.
//!
//! # Example
//!
//! ```
//! use adv_qc::chunk::{columns, Chunk};
//! use adv_qc::quality::{check_adv, CheckContext, TestSelection};
//!
//! let chunk = Chunk::from_columns([
//!     (columns::SIGNAL_RATIO_X, vec![20.0, 22.0]),
//!     (columns::SIGNAL_RATIO_Y, vec![30.0, 28.0]),
//!     (columns::SIGNAL_RATIO_Z, vec![25.0, 25.0]),
//! ])
//! .unwrap();
//!
//! let tests = TestSelection::parse(["signal.noise_check_adv"]);
//! let failed = check_adv(&chunk, &tests, false, &CheckContext::default()).unwrap();
//! assert!(!failed);
//! ```

pub mod chunk;
pub mod cli;
pub mod config;
pub mod error;
pub mod quality;
pub mod velocity;

pub use error::{CheckError, ChunkError, ConfigError, DispatchError};
pub use quality::{
    available_checks, check_adv, check_adv_to, run_checks, CheckContext, CheckParams,
    TestSelection,
};
pub use velocity::{FixedVelocity, ReferenceVelocity};
