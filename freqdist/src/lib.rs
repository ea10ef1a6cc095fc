//! This crate builds classic frequency distribution tables from a sample of
//! observations.
//!
//! The number of classes is chosen with Sturges' rule and the class width is
//! derived from the range of the sample. Each class is reported with its
//! frequency, a probability rounded to two decimals, the cumulative
//! probability and a random-number interval within `1..=100` which can be used
//! to draw from the distribution in a simulation.
//!
//! ```
//! use freqdist::distribute;
//!
//! let report = distribute(&[10.0, 12.0, 12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0])
//!     .unwrap();
//!
//! for row in &report {
//!     println!(
//!         "{} {} {} {} {} {}",
//!         row.number(),
//!         row.bin(),
//!         row.frequency(),
//!         row.probability(),
//!         row.cumulative(),
//!         row.interval()
//!     );
//! }
//!
//! assert_eq!(report.rows().last().map(|r| r.interval().upper()), Some(100));
//! ```

mod bins;
mod errors;
mod interval;
mod probability;
mod report;
mod sample;
mod stats;

pub use bins::{Bin, Bins};
pub use errors::Error;
pub use interval::{RandomInterval, DRAW_MAX, DRAW_MIN};
pub use probability::Probability;
pub use report::{distribute, FrequencyRow, Report};
pub use sample::Sample;
pub use stats::{class_width, sturges, SummaryStats};
