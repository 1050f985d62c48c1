#![doc = include_str!("../README.md")]

// Engine surface
pub mod error;
pub mod scissors;
pub mod types;

// Building blocks – public for tooling and experiments.
pub mod cost;
pub mod features;
pub mod image;
pub mod queue;
pub mod training;

// Tool support.
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::LivewireError;
pub use crate::features::FeatureMaps;
pub use crate::queue::BucketQueue;
pub use crate::scissors::{Scissors, ScissorsParams, SearchState};
pub use crate::training::TrainingModel;
pub use crate::types::{ParentLink, Point};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use livewire::prelude::*;
///
/// # fn main() -> Result<(), LivewireError> {
/// let (w, h) = (64usize, 48usize);
/// let rgba = vec![0u8; w * h * 4];
///
/// let mut scissors = Scissors::new(ScissorsParams::default())?;
/// scissors.set_dimensions(w, h)?;
/// scissors.set_data(&rgba)?;
/// scissors.set_point(Point::new(5, 5))?;
/// if let Some(path) = scissors.search_to(Point::new(40, 30), 100)? {
///     println!("path of {} points", path.len());
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{LivewireError, Point, Scissors, ScissorsParams};
}
