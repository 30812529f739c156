//! Built-in quantity kinds

mod amount_of_substance;
mod area;
mod duration;
mod length;
mod mass;
mod specific_entropy;
mod speed;
mod volume;

pub use amount_of_substance::{AmountOfSubstance, AmountOfSubstanceUnit};
pub use area::{Area, AreaUnit};
pub use duration::{Duration, DurationUnit};
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use specific_entropy::{SpecificEntropy, SpecificEntropyUnit};
pub use speed::{Speed, SpeedUnit};
pub use volume::{Volume, VolumeUnit};
