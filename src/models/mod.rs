pub mod feature;
pub mod raw_hit;
pub mod search_result;

pub use feature::{FeatureAttributes, FeatureRecord};
pub use raw_hit::RawHit;
pub use search_result::NormalizedResult;
