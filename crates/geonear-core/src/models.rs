pub mod dataset;
pub mod point;
pub mod query;

pub use dataset::{Dataset, DatasetMeta, ValidationMode};
pub use point::{Coordinates, GeoPoint, Location, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use query::{round_km, NearestMatch, RankedResult, DEFAULT_TOP_K};
