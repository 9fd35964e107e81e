mod request;
mod response;

pub use request::NearestRequest;
pub use response::{DatasetInfo, HealthResponse};
