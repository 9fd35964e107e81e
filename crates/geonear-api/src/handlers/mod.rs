mod datasets;
mod health;
mod nearest;

pub use datasets::{get_dataset, reload_dataset};
pub use health::health_check;
pub use nearest::{handle_nearest, nearest_from_file};
