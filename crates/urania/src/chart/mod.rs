pub mod data;
pub mod error;
pub mod point;
pub mod request;
pub mod resolution;

pub use data::ChartData;
pub use error::ChartError;
pub use point::ChartPoint;
pub use request::{ChartKind, ChartRequest, LocationInput, ResolvedRequest};
pub use resolution::Resolution;
