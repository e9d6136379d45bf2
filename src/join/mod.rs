//! Output schema composition for stream joins.

pub mod errors;
pub mod params;

pub use errors::{JoinError, JoinSide};
pub use params::{JoinParams, JoinParamsFactory};
