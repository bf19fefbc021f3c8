mod remote;
mod simulated;

pub use remote::RemoteSource;
pub use simulated::{SimulatedSource, CANONICAL_TRACKING_ID};
