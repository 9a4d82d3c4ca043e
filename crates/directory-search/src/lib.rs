pub mod location;
pub mod origin;
pub mod session;

pub use location::{FixedLocation, LocationError, LocationProvider};
pub use origin::resolve_origin;
pub use session::{SearchHandle, SearchOutcome, SearchSession, SearchState};
