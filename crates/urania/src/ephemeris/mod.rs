pub mod adapter;
pub mod oracle;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use oracle::{EphemerisError, EphemerisOracle};
pub use types::{BodyPosition, GeoLocation, HouseCusps};
