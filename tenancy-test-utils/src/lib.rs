pub mod builders;
pub mod clock;
pub mod fixtures;

pub use builders::{app_sequence, seven_app_infra, InfraBuilder};
pub use clock::{FixedClock, SteppingClock};
