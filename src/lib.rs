pub mod astro_math;
pub mod config;
pub mod errors;
pub mod mount;
pub mod pointing;

pub use config::Config;
pub use errors::{ControlError, Result};
pub use mount::properties::{PropertyQuality, PropertySink, TracingSink};
pub use mount::{ManualDirection, Mount};
pub use pointing::{
    equatorial_to_horizontal, EquatorialPosition, GeodeticLocation, HorizontalPosition,
    MotionState, MountStatusCode, PointingStateMachine, StatusMonitor, UnparkPolicy,
};
