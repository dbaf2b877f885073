pub mod machine;
pub mod position;
pub mod state;
pub mod status;
pub mod transform;

pub use machine::{PointingStateMachine, DEFAULT_SLEW_RATE};
pub use position::{EquatorialPosition, GeodeticLocation, HorizontalPosition};
pub use state::{MotionState, UnparkPolicy};
pub use status::{MountStatusCode, StatusMonitor};
pub use transform::equatorial_to_horizontal;
