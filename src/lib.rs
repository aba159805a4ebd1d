pub mod color;
pub mod css;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod stops;
pub mod tailwind;

pub use error::{Error, Result};
pub use gradient::{Center, GradientKind, GradientSpec, Interpolation, RadialShape, RadialSize};
pub use stops::{ColorStop, StopChange, StopId, StopList, MIN_STOPS};

// Re-export the color validation error alongside the helper itself
pub use color::ColorError;
