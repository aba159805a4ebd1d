//! Gradient description model
//!
//! The types here mirror the CSS gradient grammar: a gradient kind plus the
//! knobs that apply to it (direction or start angle, radial ending shape
//! and size, center position, interpolation hint) and the stop collection
//! from [`crate::stops`].
//!
//! A [`GradientSpec`] is transient editing state. It lives for one
//! composition session, is mutated one field at a time, and is never
//! persisted.

use std::fmt;

use crate::css;
use crate::stops::StopList;
use crate::tailwind;

/// Gradient kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKind {
    /// Color ramp along a straight line at `angle` degrees
    #[default]
    Linear,
    /// Color ramp radiating from `center`
    Radial,
    /// Color sweep rotating around `center`, starting at `angle` degrees
    Conic,
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientKind::Linear => write!(f, "linear"),
            GradientKind::Radial => write!(f, "radial"),
            GradientKind::Conic => write!(f, "conic"),
        }
    }
}

/// Ending shape of a radial gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RadialShape {
    #[default]
    Circle,
    Ellipse,
}

impl fmt::Display for RadialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadialShape::Circle => write!(f, "circle"),
            RadialShape::Ellipse => write!(f, "ellipse"),
        }
    }
}

/// Extent keyword sizing a radial gradient's ending shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RadialSize {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    #[default]
    FarthestCorner,
}

impl fmt::Display for RadialSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadialSize::ClosestSide => write!(f, "closest-side"),
            RadialSize::ClosestCorner => write!(f, "closest-corner"),
            RadialSize::FarthestSide => write!(f, "farthest-side"),
            RadialSize::FarthestCorner => write!(f, "farthest-corner"),
        }
    }
}

/// Center position in integer percent, `[0, 100]` on each axis
///
/// Used as the position of a radial gradient and the center of a conic
/// gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Center {
    pub x: u16,
    pub y: u16,
}

impl Center {
    pub const fn new(x: u16, y: u16) -> Self {
        Center { x, y }
    }

    /// True for the default `50% 50%` center
    ///
    /// The utility-class serializer omits its `at_...` qualifier exactly
    /// when this holds.
    pub fn is_centered(self) -> bool {
        self.x == 50 && self.y == 50
    }
}

impl Default for Center {
    fn default() -> Self {
        Center::new(50, 50)
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x, self.y)
    }
}

/// Color interpolation hint
///
/// Passed through as a token; this crate performs no color-space math. The
/// hint only surfaces in the utility-class output (as a `/mode` suffix on
/// the base class), never in the standard CSS output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Framework default, no suffix emitted
    #[default]
    None,
    Srgb,
    Hsl,
    Oklab,
    Oklch,
    Longer,
    Shorter,
    Increasing,
    Decreasing,
}

impl Interpolation {
    /// The suffix token, or `None` for the default mode
    pub fn as_token(self) -> Option<&'static str> {
        match self {
            Interpolation::None => None,
            Interpolation::Srgb => Some("srgb"),
            Interpolation::Hsl => Some("hsl"),
            Interpolation::Oklab => Some("oklab"),
            Interpolation::Oklch => Some("oklch"),
            Interpolation::Longer => Some("longer"),
            Interpolation::Shorter => Some("shorter"),
            Interpolation::Increasing => Some("increasing"),
            Interpolation::Decreasing => Some("decreasing"),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token().unwrap_or("none"))
    }
}

/// A complete gradient description
///
/// `angle` is the direction for linear gradients and the start angle for
/// conic gradients, in integer degrees `[0, 360]`; radial gradients ignore
/// it. `shape` and `size` only apply to radial gradients.
///
/// # Examples
///
/// ```
/// use gradgen::GradientSpec;
///
/// let mut spec = GradientSpec::default();
/// spec.angle = 90;
/// assert_eq!(
///     spec.to_css(),
///     "linear-gradient(90deg, #3b82f6 0%, #8b5cf6 100%)"
/// );
/// assert_eq!(
///     spec.class_string(),
///     "bg-linear-to-r from-blue-500 to-violet-500"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct GradientSpec {
    pub kind: GradientKind,
    pub angle: u16,
    pub shape: RadialShape,
    pub size: RadialSize,
    pub center: Center,
    pub interpolation: Interpolation,
    pub stops: StopList,
}

impl GradientSpec {
    /// The standard CSS gradient function call
    pub fn to_css(&self) -> String {
        css::serialize(self)
    }

    /// The Tailwind utility-class token string
    pub fn class_string(&self) -> String {
        tailwind::classes(self)
    }

    /// An illustrative markup snippet using the class string
    pub fn example_markup(&self) -> String {
        tailwind::example_markup(self)
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}
