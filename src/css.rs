//! Standard CSS serialization
//!
//! Renders a [`GradientSpec`] as a `linear-gradient()` /
//! `radial-gradient()` / `conic-gradient()` function call, usable directly
//! as a CSS background value.

use crate::gradient::{GradientKind, GradientSpec};

/// Serialize the spec as a CSS gradient function call
///
/// Stops are rendered in position order as `<color> <position>%`. The
/// interpolation hint never appears here; it only affects the
/// utility-class output.
pub fn serialize(spec: &GradientSpec) -> String {
    let stops = stop_list(spec);
    match spec.kind {
        GradientKind::Linear => format!("linear-gradient({}deg, {stops})", spec.angle),
        GradientKind::Radial => format!(
            "radial-gradient({} {} at {}, {stops})",
            spec.shape, spec.size, spec.center
        ),
        GradientKind::Conic => format!(
            "conic-gradient(from {}deg at {}, {stops})",
            spec.angle, spec.center
        ),
    }
}

fn stop_list(spec: &GradientSpec) -> String {
    spec.stops
        .sorted()
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position))
        .collect::<Vec<_>>()
        .join(", ")
}
