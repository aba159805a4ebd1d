//! Tailwind v4 utility-class serialization
//!
//! Renders a [`GradientSpec`] as the space-separated class string a
//! Tailwind v4 template would use: one base class describing the gradient
//! shape, then `from-` / `via-` / `to-` classes for the stops in position
//! order.

use crate::gradient::{GradientKind, GradientSpec};
use crate::palette;
use crate::stops::ColorStop;

/// The eight compass directions Tailwind names outright; any other linear
/// angle falls through to the arbitrary-angle class.
const COMPASS: [(u16, &str); 8] = [
    (0, "t"),
    (45, "tr"),
    (90, "r"),
    (135, "br"),
    (180, "b"),
    (225, "bl"),
    (270, "l"),
    (315, "tl"),
];

/// Serialize the spec as a utility-class token string
pub fn classes(spec: &GradientSpec) -> String {
    let mut tokens = vec![base_class(spec)];
    let sorted = spec.stops.sorted();
    let last = sorted.len().saturating_sub(1);
    for (index, stop) in sorted.iter().enumerate() {
        if index == 0 {
            push_stop(&mut tokens, "from", stop, 0.0);
        } else if index == last {
            push_stop(&mut tokens, "to", stop, 100.0);
        } else {
            push_stop(&mut tokens, "via", stop, 50.0);
        }
    }
    tokens.join(" ")
}

/// An illustrative markup snippet embedding the class string
pub fn example_markup(spec: &GradientSpec) -> String {
    format!(
        "<div class=\"{}\">\n  Your content here\n</div>",
        classes(spec)
    )
}

fn base_class(spec: &GradientSpec) -> String {
    let suffix = match spec.interpolation.as_token() {
        Some(token) => format!("/{token}"),
        None => String::new(),
    };

    match spec.kind {
        GradientKind::Linear => match COMPASS.iter().find(|(angle, _)| *angle == spec.angle) {
            Some((_, direction)) => format!("bg-linear-to-{direction}{suffix}"),
            None => format!("bg-linear-{}{suffix}", spec.angle),
        },
        GradientKind::Radial => {
            if spec.center.is_centered() {
                format!("bg-radial{suffix}")
            } else {
                format!("bg-radial-[at_{}%_{}%]{suffix}", spec.center.x, spec.center.y)
            }
        }
        GradientKind::Conic => {
            let mut class = if spec.angle != 0 {
                format!("bg-conic-{}", spec.angle)
            } else {
                "bg-conic".to_string()
            };
            if !spec.center.is_centered() {
                class.push_str(&format!("-[at_{}%_{}%]", spec.center.x, spec.center.y));
            }
            format!("{class}{suffix}")
        }
    }
}

/// Emit the color class for one stop, plus a position class when the stop
/// sits away from its role's canonical default (0 for `from`, 50 for
/// `via`, 100 for `to`).
fn push_stop(tokens: &mut Vec<String>, role: &str, stop: &ColorStop, default_position: f32) {
    tokens.push(format!("{role}-{}", palette::color_token(&stop.color)));
    if stop.position != default_position {
        tokens.push(format!("{role}-{}%", stop.position));
    }
}
