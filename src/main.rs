//! Command-line gradient composer
//!
//! Drives one editing session against the library: build a gradient from
//! flags, print the standard CSS value and the Tailwind utility classes,
//! and optionally copy the classes to the clipboard.

use clap::{Parser, ValueEnum};
use gradgen::color;
use gradgen::{
    Center, GradientKind, GradientSpec, Interpolation, RadialShape, RadialSize, StopList,
    MIN_STOPS,
};

/// Compose a CSS gradient and the matching Tailwind v4 utility classes.
#[derive(Parser, Debug)]
#[command(name = "gradgen", version, about)]
struct Args {
    /// Gradient kind
    #[arg(long, value_enum, default_value_t = KindArg::Linear)]
    kind: KindArg,

    /// Degrees: direction for linear, start angle for conic
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=360))]
    angle: u16,

    /// Radial ending shape
    #[arg(long, value_enum, default_value_t = ShapeArg::Circle)]
    shape: ShapeArg,

    /// Radial size keyword
    #[arg(long, value_enum, default_value_t = SizeArg::FarthestCorner)]
    size: SizeArg,

    /// Center as X,Y in percent (radial position / conic center)
    #[arg(long, value_parser = parse_center, default_value = "50,50")]
    at: (u16, u16),

    /// Color interpolation hint for the utility classes
    #[arg(long = "in", value_enum, default_value_t = InterpolationArg::None)]
    interpolation: InterpolationArg,

    /// Color stop as COLOR:POSITION, e.g. "#3b82f6:0" (repeatable;
    /// replaces the default blue-to-violet stops)
    #[arg(long = "stop", value_parser = parse_stop)]
    stops: Vec<(String, f32)>,

    /// Append N extra stops using the midpoint rule
    #[arg(long, default_value_t = 0)]
    add: usize,

    /// Also print an example usage snippet
    #[arg(long)]
    markup: bool,

    /// Copy the utility classes to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum KindArg {
    Linear,
    Radial,
    Conic,
}

impl KindArg {
    fn as_kind(self) -> GradientKind {
        match self {
            KindArg::Linear => GradientKind::Linear,
            KindArg::Radial => GradientKind::Radial,
            KindArg::Conic => GradientKind::Conic,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum ShapeArg {
    Circle,
    Ellipse,
}

impl ShapeArg {
    fn as_shape(self) -> RadialShape {
        match self {
            ShapeArg::Circle => RadialShape::Circle,
            ShapeArg::Ellipse => RadialShape::Ellipse,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum SizeArg {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
}

impl SizeArg {
    fn as_size(self) -> RadialSize {
        match self {
            SizeArg::ClosestSide => RadialSize::ClosestSide,
            SizeArg::ClosestCorner => RadialSize::ClosestCorner,
            SizeArg::FarthestSide => RadialSize::FarthestSide,
            SizeArg::FarthestCorner => RadialSize::FarthestCorner,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum InterpolationArg {
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

impl InterpolationArg {
    fn as_interpolation(self) -> Interpolation {
        match self {
            InterpolationArg::None => Interpolation::None,
            InterpolationArg::Srgb => Interpolation::Srgb,
            InterpolationArg::Hsl => Interpolation::Hsl,
            InterpolationArg::Oklab => Interpolation::Oklab,
            InterpolationArg::Oklch => Interpolation::Oklch,
            InterpolationArg::Longer => Interpolation::Longer,
            InterpolationArg::Shorter => Interpolation::Shorter,
            InterpolationArg::Increasing => Interpolation::Increasing,
            InterpolationArg::Decreasing => Interpolation::Decreasing,
        }
    }
}

/// Parse a center position as X,Y percent (e.g., 30,70)
fn parse_center(value: &str) -> Result<(u16, u16), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{value}'"))?;
    let parse_axis = |axis: &str| -> Result<u16, String> {
        let percent: u16 = axis
            .trim()
            .parse()
            .map_err(|_| format!("invalid percent '{}'", axis.trim()))?;
        if percent > 100 {
            return Err(format!("percent {percent} is out of range 0-100"));
        }
        Ok(percent)
    };
    Ok((parse_axis(x)?, parse_axis(y)?))
}

/// Parse a stop as COLOR:POSITION (e.g., #3b82f6:0)
fn parse_stop(value: &str) -> Result<(String, f32), String> {
    let (color, position) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected COLOR:POSITION, got '{value}'"))?;
    let position: f32 = position
        .trim()
        .parse()
        .map_err(|_| format!("invalid position '{}'", position.trim()))?;
    Ok((color.trim().to_string(), position))
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> gradgen::Result<()> {
    let mut spec = GradientSpec {
        kind: args.kind.as_kind(),
        angle: args.angle,
        shape: args.shape.as_shape(),
        size: args.size.as_size(),
        center: Center::new(args.at.0, args.at.1),
        interpolation: args.interpolation.as_interpolation(),
        stops: StopList::default(),
    };

    if !args.stops.is_empty() {
        if args.stops.len() + args.add < MIN_STOPS {
            return Err(gradgen::Error::minimum_stops());
        }
        let mut stops = StopList::empty();
        for (literal, position) in &args.stops {
            stops.push(color::normalize(literal)?, *position);
        }
        spec.stops = stops;
    }
    for _ in 0..args.add {
        spec.stops.add();
    }

    println!("css:      {}", spec.to_css());
    let classes = spec.class_string();
    println!("tailwind: {classes}");
    if args.markup {
        println!();
        println!("{}", spec.example_markup());
    }
    if args.copy {
        copy_to_clipboard(&classes);
    }
    Ok(())
}

/// Best-effort clipboard write; failure is reported but never fatal and
/// never affects the composed gradient.
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => eprintln!("copied to clipboard"),
        Err(err) => eprintln!("failed to copy to clipboard: {err}"),
    }
}
