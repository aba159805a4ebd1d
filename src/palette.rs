//! Tailwind color palette lookup
//!
//! Best-effort reverse mapping from a hex literal to a Tailwind color name,
//! covering the 500 shade of every default-palette hue plus white and
//! black. Colors outside the table become arbitrary-value tokens.

/// Resolve a hex color literal to a Tailwind color token
///
/// Matching is case-insensitive. A color outside the table falls back to
/// the bracketed arbitrary-value form, preserving the input spelling.
///
/// # Examples
///
/// ```
/// use gradgen::palette::color_token;
///
/// assert_eq!(color_token("#3b82f6"), "blue-500");
/// assert_eq!(color_token("#3B82F6"), "blue-500");
/// assert_eq!(color_token("#123456"), "[#123456]");
/// ```
pub fn color_token(hex: &str) -> String {
    match named_token(hex) {
        Some(name) => name.to_string(),
        None => format!("[{hex}]"),
    }
}

fn named_token(hex: &str) -> Option<&'static str> {
    let lower = hex.to_ascii_lowercase();
    match lower.as_str() {
        "#ef4444" => Some("red-500"),
        "#f97316" => Some("orange-500"),
        "#f59e0b" => Some("amber-500"),
        "#eab308" => Some("yellow-500"),
        "#84cc16" => Some("lime-500"),
        "#22c55e" => Some("green-500"),
        "#10b981" => Some("emerald-500"),
        "#14b8a6" => Some("teal-500"),
        "#06b6d4" => Some("cyan-500"),
        "#0ea5e9" => Some("sky-500"),
        "#3b82f6" => Some("blue-500"),
        "#6366f1" => Some("indigo-500"),
        "#8b5cf6" => Some("violet-500"),
        "#a855f7" => Some("purple-500"),
        "#d946ef" => Some("fuchsia-500"),
        "#ec4899" => Some("pink-500"),
        "#f43f5e" => Some("rose-500"),
        "#64748b" => Some("slate-500"),
        "#6b7280" => Some("gray-500"),
        "#71717a" => Some("zinc-500"),
        "#737373" => Some("neutral-500"),
        "#78716c" => Some("stone-500"),
        "#ffffff" => Some("white"),
        "#000000" => Some("black"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_palette_hues() {
        assert_eq!(color_token("#ef4444"), "red-500");
        assert_eq!(color_token("#8b5cf6"), "violet-500");
        assert_eq!(color_token("#78716c"), "stone-500");
        assert_eq!(color_token("#ffffff"), "white");
        assert_eq!(color_token("#000000"), "black");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(color_token("#EF4444"), "red-500");
        assert_eq!(color_token("#FfFfFf"), "white");
    }

    #[test]
    fn unknown_colors_become_arbitrary_values() {
        assert_eq!(color_token("#bada55"), "[#bada55]");
        // the fallback keeps whatever spelling the caller used
        assert_eq!(color_token("#BADA55"), "[#BADA55]");
    }
}
