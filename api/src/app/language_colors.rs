//! Language color table
//!
//! Display colors for common languages, taken from GitHub Linguist.

use rand::Rng;

/// Known language colors (Linguist names, case-sensitive)
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("TypeScript", "#3178c6"),
    ("JavaScript", "#f1e05a"),
    ("Python", "#3572A5"),
    ("Rust", "#dea584"),
    ("Go", "#00ADD8"),
    ("Java", "#b07219"),
    ("Kotlin", "#A97BFF"),
    ("Swift", "#F05138"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("SCSS", "#c6538c"),
    ("Shell", "#89e051"),
    ("Dart", "#00B4AB"),
    ("Vue", "#41b883"),
    ("Svelte", "#ff3e00"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("Dockerfile", "#384d54"),
    ("Lua", "#000080"),
    ("Haskell", "#5e5086"),
    ("Elixir", "#6e4a7e"),
    ("Scala", "#c22d40"),
    ("R", "#198CE7"),
    ("MDX", "#fcb32c"),
    ("Solidity", "#AA6746"),
    ("Zig", "#ec915c"),
];

/// Canonical color for a language, if one is known
pub fn known_color(language: &str) -> Option<&'static str> {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
}

/// Canonical color for a language, or a random `#rrggbb` when none is known
pub fn color_for(language: &str) -> String {
    match known_color(language) {
        Some(color) => color.to_string(),
        None => random_color(),
    }
}

fn random_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..=0xFF_FFFF);
    format!("#{:06x}", value)
}
