//! Fixed named palette table. Patterns index entries cyclically, so every
//! palette carries at least one color.

pub struct PaletteDef {
    pub key: &'static str,
    pub colors: &'static [&'static str],
}

pub const PALETTES: &[PaletteDef] = &[
    PaletteDef {
        key: "mono",
        colors: &["#e6e6e6"],
    },
    PaletteDef {
        key: "neon",
        colors: &["#00e5ff", "#00ff87", "#ff00e5", "#ffc800"],
    },
    PaletteDef {
        key: "sunset",
        colors: &["#ff6b6b", "#ffd93d", "#6b5b95", "#ff8e53"],
    },
    PaletteDef {
        key: "ocean",
        colors: &["#00a8e8", "#007ea7", "#003459", "#00f6ff"],
    },
    PaletteDef {
        key: "forest",
        colors: &["#0ead69", "#2d6a4f", "#95d5b2", "#1b4332"],
    },
    PaletteDef {
        key: "pastel",
        colors: &["#ffd6ff", "#caffbf", "#bde0fe", "#ffadad", "#fdffb6"],
    },
];

pub fn palette_colors(key: &str) -> Option<&'static [&'static str]> {
    PALETTES.iter().find(|p| p.key == key).map(|p| p.colors)
}

/// Lookup with a per-pattern fallback key. The fallback keys are all table
/// members, so this never yields an empty list.
pub fn palette_or(key: &str, fallback: &str) -> &'static [&'static str] {
    palette_colors(key)
        .or_else(|| palette_colors(fallback))
        .unwrap_or(PALETTES[0].colors)
}

/// Next palette key in table order, wrapping; unknown keys restart at the
/// front. Used by the UI to cycle.
pub fn next_key(key: &str, forward: bool) -> &'static str {
    let len = PALETTES.len();
    let idx = PALETTES.iter().position(|p| p.key == key);
    let next = match (idx, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, _) => 0,
    };
    PALETTES[next].key
}
