//! Hex color parsing and channel-wise mixing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Parse `#rrggbb` (leading `#` optional, case-insensitive). Returns `None`
/// for anything malformed so the white fallback stays an explicit decision
/// at the call site.
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

pub fn parse_hex_or_white(s: &str) -> Rgb {
    parse_hex(s).unwrap_or(WHITE)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear per-channel blend of two hex colors, rounded to nearest.
/// Malformed input mixes as white.
pub fn mix_colors(a: &str, b: &str, t: f32) -> Rgb {
    let ca = parse_hex_or_white(a);
    let cb = parse_hex_or_white(b);
    Rgb {
        r: lerp(ca.r as f32, cb.r as f32, t).round() as u8,
        g: lerp(ca.g as f32, cb.g as f32, t).round() as u8,
        b: lerp(ca.b as f32, cb.b as f32, t).round() as u8,
    }
}
