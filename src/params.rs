//! Runtime parameter set and deep-link pre-population.
//!
//! Pattern and palette travel as string keys; unknown keys are resolved with
//! a fallback at render time instead of being rejected here, so a bogus
//! deep link still draws something.

pub const DEFAULT_PATTERN: &str = "orbits";
pub const DEFAULT_PALETTE: &str = "neon";

#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub pattern: String,
    pub seed: String,
    pub symmetry: u32,
    pub particles: usize,
    pub speed: f32,
    pub line_width: f32,
    pub palette: String,
    pub animate: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            seed: fresh_seed(),
            symmetry: 6,
            particles: 800,
            speed: 1.6,
            line_width: 1.2,
            palette: DEFAULT_PALETTE.to_string(),
            animate: true,
        }
    }
}

impl Params {
    /// Stores the seed, substituting a fresh random numeric seed for
    /// empty/whitespace input so a seed is never blank at render time.
    pub fn set_seed(&mut self, seed: &str) {
        let trimmed = seed.trim();
        self.seed = if trimmed.is_empty() {
            fresh_seed()
        } else {
            trimmed.to_string()
        };
    }

    pub fn randomize_seed(&mut self) {
        self.seed = format!("{}", fastrand::u64(..1_000_000_000_000));
    }

    pub fn apply_deep_link(&mut self, link: &DeepLink) {
        if let Some(seed) = &link.seed {
            self.set_seed(seed);
        }
        if let Some(pattern) = &link.pattern {
            self.pattern = pattern.clone();
        }
        if let Some(palette) = &link.palette {
            self.palette = palette.clone();
        }
    }
}

fn fresh_seed() -> String {
    format!("{}", fastrand::u64(..1_000_000_000))
}

/// Startup overrides supplied as a query-style string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    pub seed: Option<String>,
    pub pattern: Option<String>,
    pub palette: Option<String>,
}

/// Parses `seed=...&pattern=...&palette=...`. A leading `?` is tolerated,
/// `+` and `%XX` are decoded, unknown keys and valueless pairs are ignored.
pub fn parse_deep_link(query: &str) -> DeepLink {
    let mut link = DeepLink::default();
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = percent_decode(value);
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "seed" => link.seed = Some(value),
            "pattern" => link.pattern = Some(value),
            "palette" => link.palette = Some(value),
            _ => {}
        }
    }
    link
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                if let Some(v) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    out.push(v);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
