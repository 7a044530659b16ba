//! Bounded gallery of saved renders, persisted as a versioned key=value
//! text file with base64 PNG payloads.
//!
//! The list is most-recent-first and capped at 8 entries; adding a ninth
//! evicts the oldest. Saves are atomic (tmp + rename), so a failed save
//! leaves the prior file untouched.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;
use std::path::{Path, PathBuf};

pub const GALLERY_CAP: usize = 8;

const HEADER: &str = "# artloom gallery v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub seed: String,
    pub pattern: String,
    pub palette: String,
    /// Unix timestamp, seconds.
    pub ts: u64,
    pub png: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    Io(String),
    Parse { line: usize, message: String },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse { line, message } => write!(f, "parse error at line {line}: {message}"),
        }
    }
}

impl std::error::Error for GalleryError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert most-recent-first; the oldest entry falls off the tail once
    /// the cap is reached.
    pub fn add(&mut self, entry: GalleryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(GALLERY_CAP);
    }

    pub fn parse(text: &str) -> Result<Self, GalleryError> {
        let mut entries = Vec::new();
        let mut seed: Option<String> = None;
        let mut pattern: Option<String> = None;
        let mut palette: Option<String> = None;
        let mut ts: Option<u64> = None;

        for (line_idx, raw) in text.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(GalleryError::Parse {
                    line: line_no,
                    message: "expected <key>=<value>".to_string(),
                });
            };
            let key = key.trim();
            let value = value.trim();
            match key {
                "seed" => seed = Some(value.to_string()),
                "pattern" => pattern = Some(value.to_string()),
                "palette" => palette = Some(value.to_string()),
                "ts" => {
                    ts = Some(value.parse::<u64>().map_err(|_| GalleryError::Parse {
                        line: line_no,
                        message: "ts must be an unsigned integer".to_string(),
                    })?);
                }
                // The image key completes an entry.
                "image" => {
                    let png = BASE64.decode(value).map_err(|e| GalleryError::Parse {
                        line: line_no,
                        message: format!("invalid base64 image data: {e}"),
                    })?;
                    let entry = GalleryEntry {
                        seed: seed.take().ok_or(GalleryError::Parse {
                            line: line_no,
                            message: "image without preceding seed".to_string(),
                        })?,
                        pattern: pattern.take().unwrap_or_default(),
                        palette: palette.take().unwrap_or_default(),
                        ts: ts.take().unwrap_or(0),
                        png,
                    };
                    entries.push(entry);
                }
                _ => {
                    return Err(GalleryError::Parse {
                        line: line_no,
                        message: format!("unknown key '{key}'"),
                    });
                }
            }
        }

        entries.truncate(GALLERY_CAP);
        Ok(Self { entries })
    }

    pub fn to_text(&self) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        for entry in &self.entries {
            out.push('\n');
            out.push_str(&format!("seed={}\n", entry.seed));
            out.push_str(&format!("pattern={}\n", entry.pattern));
            out.push_str(&format!("palette={}\n", entry.palette));
            out.push_str(&format!("ts={}\n", entry.ts));
            out.push_str(&format!("image={}\n", BASE64.encode(&entry.png)));
        }
        out
    }

    /// A missing or unreadable file yields an empty gallery; persistence
    /// problems never surface as user-visible failures.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).unwrap_or_else(|err| {
                log::warn!("ignoring corrupt gallery file {}: {err}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: Option<&Path>) -> Result<(), GalleryError> {
        let Some(path) = path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GalleryError::Io(e.to_string()))?;
        }
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, self.to_text()).map_err(|e| GalleryError::Io(e.to_string()))?;
        std::fs::rename(&tmp, path).map_err(|e| GalleryError::Io(e.to_string()))
    }
}

pub fn gallery_storage_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.trim().is_empty() {
            return Some(PathBuf::from(xdg).join("artloom").join("gallery.txt"));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("artloom")
            .join("gallery.txt"),
    )
}
