use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

const FILENAME: &str = "location";
const APP_DIR: &str = "scenedeck";

static SLIDE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"slide=(\d+)").expect("valid slide token pattern"));

/// Pull the slide index out of a location token such as `#slide=4`.
pub fn parse_token(token: &str) -> Option<usize> {
    let caps = SLIDE_TOKEN.captures(token)?;
    // Digits too long for usize still name "past the end".
    Some(caps[1].parse::<usize>().unwrap_or(usize::MAX))
}

pub fn format_token(index: usize) -> String {
    format!("slide={index}")
}

/// Parse a token and clamp it into `[0, slide_count)`.
pub fn resolve_token(token: &str, slide_count: usize) -> Option<usize> {
    parse_token(token).map(|i| i.min(slide_count.saturating_sub(1)))
}

/// Where the location token lives between settles.
pub trait LocationStore {
    fn load(&self) -> Option<String>;

    fn store(&mut self, token: &str) -> Result<()>;
}

/// Keeps the token in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    token: Option<String>,
    writes: usize,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            writes: 0,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl LocationStore for MemoryLocation {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn store(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Persists the token to a small file so the next launch resumes there.
#[derive(Debug, Clone)]
pub struct FileLocation {
    path: PathBuf,
}

impl FileLocation {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }
}

impl LocationStore for FileLocation {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn store(&mut self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, format!("{token}\n"))?;
        Ok(())
    }
}
