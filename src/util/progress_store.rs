use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Item storage key → collected flag.
pub type Progress = BTreeMap<String, bool>;

/// Durable backing for one tracker's flags.
///
/// Every persist is a whole-file rewrite; implementations are free to
/// change that as long as `load` after `persist` returns what was written.
pub trait ProgressStore {
    fn load(&self) -> Result<Progress>;
    fn persist(&self, view: &Progress) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// The view is the entire store (cans).
    Overwrite,
    /// The view is one slice of the store; re-read the file and overlay
    /// the view so other slices survive (skins).
    Merge,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    mode: WriteMode,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self { path: path.into(), mode }
    }
}

impl ProgressStore for JsonFileStore {
    /// A missing file means no progress yet. A file that exists but does
    /// not parse is an error.
    fn load(&self) -> Result<Progress> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Progress::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", self.path.display()));
            }
        };
        serde_json::from_str(&text)
            .with_context(|| format!("progress file {} is malformed", self.path.display()))
    }

    fn persist(&self, view: &Progress) -> Result<()> {
        let merged;
        let out = match self.mode {
            WriteMode::Overwrite => view,
            WriteMode::Merge => {
                let mut on_disk = self.load()?;
                on_disk.extend(view.iter().map(|(k, &v)| (k.clone(), v)));
                merged = on_disk;
                &merged
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create {}", parent.display()))?;
            }
        }
        fs::write(&self.path, to_pretty_json(out)?)
            .with_context(|| format!("cannot write {}", self.path.display()))?;
        log::debug!("wrote {} entries to {}", out.len(), self.path.display());
        Ok(())
    }
}

/// Four-space indented JSON, the layout existing progress files use.
fn to_pretty_json(progress: &Progress) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    progress.serialize(&mut ser)?;
    Ok(buf)
}

/// Number of collected entries in a view.
pub fn count(view: &Progress) -> usize {
    view.values().filter(|&&v| v).count()
}

pub fn summary(collected: usize, total: usize) -> String {
    format!("{} / {}", collected, total)
}
