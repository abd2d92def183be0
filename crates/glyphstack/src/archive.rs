//! Packed icon path archive.
//!
//! Icon path data ships as a ZIP archive with one entry per icon, laid out as
//! `<variant>/<name>.<ext>`. Each entry is ASCII text with three `|`-separated
//! fields: viewbox width, viewbox height and SVG path data. Duotone entries
//! embed a second `<path>` opening after the [`SECONDARY_MARKER`].
//!
//! The archive is opened once and never written. Each lookup clones the
//! archive handle, which shares the parsed central directory and gets its own
//! read cursor.

use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};
use zip::ZipArchive;

use crate::error::{IconError, IconResult};
use crate::logging::targets;
use crate::variant::IconVariant;

/// Marker that terminates the primary path of a duotone record.
pub const SECONDARY_MARKER: &str = r#"class="fa-secondary"/>"#;

/// Field separator inside an archive entry.
const FIELD_SEPARATOR: char = '|';

type ArchiveReader = Cursor<Arc<[u8]>>;

/// One raw icon record as stored in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    /// Viewbox width, verbatim.
    pub width: String,
    /// Viewbox height, verbatim.
    pub height: String,
    /// SVG path data, including the duotone marker when present.
    pub path_data: String,
}

impl PathRecord {
    /// Parse an archive entry payload.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::MalformedAsset`] when the payload is not ASCII or
    /// has fewer than three fields.
    pub fn parse(entry: &str, data: &[u8]) -> IconResult<Self> {
        if !data.is_ascii() {
            return Err(IconError::malformed(entry, "payload is not ASCII text"));
        }
        // ASCII is valid UTF-8
        let text = std::str::from_utf8(data)
            .map_err(|e| IconError::malformed(entry, e.to_string()))?;

        let mut fields = text.split(FIELD_SEPARATOR);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(width), Some(height), Some(path_data)) => Ok(Self {
                width: width.to_string(),
                height: height.to_string(),
                path_data: path_data.to_string(),
            }),
            _ => Err(IconError::malformed(
                entry,
                format!(
                    "expected 3 '{FIELD_SEPARATOR}'-separated fields, found {}",
                    text.split(FIELD_SEPARATOR).count()
                ),
            )),
        }
    }

    /// Whether the path data carries a secondary duotone layer.
    pub fn has_secondary(&self) -> bool {
        self.path_data.contains(SECONDARY_MARKER)
    }
}

/// Read-only store of packed icon records.
pub struct AssetStore {
    archive: ZipArchive<ArchiveReader>,
    lookups: AtomicU64,
}

impl AssetStore {
    /// Open an archive held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Archive`] if the bytes are not a readable ZIP archive.
    pub fn from_bytes(data: impl Into<Arc<[u8]>>) -> IconResult<Self> {
        let archive = ZipArchive::new(Cursor::new(data.into()))?;
        debug!(target: targets::ARCHIVE, entries = archive.len(), "opened icon archive");
        Ok(Self {
            archive,
            lookups: AtomicU64::new(0),
        })
    }

    /// Open an archive embedded in the binary, e.g. via `include_bytes!`.
    pub fn from_static(data: &'static [u8]) -> IconResult<Self> {
        Self::from_bytes(data)
    }

    /// Read an archive file fully into memory and open it.
    pub fn open(path: impl AsRef<Path>) -> IconResult<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data)
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive has no entries.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Number of lookups performed so far.
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Find the record for `name` in the given variant.
    ///
    /// The name is matched exactly against entry file stems; callers lower-case
    /// it first. A missing icon is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be read or parsed.
    pub fn lookup(&self, variant: IconVariant, name: &str) -> IconResult<Option<PathRecord>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let dir = variant.dir_name();
        let Some(entry_name) = self
            .archive
            .file_names()
            .find(|entry| entry_matches(entry, dir, name))
            .map(str::to_owned)
        else {
            debug!(target: targets::ARCHIVE, %variant, name, "icon not found in archive");
            return Ok(None);
        };

        let mut archive = self.archive.clone();
        let mut file = archive.by_name(&entry_name)?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;

        PathRecord::parse(&entry_name, &data)
            .inspect_err(|e| warn!(target: targets::ARCHIVE, error = %e, "rejecting archive entry"))
            .map(Some)
    }
}

/// Whether an archive entry path is `<dir>/<name>.<ext>`.
fn entry_matches(entry: &str, dir: &str, name: &str) -> bool {
    let path = Path::new(entry);
    let parent_matches = path
        .parent()
        .and_then(|parent| parent.to_str())
        .is_some_and(|parent| parent == dir);
    let stem_matches = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem == name);
    parent_matches && stem_matches
}

impl std::fmt::Debug for AssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetStore")
            .field("entries", &self.archive.len())
            .field("lookups", &self.lookups())
            .finish()
    }
}
