use std::fmt;
use std::path::{Path, PathBuf};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// Location of an upload relative to the uploads directory: `<upload-id>/<file-name>`.
///
/// Each request writes into its own directory so two clients uploading the same
/// filename never touch each other's input or normalized audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPath {
    id: UploadId,
    file_name: String,
}

impl UploadPath {
    /// Builds a path from a client supplied filename, keeping only its final
    /// component. Returns `None` when nothing usable remains.
    pub fn new(id: &UploadId, filename: &str) -> Option<Self> {
        let file_name = Path::new(filename.trim())
            .file_name()?
            .to_str()?
            .to_string();

        if file_name.is_empty() {
            return None;
        }

        Some(Self {
            id: *id,
            file_name,
        })
    }

    pub fn id(&self) -> UploadId {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn relative(&self) -> PathBuf {
        PathBuf::from(self.id.as_uuid().to_string()).join(&self.file_name)
    }
}

impl fmt::Display for UploadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.id.as_uuid(), self.file_name)
    }
}

/// Path of the normalized wave file derived from an input path: the extension is
/// replaced by `.wav`. An input that already ends in `.wav` gets
/// `<stem>.normalized.wav` so conversion never deletes its own source.
pub fn normalized_audio_path(input: &Path) -> PathBuf {
    let candidate = input.with_extension("wav");
    if candidate == input {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{}.normalized.wav", stem))
    } else {
        candidate
    }
}

/// Scratch path the transcoder writes to before the result is renamed into place.
pub fn temp_audio_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{}_temp.wav", stem))
}
