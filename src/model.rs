use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::FileMeta;
use crate::validation::FieldErrors;

// --- Typed record id ---

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub String);

impl ImageId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persisted metadata + hosted URL for one uploaded image. Immutable once
/// created; owned by the remote collection. The core only reads sequences of
/// these and replaces them wholesale on refetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub ts: u64,
}

impl ImageRecord {
    /// A record may only reach the grid once both `id` and `url` are set.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.id.as_str().is_empty() && !self.url.is_empty()
    }
}

/// Wire shape of `GET /api/images`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesPage {
    pub data: Vec<ImageRecord>,
}

// --- Transient notifications ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastStatus {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub status: ToastStatus,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: ToastStatus::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: ToastStatus::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

// --- Upload form state ---

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadForm {
    pub is_open: bool,
    pub title: String,
    pub description: String,
    pub file: Option<FileMeta>,
    /// Shell-produced blob/object URL for instant preview.
    pub local_preview_url: String,
    /// Hosted URL; non-empty only once the file upload step has completed.
    pub remote_image_url: String,
    /// Correlates in-flight upload completions; stale tokens are ignored.
    pub upload_token: Option<Uuid>,
    pub is_uploading: bool,
    pub is_submitting: bool,
    pub errors: FieldErrors,
}

impl UploadForm {
    /// Clears every field and closes the hosting container.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drops the staged file together with both URLs and the in-flight token.
    pub fn clear_staged_file(&mut self) {
        self.file = None;
        self.local_preview_url.clear();
        self.remote_image_url.clear();
        self.upload_token = None;
        self.is_uploading = false;
    }
}

// --- Root model ---

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Model {
    pub records: Vec<ImageRecord>,
    pub is_refreshing: bool,
    pub load_failed: bool,

    // Transient view state for the grid/overlay; mutated only by the card
    // tap handler (set URL, open) and by overlay dismissal (close).
    pub current_image_url: String,
    pub overlay_open: bool,

    pub form: UploadForm,
    pub active_toast: Option<Toast>,
}
