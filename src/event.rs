use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capabilities::FileUploadResult;
use crate::model::{ImageId, ImagesPage};

// --- Selected-file metadata, as declared by the shell's file picker ---

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

// --- Event enum: user interactions plus asynchronous completions ---

#[derive(Serialize, Deserialize)]
pub enum Event {
    AppStarted,

    // Gallery
    RefreshRequested,
    #[serde(skip)]
    ImagesFetched(Box<crux_http::Result<crux_http::Response<ImagesPage>>>),

    // Cards & overlay
    CardTapped {
        id: ImageId,
    },
    OverlayDismissed,

    // Upload form
    FormOpened,
    FormDismissed,
    TitleChanged(String),
    DescriptionChanged(String),
    FileSelected(FileMeta),
    PreviewReady {
        token: Uuid,
        result: FileUploadResult,
    },
    UploadFinished {
        token: Uuid,
        result: FileUploadResult,
    },
    SubmitRequested,
    #[serde(skip)]
    SubmitCompleted(Box<crux_http::Result<crux_http::Response<Vec<u8>>>>),

    ToastDismissed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_size_is_reasonable() {
        // Boxing the HTTP results keeps the enum small.
        let size = std::mem::size_of::<Event>();
        assert!(
            size <= 128,
            "Event enum is {size} bytes — too large, box more variants"
        );
    }
}
