use serde::{Deserialize, Serialize};

use crate::model::{ImageRecord, Toast, ToastStatus};
use crate::validation::FieldErrors;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub ts: u64,
}

impl From<&ImageRecord> for CardView {
    fn from(record: &ImageRecord) -> Self {
        Self {
            id: record.id.as_str().to_owned(),
            title: record.title.clone(),
            description: record.description.clone(),
            url: record.url.clone(),
            ts: record.ts,
        }
    }
}

/// The card grid. Geometry is part of the contract: a fixed column count
/// with a fixed gap, rendered in record order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryView {
    pub columns: u32,
    pub gap_px: u32,
    pub cards: Vec<CardView>,
    pub is_refreshing: bool,
    pub load_failed: bool,
}

/// Full-size view surface. Present in the `ViewModel` only while open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayView {
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub is_open: bool,
    pub title: String,
    pub description: String,
    pub file_name: Option<String>,
    pub local_preview_url: String,
    pub is_uploading: bool,
    pub is_submitting: bool,
    pub errors: FieldErrors,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastView {
    pub status: ToastStatus,
    pub title: String,
    pub description: String,
}

impl From<&Toast> for ToastView {
    fn from(toast: &Toast) -> Self {
        Self {
            status: toast.status,
            title: toast.title.clone(),
            description: toast.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub gallery: GalleryView,
    pub overlay: Option<OverlayView>,
    pub form: FormView,
    pub toast: Option<ToastView>,
}
