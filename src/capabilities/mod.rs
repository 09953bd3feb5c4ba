mod file_upload;

pub use self::file_upload::{
    FileUpload, FileUploadError, FileUploadOperation, FileUploadOutput, FileUploadResult,
};

// Crux's built-in Render capability is used directly; it provides all
// necessary functionality for triggering view updates.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

pub type AppHttp = Http<Event>;
pub type AppRender = Render<Event>;
pub type AppFileUpload = FileUpload<Event>;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub http: Http<Event>,
    pub file_upload: FileUpload<Event>,
}
