use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::FileMeta;

/// File transfer is owned by the shell: the core only ever sees the
/// resulting URLs, never the bytes.
pub struct FileUpload<Ev> {
    context: CapabilityContext<FileUploadOperation, Ev>,
}

impl<Ev> Capability<Ev> for FileUpload<Ev> {
    type Operation = FileUploadOperation;
    type MappedSelf<MappedEv> = FileUpload<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        FileUpload::new(self.context.map_event(f))
    }
}

impl<Ev> FileUpload<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<FileUploadOperation, Ev>) -> Self {
        Self { context }
    }

    /// Asks the shell for a local (in-memory/object) URL of the selected
    /// file, for instant preview. No network transfer is involved.
    pub fn create_preview<F>(&self, file: FileMeta, make_event: F)
    where
        F: FnOnce(FileUploadResult) -> Ev + Send + 'static,
    {
        self.context.spawn({
            let context = self.context.clone();
            async move {
                let result = context
                    .request_from_shell(FileUploadOperation::CreatePreview { file })
                    .await;
                context.update_app(make_event(result));
            }
        });
    }

    /// Asks the shell to transfer the selected file to hosted storage and
    /// resolve with the hosted URL.
    pub fn upload<F>(&self, file: FileMeta, make_event: F)
    where
        F: FnOnce(FileUploadResult) -> Ev + Send + 'static,
    {
        self.context.spawn({
            let context = self.context.clone();
            async move {
                let result = context
                    .request_from_shell(FileUploadOperation::Upload { file })
                    .await;
                context.update_app(make_event(result));
            }
        });
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileUploadOperation {
    CreatePreview { file: FileMeta },
    Upload { file: FileMeta },
}

impl Operation for FileUploadOperation {
    type Output = FileUploadResult;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileUploadOutput {
    Preview { local_url: String },
    Uploaded { hosted_url: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileUploadError {
    #[error("upload cancelled")]
    Cancelled,

    #[error("transfer failed: {reason}")]
    TransferFailed { reason: String },
}

pub type FileUploadResult = Result<FileUploadOutput, FileUploadError>;
