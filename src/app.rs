use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capabilities::{Capabilities, FileUploadOutput};
use crate::event::{Event, FileMeta};
use crate::model::{ImageRecord, Model, Toast};
use crate::validation::{self, validate_form};
use crate::view::{CardView, FormView, GalleryView, OverlayView, ToastView, ViewModel};
use crate::{API_BASE_URL, GRID_COLUMNS, GRID_GAP_PX, IMAGES_PATH};

pub const MISSING_UPLOAD_TITLE: &str = "Image not added";
pub const MISSING_UPLOAD_BODY: &str =
    "Please add and wait for an image upload before submitting.";
pub const SUBMIT_SUCCESS_TITLE: &str = "Image registered";
pub const SUBMIT_SUCCESS_BODY: &str = "Your image has been successfully registered.";
pub const SUBMIT_FAILED_TITLE: &str = "Registration failed";
pub const SUBMIT_FAILED_BODY: &str = "An error occurred while trying to register your image.";
pub const UPLOAD_FAILED_TITLE: &str = "Upload failed";
pub const UPLOAD_FAILED_BODY: &str = "An error occurred while uploading your image.";

/// Wire shape of `POST /api/images`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct NewImageRequest {
    title: String,
    description: String,
    url: String,
}

#[derive(Default)]
pub struct App;

impl App {
    fn images_url() -> String {
        format!("{API_BASE_URL}{IMAGES_PATH}")
    }

    fn send_images_request(caps: &Capabilities) {
        caps.http
            .get(Self::images_url())
            .expect_json()
            .send(|result| Event::ImagesFetched(Box::new(result)));
    }

    fn send_create_image_request(request: &NewImageRequest, caps: &Capabilities) -> bool {
        let body = match serde_json::to_vec(request) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "could not serialize image record");
                return false;
            }
        };

        caps.http
            .post(Self::images_url())
            .header("Content-Type", "application/json")
            .body(body)
            .send(|result| Event::SubmitCompleted(Box::new(result)));
        true
    }

    fn start_upload(file: &FileMeta, model: &mut Model, caps: &Capabilities) {
        let token = Uuid::new_v4();
        model.form.upload_token = Some(token);
        model.form.is_uploading = true;

        caps.file_upload
            .create_preview(file.clone(), move |result| Event::PreviewReady {
                token,
                result,
            });
        caps.file_upload
            .upload(file.clone(), move |result| Event::UploadFinished {
                token,
                result,
            });
    }

    fn is_valid_hosted_url(raw: &str) -> bool {
        match url::Url::parse(raw) {
            Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
            Err(_) => false,
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        match event {
            Event::AppStarted => {
                tracing::info!("app started");
                model.load_failed = false;
                if !model.is_refreshing {
                    model.is_refreshing = true;
                    Self::send_images_request(caps);
                }
                caps.render.render();
            }

            Event::RefreshRequested => {
                if !model.is_refreshing {
                    model.is_refreshing = true;
                    Self::send_images_request(caps);
                }
                caps.render.render();
            }

            Event::ImagesFetched(result) => {
                model.is_refreshing = false;
                match *result {
                    Ok(mut response) if response.status().is_success() => {
                        match response.take_body() {
                            Some(page) => {
                                let total = page.data.len();
                                model.records = page
                                    .data
                                    .into_iter()
                                    .filter(ImageRecord::is_renderable)
                                    .collect();

                                let dropped = total - model.records.len();
                                if dropped > 0 {
                                    tracing::warn!(dropped, "dropped records missing id or url");
                                }
                                model.load_failed = false;
                            }
                            None => {
                                tracing::warn!("images response had no body");
                                model.load_failed = true;
                            }
                        }
                    }
                    Ok(response) => {
                        tracing::warn!(status = ?response.status(), "images request rejected");
                        model.load_failed = true;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "images request failed");
                        model.load_failed = true;
                    }
                }
                caps.render.render();
            }

            Event::CardTapped { id } => {
                match model.records.iter().find(|record| record.id == id) {
                    Some(record) => {
                        model.current_image_url = record.url.clone();
                        model.overlay_open = true;
                    }
                    None => tracing::warn!(id = id.as_str(), "tapped card for unknown record"),
                }
                caps.render.render();
            }

            Event::OverlayDismissed => {
                model.overlay_open = false;
                caps.render.render();
            }

            Event::FormOpened => {
                model.form.is_open = true;
                caps.render.render();
            }

            Event::FormDismissed => {
                // Typed state survives dismissal; only a submit attempt resets it.
                model.form.is_open = false;
                caps.render.render();
            }

            Event::TitleChanged(title) => {
                model.form.title = title;
                model.form.errors.title = None;
                caps.render.render();
            }

            Event::DescriptionChanged(description) => {
                model.form.description = description;
                model.form.errors.description = None;
                caps.render.render();
            }

            Event::FileSelected(file) => {
                model.form.clear_staged_file();
                match validation::image_error(Some(&file)) {
                    Some(message) => {
                        model.form.errors.image = Some(message.to_owned());
                    }
                    None => {
                        model.form.errors.image = None;
                        model.form.file = Some(file.clone());
                        Self::start_upload(&file, model, caps);
                    }
                }
                caps.render.render();
            }

            Event::PreviewReady { token, result } => {
                if model.form.upload_token == Some(token) {
                    match result {
                        Ok(FileUploadOutput::Preview { local_url }) => {
                            model.form.local_preview_url = local_url;
                        }
                        Ok(other) => {
                            tracing::warn!(?other, "unexpected output for preview request");
                        }
                        Err(e) => {
                            // Preview is cosmetic; the upload itself decides the flow.
                            tracing::warn!(error = %e, "preview creation failed");
                        }
                    }
                } else {
                    tracing::debug!("ignoring stale preview completion");
                }
                caps.render.render();
            }

            Event::UploadFinished { token, result } => {
                if model.form.upload_token == Some(token) {
                    model.form.is_uploading = false;
                    match result {
                        Ok(FileUploadOutput::Uploaded { hosted_url }) => {
                            if Self::is_valid_hosted_url(&hosted_url) {
                                model.form.remote_image_url = hosted_url;
                            } else {
                                tracing::warn!(url = %hosted_url, "shell returned invalid hosted url");
                                model.form.clear_staged_file();
                                model.active_toast =
                                    Some(Toast::error(UPLOAD_FAILED_TITLE, UPLOAD_FAILED_BODY));
                            }
                        }
                        Ok(other) => {
                            tracing::warn!(?other, "unexpected output for upload request");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "file upload failed");
                            model.form.clear_staged_file();
                            model.active_toast =
                                Some(Toast::error(UPLOAD_FAILED_TITLE, UPLOAD_FAILED_BODY));
                        }
                    }
                } else {
                    tracing::debug!("ignoring stale upload completion");
                }
                caps.render.render();
            }

            Event::SubmitRequested => {
                if model.form.is_submitting {
                    tracing::debug!("submit already in flight");
                    caps.render.render();
                    return;
                }

                let errors = validate_form(
                    model.form.file.as_ref(),
                    &model.form.title,
                    &model.form.description,
                );
                if !errors.is_clear() {
                    // Blocked: inline errors only, nothing is reset.
                    model.form.errors = errors;
                    caps.render.render();
                    return;
                }

                if model.form.remote_image_url.is_empty() {
                    model.active_toast =
                        Some(Toast::error(MISSING_UPLOAD_TITLE, MISSING_UPLOAD_BODY));
                    model.form.reset();
                    caps.render.render();
                    return;
                }

                let request = NewImageRequest {
                    title: model.form.title.clone(),
                    description: model.form.description.clone(),
                    url: model.form.remote_image_url.clone(),
                };
                if Self::send_create_image_request(&request, caps) {
                    model.form.is_submitting = true;
                } else {
                    model.active_toast =
                        Some(Toast::error(SUBMIT_FAILED_TITLE, SUBMIT_FAILED_BODY));
                    model.form.reset();
                }
                caps.render.render();
            }

            Event::SubmitCompleted(result) => {
                let succeeded =
                    matches!(&*result, Ok(response) if response.status().is_success());
                if succeeded {
                    model.active_toast =
                        Some(Toast::success(SUBMIT_SUCCESS_TITLE, SUBMIT_SUCCESS_BODY));

                    // Invalidate the cached collection so the new record
                    // appears in future renders.
                    if !model.is_refreshing {
                        model.is_refreshing = true;
                        Self::send_images_request(caps);
                    }
                } else {
                    match *result {
                        Ok(response) => {
                            tracing::warn!(status = ?response.status(), "image submission rejected");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "image submission failed");
                        }
                    }
                    model.active_toast =
                        Some(Toast::error(SUBMIT_FAILED_TITLE, SUBMIT_FAILED_BODY));
                }
                model.form.reset();
                caps.render.render();
            }

            Event::ToastDismissed => {
                model.active_toast = None;
                caps.render.render();
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel {
            gallery: GalleryView {
                columns: GRID_COLUMNS,
                gap_px: GRID_GAP_PX,
                cards: model.records.iter().map(CardView::from).collect(),
                is_refreshing: model.is_refreshing,
                load_failed: model.load_failed,
            },
            overlay: model.overlay_open.then(|| OverlayView {
                image_url: model.current_image_url.clone(),
            }),
            form: FormView {
                is_open: model.form.is_open,
                title: model.form.title.clone(),
                description: model.form.description.clone(),
                file_name: model.form.file.as_ref().map(|file| file.name.clone()),
                local_preview_url: model.form.local_preview_url.clone(),
                is_uploading: model.form.is_uploading,
                is_submitting: model.form.is_submitting,
                errors: model.form.errors.clone(),
            },
            toast: model.active_toast.as_ref().map(ToastView::from),
        }
    }
}
