use serde::{Deserialize, Serialize};

use crate::event::FileMeta;
use crate::{
    ACCEPTED_IMAGE_TYPES, DESCRIPTION_MAX_CHARS, MAX_IMAGE_BYTES, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};

pub const IMAGE_REQUIRED: &str = "Image file is required";
pub const IMAGE_FORMAT_UNSUPPORTED: &str = "Only PNG, JPEG and GIF files are accepted";
pub const IMAGE_TOO_LARGE: &str = "The file must be smaller than 10MB";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_SHORT: &str = "Minimum of 2 characters";
pub const TITLE_TOO_LONG: &str = "Maximum of 20 characters";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const DESCRIPTION_TOO_LONG: &str = "Maximum of 65 characters";

/// One validation rule: a predicate that must hold, and the message surfaced
/// next to the field when it does not.
struct Rule<T: ?Sized> {
    check: fn(&T) -> bool,
    message: &'static str,
}

/// Rules are evaluated in order; the first failure within a field wins.
fn first_failure<T: ?Sized>(value: &T, rules: &[Rule<T>]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

#[must_use]
pub fn image_error(file: Option<&FileMeta>) -> Option<&'static str> {
    const RULES: &[Rule<FileMeta>] = &[
        Rule {
            check: |f| {
                ACCEPTED_IMAGE_TYPES
                    .iter()
                    .any(|accepted| f.mime_type.eq_ignore_ascii_case(accepted))
            },
            message: IMAGE_FORMAT_UNSUPPORTED,
        },
        Rule {
            check: |f| f.size_bytes <= MAX_IMAGE_BYTES,
            message: IMAGE_TOO_LARGE,
        },
    ];

    let Some(file) = file else {
        return Some(IMAGE_REQUIRED);
    };
    first_failure(file, RULES)
}

#[must_use]
pub fn title_error(title: &str) -> Option<&'static str> {
    const RULES: &[Rule<str>] = &[
        Rule {
            check: |t| !t.is_empty(),
            message: TITLE_REQUIRED,
        },
        Rule {
            check: |t| t.chars().count() >= TITLE_MIN_CHARS,
            message: TITLE_TOO_SHORT,
        },
        Rule {
            check: |t| t.chars().count() <= TITLE_MAX_CHARS,
            message: TITLE_TOO_LONG,
        },
    ];

    first_failure(title, RULES)
}

#[must_use]
pub fn description_error(description: &str) -> Option<&'static str> {
    const RULES: &[Rule<str>] = &[
        Rule {
            check: |d| !d.is_empty(),
            message: DESCRIPTION_REQUIRED,
        },
        Rule {
            check: |d| d.chars().count() <= DESCRIPTION_MAX_CHARS,
            message: DESCRIPTION_TOO_LONG,
        },
    ];

    first_failure(description, RULES)
}

/// Per-field error state rendered next to each input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub image: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.image.is_none() && self.title.is_none() && self.description.is_none()
    }
}

#[must_use]
pub fn validate_form(file: Option<&FileMeta>, title: &str, description: &str) -> FieldErrors {
    FieldErrors {
        image: image_error(file).map(str::to_owned),
        title: title_error(title).map(str::to_owned),
        description: description_error(description).map(str::to_owned),
    }
}
