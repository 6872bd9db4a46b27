use std::collections::BTreeMap;

use serde::Serialize;

/// Validation errors of a form, keyed by the name of the input field.
///
/// Each field carries the message of the first rule it violated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Record `message` for `field` unless the field already has an error.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| vec![message.into()]);
    }

    /// Unwrap the result of a field validation, recording the error message
    /// for `field` on failure.
    pub fn check<T, E>(
        &mut self,
        field: &'static str,
        result: Result<T, E>,
        message: impl FnOnce(E) -> String,
    ) -> Option<T> {
        result
            .map_err(|err| self.add(field, message(err)))
            .ok()
    }
}

/// The outcome of a form submission as reported to the website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(SubmissionFailure),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFailure {
    /// User-facing message for a toast or banner.
    pub message: Option<String>,
    /// Per-field validation errors.
    pub errors: Option<FieldErrors>,
}

impl SubmissionFailure {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn errors(errors: FieldErrors) -> Self {
        Self {
            message: None,
            errors: Some(errors),
        }
    }
}

impl<E: Into<SubmissionFailure>> From<Result<(), E>> for SubmissionResult {
    fn from(value: Result<(), E>) -> Self {
        match value {
            Ok(()) => Self::Success,
            Err(err) => Self::Failure(err.into()),
        }
    }
}

impl Serialize for SubmissionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Repr<'a> {
            success: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            errors: Option<&'a FieldErrors>,
        }

        match self {
            Self::Success => Repr {
                success: true,
                message: None,
                errors: None,
            },
            Self::Failure(failure) => Repr {
                success: false,
                message: failure.message.as_deref(),
                errors: failure.errors.as_ref(),
            },
        }
        .serialize(serializer)
    }
}
