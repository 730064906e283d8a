use core::fmt::{Display, Formatter, Result as FmtResult};

use duplicate::duplicate_item;
use hex::FromHexError;
use thiserror::Error;
use types::collections::CollectionError;

/// One step from an outer object into an inner one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

/// Location of a field relative to the object passed to the outermost call.
///
/// Segments are stored outermost first. Fields are joined with dots, indices are rendered in
/// brackets directly after the preceding segment: `Body.AttesterSlashings[2].Attestation2`.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl Display for FieldPath {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => formatter.write_str(name)?,
                PathSegment::Field(name) => write!(formatter, ".{name}")?,
                PathSegment::Index(index) => write!(formatter, "[{index}]")?,
            }
        }

        Ok(())
    }
}

/// Why a single wire value could not be converted.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum FieldError {
    #[error("value is required")]
    Required,
    #[error("hex string without 0x prefix")]
    MissingHexPrefix,
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),
    #[error("invalid unsigned decimal integer")]
    InvalidDecimal,
    #[error("expected {expected} bytes, found {actual} bytes")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("expected no more than {maximum} bytes, found {actual} bytes")]
    TooLong { maximum: usize, actual: usize },
    #[error("expected list to have no more than {maximum} elements, found {actual} elements")]
    ListTooLong { maximum: usize, actual: usize },
    #[error("nil value")]
    Nil,
    #[error("could not parse Uint256")]
    Uint256Unparseable,
    #[error("{value} is not a valid Uint256")]
    Uint256OutOfRange { value: String },
}

impl From<CollectionError> for FieldError {
    fn from(error: CollectionError) -> Self {
        match error {
            CollectionError::ListTooLong { maximum, actual } => {
                Self::ListTooLong { maximum, actual }
            }
            CollectionError::VectorSizeMismatch { expected, actual } => {
                Self::LengthMismatch { expected, actual }
            }
        }
    }
}

/// An internal value that cannot be represented in wire form.
///
/// Internal objects are constructed through bounded types, so this only happens when their bytes
/// were corrupted. It is a separate type from [`FieldError`] to keep it out of input validation.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum InvariantViolation {
    #[error("{value} is not a valid Uint256")]
    Uint256OutOfRange { value: String },
}

#[derive(Clone, PartialEq, Debug, Error)]
#[error("could not decode{}: {cause}", Self::rendered_path(.path))]
pub struct DecodeError {
    path: FieldPath,
    cause: FieldError,
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("could not encode{}: {cause}", Self::rendered_path(.path))]
pub struct EncodeError {
    path: FieldPath,
    cause: InvariantViolation,
}

#[duplicate_item(
    error_type      cause_type;
    [DecodeError]   [FieldError];
    [EncodeError]   [InvariantViolation];
)]
impl error_type {
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub const fn cause(&self) -> &cause_type {
        &self.cause
    }

    fn prepend(mut self, segment: PathSegment) -> Self {
        self.path.prepend(segment);
        self
    }

    fn rendered_path(path: &FieldPath) -> String {
        if path.is_empty() {
            String::new()
        } else {
            format!(" {path}")
        }
    }
}

#[duplicate_item(
    error_type      cause_type;
    [DecodeError]   [FieldError];
    [EncodeError]   [InvariantViolation];
)]
impl From<cause_type> for error_type {
    fn from(cause: cause_type) -> Self {
        Self {
            path: FieldPath::default(),
            cause,
        }
    }
}

/// Attaches the location of a failed conversion as the error propagates outward.
///
/// Each level of nesting prepends exactly one segment, so the final path reads outer to inner.
pub trait WithPath<T> {
    type Error;

    fn at(self, field: &'static str) -> Result<T, Self::Error>;

    fn at_index(self, index: usize) -> Result<T, Self::Error>;
}

#[duplicate_item(
    source_error            target_error;
    [FieldError]            [DecodeError];
    [DecodeError]           [DecodeError];
    [InvariantViolation]    [EncodeError];
    [EncodeError]           [EncodeError];
)]
impl<T> WithPath<T> for Result<T, source_error> {
    type Error = target_error;

    fn at(self, field: &'static str) -> Result<T, Self::Error> {
        self.map_err(|error| target_error::from(error).prepend(PathSegment::Field(field)))
    }

    fn at_index(self, index: usize) -> Result<T, Self::Error> {
        self.map_err(|error| target_error::from(error).prepend(PathSegment::Index(index)))
    }
}

/// Fails with [`FieldError::Nil`] if a required nested object is absent.
pub fn required<T>(value: Option<T>) -> Result<T, FieldError> {
    value.ok_or(FieldError::Nil)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn fail(cause: FieldError) -> Result<(), FieldError> {
        Err(cause)
    }

    #[test]
    fn wrapping_prepends_segments() {
        let error = fail(FieldError::InvalidHex(FromHexError::OddLength))
            .at("Signature")
            .at("Attestation2")
            .at_index(2)
            .at("AttesterSlashings")
            .at("Body")
            .expect_err("decoding should fail");

        assert_eq!(
            error.path().to_string(),
            "Body.AttesterSlashings[2].Attestation2.Signature",
        );
        assert_eq!(
            error.to_string(),
            "could not decode Body.AttesterSlashings[2].Attestation2.Signature: \
             invalid hex string: Odd number of digits",
        );
    }

    #[test]
    fn wrapping_in_stages_matches_wrapping_at_once() {
        let inner = fail(FieldError::Nil).at("Message").at("SignedHeader1");
        let staged = inner.at_index(0).at("ProposerSlashings");
        let direct = fail(FieldError::Nil)
            .at("Message")
            .at("SignedHeader1")
            .at_index(0)
            .at("ProposerSlashings");

        assert_eq!(staged, direct);
    }

    #[test]
    fn hex_causes_compare_by_value() {
        let odd = fail(FieldError::from(FromHexError::OddLength)).at("Root");
        let invalid = fail(FieldError::from(FromHexError::InvalidHexCharacter { c: 'z', index: 1 }))
            .at("Root");

        assert_eq!(
            odd,
            fail(FieldError::InvalidHex(FromHexError::OddLength)).at("Root"),
        );
        assert_ne!(odd, invalid);
    }

    #[test_case(&[],                                                     "could not decode: nil value")]
    #[test_case(&[PathSegment::Field("Body")],                           "could not decode Body: nil value")]
    #[test_case(&[PathSegment::Index(3)],                                "could not decode [3]: nil value")]
    #[test_case(&[PathSegment::Index(3), PathSegment::Field("Data")],    "could not decode [3].Data: nil value")]
    #[test_case(&[PathSegment::Field("Blobs"), PathSegment::Index(0)],   "could not decode Blobs[0]: nil value")]
    fn path_rendering(segments: &[PathSegment], expected: &str) {
        let mut error = DecodeError::from(FieldError::Nil);

        for segment in segments.iter().rev() {
            error = error.prepend(*segment);
        }

        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn bare_cause_has_empty_path() {
        let error = DecodeError::from(FieldError::Required);

        assert!(error.path().is_empty());
        assert_eq!(error.cause(), &FieldError::Required);
    }

    #[test]
    fn encode_errors_use_the_same_paths() {
        let error = Err::<(), _>(InvariantViolation::Uint256OutOfRange {
            value: "1".to_owned(),
        })
        .at("BaseFeePerGas")
        .at("ExecutionPayload")
        .expect_err("encoding should fail");

        assert_eq!(
            error.to_string(),
            "could not encode ExecutionPayload.BaseFeePerGas: 1 is not a valid Uint256",
        );
    }

    #[test]
    fn collection_errors_map_to_field_errors() {
        assert_eq!(
            FieldError::from(CollectionError::VectorSizeMismatch {
                expected: 64,
                actual: 63,
            }),
            FieldError::LengthMismatch {
                expected: 64,
                actual: 63,
            },
        );
    }
}
