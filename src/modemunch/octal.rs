use super::{FileMode, ModeError};
use crate::constants::OCTAL_MAX_LEN;

/// Parse an absolute octal mode such as `755` or `04755`.
///
/// The whole string must be octal digits and at most eight characters
/// long; the result replaces the current mode outright.
pub fn parse_octal(spec: &str) -> Result<FileMode, ModeError> {
    if spec.is_empty() || spec.len() > OCTAL_MAX_LEN {
        return Err(ModeError::BadOctalSyntax);
    }

    spec.bytes().try_fold(0 as FileMode, |acc, b| match b {
        b'0'..=b'7' => Ok((acc << 3) | FileMode::from(b - b'0')),
        _ => Err(ModeError::BadOctalSyntax),
    })
}
