use thiserror::Error;

/// Errors raised while constructing a dialog.
///
/// All variants are construction-time faults: once a dialog has been
/// built successfully, showing it cannot fail.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The embedded decorative image failed to decode or scale.
    #[error("Decorative image could not be decoded: {0}")]
    ImageDecode(String),
    /// `default_button` is outside the valid index range for the dialog.
    #[error("Default button index {0} is out of range")]
    DefaultOutOfRange(u8),
    /// `default_button` names a button that was not configured.
    #[error("Default button {0} refers to a button that is not present")]
    MissingDefaultButton(u8),
}
