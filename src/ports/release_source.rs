use crate::domain::AppError;

/// Remote source of the Liberica release catalog.
pub trait ReleaseSource {
    /// The catalog payload as served: a JSON array of release objects.
    fn fetch_catalog(&self) -> Result<serde_json::Value, AppError>;

    /// Human-readable location, shown in status lines.
    fn describe(&self) -> String;
}
