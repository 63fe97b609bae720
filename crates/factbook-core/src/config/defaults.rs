//! Default value functions for serde.

pub(super) fn default_language() -> String {
    "EN".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
