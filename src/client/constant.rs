pub const SITE_NAME: &str = "Vintage Roleplay";

/// Shown for any failed submission, whatever the cause.
pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting application";
