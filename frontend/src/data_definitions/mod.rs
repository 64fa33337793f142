pub mod url_param;
pub mod insight_handle;
