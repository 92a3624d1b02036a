use crate::request::cookie::Cookie;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DownloadRequest {
    pub video_url: String,
    pub cookies: Vec<Cookie>,
    pub user_agent: String,
    /// Bare file name, no extension. Joined onto the video directory as-is.
    #[serde(default)]
    pub output_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct VideoEntry {
    pub name: String,
    pub path: String,
}
