use super::constant;
use serde::{Deserialize, Serialize};

/// Browser presets sent when a request arrives with a blank user agent.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum UserAgent {
    Firefox,
    Chrome,
}

impl UserAgent {
    pub fn header_value(&self) -> &'static str {
        match self {
            UserAgent::Firefox => constant::FIREFOX_USER_AGENT,
            UserAgent::Chrome => constant::CHROME_USER_AGENT,
        }
    }

    /// The requested value verbatim, or this preset if it is blank.
    pub fn or_requested(&self, requested: &str) -> String {
        if requested.trim().is_empty() {
            self.header_value().to_string()
        } else {
            requested.to_string()
        }
    }
}
