use super::constant::COOKIE_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One browser cookie as captured by the client.
///
/// Browser cookie stores send more than a name and a value (domain, path,
/// expiry, flags); those fields are accepted and ignored.
#[derive(Clone, Deserialize, Serialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

// Session cookies must never end up in the log.
impl fmt::Debug for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cookie")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Joins cookies into a single `Cookie` header value, in request order.
pub fn cookie_header(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(Cookie::to_string)
        .collect::<Vec<_>>()
        .join(COOKIE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(name: &str, value: &str) -> Cookie {
        Cookie {
            name: name.into(),
            value: value.into(),
        }
    }

    #[test]
    fn joins_pairs_in_order() {
        let cookies = vec![cookie("a", "1"), cookie("b", "2")];
        assert_eq!(cookie_header(&cookies), "a=1; b=2");
    }

    #[test]
    fn empty_list_gives_empty_header() {
        assert_eq!(cookie_header(&[]), "");
    }

    #[test]
    fn ignores_browser_cookie_metadata() {
        let raw = r#"{
            "name": "JSESSIONID",
            "value": "abc123",
            "domain": ".example.edu",
            "path": "/",
            "secure": true,
            "httpOnly": true,
            "expirationDate": 1767225600.5
        }"#;
        let cookie: Cookie = serde_json::from_str(raw).unwrap();
        assert_eq!(cookie_header(&[cookie]), "JSESSIONID=abc123");
    }

    #[test]
    fn debug_hides_value() {
        let rendered = format!("{:?}", cookie("session", "s3cr3t"));
        assert!(rendered.contains("session"));
        assert!(!rendered.contains("s3cr3t"));
    }
}
