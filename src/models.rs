// Data structures (Message, requests) and the palindrome check

use serde::{Deserialize, Deserializer, Serialize};

// Message Struct
//
// `is_palindrome` is never persisted; handlers fill it in when a single
// message is fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub body: String,
    #[serde(rename = "isPalindrome", default)]
    pub is_palindrome: bool,
}

impl Message {
    /// Create a stored message with the palindrome flag left unset
    pub fn new(id: i64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
            is_palindrome: false,
        }
    }

    /// Set `is_palindrome` from the current body (builder pattern)
    pub fn with_palindrome_flag(mut self) -> Self {
        self.is_palindrome = is_palindrome(&self.body);
        self
    }
}

// Request Types
//
// Unknown fields such as `id` or `isPalindrome` are accepted and ignored.
// A missing or null `body` is stored as an empty string.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CreateMessageRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

impl CreateMessageRequest {
    /// Parse a create payload; a bare `null` document counts as `{}`
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let request: Option<Self> = serde_json::from_slice(bytes)?;
        Ok(request.unwrap_or_default())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns true if `s` reads the same forwards and backwards.
///
/// Comparison is by `char`, case-sensitive, with no whitespace folding.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}
