//! Security utilities for Salesforce SOAP operations.
//!
//! Every caller-supplied value placed inside a SOAP envelope MUST go through
//! [`xml::escape`]. Operation payloads assembled by this workspace are the
//! only fragments inserted unescaped.
//!
//! ```rust
//! use fuse_sf_client::security::xml;
//!
//! // CORRECT
//! let body = format!("<fullNames>{}</fullNames>", xml::escape("Fuse & Co"));
//!
//! // WRONG - NEVER do this with user input
//! // let body = format!("<fullNames>{}</fullNames>", user_input);
//! ```

/// XML escaping utilities.
pub mod xml {
    /// Escape a string for safe inclusion in XML content.
    ///
    /// This escapes the five predefined XML entities.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuse_sf_client::security::xml;
    ///
    /// let safe = xml::escape("Hello <World> & 'Friends'");
    /// assert_eq!(safe, "Hello &lt;World&gt; &amp; &apos;Friends&apos;");
    /// ```
    #[must_use]
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}
