/// Flags controlling how a [`UrlTokenizer`](crate::UrlTokenizer) expands a URL.
///
/// A tokenizer snapshots its config on every `reset`, so changes never affect a
/// token sequence that is already running.
///
/// # Examples
///
/// ```
/// use url_tokenizer::TokenizerConfig;
///
/// let config = TokenizerConfig::new()
///     .with_url_decode(true)
///     .with_tokenize_host(false);
/// assert!(config.url_decode);
/// assert!(!config.tokenize_host);
/// assert!(config.tokenize_path);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct TokenizerConfig {
    /// Emit the whole input as a single token when it cannot be parsed
    pub allow_malformed: bool,
    /// Percent-decode token text
    pub url_decode: bool,
    /// Emit every host suffix instead of only the full host
    pub tokenize_host: bool,
    /// Emit every path prefix instead of only the full path
    pub tokenize_path: bool,
}

impl TokenizerConfig {
    pub const fn new() -> Self {
        Self {
            allow_malformed: false,
            url_decode: false,
            tokenize_host: true,
            tokenize_path: true,
        }
    }

    #[must_use]
    pub const fn with_allow_malformed(mut self, allow_malformed: bool) -> Self {
        self.allow_malformed = allow_malformed;
        self
    }

    #[must_use]
    pub const fn with_url_decode(mut self, url_decode: bool) -> Self {
        self.url_decode = url_decode;
        self
    }

    #[must_use]
    pub const fn with_tokenize_host(mut self, tokenize_host: bool) -> Self {
        self.tokenize_host = tokenize_host;
        self
    }

    #[must_use]
    pub const fn with_tokenize_path(mut self, tokenize_path: bool) -> Self {
        self.tokenize_path = tokenize_path;
        self
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
