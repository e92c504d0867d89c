//! Restartable URL token stream.

mod config;
mod generators;
mod plan;

pub use config::TokenizerConfig;

use core::iter::FusedIterator;
use core::mem;

use generators::{PartTokens, PendingToken, TokenText};

use crate::compat::{String, ToString, Vec};
use crate::error::{Result, TokenizerError};
use crate::parser::split_url;
use crate::percent_decode::percent_decode;
use crate::url_part::UrlPart;

/// A token and its byte offsets `[start, end)` in the original input.
///
/// The offsets always refer to the input as given to `reset`, even when the text
/// was percent-decoded or does not occur verbatim (such as a default port).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Tokenizer state between calls
#[derive(Debug)]
enum Stream {
    /// Never reset, or the last reset failed
    Unset,
    Active(ActiveStream),
    /// Ran to the end; the buffer is kept for the next reset
    Exhausted(String),
}

#[derive(Debug)]
struct ActiveStream {
    input: String,
    url_decode: bool,
    stages: Vec<PartTokens>,
    stage: usize,
}

impl ActiveStream {
    fn next(&mut self) -> Option<Token> {
        while let Some(stage) = self.stages.get_mut(self.stage) {
            if let Some(pending) = stage.next(&self.input) {
                return Some(self.materialize(pending));
            }
            self.stage += 1;
        }
        None
    }

    fn materialize(&self, pending: PendingToken) -> Token {
        let PendingToken { span, text } = pending;
        let text = match text {
            TokenText::Synthetic(text) => text,
            TokenText::Source if self.url_decode => {
                percent_decode(span.slice(&self.input)).into_owned()
            }
            TokenText::Source => span.slice(&self.input).to_string(),
        };
        Token::new(text, span.start, span.end)
    }
}

/// Splits URLs into tokens for one [`UrlPart`], or for all of them.
///
/// Call [`reset`](Self::reset) with each new input, then pull tokens with
/// [`next_token`](Self::next_token) until it returns `Ok(None)`.
///
/// # Examples
///
/// ```
/// use url_tokenizer::{UrlPart, UrlTokenizer};
///
/// let mut tokenizer = UrlTokenizer::new(Some(UrlPart::Host));
/// let hosts: Vec<String> = tokenizer
///     .tokens("http://www.foo.bar.com/index.html")?
///     .map(|token| token.text)
///     .collect();
/// assert_eq!(hosts, ["www.foo.bar.com", "foo.bar.com", "bar.com", "com"]);
/// # Ok::<(), url_tokenizer::TokenizerError>(())
/// ```
#[derive(Debug)]
pub struct UrlTokenizer {
    part: Option<UrlPart>,
    config: TokenizerConfig,
    stream: Stream,
}

impl UrlTokenizer {
    /// Tokenizer for `part` with the default config; `None` emits every part
    pub fn new(part: Option<UrlPart>) -> Self {
        Self::with_config(part, TokenizerConfig::default())
    }

    pub fn with_config(part: Option<UrlPart>, config: TokenizerConfig) -> Self {
        Self {
            part,
            config,
            stream: Stream::Unset,
        }
    }

    /// Tokenizer for a part given by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnrecognizedPart`] if `name` is not a part name.
    pub fn from_part_name(name: &str, config: TokenizerConfig) -> Result<Self> {
        Ok(Self::with_config(Some(UrlPart::from_name(name)?), config))
    }

    pub fn part(&self) -> Option<UrlPart> {
        self.part
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Takes effect at the next `reset`
    pub fn set_part(&mut self, part: Option<UrlPart>) {
        self.part = part;
    }

    /// Takes effect at the next `reset`
    pub fn set_config(&mut self, config: TokenizerConfig) {
        self.config = config;
    }

    pub fn set_allow_malformed(&mut self, allow_malformed: bool) {
        self.config.allow_malformed = allow_malformed;
    }

    pub fn set_url_decode(&mut self, url_decode: bool) {
        self.config.url_decode = url_decode;
    }

    pub fn set_tokenize_host(&mut self, tokenize_host: bool) {
        self.config.tokenize_host = tokenize_host;
    }

    pub fn set_tokenize_path(&mut self, tokenize_path: bool) {
        self.config.tokenize_path = tokenize_path;
    }

    /// Parse `input` and rewind the token stream to its first token.
    ///
    /// All state from the previous input is discarded. The current part and config
    /// apply until the next reset.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::MalformedUrl`] if `input` cannot be split into URL
    /// components and `allow_malformed` is off. The tokenizer is then left un-reset.
    pub fn reset(&mut self, input: &str) -> Result<()> {
        let mut buffer = match mem::replace(&mut self.stream, Stream::Unset) {
            Stream::Active(active) => active.input,
            Stream::Exhausted(buffer) => buffer,
            Stream::Unset => String::new(),
        };
        let config = self.config;
        tracing::debug!(
            part = ?self.part,
            len = input.len(),
            url_decode = config.url_decode,
            tokenize_host = config.tokenize_host,
            tokenize_path = config.tokenize_path,
            "resetting url tokenizer"
        );

        let (stages, url_decode) = match split_url(input) {
            Ok(components) => (
                plan::plan(self.part, input, &components, config),
                config.url_decode,
            ),
            Err(err) if config.allow_malformed => {
                tracing::debug!(error = %err, "malformed url emitted as a single token");
                (plan::plan_malformed(input), false)
            }
            Err(err) => return Err(err.into()),
        };

        buffer.clear();
        buffer.push_str(input);
        self.stream = Stream::Active(ActiveStream {
            input: buffer,
            url_decode,
            stages,
            stage: 0,
        });
        Ok(())
    }

    /// Pull the next token.
    ///
    /// Returns `Ok(None)` once when the stream ends.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::NotReset`] if called before a successful `reset`,
    /// or again after the stream has ended.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let Stream::Active(active) = &mut self.stream else {
            return Err(TokenizerError::NotReset);
        };
        if let Some(token) = active.next() {
            tracing::trace!(text = %token.text, start = token.start, end = token.end, "token");
            return Ok(Some(token));
        }
        let buffer = mem::take(&mut active.input);
        self.stream = Stream::Exhausted(buffer);
        Ok(None)
    }

    /// Reset with `input` and iterate over its tokens.
    ///
    /// # Errors
    ///
    /// Same as [`reset`](Self::reset).
    pub fn tokens(&mut self, input: &str) -> Result<Tokens<'_>> {
        self.reset(input)?;
        Ok(Tokens {
            tokenizer: self,
            done: false,
        })
    }

    /// Reset with `input` and collect all of its tokens.
    ///
    /// # Errors
    ///
    /// Same as [`reset`](Self::reset).
    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>> {
        Ok(self.tokens(input)?.collect())
    }
}

impl Default for UrlTokenizer {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Iterator over the tokens of one input, see [`UrlTokenizer::tokens`]
#[derive(Debug)]
pub struct Tokens<'a> {
    tokenizer: &'a mut UrlTokenizer,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(Some(token)) => Some(token),
            Ok(None) => {
                self.done = true;
                None
            }
            // `tokens` only hands out an iterator after a successful reset
            Err(err) => {
                tracing::debug!(error = %err, "token stream ended with an error");
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}
