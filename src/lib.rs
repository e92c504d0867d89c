//! Split URLs into offset-tracked tokens for search indexing.
//!
//! A [`UrlTokenizer`] is bound to one [`UrlPart`] (or to all of them) and turns each
//! input into tokens whose offsets point back into the original text. Hosts expand
//! into their suffixes (`www.foo.com`, `foo.com`, `com`) and paths into their
//! prefixes (`/a`, `/a/b`), so a query can match any level of either.
//!
//! ```
//! use url_tokenizer::{Token, TokenizerConfig, UrlPart, UrlTokenizer};
//!
//! let mut tokenizer = UrlTokenizer::with_config(
//!     Some(UrlPart::Query),
//!     TokenizerConfig::new().with_url_decode(true),
//! );
//! let tokens = tokenizer.tokenize("http://foo.com/search?q=a%20b&page=2")?;
//! assert_eq!(
//!     tokens,
//!     [Token::new("q=a b", 22, 29), Token::new("page=2", 30, 36)]
//! );
//! # Ok::<(), url_tokenizer::TokenizerError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod parser;
mod percent_decode;
mod scheme;
mod tokenizer;
mod types;
mod url_components;
mod url_part;

// Public API
pub use error::{ParseError, Result, TokenizerError};
pub use tokenizer::{Token, TokenizerConfig, Tokens, UrlTokenizer};
pub use url_part::UrlPart;
