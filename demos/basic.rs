#![allow(clippy::print_stdout)]

use url_tokenizer::{TokenizerConfig, UrlPart, UrlTokenizer};

fn main() -> Result<(), url_tokenizer::TokenizerError> {
    let input = "https://www.foo.bar.com:9200/index_name/type_name/_search.html?foo=bar&baz=bat#tag";

    // One part at a time
    for part in UrlPart::ALL {
        let mut tokenizer = UrlTokenizer::new(Some(part));
        for token in tokenizer.tokens(input)? {
            println!("{part:>8}: {:<40} [{}, {})", token.text, token.start, token.end);
        }
    }

    // Every part, decoding escapes, tolerating garbage
    let config = TokenizerConfig::new()
        .with_url_decode(true)
        .with_allow_malformed(true);
    let mut tokenizer = UrlTokenizer::with_config(None, config);
    for input in ["http://example.com/caf%C3%A9?q=a%20b", "://not-a-url"] {
        println!("{input}");
        for token in tokenizer.tokens(input)? {
            println!("  {:<40} [{}, {})", token.text, token.start, token.end);
        }
    }

    Ok(())
}
