/// URL scheme types relevant to tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    #[default]
    Other,
}

impl SchemeType {
    /// Get the default port for this scheme, as token text
    pub fn default_port(self) -> Option<&'static str> {
        match self {
            Self::Http => Some("80"),
            Self::Https => Some("443"),
            Self::Other => None,
        }
    }
}

/// Half-open byte range `[start, end)` into the original input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Zero-length span used for text that does not occur in the input
    pub fn empty_at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Slice the span out of `input`, empty if it is out of bounds
    pub fn slice(self, input: &str) -> &str {
        input.get(self.start..self.end).unwrap_or("")
    }
}
