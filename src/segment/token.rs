/// Half-open byte range `[start, end)` into the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One span between two consecutive word boundaries, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub span: Span,
    pub text: &'a str,
}

/// Token accepted by the classifier, copied out of the input text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    /// Where the token sat in the input (UTF-8 byte offsets).
    pub span: Span,
}

impl From<Segment<'_>> for Token {
    fn from(segment: Segment<'_>) -> Self {
        Self {
            text: segment.text.to_string(),
            span: segment.span,
        }
    }
}
