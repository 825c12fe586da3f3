/// A DaisySMS plaintext reply split on `:`.
///
/// The service answers either with a bare token (`NO_NUMBERS`) or with a record
/// whose first segment is a tag (`ACCESS_NUMBER:123:+15550001111`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply<'a> {
    Token(&'a str),
    Record { tag: &'a str, fields: Vec<&'a str> },
}

impl<'a> Reply<'a> {
    pub(crate) fn parse(body: &'a str) -> Self {
        let mut segments = body.trim().split(':');
        // `split` always yields at least one segment.
        let tag = segments.next().unwrap_or_default();
        let fields: Vec<&str> = segments.collect();
        if fields.is_empty() {
            Self::Token(tag)
        } else {
            Self::Record { tag, fields }
        }
    }
}
