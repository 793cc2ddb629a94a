//! Byte-range types for chunked feed downloads.
//!
//! eBay feed files are fetched in chunks with a `Range: bytes=start-end`
//! request header and answered with `206 Partial Content` plus a
//! `Content-Range` header. The SDK forwards the caller's `Range` header
//! verbatim and only validates it; walking the chunks is up to the caller.
//!
//! # Example
//!
//! ```rust
//! use ebay_api::clients::{ByteRange, ContentRange};
//!
//! // First 10 MB of a feed file
//! let range = ByteRange::with_length(0, 10 * 1024 * 1024);
//! assert_eq!(range.to_string(), "bytes=0-10485759");
//!
//! // What the server said it sent back
//! let sent = ContentRange::parse("bytes 0-10485759/25000000").unwrap();
//! assert!(!sent.is_last());
//! assert_eq!(sent.next(10 * 1024 * 1024).unwrap().to_string(), "bytes=10485760-20971519");
//! ```

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// A single `bytes=` range specifier.
///
/// Either bound may be absent: `bytes=100-` is open-ended and `bytes=-500`
/// is a suffix range (the last 500 bytes). When both are present,
/// `start <= end` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ByteRange {
    start: Option<u64>,
    end: Option<u64>,
}

impl ByteRange {
    /// Creates a closed range `bytes=start-end`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidRange`] if `start > end`.
    pub fn new(start: u64, end: u64) -> Result<Self, InvalidHttpRequestError> {
        if start > end {
            return Err(InvalidHttpRequestError::InvalidRange {
                value: format!("bytes={start}-{end}"),
            });
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Creates an open-ended range `bytes=start-`.
    #[must_use]
    pub const fn from_offset(start: u64) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Creates the closed range covering `len` bytes from `start`.
    ///
    /// A zero length is treated as one byte.
    #[must_use]
    pub const fn with_length(start: u64, len: u64) -> Self {
        let len = if len == 0 { 1 } else { len };
        Self {
            start: Some(start),
            end: Some(start.saturating_add(len - 1)),
        }
    }

    /// Returns the first byte offset, if present.
    #[must_use]
    pub const fn start(&self) -> Option<u64> {
        self.start
    }

    /// Returns the last byte offset (inclusive), if present.
    #[must_use]
    pub const fn end(&self) -> Option<u64> {
        self.end
    }

    /// Parses a header value holding exactly one range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidRange`] if the value is not
    /// `bytes=` followed by one well-formed, ordered range.
    pub fn parse(value: &str) -> Result<Self, InvalidHttpRequestError> {
        let ranges = Self::parse_all(value)?;
        match ranges.as_slice() {
            [single] => Ok(*single),
            _ => Err(invalid(value)),
        }
    }

    /// Parses a header value holding one or more comma-separated ranges.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidRange`] if any range is
    /// malformed or has `start > end`.
    pub fn parse_all(value: &str) -> Result<Vec<Self>, InvalidHttpRequestError> {
        let specs = value
            .trim()
            .strip_prefix("bytes=")
            .ok_or_else(|| invalid(value))?;

        specs
            .split(',')
            .map(|spec| Self::parse_spec(spec.trim()).ok_or_else(|| invalid(value)))
            .collect()
    }

    fn parse_spec(spec: &str) -> Option<Self> {
        let (start, end) = spec.split_once('-')?;
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;

        match (start, end) {
            (None, None) => None,
            (Some(s), Some(e)) if s > e => None,
            _ => Some(Self { start, end }),
        }
    }
}

fn parse_bound(bound: &str) -> Option<Option<u64>> {
    if bound.is_empty() {
        return Some(None);
    }
    if !bound.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    bound.parse().ok().map(Some)
}

fn invalid(value: &str) -> InvalidHttpRequestError {
    InvalidHttpRequestError::InvalidRange {
        value: value.to_string(),
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bytes=")?;
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        write!(f, "-")?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

/// A parsed `Content-Range: bytes start-end/total` response header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentRange {
    /// First byte offset returned.
    pub start: u64,
    /// Last byte offset returned (inclusive).
    pub end: u64,
    /// Full size of the resource, when the server reports it.
    pub total: Option<u64>,
}

impl ContentRange {
    /// Parses a `Content-Range` header value.
    ///
    /// Returns `None` for unsatisfied-range forms such as `bytes */1000`,
    /// and for ranges that end at or past the reported total.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let rest = value.trim().strip_prefix("bytes")?.trim_start();
        let (range, total) = rest.split_once('/')?;
        let (start, end) = range.split_once('-')?;

        let start: u64 = start.trim().parse().ok()?;
        let end: u64 = end.trim().parse().ok()?;
        if start > end {
            return None;
        }

        let total: Option<u64> = match total.trim() {
            "*" => None,
            t => Some(t.parse().ok()?),
        };
        if end == u64::MAX || total.is_some_and(|total| end >= total) {
            return None;
        }

        Some(Self { start, end, total })
    }

    /// Number of bytes in this chunk.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Always `false`; a content range covers at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if this chunk reaches the end of the resource.
    ///
    /// Unknown totals are never considered last.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.total
            .is_some_and(|total| self.end.checked_add(1).map_or(true, |after| after >= total))
    }

    /// Returns the range for the following chunk of `chunk_size` bytes,
    /// or `None` when this chunk was the last one.
    #[must_use]
    pub fn next(&self, chunk_size: u64) -> Option<ByteRange> {
        if self.is_last() {
            return None;
        }
        let next = ByteRange::with_length(self.end.checked_add(1)?, chunk_size);
        Some(match (next.end, self.total) {
            (Some(end), Some(total)) if end >= total => ByteRange {
                start: next.start,
                end: Some(total - 1),
            },
            _ => next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_range_display() {
        assert_eq!(ByteRange::new(0, 1023).unwrap().to_string(), "bytes=0-1023");
        assert_eq!(ByteRange::from_offset(500).to_string(), "bytes=500-");
        assert_eq!(
            ByteRange::with_length(0, 10_485_760).to_string(),
            "bytes=0-10485759"
        );
    }

    #[test]
    fn test_byte_range_new_rejects_reversed() {
        let result = ByteRange::new(10, 0);
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidRange { value }) if value == "bytes=10-0"
        ));
    }

    #[test]
    fn test_parse_accepts_closed_open_and_suffix() {
        let closed = ByteRange::parse("bytes=0-1023").unwrap();
        assert_eq!((closed.start(), closed.end()), (Some(0), Some(1023)));

        let open = ByteRange::parse("bytes=1024-").unwrap();
        assert_eq!((open.start(), open.end()), (Some(1024), None));

        let suffix = ByteRange::parse("bytes=-500").unwrap();
        assert_eq!((suffix.start(), suffix.end()), (None, Some(500)));

        let equal = ByteRange::parse("bytes=7-7").unwrap();
        assert_eq!((equal.start(), equal.end()), (Some(7), Some(7)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for value in [
            "",
            "0-1023",
            "bytes=",
            "bytes=-",
            "bytes=abc-def",
            "bytes=10-5",
            "bytes=+1-2",
            "items=0-10",
            "bytes=0-10,20-30",
        ] {
            assert!(ByteRange::parse(value).is_err(), "expected {value:?} to fail");
        }
    }

    #[test]
    fn test_parse_all_handles_multiple_ranges() {
        let ranges = ByteRange::parse_all("bytes=0-10, 20-30").unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[1].start(), Some(20));

        assert!(ByteRange::parse_all("bytes=0-10,30-20").is_err());
    }

    #[test]
    fn test_content_range_parse() {
        let range = ContentRange::parse("bytes 0-1023/4096").unwrap();
        assert_eq!(range.start, 0);
        assert_eq!(range.end, 1023);
        assert_eq!(range.total, Some(4096));
        assert_eq!(range.len(), 1024);

        let unknown = ContentRange::parse("bytes 100-199/*").unwrap();
        assert_eq!(unknown.total, None);
        assert!(!unknown.is_last());

        assert!(ContentRange::parse("bytes */4096").is_none());
        assert!(ContentRange::parse("bytes 10-5/100").is_none());
        assert!(ContentRange::parse("garbage").is_none());
    }

    #[test]
    fn test_content_range_rejects_ranges_past_the_end() {
        assert!(ContentRange::parse("bytes 0-18446744073709551615/*").is_none());
        assert!(
            ContentRange::parse("bytes 0-18446744073709551615/18446744073709551615").is_none()
        );
        assert!(ContentRange::parse("bytes 0-0/0").is_none());
        assert!(ContentRange::parse("bytes 0-100/100").is_none());

        let widest = ContentRange::parse("bytes 0-18446744073709551614/*").unwrap();
        assert_eq!(widest.len(), u64::MAX);
        assert!(!widest.is_last());
        assert_eq!(widest.next(10).unwrap().to_string(), "bytes=18446744073709551615-18446744073709551615");
    }

    #[test]
    fn test_content_range_helpers_saturate_on_hand_built_values() {
        let range = ContentRange {
            start: 0,
            end: u64::MAX,
            total: None,
        };
        assert_eq!(range.len(), u64::MAX);
        assert!(range.next(10).is_none());

        let known = ContentRange {
            total: Some(u64::MAX),
            ..range
        };
        assert!(known.is_last());
        assert!(known.next(10).is_none());
    }

    #[test]
    fn test_content_range_next_walks_to_the_end() {
        let first = ContentRange::parse("bytes 0-999/2500").unwrap();
        let second = first.next(1000).unwrap();
        assert_eq!(second.to_string(), "bytes=1000-1999");

        let penultimate = ContentRange::parse("bytes 1000-1999/2500").unwrap();
        let last = penultimate.next(1000).unwrap();
        assert_eq!(last.to_string(), "bytes=2000-2499");

        let done = ContentRange::parse("bytes 2000-2499/2500").unwrap();
        assert!(done.is_last());
        assert!(done.next(1000).is_none());
    }
}
