//! GIF search result shapes

use serde::{Deserialize, Serialize};

/// Media URLs returned by a GIF search.
///
/// The shape is selected solely by the limit the caller requested, never by
/// how many entries the upstream actually returned: a limit of 1 yields
/// [`Single`](Self::Single), any other limit yields [`Many`](Self::Many)
/// with upstream order preserved.
///
/// "No match or failure" is not a variant; it is `None` at the port return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GifUrls {
    /// Exactly one media URL, produced only for limit == 1
    Single(String),
    /// Ordered media URLs, produced for any other limit
    Many(Vec<String>),
}

impl GifUrls {
    /// The single URL, if this is the single-result shape
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(url) => Some(url),
            Self::Many(_) => None,
        }
    }

    /// The URL list, if this is the multi-result shape
    #[must_use]
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Many(urls) => Some(urls),
        }
    }

    /// Number of URLs carried by this result
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(urls) => urls.len(),
        }
    }

    /// True when the multi-result shape carries no URLs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_shape_accessors() {
        let result = GifUrls::Single("https://example.com/a.gif".to_string());
        assert_eq!(result.as_single(), Some("https://example.com/a.gif"));
        assert!(result.as_many().is_none());
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
    }

    #[test]
    fn many_shape_accessors() {
        let urls = vec![
            "https://example.com/a.gif".to_string(),
            "https://example.com/b.gif".to_string(),
        ];
        let result = GifUrls::Many(urls.clone());
        assert!(result.as_single().is_none());
        assert_eq!(result.as_many(), Some(urls.as_slice()));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn many_shape_preserves_order() {
        let result = GifUrls::Many(vec!["first".to_string(), "second".to_string()]);
        let urls = result.as_many().unwrap();
        assert_eq!(urls[0], "first");
        assert_eq!(urls[1], "second");
    }

    #[test]
    fn empty_many_is_representable_but_distinct_from_absence() {
        // The adapter never produces this shape, but the type admits it and
        // the boundary layer treats it as not-found.
        let result = GifUrls::Many(vec![]);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn serializes_without_enum_tag() {
        let single = GifUrls::Single("https://example.com/a.gif".to_string());
        let json = serde_json::to_string(&single).unwrap();
        assert_eq!(json, r#""https://example.com/a.gif""#);

        let many = GifUrls::Many(vec!["https://example.com/a.gif".to_string()]);
        let json = serde_json::to_string(&many).unwrap();
        assert_eq!(json, r#"["https://example.com/a.gif"]"#);
    }
}
