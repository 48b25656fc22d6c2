//! Link extraction from free-form message text.

/// Iterate over link tokens in `text`, in the order they appear.
///
/// A token starts at `http://` or `https://` and runs until the next
/// whitespace character or `)`, whichever comes first. The `)` stop lets
/// links sit inside parenthetical or markdown-style text. Nothing beyond
/// the scheme prefix is validated; malformed URLs pass through unchanged,
/// and duplicates within the same text are preserved as separate entries.
/// Dedup against prior state is the store's job, not the extractor's.
pub fn extract_links(text: &str) -> LinkIter<'_> {
    LinkIter { rest: text }
}

pub struct LinkIter<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LinkIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest: &'a str = self.rest;
            let start = rest.find("http")?;
            let cand = &rest[start..];

            let scheme_len = if cand.starts_with("https://") {
                8
            } else if cand.starts_with("http://") {
                7
            } else {
                // "http" embedded in some other word; skip past it.
                self.rest = &cand[4..];
                continue;
            };

            let end = cand
                .find(|c: char| c.is_whitespace() || c == ')')
                .unwrap_or(cand.len());

            // A bare scheme with nothing after `://` is not a link.
            if end <= scheme_len {
                self.rest = &cand[scheme_len..];
                continue;
            }

            self.rest = &cand[end..];
            return Some(&cand[..end]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(text: &str) -> Vec<&str> {
        extract_links(text).collect()
    }

    #[test]
    fn finds_links_in_order() {
        assert_eq!(
            all("check https://a.com/x and http://b.com/y out"),
            vec!["https://a.com/x", "http://b.com/y"]
        );
    }

    #[test]
    fn stops_at_whitespace_or_closing_paren() {
        assert_eq!(all("(see https://a.com/x)"), vec!["https://a.com/x"]);
        assert_eq!(
            all("one https://a.com/x\nhttps://b.com/y"),
            vec!["https://a.com/x", "https://b.com/y"]
        );
    }

    #[test]
    fn trailing_punctuation_other_than_paren_is_kept() {
        // The boundary rule is literally "whitespace or )". Commas and dots
        // stay part of the token.
        assert_eq!(all("https://a.com/x, next"), vec!["https://a.com/x,"]);
        assert_eq!(all("[https://a.com/x]"), vec!["https://a.com/x]"]);
    }

    #[test]
    fn duplicates_within_one_text_are_preserved() {
        assert_eq!(
            all("https://a.com https://a.com"),
            vec!["https://a.com", "https://a.com"]
        );
    }

    #[test]
    fn ignores_non_scheme_text() {
        assert!(all("no links here").is_empty());
        assert!(all("httpx://a.com httpd").is_empty());
        // Scheme matching is case-sensitive, as in the source pattern.
        assert!(all("HTTPS://a.com").is_empty());
    }

    #[test]
    fn bare_scheme_is_not_a_link() {
        assert!(all("http:// and https://").is_empty());
        assert!(all("(https://)").is_empty());
        assert_eq!(all("http:// https://a.com"), vec!["https://a.com"]);
    }

    #[test]
    fn restartable() {
        let text = "https://a.com https://b.com";
        assert_eq!(extract_links(text).count(), 2);
        assert_eq!(extract_links(text).count(), 2);
    }
}
