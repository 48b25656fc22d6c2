//! Message classification: decide what an incoming group message means.

use crate::category::Category;
use crate::extract::extract_links;

/// Outcome of classifying a raw message text.
///
/// `Ignored` is a real contract point, not an omission: invalid category
/// tokens and valid categories with zero extractable links produce no
/// reply and no mutation, and plain URLs without a leading command are
/// never collected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified {
    /// A category-tagged batch of links to store.
    Submission {
        category: Category,
        links: Vec<String>,
    },
    /// Exactly `/<category>` (optionally `@handle`), asking for contents.
    ListingRequest(Category),
    /// Anything else. No reply, no mutation.
    Ignored,
}

/// Two-stage parse: match the leading `/token[:]?`, then extract links
/// from the remainder.
pub fn classify(text: &str) -> Classified {
    let text = text.trim();
    let Some(rest) = text.strip_prefix('/') else {
        return Classified::Ignored;
    };

    let token_end = rest
        .find(|c: char| !is_word_char(c))
        .unwrap_or(rest.len());
    let token = &rest[..token_end];
    let Some(category) = Category::parse(token) else {
        return Classified::Ignored;
    };

    let tail = &rest[token_end..];
    if is_listing_tail(tail) {
        if category.has_listing_command() {
            return Classified::ListingRequest(category);
        }
        return Classified::Ignored;
    }

    let content = tail.strip_prefix(':').unwrap_or(tail);
    let links: Vec<String> = extract_links(content).map(str::to_string).collect();
    if links.is_empty() {
        return Classified::Ignored;
    }

    Classified::Submission { category, links }
}

// Mirrors `\w`: Unicode alphanumerics plus underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Nothing after the command, or only a `@handle` suffix.
fn is_listing_tail(tail: &str) -> bool {
    if tail.is_empty() {
        return true;
    }
    match tail.strip_prefix('@') {
        Some(handle) => !handle.is_empty() && handle.chars().all(is_word_char),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_with_and_without_colon() {
        let want = Classified::Submission {
            category: Category::Games,
            links: vec!["https://a.com/x".to_string(), "https://b.com/y".to_string()],
        };
        assert_eq!(classify("/games: https://a.com/x https://b.com/y"), want);
        assert_eq!(classify("/games https://a.com/x https://b.com/y"), want);
        assert_eq!(classify("/games:https://a.com/x https://b.com/y"), want);
    }

    #[test]
    fn category_token_is_case_insensitive() {
        for text in ["/Movies https://a.com/x", "/MOVIES https://a.com/x"] {
            assert_eq!(
                classify(text),
                Classified::Submission {
                    category: Category::Movies,
                    links: vec!["https://a.com/x".to_string()],
                }
            );
        }
        assert_eq!(classify("/GAMES"), Classified::ListingRequest(Category::Games));
    }

    #[test]
    fn unknown_category_is_silently_ignored() {
        assert_eq!(classify("/foo https://a.com/x"), Classified::Ignored);
        assert_eq!(classify("/foo"), Classified::Ignored);
    }

    #[test]
    fn category_token_extends_over_unicode_word_chars() {
        // `é` is a word character, so the token is `gamesé`, which is not
        // a category; the message must not be collected under `games`.
        assert_eq!(classify("/gamesé https://a.com/x"), Classified::Ignored);
        assert_eq!(classify("/gamesé"), Classified::Ignored);
    }

    #[test]
    fn valid_category_without_links_is_ignored() {
        assert_eq!(classify("/games great titles below"), Classified::Ignored);
        assert_eq!(classify("/games:   "), Classified::Ignored);
    }

    #[test]
    fn plain_urls_are_never_collected() {
        assert_eq!(classify("https://a.com/x"), Classified::Ignored);
        assert_eq!(classify("look at https://a.com/x"), Classified::Ignored);
    }

    #[test]
    fn bare_category_is_a_listing_request() {
        assert_eq!(classify("/games"), Classified::ListingRequest(Category::Games));
        assert_eq!(classify("  /games  "), Classified::ListingRequest(Category::Games));
        assert_eq!(
            classify("/games@zimabluebot"),
            Classified::ListingRequest(Category::Games)
        );
    }

    #[test]
    fn uncategorized_has_no_listing_request() {
        assert_eq!(classify("/uncategorized"), Classified::Ignored);
        // Submissions still work.
        assert_eq!(
            classify("/uncategorized: https://a.com/x"),
            Classified::Submission {
                category: Category::Uncategorized,
                links: vec!["https://a.com/x".to_string()],
            }
        );
    }

    #[test]
    fn handle_suffix_with_content_is_a_submission() {
        assert_eq!(
            classify("/games@zimabluebot https://a.com/x"),
            Classified::Submission {
                category: Category::Games,
                links: vec!["https://a.com/x".to_string()],
            }
        );
    }

    #[test]
    fn links_keep_textual_appearance_order() {
        let Classified::Submission { links, .. } =
            classify("/videos https://b.com https://a.com https://c.com")
        else {
            panic!("expected submission");
        };
        assert_eq!(links, vec!["https://b.com", "https://a.com", "https://c.com"]);
    }
}
