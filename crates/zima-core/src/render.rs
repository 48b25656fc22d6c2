//! Rendering of stored links into Telegram HTML listings.

use crate::category::Category;
use crate::domain::ChatId;
use crate::formatting::escape_html;
use crate::store::LinkStore;

/// Reply sent when a submission contained only already-known links.
pub const DUPLICATE_NOTICE: &str = "Link already present in this category.";

/// Reply for a listing command naming no known category.
pub const UNKNOWN_CATEGORY: &str = "Unknown category.";

/// One category of one chat as a numbered HTML list, or an explicit
/// empty indicator.
pub fn render_category(store: &LinkStore, chat_id: ChatId, category: Category) -> String {
    let links = store.category_links(chat_id, category);
    if links.is_empty() {
        return format!("No links collected yet for /{category}.");
    }
    format!("<b>/{category}:</b>\n{}", numbered_list(links))
}

/// All non-empty categories of one chat, one block each, in lexicographic
/// category order. Empty categories are omitted; if everything is empty
/// the "nothing collected" indicator is returned instead.
pub fn render_all(store: &LinkStore, chat_id: ChatId) -> String {
    let blocks: Vec<String> = store
        .non_empty_categories(chat_id)
        .into_iter()
        .map(|(category, links)| format!("<b>/{category}:</b>\n{}", numbered_list(links)))
        .collect();

    if blocks.is_empty() {
        return "No links collected yet.".to_string();
    }
    blocks.join("\n\n")
}

fn numbered_list(links: &[String]) -> String {
    links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let link = escape_html(link);
            format!("<b>{}.</b> <a href=\"{link}\">{link}</a>", idx + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: ChatId = ChatId(7);

    fn store_with(entries: &[(Category, &[&str])]) -> LinkStore {
        let mut store = LinkStore::new();
        for (cat, urls) in entries {
            store.submit(CHAT, *cat, urls.iter().map(|s| s.to_string()));
        }
        store
    }

    #[test]
    fn category_listing_is_a_numbered_html_list() {
        let store = store_with(&[(Category::Games, &["https://a.com/x", "https://b.com/y"])]);
        assert_eq!(
            render_category(&store, CHAT, Category::Games),
            "<b>/games:</b>\n\
             <b>1.</b> <a href=\"https://a.com/x\">https://a.com/x</a>\n\
             <b>2.</b> <a href=\"https://b.com/y\">https://b.com/y</a>"
        );
    }

    #[test]
    fn empty_category_gets_explicit_indicator() {
        let store = LinkStore::new();
        assert_eq!(
            render_category(&store, CHAT, Category::Movies),
            "No links collected yet for /movies."
        );
    }

    #[test]
    fn render_all_emits_one_block_per_non_empty_category_in_order() {
        let store = store_with(&[
            (Category::Websites, &["https://w.com"]),
            (Category::Games, &["https://g.com"]),
        ]);
        assert_eq!(
            render_all(&store, CHAT),
            "<b>/games:</b>\n<b>1.</b> <a href=\"https://g.com\">https://g.com</a>\n\n\
             <b>/websites:</b>\n<b>1.</b> <a href=\"https://w.com\">https://w.com</a>"
        );
    }

    #[test]
    fn render_all_on_empty_chat_says_nothing_collected() {
        let store = LinkStore::new();
        assert_eq!(render_all(&store, CHAT), "No links collected yet.");

        // Touched but still empty reads the same.
        let mut store = LinkStore::new();
        store.submit(CHAT, Category::Games, std::iter::empty::<String>());
        assert_eq!(render_all(&store, CHAT), "No links collected yet.");
    }

    #[test]
    fn urls_are_html_escaped() {
        let store = store_with(&[(Category::Apps, &["https://a.com/?q=1&r=2"])]);
        let out = render_category(&store, CHAT, Category::Apps);
        assert!(out.contains("https://a.com/?q=1&amp;r=2"));
        assert!(!out.contains("q=1&r"));
    }
}
