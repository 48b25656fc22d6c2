//! The per-chat, per-category link store.

use std::collections::{BTreeMap, HashMap};

use crate::category::Category;
use crate::domain::ChatId;

/// Outcome of a submission. The two variants are mutually exclusive and
/// exhaustive given that the classifier guarantees at least one link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one new link was appended. The transport layer should
    /// delete the triggering message (best-effort).
    Accepted { added: usize },
    /// Every extracted link already existed in this (chat, category).
    /// The transport layer should reply with a duplicate notice.
    AllDuplicate,
}

/// Every category of one chat, each mapped to its links in insertion order.
///
/// All categories are present from the moment the chat is first touched.
/// `BTreeMap` keeps iteration in `Category` order, which is lexicographic
/// by construction.
#[derive(Clone, Debug)]
pub struct ChatRecord {
    links: BTreeMap<Category, Vec<String>>,
}

impl ChatRecord {
    fn new() -> Self {
        Self {
            links: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }
}

/// Volatile, single-process store of collected links.
///
/// Owned explicitly by the message-handling layer; there is no teardown
/// and no persistence. Two links are identical only if their strings are
/// byte-for-byte equal. The same link may live in several categories, or
/// in the same category across different chats.
#[derive(Debug, Default)]
pub struct LinkStore {
    chats: HashMap<ChatId, ChatRecord>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the new links of a submission, in their original relative
    /// order, deduplicated against stored links and against each other
    /// (first occurrence wins). The only mutator in the system.
    pub fn submit(
        &mut self,
        chat_id: ChatId,
        category: Category,
        links: impl IntoIterator<Item = String>,
    ) -> SubmitOutcome {
        let record = self.chats.entry(chat_id).or_insert_with(ChatRecord::new);
        let seq = record.links.entry(category).or_default();

        let mut added = 0usize;
        for link in links {
            if seq.contains(&link) {
                continue;
            }
            seq.push(link);
            added += 1;
        }

        if added > 0 {
            SubmitOutcome::Accepted { added }
        } else {
            SubmitOutcome::AllDuplicate
        }
    }

    /// Stored links for one (chat, category), empty for untouched chats.
    pub fn category_links(&self, chat_id: ChatId, category: Category) -> &[String] {
        self.chats
            .get(&chat_id)
            .and_then(|r| r.links.get(&category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty categories of one chat, in lexicographic category order.
    pub fn non_empty_categories(&self, chat_id: ChatId) -> Vec<(Category, &[String])> {
        let Some(record) = self.chats.get(&chat_id) else {
            return Vec::new();
        };
        record
            .links
            .iter()
            .filter(|(_, seq)| !seq.is_empty())
            .map(|(cat, seq)| (*cat, seq.as_slice()))
            .collect()
    }
}
