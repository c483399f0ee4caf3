//! Chat Listing
//!
//! Ranking and assembly of a user's chat list. The ranking decides the order:
//! most recent message first, chats without messages after every chat that
//! has one, ties broken by chat id ascending. Details are fetched in bulk
//! afterwards and re-sorted here, since a bulk fetch keyed by an id set
//! carries no order.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::entities::{Chat, ChatDetails, Message, User};

/// Most recent message time of one chat, `None` when it has no messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatActivity {
    pub chat_id: i64,
    pub last_message_at: Option<DateTime<Utc>>,
}

impl ChatActivity {
    pub fn new(chat_id: i64, last_message_at: Option<DateTime<Utc>>) -> Self {
        Self {
            chat_id,
            last_message_at,
        }
    }
}

/// Descending by last activity with no-activity last, then id ascending.
fn compare_activity(a: &ChatActivity, b: &ChatActivity) -> Ordering {
    let by_time = match (a.last_message_at, b.last_message_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_time.then_with(|| a.chat_id.cmp(&b.chat_id))
}

/// Chat ids in listing order.
pub fn rank(mut activity: Vec<ChatActivity>) -> Vec<i64> {
    activity.sort_by(compare_activity);
    activity.into_iter().map(|a| a.chat_id).collect()
}

/// Newest first, ties by id descending.
pub fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Oldest first, ties by id ascending.
pub fn sort_oldest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Join bulk-fetched chats, members and messages into details, in `ranked`
/// order. Ids in `ranked` with no matching chat are skipped; rows for chats
/// outside `ranked` are dropped.
pub fn assemble(
    ranked: &[i64],
    chats: Vec<Chat>,
    members: Vec<(i64, User)>,
    messages: Vec<Message>,
) -> Vec<ChatDetails> {
    let mut by_id: HashMap<i64, ChatDetails> = chats
        .into_iter()
        .map(|chat| (chat.id, ChatDetails::new(chat)))
        .collect();

    for (chat_id, user) in members {
        if let Some(details) = by_id.get_mut(&chat_id) {
            details.users.push(user);
        }
    }

    for message in messages {
        if let Some(details) = by_id.get_mut(&message.chat_id) {
            details.messages.push(message);
        }
    }

    ranked
        .iter()
        .filter_map(|id| by_id.remove(id))
        .map(|mut details| {
            details.users.sort_by_key(|u| u.id);
            details.users.dedup_by_key(|u| u.id);
            sort_newest_first(&mut details.messages);
            details
        })
        .collect()
}
