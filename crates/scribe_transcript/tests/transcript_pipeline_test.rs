//! Integration tests for history retrieval and transcript assembly.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use scribe_core::{AuthorBuilder, Message, MessageBuilder, MessageId, ResolverContext, UserId};
use scribe_error::{RetrievalError, RetrievalErrorKind, ScribeResult};
use scribe_transcript::{
    MessageLimit, MessageSource, TranscriptOptions, build_transcript, collect_history,
};
use std::sync::atomic::{AtomicUsize, Ordering};

fn message(id: u64, content: &str) -> Message {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    MessageBuilder::default()
        .id(MessageId::new(id))
        .author(
            AuthorBuilder::default()
                .id(UserId::new(1000 + id))
                .username(format!("user{id}"))
                .build()
                .unwrap(),
        )
        .timestamp(base + Duration::seconds(id as i64))
        .content(content.to_string())
        .build()
        .unwrap()
}

/// A channel with `total` messages, ids 1 (oldest) through `total`
/// (newest), served newest-first in cursor pages like the real capability.
struct FakeChannel {
    messages: Vec<Message>,
    fetches: AtomicUsize,
}

impl FakeChannel {
    fn with_total(total: u64) -> Self {
        let mut messages: Vec<Message> =
            (1..=total).map(|id| message(id, &format!("m{id}"))).collect();
        messages.reverse();
        Self {
            messages,
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageSource for FakeChannel {
    async fn fetch_page(
        &self,
        before: Option<MessageId>,
        limit: u8,
    ) -> ScribeResult<Vec<Message>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let page: Vec<Message> = self
            .messages
            .iter()
            .filter(|message| match before {
                Some(cursor) => message.id().get() < cursor.get(),
                None => true,
            })
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(page)
    }
}

/// A source that fails on first contact.
struct BrokenChannel;

#[async_trait]
impl MessageSource for BrokenChannel {
    async fn fetch_page(
        &self,
        _before: Option<MessageId>,
        _limit: u8,
    ) -> ScribeResult<Vec<Message>> {
        Err(RetrievalError::new(RetrievalErrorKind::Api {
            status: 403,
            message: "Missing Access".to_string(),
        })
        .into())
    }
}

fn assert_chronological(messages: &[Message]) {
    for pair in messages.windows(2) {
        assert!(
            pair[0].timestamp() < pair[1].timestamp(),
            "creation order must be strictly increasing"
        );
    }
}

#[tokio::test]
async fn unbounded_retrieval_returns_full_history_in_order() {
    // Three pages: 100, 100, 40.
    let channel = FakeChannel::with_total(240);
    let history = collect_history(&channel, MessageLimit::All).await.unwrap();

    assert_eq!(history.len(), 240);
    assert_eq!(history[0].id().get(), 1);
    assert_eq!(history[239].id().get(), 240);
    assert_chronological(&history);
}

#[tokio::test]
async fn bounded_retrieval_keeps_the_newest_messages() {
    let channel = FakeChannel::with_total(240);
    let history = collect_history(&channel, MessageLimit::Count(150))
        .await
        .unwrap();

    assert_eq!(history.len(), 150);
    // The 150 newest are ids 91..=240, chronological.
    assert_eq!(history[0].id().get(), 91);
    assert_eq!(history[149].id().get(), 240);
    assert_chronological(&history);
}

#[tokio::test]
async fn short_channel_returns_everything_available() {
    let channel = FakeChannel::with_total(7);
    let history = collect_history(&channel, MessageLimit::Count(150))
        .await
        .unwrap();
    assert_eq!(history.len(), 7);
    assert_chronological(&history);
}

#[tokio::test]
async fn zero_limit_issues_no_fetch() {
    let channel = FakeChannel::with_total(50);
    let history = collect_history(&channel, MessageLimit::Count(0))
        .await
        .unwrap();
    assert!(history.is_empty());
    assert_eq!(channel.fetch_count(), 0);
}

#[tokio::test]
async fn empty_channel_yields_empty_transcript() {
    let channel = FakeChannel::with_total(0);
    let history = collect_history(&channel, MessageLimit::All).await.unwrap();
    assert!(history.is_empty());
    assert_eq!(channel.fetch_count(), 1);
}

#[tokio::test]
async fn fetch_failure_aborts_without_partial_result() {
    let result = collect_history(&BrokenChannel, MessageLimit::All).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn build_transcript_maps_header_and_messages() {
    let channel = FakeChannel::with_total(3);
    let options = TranscriptOptions {
        guild_name: "Speed HQ".to_string(),
        ..Default::default()
    };
    let dates = scribe_format::LocaleDateFormatter::new("en-US", "UTC");

    let data = build_transcript(&channel, "pit-lane", ResolverContext::new(), &options, &dates)
        .await
        .unwrap();

    assert_eq!(data.channel_name(), "pit-lane");
    assert_eq!(data.guild_name(), "Speed HQ");
    assert_eq!(data.messages().len(), 3);
    assert_eq!(data.messages()[0].author(), "user1");
    assert!(!data.created_at_full().is_empty());
    assert_eq!(data.created_at_full(), data.closed_at_full());
}

#[tokio::test]
async fn build_transcript_resolves_mentions_from_history() {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let message = MessageBuilder::default()
        .id(MessageId::new(1))
        .author(
            AuthorBuilder::default()
                .id(UserId::new(2))
                .username("ana".to_string())
                .build()
                .unwrap(),
        )
        .timestamp(base)
        .content("hello <@6>".to_string())
        .mentions(vec![
            AuthorBuilder::default()
                .id(UserId::new(6))
                .username("ben".to_string())
                .build()
                .unwrap(),
        ])
        .build()
        .unwrap();
    let channel = FakeChannel {
        messages: vec![message],
        fetches: AtomicUsize::new(0),
    };
    let dates = scribe_format::LocaleDateFormatter::default();

    let data = build_transcript(
        &channel,
        "general",
        ResolverContext::new(),
        &TranscriptOptions::default(),
        &dates,
    )
    .await
    .unwrap();

    assert_eq!(
        data.messages()[0].content(),
        &Some("hello <span class=\"dc-mention\">@ben</span>".to_string())
    );
}

#[tokio::test]
async fn transcript_is_serializable_for_template_engines() {
    let channel = FakeChannel::with_total(2);
    let dates = scribe_format::LocaleDateFormatter::default();
    let data = build_transcript(
        &channel,
        "general",
        ResolverContext::new(),
        &TranscriptOptions::default(),
        &dates,
    )
    .await
    .unwrap();

    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["channel_name"], "general");
    assert_eq!(value["messages"].as_array().unwrap().len(), 2);
    assert_eq!(value["messages"][0]["author"], "user1");
}
