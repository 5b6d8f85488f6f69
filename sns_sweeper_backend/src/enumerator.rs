use futures::{stream, Stream, TryStreamExt};

use crate::{
    client::SubscriptionService,
    error::BackendError,
    model::{Subscription, TopicArn},
};

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Lazily lists every subscription on `topic`, requesting the next page only once the
/// previous one has been consumed. A failed page request ends the stream with that error.
pub fn subscriptions<'a, S>(
    service: &'a S,
    topic: &'a TopicArn,
) -> impl Stream<Item = Result<Subscription, BackendError>> + 'a
where
    S: SubscriptionService + ?Sized,
{
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let next_token = match cursor {
            Cursor::Start => None,
            Cursor::Next(token) => Some(token),
            Cursor::Done => return Ok(None),
        };

        let page = service.list_subscriptions(topic, next_token).await?;

        log::debug!(
            "listed {} subscriptions on {topic}, more: {}",
            page.subscriptions.len(),
            page.next_token.is_some()
        );

        let cursor = match page.next_token {
            Some(token) if !token.is_empty() => Cursor::Next(token),
            _ => Cursor::Done,
        };

        Ok::<_, BackendError>(Some((page.subscriptions, cursor)))
    })
    .map_ok(|page| stream::iter(page.into_iter().map(Ok)))
    .try_flatten()
}
