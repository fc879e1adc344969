use std::task::Poll;

use futures::task::{Context, noop_waker_ref};
use futures::{Stream, StreamExt};

/// Drain everything the stream can yield without waiting.
pub async fn collect_ready<S>(mut stream: S) -> Vec<S::Item>
where
    S: Stream + Unpin,
{
    let waker = noop_waker_ref();
    let mut cx = Context::from_waker(waker);

    let mut items = Vec::new();
    loop {
        match stream.poll_next_unpin(&mut cx) {
            Poll::Ready(Some(item)) => items.push(item),
            Poll::Ready(None) | Poll::Pending => return items,
        }
    }
}

pub async fn collect_n<S>(stream: S, n: usize) -> Vec<S::Item>
where
    S: Stream + Unpin,
{
    stream.take(n).collect().await
}

pub async fn collect_one<S>(mut stream: S) -> S::Item
where
    S: Stream + Unpin,
{
    stream.next().await.unwrap()
}
