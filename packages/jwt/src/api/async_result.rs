//! Futures returned by asynchronous issuance

use crate::error::{JwtError, JwtResult};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::sync::oneshot;

/// Issuance result delivered from a spawned task
#[derive(Debug)]
pub struct AsyncJwtResult<T> {
    receiver: oneshot::Receiver<JwtResult<T>>,
}

impl<T> AsyncJwtResult<T> {
    pub(crate) fn new(receiver: oneshot::Receiver<JwtResult<T>>) -> Self {
        Self { receiver }
    }
}

impl<T> Future for AsyncJwtResult<T> {
    type Output = JwtResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(JwtError::internal("issuance task dropped"))),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Issuance result whose error passes through a caller handler
pub struct AsyncJwtResultWithError<T, E> {
    receiver: oneshot::Receiver<JwtResult<T>>,
    error_handler: E,
}

impl<T, E> AsyncJwtResultWithError<T, E> {
    pub(crate) fn new(receiver: oneshot::Receiver<JwtResult<T>>, error_handler: E) -> Self {
        Self {
            receiver,
            error_handler,
        }
    }
}

impl<T, E> Future for AsyncJwtResultWithError<T, E>
where
    E: Fn(JwtError) -> JwtError + Unpin,
{
    type Output = JwtResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result.map_err(&this.error_handler)),
            Poll::Ready(Err(_)) => Poll::Ready(Err((this.error_handler)(JwtError::internal(
                "issuance task dropped",
            )))),
            Poll::Pending => Poll::Pending,
        }
    }
}
