use crate::event::VisitEvent;
use http::{header, HeaderValue, Response};
use pin_project_lite::pin_project;
use std::{
    future::Future,
    pin::Pin,
    task::{self, ready, Poll},
};

const TEXT_HTML: &str = "text/html";

/// Only successfully rendered pages count as a landing
fn is_page<B>(response: &Response<B>) -> bool {
    if !response.status().is_success() {
        return false;
    }

    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.as_bytes().get(..TEXT_HTML.len()))
        .is_some_and(|mime| mime.eq_ignore_ascii_case(TEXT_HTML.as_bytes()))
}

pin_project! {
    pub struct ResponseFuture<F> {
        #[pin]
        pub(crate) inner: F,
        pub(crate) attribution: Option<(HeaderValue, Option<VisitEvent>)>,
    }
}

impl<F, E, ResBody> Future for ResponseFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
{
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let mut response = ready!(this.inner.poll(cx))?;
        if let Some((set_cookie, event)) = this.attribution.take() {
            if is_page(&response) {
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, set_cookie);

                if let Some(event) = event {
                    event.emit();
                }
            } else {
                debug!(status = %response.status(), "response isn't a page, dropping attribution");
            }
        }

        Poll::Ready(Ok(response))
    }
}
