use std::{future::Future, pin::Pin, task::{Context as TaskContext, Poll}};

use axum_htmx::HX_TRIGGER;
use hyper::{header::{self, HeaderValue}, Response, StatusCode};
use maud::PreEscaped;
use serde_json::json;
use tower::{Layer, Service};
use axum::{
    body::{to_bytes, Body},
    extract::Request,
    response::IntoResponse,
};

use crate::{template::Template, Context, Navigator};

#[derive(Clone)]
pub struct FrameworkLayer<T: Template> {
    navigator: Navigator,
    template: T,
    title: String,
}

impl<T> FrameworkLayer<T>
where T: Template {
    pub fn new(navigator: Navigator, template: T, title: &str) -> Self {
        Self { navigator, template, title: title.to_owned() }
    }
}

impl<S, T> Layer<S> for FrameworkLayer<T>
where T: Template + Clone {
    type Service = FrameworkMiddleware<S, T>;

    fn layer(&self, inner: S) -> Self::Service {
        FrameworkMiddleware {
            inner,
            navigator: self.navigator.clone(),
            template: self.template.clone(),
            title: self.title.clone(),
        }
    }
}

/// Wraps full page loads in the template; htmx requests get the bare fragment.
#[derive(Clone)]
pub struct FrameworkMiddleware<S, T> {
    inner: S,
    navigator: Navigator,
    template: T,
    title: String,
}

impl<S, T> Service<Request> for FrameworkMiddleware<S, T>
where
    S: Service<Request, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    T: Template + Clone + Send + 'static
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let context: Context = Context::build(&req, self.navigator.clone(), &self.title);

        tracing::debug!(path = %context.path, htmx = context.is_htmx(), "framework request");

        let template = self.template.clone();

        let inner = self.inner.call(req);

        Box::pin(async move {
            let mut response: Response<Body> = inner.await?;

            if context.is_htmx() {
                if context.is_boosted() {
                    // HX-Trigger https://htmx.org/headers/hx-trigger/
                    let trigger = json!({
                        "navigator": context.navigator.current_link()
                    }).to_string();

                    match HeaderValue::from_str(&trigger) {
                        Ok(value) => {
                            response.headers_mut().insert(HX_TRIGGER, value);
                        },
                        Err(e) => tracing::warn!("unable to encode navigator trigger: {e}"),
                    }
                }
                return Ok(response);
            }

            if !is_html_page(&response) {
                return Ok(response);
            }

            let (parts, body) = response.into_parts();

            // read the entire inner response body into bytes
            // then pass it into the page template
            let response = match to_bytes(body, usize::MAX).await {
                Ok(bytes) => {
                    let fragment = String::from_utf8_lossy(&bytes);
                    let page = template.page(&context, PreEscaped(fragment.into_owned()));

                    let mut wrapped = page.into_response();
                    *wrapped.status_mut() = parts.status;
                    for (name, value) in parts.headers.iter() {
                        if name != header::CONTENT_LENGTH && name != header::CONTENT_TYPE {
                            wrapped.headers_mut().append(name, value.clone());
                        }
                    }
                    wrapped
                },
                Err(e) => {
                    tracing::error!("unable to read response body: {e}");
                    (StatusCode::INTERNAL_SERVER_ERROR, "unable to render page").into_response()
                }
            };

            Ok(response)
        })
    }
}

fn is_html_page(response: &Response<Body>) -> bool {
    let html = response.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("text/html"))
        .unwrap_or(false);

    html && response.status().is_success()
}
