use axum::extract::Request;
use axum_htmx::{HX_BOOSTED, HX_REQUEST};
use hyper::HeaderMap;
use maud::Markup;

use crate::{Navigator, ThemeMode};

/// Trait for rendering maud components with context
pub trait Component {
    fn render(&self, context: &Context) -> Markup;
}

/// Per-request UI state that is not tied to a feature:
/// - Incoming Headers (HTMX-aware)
/// - Navigation Options, with the current selection based on route
/// - Theme mode from the cookie
#[derive(Debug)]
pub struct Context {
    pub headers: HeaderMap,
    pub path: String,
    pub navigator: Navigator,
    pub theme: ThemeMode,
    pub app_title: String,
}

impl Context {
    pub fn build(request: &Request, navigator: Navigator, app_title: &str) -> Self {
        let headers: HeaderMap = request.headers().clone();
        let path: String = request.uri().path().to_owned();
        let theme = ThemeMode::from_headers(&headers);

        let mut navigator = navigator;
        navigator.set_current(&path);

        Context {
            path,
            headers,
            navigator,
            theme,
            app_title: app_title.to_owned(),
        }
    }

    pub fn title(&self) -> String {
        match self.navigator.current_link() {
            Some(l) => format!("{} | {}", l.title, self.app_title),
            None => self.app_title.clone(),
        }
    }

    pub fn is_boosted(&self) -> bool {
        self.headers.contains_key(HX_BOOSTED)
    }

    /// Any htmx initiated request, boosted or not.
    pub fn is_htmx(&self) -> bool {
        self.headers.contains_key(HX_REQUEST)
    }
}
