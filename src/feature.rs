use axum::Router;
use crate::Link;

/// A slice of the application: routes plus an optional navigator entry.
///
/// `web` routes are wrapped by the framework middleware and rendered
/// inside the page template, `api` routes are served as they are.
pub trait Feature: Send {
    fn name(&self) -> String;

    fn link(&self) -> Option<Link> {
        None
    }

    fn api(&self) -> Option<Router> {
        None
    }

    fn web(&self) -> Option<Router> {
        None
    }
}
