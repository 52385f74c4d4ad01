pub mod config;
mod app;
mod feature;
mod context;
mod navigator;
mod middleware;
mod template;
mod theme;
pub mod search;

pub use theme::{Color, CourtTheme, Theme, ThemeMode};
pub use config::{Config, ConfigError};
pub use navigator::{Link, Navigator};
pub use feature::Feature;
pub use context::{Component, Context};
pub use app::{init_tracing, App};
pub use middleware::{FrameworkLayer, FrameworkMiddleware};
pub use template::{PageTemplate, Template};

pub use axum::Router;
pub use hyper::{HeaderMap, StatusCode};
