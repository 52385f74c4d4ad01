use axum::{response::IntoResponse, Router};
use hyper::StatusCode;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tower::builder::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer};

use crate::{
    feature::Feature,
    template::{PageTemplate, Template},
    Config, FrameworkLayer, Navigator};

pub type Features = Vec<Box<dyn Feature + 'static>>;

pub struct App<T> where T: Template {
    config: Config,
    router: Router,
    features: Features,
    navigator: Navigator,
    template: T
}

impl App<PageTemplate> {
    pub fn new(config: Config) -> App<PageTemplate> {
        App {
            config,
            router: Router::new(),
            features: Vec::new(),
            navigator: Navigator::default(),
            template: PageTemplate::default()
        }
    }
}

impl<T> App<T> where T: Template + 'static {
    pub fn register_feature_default<F: Feature + Default + 'static>(self) -> App<T> {
        self.register_feature(F::default())
    }

    pub fn register_feature(mut self, feature: impl Feature + 'static) -> App<T> {
        tracing::debug!(feature = %feature.name(), "feature registered");
        self.features.push(Box::new(feature));
        self
    }

    pub fn apply_fallback(mut self) -> App<T> {
        async fn handler_404() -> impl IntoResponse {
            (StatusCode::NOT_FOUND, "nothing to see here")
        }

        self.router = self.router.fallback(handler_404);
        self
    }

    pub fn build(mut self) -> App<T> {
        let features: Features = std::mem::take(&mut self.features);
        let mut router: Router = std::mem::take(&mut self.router);

        // 1. scan features and extract links for navigator
        for feature in features.iter() {
            if let Some(link) = feature.link() {
                self.navigator.add_link(link)
            }
        }

        // 2. scan features and apply routers
        for feature in features.iter() {
            if let Some(api) = feature.api() {
                router = router.merge(api);
            }

            if let Some(web) = feature.web() {
                let web = web.layer(FrameworkLayer::new(
                    self.navigator.clone(),
                    self.template.clone(),
                    &self.config.title));
                router = router.merge(web);
            }
        }

        self.router = router
            // web assets (css, javascript, etc)
            .nest_service("/web", ServeDir::new(&self.config.server.assets_path))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::new())
                    .layer(CompressionLayer::new())
            );

        self
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub async fn run(self) -> std::io::Result<()> {
        init_tracing();

        let address = self.config.server.address();
        let listener: TcpListener = TcpListener::bind(&address).await?;

        tracing::info!("listening on {address}");

        axum::serve(listener, self.router).await
    }
}

/// Installs the global subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout = tracing_subscriber::fmt::layer().pretty();

    if let Err(e) = tracing_subscriber::registry().with(filter).with(stdout).try_init() {
        tracing::debug!("tracing already initialised: {e}");
    }
}

#[cfg(test)]
mod test {
    use axum::{body::{to_bytes, Body}, extract::Request, routing::get, Router};
    use hyper::StatusCode;
    use maud::{html, Markup};
    use tower::ServiceExt;

    use crate::{config::Config, Link};
    use super::{App, Feature};

    #[derive(Default)]
    struct SampleFeature;

    impl SampleFeature {
        async fn endpoint() -> Markup {
            html! { b #sample { "Hi! From Sample Feature." } }
        }
    }

    impl Feature for SampleFeature {
        fn name(&self) -> String {
            "SampleFeature".to_owned()
        }

        fn web(&self) -> Option<Router> {
            Some(Router::new().route("/sample", get(SampleFeature::endpoint)))
        }

        fn api(&self) -> Option<Router> {
            Some(Router::new().route("/api/sample", get(|| async { "raw" })))
        }

        fn link(&self) -> Option<Link> {
            Some(Link::new("/sample", "Sample", "S"))
        }
    }

    fn app() -> App<crate::PageTemplate> {
        App::new(Config::default())
            .register_feature_default::<SampleFeature>()
            .apply_fallback()
            .build()
    }

    async fn body_of(router: Router, request: Request) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_full_page_load_is_wrapped() {
        let app = app();
        assert_eq!(app.navigator().size(), 1);

        let request = Request::builder().uri("/sample").body(Body::empty()).unwrap();
        let (status, body) = body_of(app.router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("Hi! From Sample Feature."));
        assert!(body.contains("<title>Sample | Búsqueda de Canchas</title>"));
    }

    #[tokio::test]
    async fn test_htmx_request_gets_fragment() {
        let request = Request::builder()
            .uri("/sample")
            .header("HX-Request", "true")
            .body(Body::empty())
            .unwrap();
        let (_, body) = body_of(app().router(), request).await;

        assert_eq!(body, r#"<b id="sample">Hi! From Sample Feature.</b>"#);
    }

    #[tokio::test]
    async fn test_boosted_request_triggers_navigator() {
        let request = Request::builder()
            .uri("/sample")
            .header("HX-Request", "true")
            .header("HX-Boosted", "true")
            .body(Body::empty())
            .unwrap();
        let response = app().router().oneshot(request).await.unwrap();

        let trigger = response.headers()["HX-Trigger"].to_str().unwrap();
        assert!(trigger.starts_with(r#"{"navigator":"#));
        assert!(trigger.contains(r#""/sample""#));
    }

    #[tokio::test]
    async fn test_api_routes_are_not_wrapped() {
        let request = Request::builder().uri("/api/sample").body(Body::empty()).unwrap();
        let (_, body) = body_of(app().router(), request).await;
        assert_eq!(body, "raw");
    }

    #[tokio::test]
    async fn test_fallback() {
        let request = Request::builder().uri("/nowhere").body(Body::empty()).unwrap();
        let (status, _) = body_of(app().router(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
