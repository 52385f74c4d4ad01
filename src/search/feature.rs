use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use axum_htmx::HX_REQUEST;
use chrono::{NaiveDate, Utc};
use hyper::HeaderMap;
use maud::{Markup, Render};

use crate::{config, Feature, Link, ThemeMode};

use super::{
    render::{ResultsPanel, SearchPage},
    Action, FieldEdit, HttpSearchClient, SearchCriteria, SearchRequest, SearchState, SlotSource,
};

/// The court search page: the filter form, the search round trip and the theme switch.
#[derive(Clone)]
pub struct CourtSearchFeature {
    source: Arc<dyn SlotSource>,
}

impl CourtSearchFeature {
    pub fn new(source: Arc<dyn SlotSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &config::Search) -> Self {
        Self::new(Arc::new(HttpSearchClient::new(&config.base_url)))
    }

    async fn index(jar: CookieJar) -> Markup {
        let state = SearchState::new(SearchCriteria::starting(today()), ThemeMode::from_jar(&jar));

        SearchPage { state: &state }.render()
    }

    async fn search(
        State(source): State<Arc<dyn SlotSource>>,
        headers: HeaderMap,
        jar: CookieJar,
        Form(fields): Form<Vec<(String, String)>>,
    ) -> Markup {
        let state = SearchState::new(SearchCriteria::default(), ThemeMode::from_jar(&jar));
        let state = run_search(state, &fields, source.as_ref()).await;

        // plain form posts (no javascript) get the form back as well
        if headers.contains_key(HX_REQUEST) {
            ResultsPanel { state: &state }.render()
        } else {
            SearchPage { state: &state }.render()
        }
    }

    async fn toggle_theme(jar: CookieJar) -> impl IntoResponse {
        let state = SearchState::new(SearchCriteria::default(), ThemeMode::from_jar(&jar))
            .reduce(Action::ToggleTheme);
        let theme = state.theme();

        tracing::info!(theme = theme.as_str(), "theme toggled");

        (jar.add(theme.cookie()), Redirect::to("/"))
    }
}

/// Default start date of the form: the current UTC calendar day.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Applies the submitted form to `state` and, when it validates, performs the search.
///
/// A form that does not validate never reaches `source`.
pub async fn run_search(
    state: SearchState,
    fields: &[(String, String)],
    source: &dyn SlotSource,
) -> SearchState {
    let state = match FieldEdit::parse_form(fields) {
        Ok(edits) => edits
            .into_iter()
            .fold(state, |state, edit| state.reduce(Action::Edit(edit))),
        Err(e) => {
            tracing::info!("search form rejected: {e}");
            return state.reduce(Action::Rejected(e));
        }
    };

    let request = match SearchRequest::build(state.criteria()) {
        Ok(request) => request,
        Err(e) => {
            tracing::info!("search form rejected: {e}");
            return state.reduce(Action::Rejected(e));
        }
    };

    let state = state.reduce(Action::Submit);
    let outcome = source.search(&request).await;
    state.reduce(Action::Resolved(outcome))
}

impl Feature for CourtSearchFeature {
    fn name(&self) -> String {
        "CourtSearch".to_owned()
    }

    fn link(&self) -> Option<Link> {
        Some(Link::new("/", "Búsqueda de canchas", "Buscar").icon("🎾"))
    }

    fn web(&self) -> Option<Router> {
        Some(Router::new()
            .route("/", get(CourtSearchFeature::index))
            .route("/search", post(CourtSearchFeature::search))
            .route("/theme", post(CourtSearchFeature::toggle_theme))
            .with_state(self.source.clone())
        )
    }
}

#[cfg(test)]
mod test {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use axum::{body::{to_bytes, Body}, extract::Request, Router};
    use hyper::{header, StatusCode};
    use tower::ServiceExt;

    use super::{today, CourtSearchFeature};
    use crate::{
        search::{render::EMPTY_MESSAGE, AvailabilitySlot, SearchError, SearchRequest, SlotSource},
        App, Config,
    };

    struct StubSource {
        calls: AtomicUsize,
        last: Mutex<Option<SearchRequest>>,
        answer: fn() -> Result<Vec<AvailabilitySlot>, SearchError>,
        delay: Duration,
    }

    impl StubSource {
        fn new(answer: fn() -> Result<Vec<AvailabilitySlot>, SearchError>) -> Arc<Self> {
            Self::slow(answer, Duration::ZERO)
        }

        fn slow(answer: fn() -> Result<Vec<AvailabilitySlot>, SearchError>, delay: Duration) -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0), last: Mutex::new(None), answer, delay })
        }
    }

    #[async_trait]
    impl SlotSource for StubSource {
        async fn search(&self, request: &SearchRequest) -> Result<Vec<AvailabilitySlot>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            (self.answer)()
        }
    }

    fn two_slots() -> Result<Vec<AvailabilitySlot>, SearchError> {
        let slot = |n: u32| AvailabilitySlot {
            recinto_name: "Labranza".to_owned(),
            recinto_code: "855".to_owned(),
            date: "2024-06-01".to_owned(),
            day_of_week: "Sábado".to_owned(),
            hour: format!("{}:00", 8 + n),
            canchas: vec!["Cancha Tenis 1".to_owned()],
            booking_url: format!("https://example.org/book/{n}"),
        };
        Ok(vec![slot(1), slot(2)])
    }

    fn router(stub: Arc<StubSource>) -> Router {
        App::new(Config::default())
            .register_feature(CourtSearchFeature::new(stub))
            .apply_fallback()
            .build()
            .router()
    }

    fn post_search(body: &str, htmx: bool) -> Request {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/search")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        builder.body(Body::from(body.to_owned())).unwrap()
    }

    async fn send(router: Router, request: Request) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_date_never_calls_service() {
        let stub = StubSource::new(two_slots);
        let (status, body) = send(router(stub.clone()), post_search("selectedRecintos=804", true)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Por favor selecciona una fecha."));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_renders_cards() {
        let stub = StubSource::new(two_slots);
        let form = "startDate=2024-06-01&endDate=2024-06-03&selectedRecintos=855&selectedCanchas=Cancha+Tenis+1";
        let (_, body) = send(router(stub.clone()), post_search(form, true)).await;

        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        let request = stub.last.lock().unwrap().clone().unwrap();
        assert_eq!(request.days_to_iterate, 3);
        assert_eq!(request.selected_recintos, vec!["855"]);
        assert_eq!(request.selected_canchas, vec!["Cancha Tenis 1"]);

        // fragment only
        assert!(!body.contains("<!DOCTYPE html>"));
        assert_eq!(body.matches("<article").count(), 2);
        assert!(body.contains("https://example.org/book/1"));
        assert!(body.contains("https://example.org/book/2"));
        assert!(body.contains("Cancha de Tenis 1"));
    }

    // a cold backend can take minutes; the page waits for it
    #[tokio::test(start_paused = true)]
    async fn test_slow_service_still_renders_results() {
        let stub = StubSource::slow(two_slots, Duration::from_secs(180));
        let (status, body) = send(router(stub.clone()), post_search("startDate=2024-06-01", true)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert_eq!(body.matches("<article").count(), 2);
    }

    #[tokio::test]
    async fn test_empty_answer() {
        let stub = StubSource::new(|| Ok(vec![]));
        let (_, body) = send(router(stub), post_search("startDate=2024-06-01", true)).await;

        assert!(body.contains(EMPTY_MESSAGE));
        assert_eq!(body.matches("<article").count(), 0);
    }

    #[tokio::test]
    async fn test_service_error_details() {
        let stub = StubSource::new(|| Err(SearchError::Application {
            status: 404,
            details: "no courts match".to_owned(),
        }));
        let (_, body) = send(router(stub), post_search("startDate=2024-06-01", true)).await;

        assert!(body.contains("Error: no courts match"));
    }

    #[tokio::test]
    async fn test_plain_post_returns_full_page() {
        let stub = StubSource::new(two_slots);
        let (_, body) = send(router(stub), post_search("startDate=2024-06-01&daysToIterate=2", false)).await;

        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains(r#"id="search-form""#));
        assert!(body.contains(r#"value="2024-06-01""#));
        assert_eq!(body.matches("<article").count(), 2);
    }

    #[tokio::test]
    async fn test_index_page() {
        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, "theme=dark")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router(StubSource::new(two_slots)), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<html lang="es" class="dark">"#));
        assert!(body.contains(r#"hx-post="/search""#));
        assert!(body.contains("<title>Búsqueda de canchas | Búsqueda de Canchas</title>"));
    }

    #[tokio::test]
    async fn test_index_starts_on_utc_today() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (_, body) = send(router(StubSource::new(two_slots)), request).await;

        let expected = format!(r#"value="{}""#, today().format("%Y-%m-%d"));
        assert!(body.contains(&expected));
    }

    #[tokio::test]
    async fn test_theme_toggle() {
        let request = Request::builder()
            .method("POST")
            .uri("/theme")
            .header(header::COOKIE, "theme=dark")
            .body(Body::empty())
            .unwrap();
        let response = router(StubSource::new(two_slots)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("theme=light;"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Lax"));
    }
}
