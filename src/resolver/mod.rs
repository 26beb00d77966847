mod rendezvous;

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::perspective::{filter_query, Perspective, ResolvedPerspective};
use crate::transport::{JsonClient, ViewBridge};

const PERSPECTIVES_PATH: &str = "/v1/perspectives";
const LENSES_PATH: &str = "/v1/lenses";
const SUBJECTS_PATH: &str = "/v1/subjects";
const PERSPECTIVE_LOCATION: &str = "/perspectives";

const NO_PERSPECTIVES_MSG: &str = "There are no perspectives yet. Click the \
\"Search Perspectives\" input box then click \"New Perspective\".";

/// Which perspective the current URL asks for. Named-vs-default is decided
/// by the embedding shell; `url` is the API path to fetch it from.
#[derive(Debug, Clone)]
pub struct PerspectiveRequest {
    pub url: String,
    pub named: bool,
}

/// Terminal outcome of one resolution run.
#[derive(Debug)]
pub enum Resolution {
    /// The shell was told to navigate; no data resolution happened.
    Redirected { location: String },

    /// The accumulator, READY when a perspective was found, otherwise with
    /// `perspective: None` after a non-fatal notice.
    Loaded(Box<ResolvedPerspective>),
}

/// Drives one perspective load: list + lookup, the redirect/error/proceed
/// decision, and the lens/hierarchy rendezvous.
pub struct Resolver {
    client: Arc<dyn JsonClient>,
    bridge: Arc<dyn ViewBridge>,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(
        client: Arc<dyn JsonClient>,
        bridge: Arc<dyn ViewBridge>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            client,
            bridge,
            config,
        }
    }

    /// Resolve the perspective named by `request`.
    ///
    /// The catalog list and the named/default lookup are fetched together;
    /// a failed lookup is treated as absent so the picker stays usable,
    /// while a failed list fetch rejects the run.
    pub async fn resolve(&self, request: &PerspectiveRequest) -> Result<Resolution, ResolveError> {
        let (list, detail) = tokio::join!(
            self.client.get_json(PERSPECTIVES_PATH),
            self.client.get_json(&request.url),
        );

        let perspectives: Vec<Perspective> = serde_json::from_value(list?)?;

        let detail = match detail {
            Ok(body) => Some(body),
            Err(err) => {
                warn!("Perspective lookup at {} failed: {}", request.url, err);
                None
            }
        };

        let mut names: Vec<String> = perspectives.iter().map(|p| p.name.clone()).collect();
        names.sort();

        let mut statuses = self.config.statuses.clone();
        statuses.sort();

        let state = ResolvedPerspective {
            name: String::new(),
            perspectives,
            perspective: None,
            perspective_names: names,
            root_subject: Value::Object(Map::new()),
            lens: Value::Object(Map::new()),
            status_filter: statuses,
        };

        if request.named {
            self.resolve_named(request, detail, state).await
        } else {
            self.resolve_default(detail, state)
        }
    }

    /// Default-perspective branch: redirect to the configured default, else
    /// to the alphabetically-first perspective, else report an empty catalog.
    fn resolve_default(
        &self,
        detail: Option<Value>,
        state: ResolvedPerspective,
    ) -> Result<Resolution, ResolveError> {
        // The default lookup returns a key/value pair; value holds the name.
        let default_name = detail
            .as_ref()
            .and_then(|body| body.get("value"))
            .and_then(Value::as_str);

        if let Some(name) = default_name {
            return Ok(self.redirect_to(name));
        }

        if let Some(first) = state.perspective_names.first() {
            let first = first.clone();
            return Ok(self.redirect_to(&first));
        }

        debug!("No perspectives in the catalog");
        self.bridge.report_non_fatal(NO_PERSPECTIVES_MSG);
        Ok(Resolution::Loaded(Box::new(state)))
    }

    /// Named-perspective branch: subscribe and run the data rendezvous when
    /// found, report a non-fatal notice when not.
    async fn resolve_named(
        &self,
        request: &PerspectiveRequest,
        detail: Option<Value>,
        mut state: ResolvedPerspective,
    ) -> Result<Resolution, ResolveError> {
        let Some(body) = detail.filter(|body| !body.is_null()) else {
            let name = request.url.rsplit('/').next().unwrap_or_default();
            self.bridge.report_non_fatal(&format!(
                "Sorry, but the perspective you were trying to load, {name}, \
                 does not exist. Please select a perspective from the dropdown."
            ));
            return Ok(Resolution::Loaded(Box::new(state)));
        };

        let perspective: Perspective = serde_json::from_value(body)?;
        self.bridge.subscribe_realtime(&perspective);
        state.name = perspective.name.clone();

        let lens_path = format!("{LENSES_PATH}/{}", perspective.lens_id);
        let hierarchy_path = format!(
            "{SUBJECTS_PATH}/{}/hierarchy{}",
            perspective.root_subject,
            filter_query(&perspective)
        );
        debug!("Loading {} and {}", lens_path, hierarchy_path);

        rendezvous::join_lens_and_hierarchy(
            self.client.get_json(&lens_path),
            self.client.get_json(&hierarchy_path),
            self.bridge.as_ref(),
            &mut state,
        )
        .await?;

        state.perspective = Some(perspective);
        Ok(Resolution::Loaded(Box::new(state)))
    }

    fn redirect_to(&self, name: &str) -> Resolution {
        let location = format!("{PERSPECTIVE_LOCATION}/{name}");
        info!("Redirecting to {}", location);
        self.bridge.redirect(&location);
        Resolution::Redirected { location }
    }
}
