//! Public client surface + builder.
//! Internals are split into `session` (header/key injection + transport) and `constants` (UA + defaults).

mod constants;
mod session;

use crate::core::{PeopleError, PersonScraper};
use crate::person::PayloadScraper;
use crate::templates::TemplateRegistry;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// An async client for the people-pa API.
///
/// The client is cheap to clone; clones share the connection pool, the template
/// registry and the scraper. It implements [`Transport`](crate::Transport), so it can
/// be handed to [`lookup`](crate::lookup::lookup) and [`bulk_lookup`](crate::lookup::bulk_lookup)
/// directly.
#[derive(Clone)]
pub struct PeopleClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    templates: Arc<TemplateRegistry>,
    scraper: Arc<dyn PersonScraper>,
    concurrency: Option<usize>,
}

impl std::fmt::Debug for PeopleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeopleClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}

impl PeopleClient {
    /// Create a new builder.
    pub fn builder() -> PeopleClientBuilder {
        PeopleClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The template registry requests are composed from.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// The scraper turning raw payloads into persons.
    pub fn scraper(&self) -> &dyn PersonScraper {
        self.scraper.as_ref()
    }

    /// The default bulk concurrency limit. `None` dispatches every identifier at once.
    pub fn concurrency(&self) -> Option<usize> {
        self.concurrency
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`PeopleClient`].
#[derive(Default)]
pub struct PeopleClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_key: Option<String>,
    headers: Vec<(String, String)>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,

    templates: Option<TemplateRegistry>,
    scraper: Option<Arc<dyn PersonScraper>>,
    concurrency: Option<usize>,
}

impl PeopleClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://people-pa.clients6.google.com`).
    ///
    /// A path on the base is kept as a prefix: with `https://host/peoplepa`, email
    /// lookups go to `https://host/peoplepa/v2/people/lookup`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// API key appended to every request as the `key` query parameter.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Add a session header sent with every request (e.g. `Authorization`, `Cookie`).
    ///
    /// Header values are treated as opaque credentials and marked sensitive.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the built-in detail-level templates.
    #[must_use]
    pub fn templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Replace the default [`PayloadScraper`].
    #[must_use]
    pub fn scraper(mut self, scraper: impl PersonScraper + 'static) -> Self {
        self.scraper = Some(Arc::new(scraper));
        self
    }

    /// Bound the number of lookups a bulk call keeps in flight.
    /// If not set, every identifier is dispatched at once.
    #[must_use]
    pub fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = Some(limit);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed, a session header
    /// is invalid, the concurrency limit is zero, or the HTTP client fails to build.
    pub fn build(self) -> Result<PeopleClient, PeopleError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        if self.concurrency == Some(0) {
            return Err(PeopleError::InvalidParams(
                "concurrency limit must be at least 1".into(),
            ));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(session::session_headers(&self.headers)?);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PeopleClient {
            http,
            base_url,
            api_key: self.api_key,
            templates: Arc::new(self.templates.unwrap_or_default()),
            scraper: self
                .scraper
                .unwrap_or_else(|| Arc::new(PayloadScraper) as Arc<dyn PersonScraper>),
            concurrency: self.concurrency,
        })
    }
}
