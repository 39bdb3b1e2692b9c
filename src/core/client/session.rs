//! Session header injection and the reqwest-backed [`Transport`] implementation.

use super::constants::API_KEY_PARAM;
use crate::core::{BoxFuture, PayloadEncoding, PeopleError, Transport, net};
use crate::lookup::ResolvedRequest;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

pub(super) fn session_headers(pairs: &[(String, String)]) -> Result<HeaderMap, PeopleError> {
    let mut map = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| PeopleError::InvalidParams(format!("invalid header name `{name}`: {e}")))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| PeopleError::InvalidParams(format!("invalid value for header `{name}`: {e}")))?;
        value.set_sensitive(true);
        map.append(name, value);
    }
    Ok(map)
}

impl super::PeopleClient {
    pub(crate) fn request_url(&self, req: &ResolvedRequest) -> Result<Url, PeopleError> {
        // Endpoint paths are resolved under the base path, so a proxy prefix survives.
        let mut base = self.base_url().clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        let mut url = base.join(req.endpoint().path.trim_start_matches('/'))?;
        {
            let mut qp = url.query_pairs_mut();
            if req.endpoint().payload == PayloadEncoding::None {
                for (k, v) in req.query_pairs() {
                    qp.append_pair(&k, &v);
                }
            }
            if let Some(key) = self.api_key() {
                qp.append_pair(API_KEY_PARAM, key);
            }
        }
        Ok(url)
    }

    async fn execute(&self, req: &ResolvedRequest) -> Result<String, PeopleError> {
        let url = self.request_url(req)?;
        let endpoint = req.endpoint();

        if std::env::var("PP_DEBUG").ok().as_deref() == Some("1") {
            eprintln!("PP_DEBUG: {:?} {} ({})", endpoint.verb, url.path(), endpoint.name);
        }

        let mut builder = self
            .http()
            .request(endpoint.verb.as_method(), url.clone())
            .header("accept", "application/json");
        builder = match endpoint.payload {
            PayloadEncoding::None => builder,
            PayloadEncoding::Json => builder.json(req.params()),
            PayloadEncoding::Form => builder.form(&req.query_pairs()),
        };

        let resp = builder.send().await?;
        let status = resp.status();
        let body = net::get_text(resp, endpoint.name, req.identifier().unwrap_or("unknown"), "json")
            .await?;

        if !status.is_success() {
            return Err(net::status_error(status.as_u16(), url.as_str()));
        }
        Ok(body)
    }
}

impl Transport for super::PeopleClient {
    fn send<'a>(&'a self, req: &'a ResolvedRequest) -> BoxFuture<'a, Result<String, PeopleError>> {
        Box::pin(self.execute(req))
    }
}
