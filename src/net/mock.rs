use std::collections::HashMap;

use http::header::LOCATION;
use http::{HeaderMap, HeaderValue};
use url::Url;

use crate::errors::ClientError;
use crate::net::{resolve_url, History, HistoryEntry, HttpClient, Response};

const MAX_HOPS: usize = 10;

/// In-memory client serving fixed routes, used by the checker tests.
pub(crate) struct ScriptedClient {
    base: Url,
    routes: HashMap<String, (u16, Option<String>)>,
    follow: bool,
    last: Option<Response>,
    history: History,
    pub sent: Vec<String>,
}

impl ScriptedClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.parse().expect("valid base"),
            routes: HashMap::new(),
            follow: true,
            last: None,
            history: History::new(),
            sent: Vec::new(),
        }
    }

    /// Serves `status` for `url`, with an optional `Location` header.
    pub fn route(mut self, url: &str, status: u16, location: Option<&str>) -> Self {
        let url = resolve_url(Some(&self.base), url).expect("valid route");
        self.routes
            .insert(url.to_string(), (status, location.map(str::to_string)));
        self
    }

    fn serve(&self, url: &Url) -> Response {
        let (status, location) = self
            .routes
            .get(url.as_str())
            .cloned()
            .unwrap_or((404, None));

        let mut headers = HeaderMap::new();
        if let Some(location) = location {
            headers.insert(LOCATION, HeaderValue::from_bytes(location.as_bytes()).expect("valid header"));
        }
        Response::new(url.clone(), status, headers)
    }
}

impl HttpClient for ScriptedClient {
    fn send_head(&mut self, url: &str) -> Result<(), ClientError> {
        self.sent.push(url.to_string());
        let requested = resolve_url(Some(&self.base), url)?;

        let mut response = self.serve(&requested);
        let mut hops = 0;
        while self.follow && response.is_redirect() && hops < MAX_HOPS {
            let next = match response.location() {
                Some(location) => response.url.join(&location)?,
                None => break,
            };
            response = self.serve(&next);
            hops += 1;
        }

        self.history.push(HistoryEntry {
            requested,
            final_url: response.url.clone(),
            status: response.status,
        });
        self.last = Some(response);
        Ok(())
    }

    fn last_response(&self) -> Option<&Response> {
        self.last.as_ref()
    }

    fn history(&self) -> &History {
        &self.history
    }

    fn set_follow_redirects(&mut self, follow: bool) {
        self.follow = follow;
    }

    fn is_following_redirects(&self) -> bool {
        self.follow
    }
}
