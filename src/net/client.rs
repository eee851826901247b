use std::sync::Arc;

use log::debug;
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use tokio::runtime::Runtime;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::net::{resolve_url, History, HistoryEntry, HttpClient, Response};

/// Blocking [`HttpClient`] backed by reqwest.
///
/// The client owns a single-threaded Tokio runtime and blocks on every request.
/// It must not be used from inside another Tokio runtime.
///
/// Two reqwest clients share one cookie jar: one follows redirects (up to
/// `max_redirects` hops) and one never does. The follow flag picks which one
/// sends the next request.
pub struct ReqwestClient {
    config: ClientConfig,
    runtime: Runtime,
    following: reqwest::Client,
    direct: reqwest::Client,
    follow: bool,
    last: Option<Response>,
    history: History,
}

impl ReqwestClient {
    /// Creates a new client. If `config` is `None`, [`ClientConfig::default`] is used.
    pub fn new(config: Option<ClientConfig>) -> Result<Self, ClientError> {
        let config = config.unwrap_or_default();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let jar = Arc::new(Jar::default());
        let following = build_client(&config, &jar, Policy::limited(config.max_redirects))?;
        let direct = build_client(&config, &jar, Policy::none())?;

        Ok(Self {
            follow: config.follow_redirects,
            config,
            runtime,
            following,
            direct,
            last: None,
            history: History::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves `url` against the configured base URL.
    pub fn resolve(&self, url: &str) -> Result<Url, ClientError> {
        resolve_url(self.config.base_url.as_ref(), url)
    }
}

fn build_client(config: &ClientConfig, jar: &Arc<Jar>, policy: Policy) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .cookie_provider(jar.clone())
        .redirect(policy);

    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    if !config.use_env_proxy {
        builder = builder.no_proxy();
    }

    Ok(builder.build()?)
}

impl HttpClient for ReqwestClient {
    fn send_head(&mut self, url: &str) -> Result<(), ClientError> {
        let target = self.resolve(url)?;
        let client = if self.follow { &self.following } else { &self.direct };

        debug!("HEAD {} (follow redirects: {})", target, self.follow);
        let res = self.runtime.block_on(client.head(target.clone()).send())?;

        let response = Response::new(res.url().clone(), res.status().as_u16(), res.headers().clone());
        debug!("HEAD {} -> {} {} ({})", target, response.status, response.status_text, response.url);

        self.history.push(HistoryEntry {
            requested: target,
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
        debug!("Follow redirects: {} -> {}", self.follow, follow);
        self.follow = follow;
    }

    fn is_following_redirects(&self) -> bool {
        self.follow
    }
}
