//! The HTTP seam.
//!
//! Feed reading and downloading only ever issue plain GETs, so the trait is
//! two blocking calls. Tests swap in canned responses; the binary uses
//! [`ReqwestClient`].

use std::io::{self, Write};

use reqwest::{Client, Proxy, Url, header};
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

use crate::download::Progress;

const USER_AGENT: &str = concat!("gevm/", env!("CARGO_PKG_VERSION"));

/// A fully buffered response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    /// Raw `Link` header, if the server sent one.
    pub link:   Option<String>,
    pub body:   Vec<u8>,
}

pub trait HttpClient {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(&self, url: &str) -> Result<Response, Self::Error>;

    /// GET `url` and copy the body into `sink` chunk by chunk.
    ///
    /// The body is written only for a 2xx status. The status is returned
    /// either way so the caller decides what a failure means.
    fn stream(&self, url: &str, sink: &mut dyn Write, progress: &mut dyn Progress) -> Result<u16, Self::Error>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    type Error = C::Error;

    fn get(&self, url: &str) -> Result<Response, Self::Error> { (**self).get(url) }

    fn stream(&self, url: &str, sink: &mut dyn Write, progress: &mut dyn Progress) -> Result<u16, Self::Error> {
        (**self).stream(url, sink, progress)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("failed to write response body: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ClientSettingError {
    #[error("Invalid proxy URL {url}: {source}")]
    Proxy {
        url:    String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct ClientSetting {
    pub proxies:    Vec<Url>,
    pub user_agent: Option<String>,
}

impl ClientSetting {
    pub fn with_proxies(mut self, proxies: Vec<Url>) -> Self {
        self.proxies = proxies;
        self
    }

    pub fn build(self) -> Result<Client, ClientSettingError> {
        // GitHub rejects API calls without a user agent.
        let mut cb = Client::builder().user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));

        let (secure, insecure): (Vec<Url>, Vec<Url>) =
            self.proxies.into_iter().partition(|u| u.scheme() == "https");

        for u in secure {
            cb = cb.proxy(Proxy::https(u.as_str()).map_err(|source| ClientSettingError::Proxy {
                url: u.to_string(),
                source,
            })?);
        }

        for u in insecure {
            cb = cb.proxy(Proxy::http(u.as_str()).map_err(|source| ClientSettingError::Proxy {
                url: u.to_string(),
                source,
            })?);
        }

        cb.build().map_err(ClientSettingError::Build)
    }
}

/// Blocking client backed by reqwest on a private current-thread runtime.
pub struct ReqwestClient {
    client:  Client,
    runtime: Runtime,
}

impl ReqwestClient {
    pub fn new(setting: ClientSetting) -> Result<Self, ClientSettingError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientSettingError::Runtime)?;

        Ok(Self {
            client: setting.build()?,
            runtime,
        })
    }
}

impl HttpClient for ReqwestClient {
    type Error = ClientError;

    fn get(&self, url: &str) -> Result<Response, ClientError> {
        self.runtime.block_on(async {
            let res = self.client.get(url).send().await?;
            let status = res.status().as_u16();
            let link = res
                .headers()
                .get(header::LINK)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = res.bytes().await?.to_vec();

            Ok(Response { status, link, body })
        })
    }

    fn stream(&self, url: &str, sink: &mut dyn Write, progress: &mut dyn Progress) -> Result<u16, ClientError> {
        self.runtime.block_on(async {
            let mut res = self.client.get(url).send().await?;
            let status = res.status();
            if !status.is_success() {
                return Ok(status.as_u16());
            }

            progress.start(res.content_length());
            while let Some(chunk) = res.chunk().await? {
                sink.write_all(&chunk)?;
                progress.step(chunk.len() as u64);
            }
            progress.finish();

            Ok(status.as_u16())
        })
    }
}
