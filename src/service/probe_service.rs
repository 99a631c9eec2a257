use crate::config::target::TargetConfig;
use crate::model::response::ProbeOutcome;
use crate::model::rpc::GetInterfacesRequest;
use crate::report;
use anyhow::{Context, Result};
use hyper::ext::ReasonPhrase;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use std::io::Write;

const MCP_PATH: &str = "/mcp";
const ACCEPT_VALUE: &str = "application/json, text/event-stream";

pub struct Probe {
    client: Client,
    target: TargetConfig,
}

impl Probe {
    pub fn new(target: TargetConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = target.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, target })
    }

    /// `http://{host}:{port}/mcp?sessionId={session_id}`
    pub fn endpoint(&self) -> Result<Url> {
        let base = format!("http://{}:{}{}", self.target.host, self.target.port, MCP_PATH);
        let mut url = Url::parse(&base).with_context(|| format!("Invalid target url: {}", base))?;
        url.query_pairs_mut()
            .append_pair("sessionId", &self.target.session_id);

        Ok(url)
    }

    /// POST the request and classify what happened.
    ///
    /// Transport failures and error statuses are folded into the outcome.
    /// Only a request that cannot be built, or a body that cannot be read, is an `Err`.
    pub async fn send(&self, url: Url, request: &GetInterfacesRequest) -> Result<ProbeOutcome> {
        let body = serde_json::to_vec(request).context("failed to serialize request payload")?;

        let result = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, ACCEPT_VALUE)
            .body(body)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_builder() => return Err(e).context("Failed to build request"),
            Err(e) => {
                debug!("request failed before a response arrived: {:?}", e);
                return Ok(ProbeOutcome::ConnectionError {
                    reason: format!("{:#}", anyhow::Error::from(e)),
                });
            }
        };

        let status = response.status();
        let reason = reason_phrase(&response);
        debug!("received status {} {}", status.as_u16(), reason);

        let body = response
            .text()
            .await
            .context("failed to read response body")?;

        // Anything from 400 up, including non-standard codes above 599.
        if status.as_u16() >= 400 {
            return Ok(ProbeOutcome::HttpError {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        Ok(ProbeOutcome::Success {
            status: status.as_u16(),
            body,
        })
    }

    /// Send `get_interfaces` for `device` and print everything to `out`.
    pub async fn run<W: Write>(&self, device: &str, out: &mut W) -> Result<()> {
        let url = self.endpoint()?;
        let request = GetInterfacesRequest::get_interfaces(device);

        report::print_request(out, url.as_str(), &request)?;
        out.flush()?;

        let outcome = self.send(url, &request).await?;

        report::print_outcome(out, &outcome, self.target.port)
    }
}

/// The phrase from the status line as sent by the server.
///
/// hyper only keeps the phrase when it differs from the canonical one.
fn reason_phrase(response: &Response) -> String {
    if let Some(phrase) = response.extensions().get::<ReasonPhrase>() {
        return String::from_utf8_lossy(phrase.as_bytes()).into_owned();
    }

    response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string()
}
