use std::time::Duration;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE, USER_AGENT};
use reqwest::redirect::{Attempt, Policy};
use reqwest::{Client, StatusCode};
use tokio::task::JoinHandle;
use url::Url;
use crate::core::error::SubmitError;
use crate::core::form_to_json::form_to_json_string;
use crate::core::user_agent::default_user_agent;
use crate::models::form::Form;
use crate::models::submit_event::SubmitEvent;
use crate::models::submit_options::SubmitOptions;

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

const MAX_REDIRECTS: usize = 10;

/// Follow a redirect only while it stays on the origin of the first request.
fn same_origin_redirect(attempt: Attempt) -> reqwest::redirect::Action {
    if attempt.previous().len() > MAX_REDIRECTS {
        return attempt.error("too many redirects");
    }
    let origin = attempt.previous().first().map(|url| url.origin());
    match origin {
        Some(origin) if attempt.url().origin() != origin => {
            let message = format!(
                "refusing cross-origin redirect to {} from {}",
                attempt.url(),
                origin.ascii_serialization()
            );
            attempt.error(message)
        }
        _ => attempt.follow(),
    }
}

/// Posts serialized forms. Cheap to clone, clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FormSubmitter {
    client: Client,
    page_url: Option<Url>,
    cookie: Option<HeaderValue>,
}

impl FormSubmitter {
    pub fn new(options: SubmitOptions) -> anyhow::Result<Self> {
        let page_url = match options.page_url {
            Some(ref page_url) => Some(Url::parse(page_url).with_context(|| format!("invalid page url: {}", page_url))?),
            None => None,
        };
        let cookie = match options.cookie {
            Some(ref cookie) => Some(HeaderValue::from_str(cookie).context("invalid cookie value")?),
            None => None,
        };
        let user_agent = options.user_agent.unwrap_or_else(default_user_agent);
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent).context("invalid user agent")?);

        let client_builder = Client::builder()
            .default_headers(default_headers)
            .redirect(Policy::custom(same_origin_redirect));
        // 0 means no timeout
        let client = if options.timeout_secs > 0 {
            client_builder
                .timeout(Duration::from_secs(options.timeout_secs))
                .build()
                .context("failed to build http client with timeout")?
        } else {
            client_builder.build().context("failed to build http client")?
        };
        Ok(FormSubmitter { client, page_url, cookie })
    }

    /// Resolve a form action the way a browser does and enforce same-origin mode.
    pub fn resolve_action(&self, action: &str) -> Result<Url, SubmitError> {
        match self.page_url {
            Some(ref page_url) => {
                let resolved = page_url.join(action)?;
                if resolved.origin() != page_url.origin() {
                    return Err(SubmitError::CrossOrigin {
                        action: resolved.to_string(),
                        origin: page_url.origin().ascii_serialization(),
                    });
                }
                Ok(resolved)
            }
            None => Url::parse(action).map_err(|e| match e {
                url::ParseError::RelativeUrlWithoutBase => SubmitError::RelativeAction(action.to_string()),
                e => SubmitError::InvalidAction(e),
            }),
        }
    }

    /// POST an already encoded JSON body to `action`.
    ///
    /// Any HTTP status counts as delivered; only failing to reach the server is an error.
    /// A redirect leaving the action's origin fails with [`SubmitError::Transport`].
    pub async fn submit_json(&self, action: &str, body: String) -> Result<StatusCode, SubmitError> {
        let url = self.resolve_action(action)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        // resolve_action only lets same-origin urls through
        if let Some(ref cookie) = self.cookie {
            headers.insert(COOKIE, cookie.clone());
        }
        tracing::debug!(%url, bytes = body.len(), "submitting form");
        let response = self.client.post(url.clone()).headers(headers).body(body).send().await?;
        let status = response.status();
        tracing::debug!(%url, %status, "form submitted");
        Ok(status)
    }

    pub async fn submit(&self, form: &Form) -> Result<StatusCode, SubmitError> {
        let json = form_to_json_string(&form.elements);
        self.submit_json(&form.action, json).await
    }
}

/// Replace the native submission of `event`'s form with a JSON POST.
///
/// The default action is prevented before anything else happens. The request runs on
/// its own task and failures are logged there; the handle can be dropped.
/// The event is only touched here, the network is only touched inside the task.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime.
pub fn handle_form_submit(event: &mut SubmitEvent, submitter: &FormSubmitter) -> JoinHandle<()> {
    event.prevent_default();

    let form = &event.current_target;
    let action = form.action.clone();
    let json = form_to_json_string(&form.elements);
    let submitter = submitter.clone();

    tokio::spawn(async move {
        if let Err(e) = submitter.submit_json(&action, json).await {
            tracing::error!(action = %action, error = %e, "form submission failed");
        }
    })
}
