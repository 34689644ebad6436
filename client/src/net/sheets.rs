//! Waitlist submission to the spreadsheet web app.
//!
//! Client-side (hydrate): multipart `POST` via `gloo-net` with
//! `mode: no-cors`. The response is opaque, so a resolved request is the
//! only success signal available; a rejected fetch (offline, DNS, blocked)
//! is the only failure signal.
//! Server-side (SSR) and native tests: always [`SubmitError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "sheets_test.rs"]
mod sheets_test;

/// Form fields posted for one signup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
    pub timestamp: String,
    pub source: String,
    pub user_agent: String,
}

impl Submission {
    /// `(name, value)` pairs in the order the sheet script expects.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("email", self.email.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("source", self.source.as_str()),
            ("userAgent", self.user_agent.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network submission is not available here")]
    Unavailable,
}

/// Destination for waitlist submissions.
#[allow(async_fn_in_trait)]
pub trait WaitlistTransport {
    /// # Errors
    ///
    /// Returns an error when the request could not be sent.
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Posts to a Google Apps Script web app URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetsTransport {
    url: String,
}

impl SheetsTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WaitlistTransport for SheetsTransport {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(|e| SubmitError::Request(format!("{e:?}")))?;
            for (name, value) in submission.fields() {
                form.append_with_str(name, value)
                    .map_err(|e| SubmitError::Request(format!("{e:?}")))?;
            }
            gloo_net::http::Request::post(&self.url)
                .mode(web_sys::RequestMode::NoCors)
                .body(form)
                .map_err(|e| SubmitError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
            Err(SubmitError::Unavailable)
        }
    }
}

/// Browser user agent, empty outside the browser.
#[must_use]
pub fn user_agent() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
