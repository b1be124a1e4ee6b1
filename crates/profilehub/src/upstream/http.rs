//! HTTP client for the upstream providers.

use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use profilehub_core::upstream::{
    ComplianceForm, ContactDetails, PersonalDetails, Result, UpstreamError, UpstreamKind,
    UpstreamSource,
};

/// HTTP client for the three upstream providers.
///
/// Every request carries the configured timeout. A 404 is an explicit
/// "no data" answer; anything else that is not a 2xx is a transport fault.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpUpstream {
    /// Create a new client for the providers under `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid upstream URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("upstream URL cannot be a base: {base_url}");
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build upstream HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for an endpoint, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a payload, mapping 404 to `None`.
    async fn fetch<T: DeserializeOwned>(&self, kind: UpstreamKind, url: Url) -> Result<Option<T>> {
        tracing::trace!(%kind, %url, "Upstream request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(kind, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus {
                kind,
                status: status.as_u16(),
            });
        }

        response.json().await.map(Some).map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout { kind }
            } else {
                UpstreamError::InvalidPayload {
                    kind,
                    message: e.to_string(),
                }
            }
        })
    }
}

fn transport_error(kind: UpstreamKind, err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout { kind }
    } else {
        UpstreamError::ConnectionFailed {
            kind,
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl UpstreamSource for HttpUpstream {
    async fn personal_details(&self, identifier: &str) -> Result<Option<PersonalDetails>> {
        let url = self.url(&["personal-details", identifier]);
        self.fetch(UpstreamKind::PersonalDetails, url).await
    }

    async fn contact_details(&self, identifier: &str) -> Result<Option<ContactDetails>> {
        let url = self.url(&["contact-details", identifier]);
        self.fetch(UpstreamKind::ContactDetails, url).await
    }

    async fn compliance_form(
        &self,
        identifier: &str,
        as_of: NaiveDate,
    ) -> Result<Option<ComplianceForm>> {
        let as_of = as_of.format("%Y-%m-%d").to_string();
        let url = self.url(&["compliance-forms", identifier, &as_of]);
        self.fetch(UpstreamKind::ComplianceForm, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_upstream::MockUpstream;
    use axum::{http::StatusCode as AxumStatus, routing::get, Router};
    use tokio::net::TcpListener;

    /// Serves `router` on an ephemeral port and returns its base URL.
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn demo_upstream() -> HttpUpstream {
        let base = serve(MockUpstream::with_demo_data().router()).await;
        HttpUpstream::new(&base, Duration::from_secs(5)).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(HttpUpstream::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpUpstream::new("mailto:ops@example.com", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_url_appends_encoded_segments() {
        let upstream =
            HttpUpstream::new("http://upstream.local/api/", Duration::from_secs(1)).unwrap();

        let url = upstream.url(&["personal-details", "a b/c"]);

        assert_eq!(
            url.as_str(),
            "http://upstream.local/api/personal-details/a%20b%2Fc"
        );
    }

    #[tokio::test]
    async fn test_fetches_all_three_payloads() {
        let upstream = demo_upstream().await;

        let personal = upstream.personal_details("19800101-1234").await.unwrap();
        let contact = upstream.contact_details("19800101-1234").await.unwrap();
        let form = upstream
            .compliance_form("19800101-1234", date())
            .await
            .unwrap();

        assert_eq!(personal, Some(PersonalDetails::new("Lars", "Larsson")));
        assert_eq!(contact.unwrap().emails.len(), 1);
        assert_eq!(form.unwrap().items.len(), 2);
    }

    #[tokio::test]
    async fn test_not_found_is_none() {
        let upstream = demo_upstream().await;

        assert_eq!(upstream.personal_details("unknown").await.unwrap(), None);
        assert_eq!(upstream.contact_details("19700303-9999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_error_is_unexpected_status() {
        let router = Router::new().route(
            "/personal-details/{id}",
            get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;
        let upstream = HttpUpstream::new(&base, Duration::from_secs(5)).unwrap();

        let result = upstream.personal_details("19800101-1234").await;

        assert_eq!(
            result,
            Err(UpstreamError::UnexpectedStatus {
                kind: UpstreamKind::PersonalDetails,
                status: 500,
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_payload() {
        let router = Router::new().route(
            "/contact-details/{id}",
            get(|| async { "definitely not json" }),
        );
        let base = serve(router).await;
        let upstream = HttpUpstream::new(&base, Duration::from_secs(5)).unwrap();

        let result = upstream.contact_details("19800101-1234").await;

        assert!(matches!(
            result,
            Err(UpstreamError::InvalidPayload {
                kind: UpstreamKind::ContactDetails,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_contact_details_wire_names_decode() {
        let router = Router::new().route(
            "/contact-details/{id}",
            get(|| async {
                axum::Json(serde_json::json!({
                    "addresses": [],
                    "emails": [{"preferred": true, "address": "lars.larsson@example.com"}],
                    "phones": [{"preferred": true, "number": "+46 70 123 45 67"}]
                }))
            }),
        );
        let base = serve(router).await;
        let upstream = HttpUpstream::new(&base, Duration::from_secs(5)).unwrap();

        let contact = upstream.contact_details("19800101-1234").await.unwrap().unwrap();

        assert_eq!(
            profilehub_core::profile::select_preferred(&contact.emails).as_deref(),
            Some("lars.larsson@example.com")
        );
        assert_eq!(
            profilehub_core::profile::select_preferred(&contact.phone_numbers).as_deref(),
            Some("+46 70 123 45 67")
        );
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let router = Router::new().route(
            "/compliance-forms/{id}/{as_of}",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "{}"
            }),
        );
        let base = serve(router).await;
        let upstream = HttpUpstream::new(&base, Duration::from_millis(100)).unwrap();

        let result = upstream.compliance_form("19800101-1234", date()).await;

        assert_eq!(
            result,
            Err(UpstreamError::Timeout {
                kind: UpstreamKind::ComplianceForm,
            })
        );
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_failed() {
        // Grab a free port, then close it so nothing is listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let upstream = HttpUpstream::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();

        let result = upstream.personal_details("19800101-1234").await;

        assert!(matches!(
            result,
            Err(UpstreamError::ConnectionFailed {
                kind: UpstreamKind::PersonalDetails,
                ..
            })
        ));
    }
}
