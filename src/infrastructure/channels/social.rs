// src/infrastructure/channels/social.rs
use crate::application::ports::social::SocialChannel;
use crate::application::ports::{ChannelError, ChannelResult};
use crate::config::SocialCredentials;
use async_trait::async_trait;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use serde::Serialize;
use sha2::Sha256;
use std::time::Duration;

// RFC 5849 §3.6: unreserved characters stay literal, everything else is
// percent-encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn oauth_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Posts status updates to the social platform's HTTP API. The platform
/// answers 201 on success; anything else is a failure to report, never to
/// raise.
pub struct StatusApiSocialChannel {
    client: reqwest::Client,
    endpoint: String,
    credentials: SocialCredentials,
}

impl StatusApiSocialChannel {
    pub fn new(
        endpoint: impl Into<String>,
        credentials: SocialCredentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    fn authorization_header(&self, method: &str, url: &str) -> String {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        build_oauth_header(&self.credentials, method, url, &nonce, &timestamp)
    }
}

/// OAuth 1.0a protocol header with an HMAC-SHA256 signature over the
/// signature base string.
fn build_oauth_header(
    credentials: &SocialCredentials,
    method: &str,
    url: &str,
    nonce: &str,
    timestamp: &str,
) -> String {
    let mut params = vec![
        ("oauth_consumer_key", credentials.api_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA256"),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];
    params.sort();

    let param_string = params
        .iter()
        .map(|(key, value)| format!("{}={}", oauth_encode(key), oauth_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    let base_string = format!(
        "{}&{}&{}",
        method,
        oauth_encode(url),
        oauth_encode(&param_string)
    );
    let signing_key = format!(
        "{}&{}",
        oauth_encode(&credentials.api_key_secret),
        oauth_encode(&credentials.access_token_secret)
    );

    let mut mac = Hmac::<Sha256>::new_from_slice(signing_key.as_bytes())
        .expect("hmac accepts keys of any length");
    mac.update(base_string.as_bytes());
    let signature = base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes());

    let mut header_params = params
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, oauth_encode(value)))
        .collect::<Vec<_>>();
    header_params.push(format!("oauth_signature=\"{}\"", oauth_encode(&signature)));
    format!("OAuth {}", header_params.join(", "))
}

#[derive(Serialize)]
struct StatusPayload<'a> {
    text: &'a str,
}

#[async_trait]
impl SocialChannel for StatusApiSocialChannel {
    async fn post(&self, text: &str) -> ChannelResult<()> {
        let authorization = self.authorization_header("POST", &self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", authorization)
            .json(&StatusPayload { text })
            .send()
            .await
            .map_err(|err| ChannelError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::CREATED {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(ChannelError::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> SocialCredentials {
        SocialCredentials {
            api_key: "key".into(),
            api_key_secret: "key-secret".into(),
            access_token: "token".into(),
            access_token_secret: "token-secret".into(),
        }
    }

    #[test]
    fn header_carries_all_protocol_params() {
        let header = build_oauth_header(
            &credentials(),
            "POST",
            "https://api.example.com/2/statuses",
            "nonce123",
            "1700000000",
        );
        assert!(header.starts_with("OAuth "));
        for key in [
            "oauth_consumer_key=\"key\"",
            "oauth_nonce=\"nonce123\"",
            "oauth_signature_method=\"HMAC-SHA256\"",
            "oauth_timestamp=\"1700000000\"",
            "oauth_token=\"token\"",
            "oauth_version=\"1.0\"",
            "oauth_signature=\"",
        ] {
            assert!(header.contains(key), "missing {key} in {header}");
        }
    }

    #[test]
    fn signature_is_deterministic_for_fixed_inputs() {
        let first = build_oauth_header(&credentials(), "POST", "https://x", "n", "1");
        let second = build_oauth_header(&credentials(), "POST", "https://x", "n", "1");
        assert_eq!(first, second);
    }

    #[test]
    fn encoding_escapes_reserved_characters() {
        assert_eq!(oauth_encode("a b+c/d"), "a%20b%2Bc%2Fd");
        assert_eq!(oauth_encode("safe-._~"), "safe-._~");
    }
}
