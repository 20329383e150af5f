//! Transport primitives for the provider's token and record endpoints.
//!
//! [`TokenHttpClient`] is the broker's only dependency on an HTTP stack. Implementations
//! return a [`RawResponse`] whose [`json`](RawResponse::json) decoder fails distinguishably
//! when the body is not valid JSON, so the broker can tell a malformed answer from a
//! provider-reported error without guessing at exception types.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{ACCEPT, AUTHORIZATION};
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`TokenHttpClient`] implementations.
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports able to perform the broker's two provider calls.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared
/// across broker instances behind `Arc<C>`. Every call is a direct request/response;
/// cancellation and deadlines are the caller's concern.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends a `POST` with an `application/x-www-form-urlencoded` body.
	fn post_form(
		&self,
		url: Url,
		headers: RequestHeaders,
		form: Vec<(String, String)>,
	) -> HttpFuture<'_, RawResponse>;

	/// Sends a `GET` with the provided headers.
	fn get(&self, url: Url, headers: RequestHeaders) -> HttpFuture<'_, RawResponse>;
}

/// Header set attached to an outbound provider request.
#[derive(Clone, Debug)]
pub struct RequestHeaders {
	/// `Accept` value; both provider endpoints speak JSON.
	pub accept: &'static str,
	/// `Authorization` value, present when the call is made on a user's behalf.
	pub authorization: Option<String>,
}
impl RequestHeaders {
	/// Headers for anonymous JSON calls.
	pub fn json() -> Self {
		Self { accept: "application/json", authorization: None }
	}

	/// Headers for bearer-authenticated JSON calls.
	pub fn bearer(token: &str) -> Self {
		Self { accept: "application/json", authorization: Some(format!("Bearer {token}")) }
	}
}

/// Raw response surfaced to the broker: status code plus unparsed body bytes.
///
/// The broker never branches on the status; the provider reports OAuth failures inside
/// JSON bodies, so classification happens on the decoded payload instead.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Unparsed body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Decodes the body as JSON, failing distinguishably when it is not.
	pub fn json<T>(&self) -> Result<T, DecodeError>
	where
		T: serde::de::DeserializeOwned,
	{
		let mut deserializer = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DecodeError { source, status: Some(self.status) })
	}
}

/// JSON decode failure carrying the serde path and the response status.
#[derive(Debug, ThisError)]
#[error("Response body is not valid JSON.")]
pub struct DecodeError {
	/// Structured parsing failure.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the offending response, when known.
	pub status: Option<u16>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Provider calls return their result bodies directly, so the client is used as built;
/// configure redirect policy and TLS on the wrapped [`ReqwestClient`] when needed.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	fn post_form(
		&self,
		url: Url,
		headers: RequestHeaders,
		form: Vec<(String, String)>,
	) -> HttpFuture<'_, RawResponse> {
		let client = self.0.clone();

		Box::pin(async move { execute(apply_headers(client.post(url), &headers).form(&form)).await })
	}

	fn get(&self, url: Url, headers: RequestHeaders) -> HttpFuture<'_, RawResponse> {
		let client = self.0.clone();

		Box::pin(async move { execute(apply_headers(client.get(url), &headers)).await })
	}
}

#[cfg(feature = "reqwest")]
fn apply_headers(
	builder: reqwest::RequestBuilder,
	headers: &RequestHeaders,
) -> reqwest::RequestBuilder {
	let builder = builder.header(ACCEPT, headers.accept);

	match &headers.authorization {
		Some(value) => builder.header(AUTHORIZATION, value.as_str()),
		None => builder,
	}
}

#[cfg(feature = "reqwest")]
async fn execute(request: reqwest::RequestBuilder) -> Result<RawResponse, TransportError> {
	let response = request.send().await.map_err(TransportError::from)?;
	let status = response.status().as_u16();
	let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

	Ok(RawResponse { status, body })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: u16, body: &str) -> RawResponse {
		RawResponse { status, body: body.as_bytes().to_vec() }
	}

	#[test]
	fn json_decodes_valid_bodies() {
		let payload: Value = response(200, "{\"orcid\":\"0000-0000-0000-0000\"}")
			.json()
			.expect("Valid JSON body should decode successfully.");

		assert_eq!(payload["orcid"], "0000-0000-0000-0000");
	}

	#[test]
	fn json_failure_retains_the_response_status() {
		let err = response(302, "<html>moved</html>")
			.json::<Value>()
			.expect_err("Non-JSON body should fail to decode.");

		assert_eq!(err.status, Some(302));
	}

	#[test]
	fn bearer_headers_carry_the_access_token() {
		let headers = RequestHeaders::bearer("access-123");

		assert_eq!(headers.accept, "application/json");
		assert_eq!(headers.authorization.as_deref(), Some("Bearer access-123"));
		assert_eq!(RequestHeaders::json().authorization, None);
	}
}
