//! The ORCID broker: code-for-token exchange, session persistence, claim authentication,
//! and record retrieval.

pub mod fake;

pub use fake::FakeOrcidBroker;

// self
use crate::{
	_prelude::*,
	error::{AuthenticationError, ConfigError, NoTokensError, ProviderError},
	http::{RequestHeaders, TokenHttpClient},
	identity::{self, ClaimedIdentity, ProfileRecord, TokenBundle, TokenSecret},
	obs::{self, OpKind, OpOutcome, OpSpan},
	session::{LOGIN_DETAILS_KEY, SessionError, SessionStore},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Boxed future returned by [`TokenBroker`] operations.
pub type BrokerFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Object-safe contract shared by the real broker and its deterministic test double.
///
/// Session state per store moves NoSession -> Authenticated on a successful
/// [`request_tokens`](TokenBroker::request_tokens) and back on
/// [`delete_tokens`](TokenBroker::delete_tokens); `authenticate` and `request_info`
/// require the Authenticated state and fail otherwise. There is no Expired state; token
/// lifetime and refresh are out of scope.
pub trait TokenBroker
where
	Self: Send + Sync,
{
	/// Exchanges an authorization code and stores the resulting bundle in the session.
	fn request_tokens<'a>(&'a self, code: &'a str) -> BrokerFuture<'a, ()>;

	/// Returns the stored bundle, optionally performing the exchange first.
	fn get_tokens<'a>(&'a self, code: Option<&'a str>) -> BrokerFuture<'a, TokenBundle>;

	/// Removes the stored bundle; a no-op when none is present.
	fn delete_tokens(&self) -> BrokerFuture<'_, ()>;

	/// Checks a claimed identity against the stored bundle.
	fn authenticate<'a>(&'a self, claim: &'a ClaimedIdentity) -> BrokerFuture<'a, bool>;

	/// Fetches the provider record for an authenticated claim.
	fn request_info<'a>(&'a self, claim: &'a ClaimedIdentity) -> BrokerFuture<'a, ProfileRecord>;
}

/// Static OAuth application credentials sent with every token exchange.
///
/// Owned by the broker for its entire lifetime; immutable after construction.
#[derive(Clone, Debug)]
pub struct ClientDetails {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret; redacted in logs.
	pub client_secret: TokenSecret,
	/// Redirect URI registered with the provider.
	pub redirect_uri: Url,
}
impl ClientDetails {
	/// Creates the credential set for a registered ORCID application.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
			redirect_uri,
		}
	}
}

/// Provider endpoint pair, each independently overridable for sandbox providers and test
/// doubles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrcidEndpoints {
	login: Url,
	api: Url,
}
impl OrcidEndpoints {
	/// Production public API base.
	pub const DEFAULT_API_URL: &'static str = "https://pub.orcid.org/v2.0/";
	/// Production login endpoint base.
	pub const DEFAULT_LOGIN_URL: &'static str = "https://orcid.org/";

	/// Overrides the login base, normalizing a missing trailing slash.
	pub fn with_login_url(mut self, url: Url) -> Self {
		self.login = normalize(url);

		self
	}

	/// Overrides the API base, normalizing a missing trailing slash.
	pub fn with_api_url(mut self, url: Url) -> Self {
		self.api = normalize(url);

		self
	}

	/// Token endpoint: `{login_url}oauth/token`.
	pub fn token_endpoint(&self) -> Result<Url, ConfigError> {
		self.login
			.join("oauth/token")
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "login", source })
	}

	/// Record endpoint: `{api_url}{orcid}/record`.
	pub fn record_endpoint(&self, orcid: &str) -> Result<Url, ConfigError> {
		self.api
			.join(&format!("{orcid}/record"))
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "api", source })
	}
}
impl Default for OrcidEndpoints {
	fn default() -> Self {
		let login = Url::parse(Self::DEFAULT_LOGIN_URL).expect("Default login URL must parse.");
		let api = Url::parse(Self::DEFAULT_API_URL).expect("Default API URL must parse.");

		Self { login, api }
	}
}

// Bases are joined with relative paths, so a missing trailing slash would otherwise
// swallow the last path segment.
fn normalize(mut url: Url) -> Url {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url
}

#[cfg(feature = "reqwest")]
/// Broker specialized for the crate's default reqwest transport stack.
pub type ReqwestBroker = OrcidBroker<ReqwestHttpClient>;

/// Coordinates the ORCID authorization-code flow against one session store.
///
/// The broker owns the HTTP client, static client details, and endpoint pair; the session
/// store is injected at construction and always addressed explicitly, never resolved from
/// ambient context. One logical session per store: concurrent exchanges against the same
/// store are not coordinated and the last writer wins.
#[derive(Clone)]
pub struct OrcidBroker<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client wrapper used for every outbound provider request.
	pub http_client: Arc<C>,
	/// Session store holding the token bundle between calls.
	pub session: Arc<dyn SessionStore>,
	/// Static OAuth application credentials.
	pub details: ClientDetails,
	/// Provider endpoint pair.
	pub endpoints: OrcidEndpoints,
}
impl<C> OrcidBroker<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a broker that reuses the caller-provided transport.
	pub fn with_http_client(
		session: Arc<dyn SessionStore>,
		details: ClientDetails,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			session,
			details,
			endpoints: OrcidEndpoints::default(),
		}
	}

	/// Replaces the endpoint pair (sandbox or test-double providers).
	pub fn with_endpoints(mut self, endpoints: OrcidEndpoints) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Exchanges an authorization code for a token bundle and stores it in the session.
	///
	/// Transport faults, non-JSON answers, and provider-side rejections all surface as
	/// [`NoTokensError`]; callers treat every one of them as "could not log in". On
	/// success the session is marked durable and the full bundle stored under
	/// [`LOGIN_DETAILS_KEY`]; callers recover it via [`get_tokens`](Self::get_tokens).
	pub async fn request_tokens(&self, code: &str) -> Result<()> {
		const KIND: OpKind = OpKind::TokenExchange;

		let span = OpSpan::new(KIND, "request_tokens");

		obs::record_op_outcome(KIND, OpOutcome::Attempt);

		let result = span.instrument(self.exchange_code(code)).await;

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	async fn exchange_code(&self, code: &str) -> Result<()> {
		let url = self.endpoints.token_endpoint()?;
		let form = vec![
			("client_id".to_owned(), self.details.client_id.clone()),
			("client_secret".to_owned(), self.details.client_secret.expose().to_owned()),
			("redirect_uri".to_owned(), self.details.redirect_uri.to_string()),
			("grant_type".to_owned(), "authorization_code".to_owned()),
			("code".to_owned(), code.to_owned()),
		];
		let response = self
			.http_client
			.post_form(url, RequestHeaders::json(), form)
			.await
			.map_err(NoTokensError::Transport)?;
		let payload: Value =
			response.json().map_err(|source| NoTokensError::MalformedResponse { source })?;

		if let Some(error) = payload.get("error") {
			return Err(NoTokensError::Rejected { reason: json_text(error) }.into());
		}

		let bundle: TokenBundle = serde_json::from_value(payload)
			.map_err(|source| NoTokensError::InvalidBundle { source })?;
		let value = serde_json::to_value(&bundle)
			.map_err(|e| SessionError::Serialization { message: e.to_string() })?;

		self.session.mark_durable().await?;
		self.session.set(LOGIN_DETAILS_KEY, value).await?;

		Ok(())
	}

	/// Returns the stored bundle, optionally performing the exchange first.
	///
	/// This is the single chokepoint through which every operation reaches stored tokens;
	/// with `code` set to `None` it is side-effect-free.
	pub async fn get_tokens(&self, code: Option<&str>) -> Result<TokenBundle> {
		if let Some(code) = code {
			self.request_tokens(code).await?;
		}

		let Some(value) = self.session.get(LOGIN_DETAILS_KEY).await? else {
			return Err(NoTokensError::Missing.into());
		};
		let bundle = serde_json::from_value(value)
			.map_err(|e| SessionError::Serialization { message: e.to_string() })?;

		Ok(bundle)
	}

	/// Removes the stored bundle from this broker's own session store; idempotent.
	pub async fn delete_tokens(&self) -> Result<()> {
		self.session.remove(LOGIN_DETAILS_KEY).await?;

		Ok(())
	}

	/// Validates a claimed identity against the stored bundle.
	///
	/// Fails with [`NoTokensError`] when no bundle is stored and with
	/// [`InvalidInputError`](crate::error::InvalidInputError) when the claim omits a
	/// required key. Both equality checks are always evaluated; the result is their
	/// conjunction.
	pub async fn authenticate(&self, claim: &ClaimedIdentity) -> Result<bool> {
		let bundle = self.get_tokens(None).await?;

		Ok(identity::claim_matches(claim, &bundle)?)
	}

	/// Fetches the provider record for an authenticated claim, verbatim.
	///
	/// A complete-but-mismatched claim fails with [`AuthenticationError`] before any
	/// provider request is issued. Provider-side failures surface as [`ProviderError`].
	pub async fn request_info(&self, claim: &ClaimedIdentity) -> Result<ProfileRecord> {
		const KIND: OpKind = OpKind::ProfileFetch;

		let span = OpSpan::new(KIND, "request_info");

		obs::record_op_outcome(KIND, OpOutcome::Attempt);

		let result = span.instrument(self.fetch_record(claim)).await;

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	async fn fetch_record(&self, claim: &ClaimedIdentity) -> Result<ProfileRecord> {
		if !self.authenticate(claim).await? {
			return Err(AuthenticationError::Mismatch.into());
		}

		let bundle = self.get_tokens(None).await?;
		let url = self.endpoints.record_endpoint(&bundle.orcid)?;
		let response = self
			.http_client
			.get(url, RequestHeaders::bearer(bundle.access_token.expose()))
			.await?;
		let payload: Value =
			response.json().map_err(|source| ProviderError::MalformedResponse { source })?;

		if let Some(code) = payload.get("error-code") {
			let message = payload
				.get("developer-message")
				.map(json_text)
				.unwrap_or_else(|| "Could not retrieve info.".to_owned());

			return Err(ProviderError::Rejected { code: json_text(code), message }.into());
		}

		Ok(ProfileRecord(payload))
	}
}
#[cfg(feature = "reqwest")]
impl OrcidBroker<ReqwestHttpClient> {
	/// Creates a broker with the default reqwest transport and production endpoints.
	pub fn new(session: Arc<dyn SessionStore>, details: ClientDetails) -> Self {
		Self::with_http_client(session, details, ReqwestHttpClient::default())
	}
}
impl<C> Debug for OrcidBroker<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OrcidBroker")
			.field("details", &self.details)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}
impl<C> TokenBroker for OrcidBroker<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn request_tokens<'a>(&'a self, code: &'a str) -> BrokerFuture<'a, ()> {
		Box::pin(self.request_tokens(code))
	}

	fn get_tokens<'a>(&'a self, code: Option<&'a str>) -> BrokerFuture<'a, TokenBundle> {
		Box::pin(self.get_tokens(code))
	}

	fn delete_tokens(&self) -> BrokerFuture<'_, ()> {
		Box::pin(self.delete_tokens())
	}

	fn authenticate<'a>(&'a self, claim: &'a ClaimedIdentity) -> BrokerFuture<'a, bool> {
		Box::pin(self.authenticate(claim))
	}

	fn request_info<'a>(&'a self, claim: &'a ClaimedIdentity) -> BrokerFuture<'a, ProfileRecord> {
		Box::pin(self.request_info(claim))
	}
}

fn json_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::VecDeque;
	// self
	use super::*;
	use crate::{
		error::{Error, InvalidInputError, TransportError},
		http::{HttpFuture, RawResponse},
		session::MemorySession,
	};

	const TOKEN_BODY: &str = "{\"orcid\":\"0000-0002-1825-0097\",\"access_token\":\"access-1\",\
	                          \"scope\":\"/authenticate\",\"name\":\"Josiah Carberry\"}";

	/// Transport double that replays scripted responses and records issued requests.
	#[derive(Default)]
	struct ScriptedHttpClient {
		responses: Mutex<VecDeque<RawResponse>>,
		requests: Mutex<Vec<(String, Option<String>)>>,
		forms: Mutex<Vec<Vec<(String, String)>>>,
	}
	impl ScriptedHttpClient {
		fn push(&self, status: u16, body: &str) {
			self.responses
				.lock()
				.push_back(RawResponse { status, body: body.as_bytes().to_vec() });
		}

		fn hits(&self) -> usize {
			self.requests.lock().len()
		}

		fn last_request(&self) -> Option<(String, Option<String>)> {
			self.requests.lock().last().cloned()
		}

		fn last_form(&self) -> Option<Vec<(String, String)>> {
			self.forms.lock().last().cloned()
		}

		fn replay(&self, url: Url, headers: &RequestHeaders) -> HttpFuture<'_, RawResponse> {
			self.requests.lock().push((url.to_string(), headers.authorization.clone()));

			let next = self.responses.lock().pop_front();

			Box::pin(async move {
				next.ok_or_else(|| TransportError::Io(std::io::Error::other("nothing scripted")))
			})
		}
	}
	impl crate::http::TokenHttpClient for ScriptedHttpClient {
		fn post_form(
			&self,
			url: Url,
			headers: RequestHeaders,
			form: Vec<(String, String)>,
		) -> HttpFuture<'_, RawResponse> {
			self.forms.lock().push(form);

			self.replay(url, &headers)
		}

		fn get(&self, url: Url, headers: RequestHeaders) -> HttpFuture<'_, RawResponse> {
			self.replay(url, &headers)
		}
	}

	fn build_broker() -> (OrcidBroker<ScriptedHttpClient>, Arc<ScriptedHttpClient>, MemorySession)
	{
		let client = Arc::new(ScriptedHttpClient::default());
		let session_backend = MemorySession::default();
		let session: Arc<dyn SessionStore> = Arc::new(session_backend.clone());
		let details = ClientDetails::new(
			"client-unit",
			"secret-unit",
			Url::parse("https://app.example.com/callback")
				.expect("Test redirect URI should parse successfully."),
		);
		let broker = OrcidBroker::with_http_client(session, details, client.clone());

		(broker, client, session_backend)
	}

	#[test]
	fn endpoints_normalize_missing_trailing_slashes() {
		let endpoints = OrcidEndpoints::default()
			.with_login_url(
				Url::parse("https://sandbox.orcid.org").expect("Login URL should parse."),
			)
			.with_api_url(
				Url::parse("https://api.sandbox.orcid.org/v2.0").expect("API URL should parse."),
			);

		assert_eq!(
			endpoints.token_endpoint().expect("Token endpoint should join.").as_str(),
			"https://sandbox.orcid.org/oauth/token",
		);
		assert_eq!(
			endpoints
				.record_endpoint("0000-0002-1825-0097")
				.expect("Record endpoint should join.")
				.as_str(),
			"https://api.sandbox.orcid.org/v2.0/0000-0002-1825-0097/record",
		);
	}

	#[test]
	fn default_endpoints_point_at_production() {
		let endpoints = OrcidEndpoints::default();

		assert_eq!(
			endpoints.token_endpoint().expect("Token endpoint should join.").as_str(),
			"https://orcid.org/oauth/token",
		);
	}

	#[tokio::test]
	async fn successful_exchange_stores_the_bundle_and_marks_durable() {
		let (broker, client, session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");

		assert!(session.is_durable());

		let bundle = broker.get_tokens(None).await.expect("Stored bundle should be returned.");

		assert_eq!(bundle.orcid, "0000-0002-1825-0097");
		assert_eq!(bundle.access_token.expose(), "access-1");
		assert_eq!(bundle.extra.get("name"), Some(&Value::String("Josiah Carberry".into())));

		let (url, _) = client.last_request().expect("Exchange should issue one request.");

		assert_eq!(url, "https://orcid.org/oauth/token");

		let form = client.last_form().expect("Exchange should send a form body.");

		assert_eq!(
			form,
			vec![
				("client_id".to_owned(), "client-unit".to_owned()),
				("client_secret".to_owned(), "secret-unit".to_owned()),
				("redirect_uri".to_owned(), "https://app.example.com/callback".to_owned()),
				("grant_type".to_owned(), "authorization_code".to_owned()),
				("code".to_owned(), "valid-code".to_owned()),
			],
		);
	}

	#[tokio::test]
	async fn rejected_exchange_stores_nothing() {
		let (broker, client, session) = build_broker();

		client.push(400, "{\"error\":\"invalid_grant\",\"error_description\":\"expired\"}");

		let err = broker
			.request_tokens("stale-code")
			.await
			.expect_err("Provider rejection should fail the exchange.");

		assert!(matches!(err, Error::NoTokens(NoTokensError::Rejected { .. })));
		assert!(session.is_empty());
		assert!(!session.is_durable());
	}

	#[tokio::test]
	async fn non_json_exchange_response_yields_no_tokens() {
		let (broker, client, session) = build_broker();

		client.push(200, "<html>login page</html>");

		let err = broker
			.request_tokens("any-code")
			.await
			.expect_err("Non-JSON token response should fail the exchange.");

		assert!(matches!(err, Error::NoTokens(NoTokensError::MalformedResponse { .. })));
		assert!(session.is_empty());
	}

	#[tokio::test]
	async fn get_tokens_with_a_code_doubles_as_exchange_then_fetch() {
		let (broker, client, _session) = build_broker();

		client.push(200, TOKEN_BODY);

		let bundle = broker
			.get_tokens(Some("valid-code"))
			.await
			.expect("Exchange-then-fetch should succeed.");

		assert_eq!(bundle.orcid, "0000-0002-1825-0097");
	}

	#[tokio::test]
	async fn get_tokens_on_an_empty_store_fails_without_side_effects() {
		let (broker, client, _session) = build_broker();
		let err = broker.get_tokens(None).await.expect_err("Empty store should yield no tokens.");

		assert!(matches!(err, Error::NoTokens(NoTokensError::Missing)));
		assert_eq!(client.hits(), 0);
	}

	#[tokio::test]
	async fn delete_tokens_clears_the_session_and_stays_idempotent() {
		let (broker, client, session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");
		broker.delete_tokens().await.expect("First delete should succeed.");
		broker.delete_tokens().await.expect("Second delete should also succeed.");

		assert!(session.is_empty());

		let err = broker.get_tokens(None).await.expect_err("Deleted tokens should be gone.");

		assert!(matches!(err, Error::NoTokens(NoTokensError::Missing)));
	}

	#[tokio::test]
	async fn authenticate_distinguishes_mismatch_from_incomplete_claims() {
		let (broker, client, _session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");

		let exact = ClaimedIdentity::of("0000-0002-1825-0097", "access-1");

		assert!(broker.authenticate(&exact).await.expect("Exact claim should authenticate."));

		let mismatched = ClaimedIdentity::of("0000-0002-1825-0097", "other-token");

		assert!(!broker
			.authenticate(&mismatched)
			.await
			.expect("Mismatched claim should evaluate to false."));

		let mut incomplete = ClaimedIdentity::new();

		incomplete.insert("orcid", "0000-0002-1825-0097");

		let err = broker
			.authenticate(&incomplete)
			.await
			.expect_err("Incomplete claim should violate the contract.");

		assert!(matches!(
			err,
			Error::InvalidInput(InvalidInputError::MissingClaimKey { key: "access_token" }),
		));
	}

	#[tokio::test]
	async fn mismatched_claim_blocks_the_record_fetch() {
		let (broker, client, _session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");

		let hits_before = client.hits();
		let err = broker
			.request_info(&ClaimedIdentity::of("0000-0002-1825-0097", "other-token"))
			.await
			.expect_err("Mismatched claim should not reach the provider.");

		assert!(matches!(err, Error::Authentication(AuthenticationError::Mismatch)));
		assert_eq!(client.hits(), hits_before, "No record request may be issued.");
	}

	#[tokio::test]
	async fn record_fetch_returns_the_payload_verbatim() {
		let (broker, client, _session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");
		client.push(
			200,
			"{\"orcid-identifier\":{\"path\":\"0000-0002-1825-0097\"},\"person\":{}}",
		);

		let record = broker
			.request_info(&ClaimedIdentity::of("0000-0002-1825-0097", "access-1"))
			.await
			.expect("Authenticated fetch should succeed.");

		assert_eq!(record["orcid-identifier"]["path"], "0000-0002-1825-0097");

		let (url, authorization) =
			client.last_request().expect("Record fetch should issue a request.");

		assert_eq!(url, "https://pub.orcid.org/v2.0/0000-0002-1825-0097/record");
		assert_eq!(authorization.as_deref(), Some("Bearer access-1"));
	}

	#[tokio::test]
	async fn provider_error_code_surfaces_the_developer_message() {
		let (broker, client, _session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");
		client.push(429, "{\"error-code\":\"9000\",\"developer-message\":\"rate limited\"}");

		let err = broker
			.request_info(&ClaimedIdentity::of("0000-0002-1825-0097", "access-1"))
			.await
			.expect_err("Provider error code should fail the fetch.");

		assert!(matches!(
			&err,
			Error::Provider(ProviderError::Rejected { code, .. }) if code == "9000",
		));
		assert_eq!(err.to_string(), "rate limited");
	}

	#[tokio::test]
	async fn non_json_record_response_is_a_provider_error() {
		let (broker, client, _session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");
		client.push(200, "<xml>not json</xml>");

		let err = broker
			.request_info(&ClaimedIdentity::of("0000-0002-1825-0097", "access-1"))
			.await
			.expect_err("Non-JSON record response should fail the fetch.");

		assert!(matches!(err, Error::Provider(ProviderError::MalformedResponse { .. })));
	}

	#[tokio::test]
	async fn numeric_provider_error_codes_are_stringified() {
		let (broker, client, _session) = build_broker();

		client.push(200, TOKEN_BODY);
		broker.request_tokens("valid-code").await.expect("Exchange should succeed.");
		client.push(429, "{\"error-code\":9000,\"developer-message\":\"rate limited\"}");

		let err = broker
			.request_info(&ClaimedIdentity::of("0000-0002-1825-0097", "access-1"))
			.await
			.expect_err("Provider error code should fail the fetch.");

		assert!(matches!(
			&err,
			Error::Provider(ProviderError::Rejected { code, .. }) if code == "9000",
		));
	}
}
