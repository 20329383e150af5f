//! Broker-level error taxonomy shared by the token flow, session store, and transport.

// self
use crate::_prelude::*;

/// Broker-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical broker error exposed by public APIs.
///
/// Every failure is a terminal outcome of the call that produced it; the broker performs
/// no retries and no local recovery.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Session-store failure.
	#[error("{0}")]
	Session(
		#[from]
		#[source]
		crate::session::SessionError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// No usable token bundle could be obtained or found.
	#[error(transparent)]
	NoTokens(#[from] NoTokensError),
	/// Caller-supplied identity claim violates the call contract.
	#[error(transparent)]
	InvalidInput(#[from] InvalidInputError),
	/// Claim is complete but does not match the stored tokens.
	#[error(transparent)]
	Authentication(#[from] AuthenticationError),
	/// Authenticated record fetch failed at the provider.
	#[error(transparent)]
	Provider(#[from] ProviderError),
}

/// Failures that leave the caller without a usable token bundle.
///
/// Transport faults and provider-side rejections are deliberately one kind: from the
/// caller's perspective both mean "no login happened", only the retained message differs.
#[derive(Debug, ThisError)]
pub enum NoTokensError {
	/// Token endpoint could not be reached.
	#[error("Connection to the token endpoint failed.")]
	Transport(
		#[from]
		#[source]
		TransportError,
	),
	/// Token endpoint answered with a body that is not valid JSON.
	#[error("Token endpoint returned a non-JSON response.")]
	MalformedResponse {
		/// Structured decode failure.
		#[source]
		source: crate::http::DecodeError,
	},
	/// Provider rejected the exchange (bad, expired, or mismatched code).
	#[error("Token endpoint returned an error: {reason}.")]
	Rejected {
		/// Provider-supplied reason string.
		reason: String,
	},
	/// Token endpoint response parsed as JSON but lacks the required token fields.
	#[error("Token endpoint response is missing the required token fields.")]
	InvalidBundle {
		/// Underlying deserialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// No login details are present in the session store.
	#[error("No login details found in the session.")]
	Missing,
}

/// Caller contract violations in the supplied identity claim.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum InvalidInputError {
	/// The claim omits a key that every claim must carry.
	#[error("Incomplete client details: claim is missing `{key}`.")]
	MissingClaimKey {
		/// Name of the absent required key.
		key: &'static str,
	},
}

/// Authentication failures raised after a complete claim was compared.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum AuthenticationError {
	/// The claim does not match the stored bundle.
	#[error("Could not authenticate the claimed identity against the stored tokens.")]
	Mismatch,
}

/// Failures reported by, or on the way back from, the provider's record endpoint.
#[derive(Debug, ThisError)]
pub enum ProviderError {
	/// Record endpoint answered with a body that is not valid JSON.
	#[error("Could not retrieve the record: provider returned a non-JSON response.")]
	MalformedResponse {
		/// Structured decode failure.
		#[source]
		source: crate::http::DecodeError,
	},
	/// Record endpoint reported an explicit error code.
	#[error("{message}")]
	Rejected {
		/// Provider error code (`error-code` field).
		code: String,
		/// Provider developer message, surfaced verbatim.
		message: String,
	},
}

/// Configuration and validation failures raised by the broker.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Endpoint base URL cannot be extended with the request path.
	#[error("Endpoint `{endpoint}` cannot be joined with the request path.")]
	InvalidEndpoint {
		/// Endpoint label (login, api).
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
