//! ORCID OAuth 2.0 authorization-code client—exchange codes for tokens, keep them in a
//! caller-supplied session store, and fetch public records on the user's behalf.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod broker;
pub mod error;
pub mod http;
pub mod identity;
pub mod obs;
pub mod session;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		broker::{ClientDetails, OrcidBroker, OrcidEndpoints},
		http::ReqwestHttpClient,
		session::{MemorySession, SessionStore},
	};

	/// Broker type alias used by reqwest-backed integration tests.
	pub type ReqwestTestBroker = OrcidBroker<ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs an [`OrcidBroker`] backed by an in-memory session and the reqwest transport
	/// used across integration tests. The returned [`MemorySession`] handle shares state with
	/// the broker so tests can inspect stored entries directly.
	pub fn build_reqwest_test_broker(
		endpoints: OrcidEndpoints,
		client_id: &str,
		client_secret: &str,
	) -> (ReqwestTestBroker, MemorySession) {
		let session_backend = MemorySession::default();
		let session: Arc<dyn SessionStore> = Arc::new(session_backend.clone());
		let details = ClientDetails::new(
			client_id,
			client_secret,
			Url::parse("https://app.example.com/callback")
				.expect("Test redirect URI should parse successfully."),
		);
		let broker = OrcidBroker::with_http_client(session, details, test_reqwest_http_client())
			.with_endpoints(endpoints);

		(broker, session_backend)
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, tokio as _};
#[cfg(test)] use orcid_broker as _;
