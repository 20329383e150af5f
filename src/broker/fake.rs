//! Deterministic in-process stand-in for the ORCID provider.
//!
//! [`FakeOrcidBroker`] honors the full [`TokenBroker`] contract without any network
//! access, so callers can exercise their login flows against canned data instead of live
//! credentials.

// self
use crate::{
	_prelude::*,
	broker::{BrokerFuture, TokenBroker},
	error::{AuthenticationError, NoTokensError},
	identity::{self, ClaimedIdentity, ProfileRecord, TokenBundle, TokenSecret},
};

/// The only authorization code the fake accepts.
pub const FAKE_CODE: &str = "123456";

/// Networkless [`TokenBroker`] with canned data, for demos and caller tests.
///
/// The fake owns a private in-memory slot instead of an injected session store and never
/// marks anything durable; beyond that it behaves like the real broker.
#[derive(Debug, Default)]
pub struct FakeOrcidBroker {
	stored: Mutex<Option<TokenBundle>>,
}
impl FakeOrcidBroker {
	/// Creates an empty fake broker.
	pub fn new() -> Self {
		Self::default()
	}

	/// The canned bundle stored after a successful fake exchange.
	pub fn canned_bundle() -> TokenBundle {
		TokenBundle {
			orcid: "0000-0000-0000-0000".into(),
			access_token: TokenSecret::new("XXX"),
			extra: BTreeMap::from_iter([
				("name".to_owned(), Value::String("Johnny B. Goode".into())),
				("scope".to_owned(), Value::String("/authenticate".into())),
			]),
		}
	}

	/// The canned record returned by every authenticated fake fetch.
	pub fn canned_record() -> ProfileRecord {
		ProfileRecord(serde_json::json!({
			"orcid-identifier": {
				"path": "0000-0000-0000-0000",
				"host": "none",
				"uri": "0000-0000-0000-0000",
			}
		}))
	}
}
impl TokenBroker for FakeOrcidBroker {
	fn request_tokens<'a>(&'a self, code: &'a str) -> BrokerFuture<'a, ()> {
		Box::pin(async move {
			if code != FAKE_CODE {
				return Err(NoTokensError::Rejected {
					reason: format!("invalid fake code, the right fake code is {FAKE_CODE}"),
				}
				.into());
			}

			*self.stored.lock() = Some(Self::canned_bundle());

			Ok(())
		})
	}

	fn get_tokens<'a>(&'a self, code: Option<&'a str>) -> BrokerFuture<'a, TokenBundle> {
		Box::pin(async move {
			if let Some(code) = code {
				TokenBroker::request_tokens(self, code).await?;
			}

			self.stored.lock().clone().ok_or_else(|| NoTokensError::Missing.into())
		})
	}

	fn delete_tokens(&self) -> BrokerFuture<'_, ()> {
		Box::pin(async move {
			*self.stored.lock() = None;

			Ok(())
		})
	}

	fn authenticate<'a>(&'a self, claim: &'a ClaimedIdentity) -> BrokerFuture<'a, bool> {
		Box::pin(async move {
			let bundle = TokenBroker::get_tokens(self, None).await?;

			Ok(identity::claim_matches(claim, &bundle)?)
		})
	}

	fn request_info<'a>(&'a self, claim: &'a ClaimedIdentity) -> BrokerFuture<'a, ProfileRecord> {
		Box::pin(async move {
			if !TokenBroker::authenticate(self, claim).await? {
				return Err(AuthenticationError::Mismatch.into());
			}

			TokenBroker::get_tokens(self, None).await?;

			Ok(Self::canned_record())
		})
	}
}
