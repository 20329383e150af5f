//! Identity-domain models: token bundles, claimed identities, and profile records.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::InvalidInputError};

/// Redacted token secret wrapper keeping bearer material out of logs.
///
/// Serialized transparently so bundles survive the session round trip as plain JSON.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Token bundle returned by the provider's token endpoint.
///
/// Only `orcid` and `access_token` carry meaning for the broker; every other field the
/// provider includes (`scope`, `name`, ...) is captured opaquely in `extra` and survives
/// the session round trip unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenBundle {
	/// Subject identifier assigned by the provider.
	pub orcid: String,
	/// Bearer credential for record API calls.
	pub access_token: TokenSecret,
	/// Remaining provider-defined fields, kept as-is.
	#[serde(flatten)]
	pub extra: BTreeMap<String, Value>,
}

/// Caller-supplied mapping asserting who the current session belongs to.
///
/// A claim must carry at least `orcid` and `access_token`. A missing key is a caller
/// contract violation surfaced as [`InvalidInputError`], not an authentication failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimedIdentity(BTreeMap<String, String>);
impl ClaimedIdentity {
	/// Creates an empty claim.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a claim for the provided subject + access token pair.
	pub fn of(orcid: impl Into<String>, access_token: impl Into<String>) -> Self {
		Self(BTreeMap::from_iter([
			("orcid".into(), orcid.into()),
			("access_token".into(), access_token.into()),
		]))
	}

	/// Inserts or replaces an asserted field.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}

	/// Returns the asserted value for `key`, if present.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	fn required(&self, key: &'static str) -> Result<&str, InvalidInputError> {
		self.get(key).ok_or(InvalidInputError::MissingClaimKey { key })
	}
}

/// Compares a claim against the stored bundle.
///
/// Presence of both required keys is checked first; afterwards both equality checks are
/// always evaluated and the outcome is their plain conjunction.
pub(crate) fn claim_matches(
	claim: &ClaimedIdentity,
	bundle: &TokenBundle,
) -> Result<bool, InvalidInputError> {
	let claimed_orcid = claim.required("orcid")?;
	let claimed_token = claim.required("access_token")?;
	let orcid_matches = claimed_orcid == bundle.orcid;
	let token_matches = claimed_token == bundle.access_token.expose();

	Ok(orcid_matches && token_matches)
}

/// Profile record returned by the provider's record endpoint, verbatim.
///
/// The broker performs no transformation or normalization of the remote schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord(pub Value);
impl ProfileRecord {
	/// Unwraps the record into its raw JSON value.
	pub fn into_inner(self) -> Value {
		self.0
	}
}
impl Deref for ProfileRecord {
	type Target = Value;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn bundle() -> TokenBundle {
		TokenBundle {
			orcid: "0000-0000-0000-0000".into(),
			access_token: TokenSecret::new("XXX"),
			extra: BTreeMap::from_iter([(
				"scope".to_owned(),
				Value::String("/authenticate".into()),
			)]),
		}
	}

	#[test]
	fn secret_formatters_redact() {
		let secret = TokenSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn bundle_extra_fields_survive_a_value_round_trip() {
		let original = bundle();
		let value =
			serde_json::to_value(&original).expect("Bundle should serialize to a JSON value.");

		assert_eq!(value["orcid"], "0000-0000-0000-0000");
		assert_eq!(value["access_token"], "XXX");
		assert_eq!(value["scope"], "/authenticate");

		let restored: TokenBundle =
			serde_json::from_value(value).expect("Bundle should deserialize from a JSON value.");

		assert_eq!(restored, original);
	}

	#[test]
	fn bundle_requires_the_two_mandatory_fields() {
		let missing = serde_json::json!({ "orcid": "0000-0000-0000-0000" });

		assert!(serde_json::from_value::<TokenBundle>(missing).is_err());
	}

	#[test]
	fn claim_comparison_checks_presence_then_equality() {
		let stored = bundle();
		let exact = ClaimedIdentity::of("0000-0000-0000-0000", "XXX");

		assert_eq!(claim_matches(&exact, &stored), Ok(true));

		let wrong_token = ClaimedIdentity::of("0000-0000-0000-0000", "YYY");

		assert_eq!(claim_matches(&wrong_token, &stored), Ok(false));

		let wrong_orcid = ClaimedIdentity::of("0000-0000-0000-0001", "XXX");

		assert_eq!(claim_matches(&wrong_orcid, &stored), Ok(false));

		let mut incomplete = ClaimedIdentity::new();

		incomplete.insert("orcid", "0000-0000-0000-0000");

		assert_eq!(
			claim_matches(&incomplete, &stored),
			Err(InvalidInputError::MissingClaimKey { key: "access_token" }),
		);
	}
}
