//! Session storage contract and the built-in in-memory session backend.

pub mod memory;

pub use memory::MemorySession;

// self
use crate::_prelude::*;

/// Well-known session key under which the token bundle is stored.
pub const LOGIN_DETAILS_KEY: &str = "login_details";

/// Boxed future returned by [`SessionStore`] operations.
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SessionError>> + 'a + Send>>;

/// Key-value session contract supplied by the host application.
///
/// The broker holds exactly one store, injected at construction, for its entire lifetime
/// and always addresses it explicitly; there is no ambient or global fallback. The store
/// outlives the broker and is never created or destroyed by it. Access is assumed to be
/// sequential per logical session (one authenticated identity per store), so the broker
/// performs no coordination beyond the store's own interior mutability.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Returns the value stored under `key`, if present.
	fn get<'a>(&'a self, key: &'a str) -> SessionFuture<'a, Option<Value>>;

	/// Stores or replaces the value under `key`.
	fn set<'a>(&'a self, key: &'a str, value: Value) -> SessionFuture<'a, ()>;

	/// Removes and returns the value under `key`; absent keys are not an error.
	fn remove<'a>(&'a self, key: &'a str) -> SessionFuture<'a, Option<Value>>;

	/// Marks the session for persistence beyond the current request/connection lifetime.
	fn mark_durable(&self) -> SessionFuture<'_, ()>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionError {
	/// Serialization failures surfaced by the backend or the broker's own value mapping.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
