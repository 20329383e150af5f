//! Thread-safe in-memory [`SessionStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	session::{SessionFuture, SessionStore},
};

#[derive(Debug, Default)]
struct SessionState {
	entries: HashMap<String, Value>,
	durable: bool,
}

/// Thread-safe session backend that keeps entries in-process for tests and demos.
///
/// Clones share state, so a test can hand one handle to the broker and keep another for
/// inspecting what the broker stored.
#[derive(Clone, Debug, Default)]
pub struct MemorySession(Arc<RwLock<SessionState>>);
impl MemorySession {
	/// Returns `true` once the session has been marked for long-lived persistence.
	pub fn is_durable(&self) -> bool {
		self.0.read().durable
	}

	/// Returns the number of stored entries.
	pub fn len(&self) -> usize {
		self.0.read().entries.len()
	}

	/// Returns `true` when no entries are stored.
	pub fn is_empty(&self) -> bool {
		self.0.read().entries.is_empty()
	}
}
impl SessionStore for MemorySession {
	fn get<'a>(&'a self, key: &'a str) -> SessionFuture<'a, Option<Value>> {
		let state = self.0.clone();
		let key = key.to_owned();

		Box::pin(async move { Ok(state.read().entries.get(&key).cloned()) })
	}

	fn set<'a>(&'a self, key: &'a str, value: Value) -> SessionFuture<'a, ()> {
		let state = self.0.clone();
		let key = key.to_owned();

		Box::pin(async move {
			state.write().entries.insert(key, value);

			Ok(())
		})
	}

	fn remove<'a>(&'a self, key: &'a str) -> SessionFuture<'a, Option<Value>> {
		let state = self.0.clone();
		let key = key.to_owned();

		Box::pin(async move { Ok(state.write().entries.remove(&key)) })
	}

	fn mark_durable(&self) -> SessionFuture<'_, ()> {
		let state = self.0.clone();

		Box::pin(async move {
			state.write().durable = true;

			Ok(())
		})
	}
}
