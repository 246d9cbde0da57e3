//! Service trait definitions for dependency injection
//!
//! Storage is abstracted behind a trait so the API layer can be exercised
//! with mocks and the backing store swapped without touching handlers.

use async_trait::async_trait;

use crate::error::OptimizerResult;
use crate::types::SessionRecord;

/// Durable session storage service trait
#[mockall::automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist one session record and append it to the shared history
    async fn save_session(&self, record: &SessionRecord) -> OptimizerResult<()>;

    /// All persisted records for the implicit guest user, in append order
    async fn load_history(&self) -> OptimizerResult<Vec<SessionRecord>>;
}
