//! Mapping transport errors onto the user-facing failure taxonomy.

use wikiquiz_client::ApiError;
use wikiquiz_core::errors::Failure;

/// Categorize an [`ApiError`], in priority order:
/// 4xx → client (server `detail` or fallback), 5xx → server (fixed message),
/// no response → network (fixed message). Undecodable success bodies and
/// unexpected statuses are treated as server failures.
#[must_use]
pub fn categorize(error: &ApiError) -> Failure {
    match error {
        ApiError::Status { status, detail } if (400..500).contains(status) => {
            Failure::client(detail.as_deref())
        }
        ApiError::Status { .. } | ApiError::Decode(_) => Failure::server(),
        ApiError::Build(_) | ApiError::Transport(_) => Failure::network(),
    }
}
