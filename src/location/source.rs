use crate::domain::LocationFix;
use async_trait::async_trait;

/// The seam to the external positioning collaborator. Yields fixes until the
/// source ends.
#[async_trait]
pub trait LocationSource {
    async fn next_fix(&mut self) -> Option<LocationFix>;
}
