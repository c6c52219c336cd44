use crate::domain::commands::Command;
use async_trait::async_trait;
use std::fmt::Debug;

/// The seam to the external map collaborator. The store listener renders every
/// state change by dispatching commands through this trait.
#[async_trait]
pub trait MapService: Debug + Send + Sync {
    async fn execute(&self, command: Command);
}
