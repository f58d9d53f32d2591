// Pass-through policy used by the plain-copy build

use super::MinifyPolicy;
use crate::dist::compose::DistArtifact;
use crate::dist::error::DistError;
use async_trait::async_trait;

/// Returns every artifact unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPolicy;

#[async_trait]
impl MinifyPolicy for IdentityPolicy {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn minifies(&self) -> bool {
        false
    }

    async fn transform(&self, artifact: DistArtifact) -> Result<DistArtifact, DistError> {
        Ok(artifact)
    }
}
