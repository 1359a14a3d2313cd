//! # Scratch Spaces
//!
//! Disposable, uniquely named spaces for integration suites.
//!
//! A fresh space is not usable until the schema change has propagated
//! through the service's heartbeat cycle, so creation retries `USE` for a
//! bounded window instead of returning a space the caller cannot touch yet.

use crate::error::{Error, Result};
use crate::gateway::GatewaySession;
use nquill_core::{CreateSpace, Identifier, VidType};
use std::time::Duration;

/// Length of generated space names.
const NAME_LEN: usize = 10;

/// How many times to retry `USE` while the new space propagates.
const USE_ATTEMPTS: u32 = 30;

const USE_RETRY_DELAY: Duration = Duration::from_millis(200);

/// A uniquely named space created for one test run.
///
/// Creation picks a random name, verifies it does not collide with an
/// existing space, creates and enters it. [`ScratchSpace::teardown`] drops
/// the space and verifies it is gone; call it at the end of the suite.
#[derive(Debug)]
pub struct ScratchSpace {
    name: Identifier,
}

impl ScratchSpace {
    /// Create and enter a scratch space with the given vid type.
    pub async fn create(session: &GatewaySession, vid_type: VidType) -> Result<Self> {
        let existing = session.show_spaces().await?;

        let mut name = random_name();
        while existing.iter().any(|space| *space == name) {
            name = random_name();
        }
        let name = Identifier::new(name)?;

        session
            .create_space(&CreateSpace::new(name.clone(), vid_type).replica_factor(1))
            .await?;

        // Schema propagation: retry USE until the space is visible.
        let mut last_err = None;
        for _ in 0..USE_ATTEMPTS {
            match session.use_space(&name).await {
                Ok(()) => return Ok(Self { name }),
                Err(err) => {
                    last_err = Some(err);
                    tokio::time::sleep(USE_RETRY_DELAY).await;
                }
            }
        }
        Err(last_err.unwrap_or_else(|| {
            Error::Fixture(format!("space `{}` never became usable", name.as_str()))
        }))
    }

    /// The generated space name.
    #[must_use]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Drop the space and verify it is gone.
    pub async fn teardown(self, session: &GatewaySession) -> Result<()> {
        session.drop_space(&self.name).await?;
        let remaining = session.show_spaces().await?;
        if remaining.iter().any(|space| space.as_str() == self.name.as_str()) {
            return Err(Error::Fixture(format!(
                "space `{}` still present after drop",
                self.name.as_str()
            )));
        }
        Ok(())
    }
}

/// A random space name: one letter, then letters and digits.
///
/// The leading letter keeps the name a valid identifier.
fn random_name() -> String {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut name = String::with_capacity(NAME_LEN);
    name.push(char::from(LETTERS[fastrand::usize(..LETTERS.len())]));
    for _ in 1..NAME_LEN {
        name.push(char::from(ALNUM[fastrand::usize(..ALNUM.len())]));
    }
    name
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_names_are_valid_identifiers() {
        for _ in 0..100 {
            let name = random_name();
            assert_eq!(name.len(), NAME_LEN);
            assert!(Identifier::new(name).is_ok());
        }
    }

    #[test]
    fn random_names_vary() {
        let a = random_name();
        let b = random_name();
        // Two 36^10 draws colliding means the generator is broken.
        assert_ne!(a, b);
    }
}
