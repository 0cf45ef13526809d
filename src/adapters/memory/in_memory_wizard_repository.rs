//! In-memory wizard repository.
//!
//! Holds exactly one wizard for the lifetime of the process. Restarting
//! the process starts over with an empty wizard.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::verdict::DecisionPolicy;
use crate::domain::wizard::Wizard;
use crate::ports::{WizardMutation, WizardRepository, WizardUpdate, WizardUpdateError};

/// Single-wizard store backed by a tokio `RwLock`.
#[derive(Debug, Clone)]
pub struct InMemoryWizardRepository {
    wizard: Arc<RwLock<Wizard>>,
}

impl InMemoryWizardRepository {
    /// Creates a store holding an empty wizard under the given policy.
    pub fn new(policy: DecisionPolicy) -> Self {
        Self::with_wizard(Wizard::new(policy))
    }

    /// Creates a store holding the given wizard.
    pub fn with_wizard(wizard: Wizard) -> Self {
        Self {
            wizard: Arc::new(RwLock::new(wizard)),
        }
    }
}

impl Default for InMemoryWizardRepository {
    fn default() -> Self {
        Self::new(DecisionPolicy::default())
    }
}

#[async_trait]
impl WizardRepository for InMemoryWizardRepository {
    async fn load(&self) -> Result<Wizard, DomainError> {
        Ok(self.wizard.read().await.clone())
    }

    async fn update(&self, mutation: WizardMutation) -> Result<WizardUpdate, WizardUpdateError> {
        // The write guard spans the whole read-modify-write.
        let mut stored = self.wizard.write().await;
        let mut draft = stored.clone();
        let applied = mutation(&mut draft)?;
        if applied {
            *stored = draft;
        }
        Ok(WizardUpdate {
            wizard: stored.clone(),
            applied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::{Motive, WizardError, WizardOperation, WizardStep};
    use std::time::Duration;

    fn mutation(
        f: impl FnOnce(&mut Wizard) -> Result<bool, WizardError> + Send + 'static,
    ) -> WizardMutation {
        Box::new(f)
    }

    #[tokio::test]
    async fn load_returns_empty_wizard_initially() {
        let repo = InMemoryWizardRepository::default();
        let wizard = repo.load().await.unwrap();
        assert_eq!(wizard.step(), WizardStep::Input);
        assert!(wizard.verdict().is_none());
    }

    #[tokio::test]
    async fn update_stores_applied_change() {
        let repo = InMemoryWizardRepository::default();
        let update = repo
            .update(mutation(|w| w.set_item("kettle").map(|_| true)))
            .await
            .unwrap();

        assert!(update.applied);
        assert_eq!(update.wizard.answers().item(), "kettle");
        assert_eq!(repo.load().await.unwrap().answers().item(), "kettle");
    }

    #[tokio::test]
    async fn unapplied_change_is_discarded() {
        let repo = InMemoryWizardRepository::default();
        let update = repo
            .update(mutation(|w| {
                w.set_item("kettle")?;
                Ok(false)
            }))
            .await
            .unwrap();

        assert!(!update.applied);
        assert_eq!(update.wizard.answers().item(), "");
        assert_eq!(repo.load().await.unwrap().answers().item(), "");
    }

    #[tokio::test]
    async fn rejected_change_is_discarded() {
        let repo = InMemoryWizardRepository::default();
        let err = repo
            .update(mutation(|w| {
                w.set_item("kettle")?;
                w.decide()?;
                Ok(true)
            }))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WizardUpdateError::Rejected(WizardError::WrongStep {
                operation: WizardOperation::Decide,
                ..
            })
        ));
        assert_eq!(repo.load().await.unwrap().answers().item(), "");
    }

    #[tokio::test]
    async fn clones_share_the_same_wizard() {
        let repo = InMemoryWizardRepository::default();
        let other = repo.clone();
        repo.update(mutation(|w| w.set_price("42").map(|_| true)))
            .await
            .unwrap();

        assert_eq!(other.load().await.unwrap().answers().price().value(), 42.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_to_different_answers_all_survive() {
        let repo = InMemoryWizardRepository::default();

        let item = {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.update(mutation(|w| {
                    // hold the critical section long enough to overlap
                    std::thread::sleep(Duration::from_millis(20));
                    w.set_item("sneakers").map(|_| true)
                }))
                .await
            })
        };
        let price = {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.update(mutation(|w| w.set_price("199").map(|_| true)))
                    .await
            })
        };
        let motive = {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.update(mutation(|w| w.select_motive(Motive::A1).map(|_| true)))
                    .await
            })
        };

        item.await.unwrap().unwrap();
        price.await.unwrap().unwrap();
        motive.await.unwrap().unwrap();

        let wizard = repo.load().await.unwrap();
        assert_eq!(wizard.answers().item(), "sneakers");
        assert_eq!(wizard.answers().price().value(), 199.0);
        assert_eq!(wizard.answers().motive(), Some(Motive::A1));
        assert!(wizard.can_advance());
    }

    #[tokio::test]
    async fn new_uses_given_policy() {
        let policy = DecisionPolicy::new(50.0, 500.0).unwrap();
        let repo = InMemoryWizardRepository::new(policy);
        assert_eq!(repo.load().await.unwrap().policy(), &policy);
    }
}
