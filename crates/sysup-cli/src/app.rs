//! Drive loop: refresh the index, list upgradable packages, upgrade

use sysup_pkg::error::PackageError;
use sysup_pkg::traits::PackageManager;

/// How a run ended when no phase failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The upgradable list was empty
    NothingToDo,
    /// These packages were upgraded
    Upgraded(Vec<String>),
}

/// Run one refresh, list, upgrade cycle against the given manager.
///
/// A failure in any phase aborts before the next phase runs.
pub async fn run(manager: &dyn PackageManager) -> Result<Outcome, PackageError> {
    println!("Updating local cache...");
    manager.refresh_index().await?;

    println!("Getting the list of upgradable packages...");
    let packages = manager.list_upgradable().await?;

    if packages.is_empty() {
        println!("Nothing to update!");
        return Ok(Outcome::NothingToDo);
    }

    println!("Upgrading packages: {packages:?}");
    println!("Upgrading...");
    manager.upgrade_all().await?;

    Ok(Outcome::Upgraded(packages))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sysup_pkg::types::Backend;

    use super::*;

    /// Manager that records which phases ran
    struct MockManager {
        calls: Mutex<Vec<&'static str>>,
        refresh_result: Result<(), PackageError>,
        list_result: Result<Vec<String>, PackageError>,
    }

    impl MockManager {
        fn with_packages(packages: Vec<&str>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                refresh_result: Ok(()),
                list_result: Ok(packages.into_iter().map(String::from).collect()),
            }
        }

        fn failing_refresh(error: PackageError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                refresh_result: Err(error),
                list_result: Ok(Vec::new()),
            }
        }

        fn failing_list(error: PackageError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                refresh_result: Ok(()),
                list_result: Err(error),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PackageManager for MockManager {
        async fn refresh_index(&self) -> Result<(), PackageError> {
            self.calls.lock().unwrap().push("refresh");
            self.refresh_result.clone()
        }

        async fn list_upgradable(&self) -> Result<Vec<String>, PackageError> {
            self.calls.lock().unwrap().push("list");
            self.list_result.clone()
        }

        async fn upgrade_all(&self) -> Result<(), PackageError> {
            self.calls.lock().unwrap().push("upgrade");
            Ok(())
        }

        fn backend(&self) -> Backend {
            Backend::Apt
        }
    }

    fn command_failed() -> PackageError {
        PackageError::CommandFailed {
            backend: Backend::Apt,
            action: "update",
            stderr: "E: Could not connect".to_string(),
        }
    }

    #[tokio::test]
    async fn test_full_run_upgrades_listed_packages() {
        let manager = MockManager::with_packages(vec!["curl", "bash"]);

        let outcome = run(&manager).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Upgraded(vec!["curl".to_string(), "bash".to_string()])
        );
        assert_eq!(manager.calls(), vec!["refresh", "list", "upgrade"]);
    }

    #[tokio::test]
    async fn test_empty_list_skips_upgrade() {
        let manager = MockManager::with_packages(vec![]);

        let outcome = run(&manager).await.unwrap();

        assert_eq!(outcome, Outcome::NothingToDo);
        assert_eq!(manager.calls(), vec!["refresh", "list"]);
    }

    #[tokio::test]
    async fn test_refresh_failure_aborts_before_listing() {
        let manager = MockManager::failing_refresh(command_failed());

        let err = run(&manager).await.unwrap_err();

        assert!(err.to_string().contains("E: Could not connect"));
        assert_eq!(manager.calls(), vec!["refresh"]);
    }

    #[tokio::test]
    async fn test_list_failure_aborts_before_upgrade() {
        let manager = MockManager::failing_list(command_failed());

        run(&manager).await.unwrap_err();

        assert_eq!(manager.calls(), vec!["refresh", "list"]);
    }
}
