//! Dependency Inversion: depend on abstractions, wire concretes at the top.
//!
//! `BusinessLogic` is handed a [`DataProvider`] through its constructor and
//! never builds one itself. The driver picks `DatabaseProvider`; tests pick
//! whatever they like.

use crate::config::DataSourceConfig;
use crate::console::Console;

#[cfg_attr(test, mockall::automock)]
pub trait DataProvider {
    fn fetch_data(&self) -> String;
}

/// Stand-in for a database-backed repository.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseProvider {
    data: String,
}

impl DatabaseProvider {
    pub fn new(data: impl Into<String>) -> Self {
        DatabaseProvider { data: data.into() }
    }
}

impl Default for DatabaseProvider {
    fn default() -> Self {
        DatabaseProvider::new("Data from database")
    }
}

impl DataProvider for DatabaseProvider {
    fn fetch_data(&self) -> String {
        self.data.clone()
    }
}

pub struct BusinessLogic<P: DataProvider> {
    data_provider: P,
}

impl<P: DataProvider> BusinessLogic<P> {
    pub fn new(provider: P) -> Self {
        BusinessLogic {
            data_provider: provider,
        }
    }

    pub fn retrieve_data(&self) -> String {
        let data = self.data_provider.fetch_data();
        tracing::debug!(bytes = data.len(), "retrieved data");
        data
    }
}

pub const SUMMARY: &str = "BusinessLogic depends on the DataProvider abstraction, \
not on DatabaseProvider. The concrete provider is chosen at the top level and \
injected through the constructor.";

pub fn run(console: &dyn Console, config: &DataSourceConfig) {
    let provider = DatabaseProvider::new(config.database_data.as_str());
    let logic = BusinessLogic::new(provider);
    console.write_line(&format!("Data retrieved: {}", logic.retrieve_data()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_database_provider_literal() {
        let logic = BusinessLogic::new(DatabaseProvider::default());
        assert_eq!(logic.retrieve_data(), "Data from database");
    }

    #[test]
    fn test_substituted_provider_changes_only_value() {
        struct CacheProvider;

        impl DataProvider for CacheProvider {
            fn fetch_data(&self) -> String {
                "Data from cache".to_string()
            }
        }

        assert_eq!(BusinessLogic::new(CacheProvider).retrieve_data(), "Data from cache");
    }

    #[test]
    fn test_consumer_calls_provider_once_per_retrieval() {
        let mut provider = MockDataProvider::new();
        provider
            .expect_fetch_data()
            .times(2)
            .returning(|| "mocked".to_string());

        let logic = BusinessLogic::new(provider);
        assert_eq!(logic.retrieve_data(), "mocked");
        assert_eq!(logic.retrieve_data(), "mocked");
    }

    #[test]
    fn test_driver_output() {
        let transcript = Transcript::new();
        run(&transcript, &DataSourceConfig::default());
        assert_eq!(transcript.lines(), vec!["Data retrieved: Data from database"]);
    }
}
