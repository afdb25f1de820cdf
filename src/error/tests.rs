//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleeper_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let sleeper_error = SleeperError::from(reqwest_error);

        match sleeper_error {
            SleeperError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let sleeper_error = SleeperError::from(json_error);

        match sleeper_error {
            SleeperError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sleeper_error = SleeperError::from(io_error);

        match sleeper_error {
            SleeperError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::QueryReturnedNoRows;
        let sleeper_error = SleeperError::from(db_error);

        match sleeper_error {
            SleeperError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_schedule_error_conversion() {
        use std::str::FromStr;

        let cron_error = cron::Schedule::from_str("not a cron line").unwrap_err();
        let sleeper_error = SleeperError::from(cron_error);

        match sleeper_error {
            SleeperError::Schedule(_) => (),
            _ => panic!("Expected Schedule error variant"),
        }
    }

    #[test]
    fn test_poison_error_conversion() {
        use std::sync::{Arc, Mutex};

        let lock = Arc::new(Mutex::new(0));
        let poisoner = Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let sleeper_error = SleeperError::from(lock.lock().unwrap_err());
        match sleeper_error {
            SleeperError::StoreUnavailable { message } => assert!(message.contains("poisoned")),
            _ => panic!("Expected StoreUnavailable error variant"),
        }
    }
}

#[cfg(test)]
mod error_display_tests {
    use super::*;

    #[test]
    fn test_unexpected_feed_display() {
        let error = SleeperError::UnexpectedFeed {
            feed: "players/nfl".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Sleeper feed players/nfl was not a JSON object keyed by player ID"
        );
    }

    #[test]
    fn test_store_unavailable_display() {
        let error = SleeperError::StoreUnavailable {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Player store unavailable: lock poisoned");
    }

    #[test]
    fn test_no_data_dir_display() {
        let error = SleeperError::NoDataDir;
        assert_eq!(
            error.to_string(),
            "Could not determine a location for the player database"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SleeperError>();
    }
}
