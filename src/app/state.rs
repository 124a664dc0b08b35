//! Application state management

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::{KeyBindings, Settings};
use crate::data::{DataSource, FetchOutcome, PageQuery};
use crate::db::Database;
use crate::table::Record;

/// Results of background store calls, delivered to the owning tab
#[derive(Debug)]
pub enum ListMessage<R> {
    Loaded {
        generation: u64,
        outcome: FetchOutcome<Vec<R>>,
    },
    Saved {
        outcome: FetchOutcome<R>,
    },
    Deleted {
        outcome: FetchOutcome<usize>,
    },
}

/// Severity of a status-bar notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Central application state
pub struct AppState {
    pub db: Arc<Database>,
    pub settings: Settings,
    pub keys: KeyBindings,
}

impl AppState {
    pub fn new(db: Database, settings: Settings) -> Self {
        Self {
            db: Arc::new(db),
            keys: KeyBindings::with_overrides(&settings.keys),
            settings,
        }
    }

    /// Store handle for one record type
    pub fn source<R>(&self) -> Arc<dyn DataSource<R>>
    where
        R: Record,
        Database: DataSource<R>,
    {
        self.db.clone()
    }
}

/// Fetch a page on the blocking pool and report back on `tx`
pub fn spawn_fetch<R>(
    source: Arc<dyn DataSource<R>>,
    query: PageQuery,
    generation: u64,
    tx: mpsc::Sender<ListMessage<R>>,
) where
    R: Record + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Fetching page {} (generation {})", query.page, generation);
        let outcome = source.fetch_page(&query);
        if tx.blocking_send(ListMessage::Loaded { generation, outcome }).is_err() {
            tracing::debug!("List closed before page {} arrived", query.page);
        }
    });
}

/// Save a record on the blocking pool and report back on `tx`
pub fn spawn_save<R>(source: Arc<dyn DataSource<R>>, record: R, tx: mpsc::Sender<ListMessage<R>>)
where
    R: Record + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let outcome = source.save(&record);
        if tx.blocking_send(ListMessage::Saved { outcome }).is_err() {
            tracing::debug!("List closed before save completed");
        }
    });
}

/// Delete records on the blocking pool and report back on `tx`
pub fn spawn_delete<R>(source: Arc<dyn DataSource<R>>, ids: Vec<R::Id>, tx: mpsc::Sender<ListMessage<R>>)
where
    R: Record + Send + 'static,
    R::Id: Send,
{
    tokio::task::spawn_blocking(move || {
        tracing::info!("Deleting {} record(s)", ids.len());
        let outcome = source.delete_many(&ids);
        if tx.blocking_send(ListMessage::Deleted { outcome }).is_err() {
            tracing::debug!("List closed before delete completed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    #[tokio::test]
    async fn fetch_reports_generation() {
        let state = AppState::new(Database::open(":memory:").unwrap(), Settings::default());
        state.db.seed_demo_data().unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        spawn_fetch::<Employee>(state.source(), PageQuery::new(0, 5, ""), 7, tx);

        match rx.recv().await {
            Some(ListMessage::Loaded { generation, outcome: FetchOutcome::Success { data, total_records } }) => {
                assert_eq!(generation, 7);
                assert_eq!(data.len(), 5);
                assert!(total_records >= 5);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_reports_count() {
        let state = AppState::new(Database::open(":memory:").unwrap(), Settings::default());
        state.db.seed_demo_data().unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        spawn_delete::<Employee>(state.source(), vec![1, 2], tx);

        match rx.recv().await {
            Some(ListMessage::Deleted { outcome: FetchOutcome::Success { data, .. } }) => {
                assert_eq!(data, 2)
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn key_overrides_come_from_settings() {
        let mut settings = Settings::default();
        settings.keys.insert("delete".to_string(), "x".to_string());
        let state = AppState::new(Database::open(":memory:").unwrap(), settings);

        let x = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('x'),
            crossterm::event::KeyModifiers::NONE,
        );
        assert!(state.keys.delete.matches_event(&x));
        assert!(state.keys.quit.matches(crossterm::event::KeyCode::Char('q'), crossterm::event::KeyModifiers::NONE));
    }
}
