use chrono::{DateTime, Duration, NaiveDate, Utc};
use job_agent::listings::{CatalogError, CsvJobSource, FixtureJobSource, JobCatalog, JobSource};
use job_agent::session::{SessionError, SessionIssuer, SessionProvider, SessionToken, User};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog from a CSV export when one is configured, otherwise the
/// built-in fixture.
pub(crate) fn load_catalog(jobs_csv: Option<&Path>) -> Result<JobCatalog, CatalogError> {
    match jobs_csv {
        Some(path) => JobCatalog::load(&CsvJobSource::new(path)),
        None => JobCatalog::load(&FixtureJobSource),
    }
}

struct StoredSession {
    user: User,
    expires_at: DateTime<Utc>,
}

/// Demo session store: tokens live in memory and lapse after a fixed TTL.
#[derive(Clone)]
pub(crate) struct InMemorySessionStore {
    ttl: Duration,
    sessions: Arc<Mutex<HashMap<SessionToken, StoredSession>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemorySessionStore {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            sequence: Arc::new(AtomicU64::new(1)),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, HashMap<SessionToken, StoredSession>>, SessionError> {
        self.sessions
            .lock()
            .map_err(|_| SessionError::Unavailable("session store mutex poisoned".to_string()))
    }

    fn next_token(&self) -> SessionToken {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let stamp = Utc::now().timestamp_micros();
        SessionToken(format!("sess-{stamp:x}-{sequence:04x}"))
    }
}

impl SessionProvider for InMemorySessionStore {
    fn current_user(&self, token: &SessionToken) -> Result<Option<User>, SessionError> {
        let mut guard = self.guard()?;
        let Some(stored) = guard.get(token) else {
            return Ok(None);
        };
        if Utc::now() >= stored.expires_at {
            guard.remove(token);
            return Err(SessionError::Expired);
        }
        Ok(Some(stored.user.clone()))
    }

    fn logout(&self, token: &SessionToken) -> Result<(), SessionError> {
        self.guard()?.remove(token);
        Ok(())
    }
}

impl SessionIssuer for InMemorySessionStore {
    /// Drops lapsed sessions before storing the new one.
    fn sign_in(&self, user: User) -> Result<SessionToken, SessionError> {
        let user = user.validated()?;
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            SessionError::Unavailable("session TTL exceeds the supported date range".to_string())
        })?;
        let token = self.next_token();

        let mut guard = self.guard()?;
        guard.retain(|_, stored| stored.expires_at > now);
        guard.insert(token.clone(), StoredSession { user, expires_at });
        Ok(token)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
