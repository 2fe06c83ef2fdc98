//! In-memory onboarding form sessions
//!
//! Each open onboarding page owns one [`OnboardingForm`], keyed by a
//! random session id. A session lives until it is deleted, until it sits
//! untouched for longer than the idle timeout, or until the process exits;
//! nothing is persisted. A form that is being submitted is never evicted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::{interval, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use artistly_common::onboarding::{FormStatus, OnboardingForm};

use crate::error::{ApiError, ApiResult};

/// Idle time after which an abandoned form is discarded
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct SessionEntry {
    form: OnboardingForm,
    last_touched: Instant,
}

impl SessionEntry {
    fn is_idle(&self, now: Instant, idle_timeout: Duration) -> bool {
        self.form.status() != FormStatus::Submitting
            && now.duration_since(self.last_touched) > idle_timeout
    }
}

#[derive(Clone)]
pub struct FormSessions {
    forms: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    idle_timeout: Duration,
}

impl Default for FormSessions {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl FormSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            forms: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Open a fresh form at step 1, discarding idle sessions first
    pub async fn create(&self) -> (Uuid, OnboardingForm) {
        let session_id = Uuid::new_v4();
        let form = OnboardingForm::new();
        let now = Instant::now();

        let mut forms = self.forms.write().await;
        let evicted = evict_idle(&mut forms, now, self.idle_timeout);
        if evicted > 0 {
            debug!(evicted, "Discarded idle onboarding sessions");
        }
        forms.insert(
            session_id,
            SessionEntry {
                form: form.clone(),
                last_touched: now,
            },
        );
        (session_id, form)
    }

    /// Copy of the current form state; counts as activity
    pub async fn get(&self, session_id: Uuid) -> ApiResult<OnboardingForm> {
        let mut forms = self.forms.write().await;
        let entry = live_entry(&mut forms, session_id, self.idle_timeout)?;
        Ok(entry.form.clone())
    }

    /// Run `op` against the form under the write lock
    ///
    /// State changes made by `op` are kept even when it returns an error,
    /// so failed validation still records its field messages.
    pub async fn update<T>(
        &self,
        session_id: Uuid,
        op: impl FnOnce(&mut OnboardingForm) -> artistly_common::Result<T>,
    ) -> ApiResult<T> {
        let mut forms = self.forms.write().await;
        let entry = live_entry(&mut forms, session_id, self.idle_timeout)?;
        op(&mut entry.form).map_err(ApiError::from)
    }

    pub async fn remove(&self, session_id: Uuid) -> ApiResult<()> {
        self.forms
            .write()
            .await
            .remove(&session_id)
            .map(|_| ())
            .ok_or_else(|| not_found(session_id))
    }

    /// Discard every idle session, returning how many were dropped
    pub async fn evict_idle(&self) -> usize {
        let mut forms = self.forms.write().await;
        evict_idle(&mut forms, Instant::now(), self.idle_timeout)
    }

    /// Sweep idle sessions every `period`; runs until the task is dropped
    pub async fn sweep_idle(self, period: Duration) {
        let mut tick = interval(period);
        loop {
            tick.tick().await;
            let evicted = self.evict_idle().await;
            if evicted > 0 {
                let remaining = self.len().await;
                info!(evicted, remaining, "Discarded idle onboarding sessions");
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.forms.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn evict_idle(forms: &mut HashMap<Uuid, SessionEntry>, now: Instant, idle_timeout: Duration) -> usize {
    let before = forms.len();
    forms.retain(|_, entry| !entry.is_idle(now, idle_timeout));
    before - forms.len()
}

/// Entry for `session_id`, touched; an expired entry is dropped and reported missing
fn live_entry(
    forms: &mut HashMap<Uuid, SessionEntry>,
    session_id: Uuid,
    idle_timeout: Duration,
) -> ApiResult<&mut SessionEntry> {
    let now = Instant::now();
    if forms
        .get(&session_id)
        .is_some_and(|entry| entry.is_idle(now, idle_timeout))
    {
        forms.remove(&session_id);
        debug!(session_id = %session_id, "Onboarding session expired");
    }
    let entry = forms.get_mut(&session_id).ok_or_else(|| not_found(session_id))?;
    entry.last_touched = now;
    Ok(entry)
}

fn not_found(session_id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Onboarding session not found: {}", session_id))
}
