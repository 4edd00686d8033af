//! Appending apps to a tenant's sequence.

use chrono::Utc;

use crate::model::App;

/// Source of `created_at` timestamps.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Push a new app at the end of `apps` and return the stored record.
///
/// Ids are not checked for uniqueness. A duplicate id is accepted, but
/// lookups and cursors keep resolving to the earlier app.
pub fn append_app(
    apps: &mut Vec<App>,
    app_id: impl Into<String>,
    created_by: impl Into<String>,
    clock: &dyn Clock,
) -> App {
    let app = App::new(app_id, created_by, clock.now_millis());
    apps.push(app.clone());
    app
}
