use serde::{Deserialize, Serialize};

/// Root of the dataset: every tenant served by this process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infra {
    /// Carried through from storage; no operation reads it.
    #[serde(default)]
    pub block_traffic: bool,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    /// Insertion order is pagination order.
    #[serde(default)]
    pub apps: Vec<App>,
}

impl Tenant {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            apps: Vec::new(),
        }
    }

    pub fn with_apps(mut self, apps: Vec<App>) -> Self {
        self.apps = apps;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub created_by: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl App {
    pub fn new(id: impl Into<String>, created_by: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            created_by: created_by.into(),
            created_at,
        }
    }
}

/// One slice of a tenant's app sequence plus the cursor to resume from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Number of apps actually returned.
    pub count: usize,
    pub results: Vec<App>,
    /// Id of the last app in `results`, or empty when `results` is empty.
    pub cursor: String,
}

impl Page {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_results(results: Vec<App>) -> Self {
        let cursor = results
            .last()
            .map(|app| app.id.clone())
            .unwrap_or_default();

        Self {
            count: results.len(),
            results,
            cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
