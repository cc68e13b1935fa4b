use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use goose::metrics::GooseMetrics;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSummary {
    pub label: String,
    pub successes: usize,
    pub failures: usize,
}

impl EndpointSummary {
    pub fn total(&self) -> usize {
        self.successes + self.failures
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub host: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub endpoints: Vec<EndpointSummary>,
    pub failure_ratio: f64,
}

impl RunSummary {
    /// Rows sharing a label are merged; output is ordered by label.
    pub fn new(
        host: &str,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        rows: impl IntoIterator<Item = EndpointSummary>,
    ) -> Self {
        let mut merged: BTreeMap<String, EndpointSummary> = BTreeMap::new();
        for row in rows {
            let entry = merged
                .entry(row.label.clone())
                .or_insert_with(|| EndpointSummary {
                    label: row.label.clone(),
                    successes: 0,
                    failures: 0,
                });
            entry.successes += row.successes;
            entry.failures += row.failures;
        }

        let endpoints: Vec<EndpointSummary> = merged.into_values().collect();
        let total: usize = endpoints.iter().map(EndpointSummary::total).sum();
        let failures: usize = endpoints.iter().map(|e| e.failures).sum();
        let failure_ratio = if total > 0 {
            failures as f64 / total as f64
        } else {
            0.0
        };

        Self {
            host: host.to_string(),
            started_at,
            finished_at,
            endpoints,
            failure_ratio,
        }
    }

    pub fn from_metrics(
        host: &str,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        metrics: &GooseMetrics,
    ) -> Self {
        let rows = metrics.requests.values().map(|aggregate| EndpointSummary {
            label: aggregate.path.clone(),
            successes: aggregate.success_count,
            failures: aggregate.fail_count,
        });
        Self::new(host, started_at, finished_at, rows)
    }

    pub fn endpoint(&self, label: &str) -> Option<&EndpointSummary> {
        self.endpoints.iter().find(|e| e.label == label)
    }

    pub fn total_requests(&self) -> usize {
        self.endpoints.iter().map(EndpointSummary::total).sum()
    }

    pub fn log(&self) {
        tracing::info!(
            "📊 {} requests against {} in {}s, failure ratio {:.2}%",
            self.total_requests(),
            self.host,
            (self.finished_at - self.started_at).num_seconds(),
            self.failure_ratio * 100.0
        );
        for endpoint in &self.endpoints {
            if endpoint.failures > 0 {
                tracing::warn!(
                    "  {}: {} ok, {} failed",
                    endpoint.label,
                    endpoint.successes,
                    endpoint.failures
                );
            } else {
                tracing::info!("  {}: {} ok", endpoint.label, endpoint.successes);
            }
        }
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(label: &str, successes: usize, failures: usize) -> EndpointSummary {
        EndpointSummary {
            label: label.to_string(),
            successes,
            failures,
        }
    }

    #[test]
    fn test_rows_merge_by_label() {
        let now = Utc::now();
        let summary = RunSummary::new(
            "http://localhost:3000",
            now,
            now,
            vec![
                row("/weather/current/[city]", 90, 10),
                row("/health", 25, 0),
                row("/weather/current/[city]", 0, 0),
                row("/weather/forecast/[city]", 88, 2),
            ],
        );

        assert_eq!(summary.endpoints.len(), 3);
        assert_eq!(summary.endpoints[0].label, "/health");
        let current = summary.endpoint("/weather/current/[city]").unwrap();
        assert_eq!((current.successes, current.failures), (90, 10));
        assert_eq!(summary.total_requests(), 215);
        assert!((summary.failure_ratio - 12.0 / 215.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_run_has_zero_failure_ratio() {
        let now = Utc::now();
        let summary = RunSummary::new("http://localhost:3000", now, now, Vec::new());
        assert_eq!(summary.total_requests(), 0);
        assert_eq!(summary.failure_ratio, 0.0);
    }

    #[test]
    fn test_write_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("summary.json");
        let now = Utc::now();
        let summary = RunSummary::new(
            "http://localhost:3000",
            now,
            now,
            vec![row("/health", 3, 1)],
        );

        summary.write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["host"], "http://localhost:3000");
        assert_eq!(written["endpoints"][0]["label"], "/health");
        assert_eq!(written["endpoints"][0]["failures"], 1);
        assert_eq!(written["failure_ratio"], 0.25);
    }
}
