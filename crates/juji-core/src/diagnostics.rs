//! Counting diagnostics: timing and counts for each pipeline stage.
//!
//! These diagnostics are permanent instrumentation intended for
//! inspecting how a stroke script compresses and sweeps. Every call to
//! [`count_staged`](crate::count_staged) collects them alongside the
//! pipeline results.
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since [`std::time::Duration`] does not implement
//! serde traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Diagnostics collected from a single counting run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountDiagnostics {
    /// Stage 1: path tracing.
    pub trace: StageDiagnostics,
    /// Stage 2: coordinate compression.
    pub compress: StageDiagnostics,
    /// Stage 3: row and column sweeps.
    pub sweep: StageDiagnostics,
    /// Stage 4: plus-sign detection.
    pub detect: StageDiagnostics,
    /// Total wall-clock duration of the entire run (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Summary counts across all stages.
    pub summary: CountSummary,
}

/// Diagnostics for a single pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

/// Stage-specific metrics that vary by pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Path tracing metrics.
    Trace {
        /// Strokes in the input script.
        stroke_count: usize,
        /// Strokes that painted at least one cell.
        painted_count: usize,
        /// Events emitted for horizontal segments.
        horizontal_events: usize,
        /// Events emitted for vertical segments.
        vertical_events: usize,
    },
    /// Coordinate compression metrics.
    Compress {
        /// Distinct x coordinates.
        distinct_x: usize,
        /// Distinct y coordinates.
        distinct_y: usize,
    },
    /// Sweep metrics for both orientations.
    Sweep {
        /// Rows with at least one covered cell.
        covered_rows: usize,
        /// Columns with at least one covered cell.
        covered_cols: usize,
        /// Spans across all rows.
        row_spans: usize,
        /// Spans across all columns.
        col_spans: usize,
        /// Covered unit cells across both orientations.
        covered_cells: usize,
    },
    /// Detection metrics.
    Detect {
        /// Plus signs found.
        plus_count: u64,
    },
}

/// High-level summary counts for the entire run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountSummary {
    /// Strokes in the input script.
    pub stroke_count: usize,
    /// Compressed grid width (distinct x coordinates).
    pub distinct_x: usize,
    /// Compressed grid height (distinct y coordinates).
    pub distinct_y: usize,
    /// Plus signs found.
    pub plus_count: u64,
}

impl CountDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Counting Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!(
            "Strokes: {}  |  Compressed grid: {}x{}",
            self.summary.stroke_count, self.summary.distinct_x, self.summary.distinct_y,
        ));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<12} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Details"
        ));
        lines.push("-".repeat(72));

        let total_ms = duration_ms(self.total_duration);
        let stages: [(&str, &StageDiagnostics); 4] = [
            ("Trace", &self.trace),
            ("Compress", &self.compress),
            ("Sweep", &self.sweep),
            ("Detect", &self.detect),
        ];

        for (name, diag) in stages {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let details = format_metrics(&diag.metrics);
            lines.push(format!("{name:<12} {ms:>8.3}ms {pct:>9.1}%  {details}"));
        }

        lines.push(String::new());
        lines.push(format!("Plus signs: {}", self.summary.plus_count));

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Trace {
            stroke_count,
            painted_count,
            horizontal_events,
            vertical_events,
        } => {
            format!(
                "{painted_count}/{stroke_count} strokes painted, events h={horizontal_events} v={vertical_events}",
            )
        }
        StageMetrics::Compress {
            distinct_x,
            distinct_y,
        } => format!("grid {distinct_x}x{distinct_y}"),
        StageMetrics::Sweep {
            covered_rows,
            covered_cols,
            row_spans,
            col_spans,
            covered_cells,
        } => {
            format!(
                "{covered_rows} rows ({row_spans} spans), {covered_cols} cols ({col_spans} spans), {covered_cells} cells",
            )
        }
        StageMetrics::Detect { plus_count } => format!("{plus_count} plus signs"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> CountDiagnostics {
        CountDiagnostics {
            trace: StageDiagnostics {
                duration: Duration::from_micros(120),
                metrics: StageMetrics::Trace {
                    stroke_count: 9,
                    painted_count: 9,
                    horizontal_events: 10,
                    vertical_events: 8,
                },
            },
            compress: StageDiagnostics {
                duration: Duration::from_micros(40),
                metrics: StageMetrics::Compress {
                    distinct_x: 6,
                    distinct_y: 7,
                },
            },
            sweep: StageDiagnostics {
                duration: Duration::from_micros(80),
                metrics: StageMetrics::Sweep {
                    covered_rows: 3,
                    covered_cols: 4,
                    row_spans: 5,
                    col_spans: 6,
                    covered_cells: 11,
                },
            },
            detect: StageDiagnostics {
                duration: Duration::from_micros(60),
                metrics: StageMetrics::Detect { plus_count: 4 },
            },
            total_duration: Duration::from_micros(300),
            summary: CountSummary {
                stroke_count: 9,
                distinct_x: 6,
                distinct_y: 7,
                plus_count: 4,
            },
        }
    }

    #[test]
    fn duration_ms_converts_correctly() {
        assert!((duration_ms(Duration::from_millis(1234)) - 1234.0).abs() < 0.01);
    }

    #[test]
    fn report_produces_stage_lines() {
        let report = sample().report();
        assert!(report.contains("Counting Diagnostics Report"));
        assert!(report.contains("Trace"));
        assert!(report.contains("Sweep"));
        assert!(report.contains("Plus signs: 4"));
    }

    #[test]
    fn diagnostics_serde_round_trip() {
        let diag = sample();
        let json = serde_json::to_string(&diag).unwrap();
        let back: CountDiagnostics = serde_json::from_str(&json).unwrap();
        assert_eq!(back.summary.plus_count, 4);
        assert_eq!(back.total_duration, Duration::from_micros(300));
    }

    #[test]
    fn durations_serialize_as_seconds() {
        let diag = sample();
        let value = serde_json::to_value(&diag).unwrap();
        let total = value["total_duration"].as_f64().unwrap();
        assert!((total - 0.0003).abs() < 1e-9);
    }
}
