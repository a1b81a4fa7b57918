use log::info;
use serde::Serialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Default, Serialize, Clone)]
pub struct TimingMetrics {
    pub input_duration: Option<Duration>,
    pub generation_duration: Option<Duration>,
    pub total_duration: Option<Duration>,
}

#[derive(Default, Serialize, Clone)]
pub struct TelemetryData {
    pub timing: TimingMetrics,
    pub terms_requested: i64,
}

pub struct TelemetryCollector {
    start_time: Instant,
    metrics: Mutex<TelemetryData>,
    enabled: bool,
}

impl TelemetryCollector {
    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            metrics: Mutex::new(TelemetryData::default()),
            enabled,
        }
    }

    pub fn record_input(&self, duration: Duration) {
        if !self.enabled {
            return;
        }
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.timing.input_duration = Some(duration);
        }
    }

    pub fn record_generation(&self, duration: Duration) {
        if !self.enabled {
            return;
        }
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.timing.generation_duration = Some(duration);
        }
    }

    pub fn record_terms_requested(&self, terms: i64) {
        if !self.enabled {
            return;
        }
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.terms_requested = terms;
        }
    }

    pub fn finalize(self) -> Option<TelemetryData> {
        if !self.enabled {
            return None;
        }

        let mut final_metrics = self.metrics.lock().ok()?.clone();
        final_metrics.timing.total_duration = Some(self.start_time.elapsed());

        info!("Telemetry Summary:");
        info!("Terms Requested: {}", final_metrics.terms_requested);
        if let Some(d) = final_metrics.timing.input_duration {
            info!("Input: {:?}", d);
        }
        if let Some(d) = final_metrics.timing.generation_duration {
            info!("Generation: {:?}", d);
        }
        info!(
            "Total Duration: {:?}",
            final_metrics.timing.total_duration.unwrap()
        );

        Some(final_metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_collector_finalizes_to_none() {
        let telemetry = TelemetryCollector::new(false);
        telemetry.record_terms_requested(10);
        assert!(telemetry.finalize().is_none());
    }

    #[test]
    fn enabled_collector_reports_recorded_values() {
        let telemetry = TelemetryCollector::new(true);
        telemetry.record_terms_requested(10);
        telemetry.record_input(Duration::from_millis(5));
        telemetry.record_generation(Duration::from_micros(80));

        let data = telemetry.finalize().unwrap();
        assert_eq!(data.terms_requested, 10);
        assert_eq!(data.timing.input_duration, Some(Duration::from_millis(5)));
        assert_eq!(
            data.timing.generation_duration,
            Some(Duration::from_micros(80))
        );
        assert!(data.timing.total_duration.is_some());
    }

    #[test]
    fn recording_on_a_disabled_collector_is_a_no_op() {
        let telemetry = TelemetryCollector::new(false);
        telemetry.record_input(Duration::from_secs(1));
        telemetry.record_generation(Duration::from_secs(1));
        assert!(telemetry.finalize().is_none());
    }
}
