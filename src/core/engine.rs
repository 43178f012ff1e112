use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        // stdout 保留給 HTML 片段，進度一律走日誌
        tracing::info!("Starting conversion...");

        tracing::info!("Reading input...");
        let records = self.pipeline.extract()?;
        tracing::info!("📊 Parsed {} records", records.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Rendering fragment...");
        let result = self.pipeline.transform(records)?;
        tracing::info!("📊 Rendered {} list items", result.record_count);
        self.monitor.log_stats("Transform");

        tracing::info!("Writing output...");
        let destination = self.pipeline.load(result)?;
        tracing::info!("Fragment written to: {}", destination);
        self.monitor.log_final_stats();

        Ok(destination)
    }
}
