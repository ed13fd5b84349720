use crate::domain::ports::Stage;
use crate::utils::monitor::StageMonitor;
use anyhow::Context;

/// Runs pipeline stages one after another, all-or-nothing per stage.
pub struct StageRunner {
    monitor: StageMonitor,
}

impl StageRunner {
    pub fn new() -> Self {
        Self::new_with_monitoring(false)
    }

    pub fn new_with_monitoring(enabled: bool) -> Self {
        Self {
            monitor: StageMonitor::new(enabled),
        }
    }

    pub fn run_stage(&self, stage: &dyn Stage) -> anyhow::Result<()> {
        let name = stage.name();
        tracing::info!(">>>>>> stage {} started <<<<<<", name);

        if let Err(e) = stage.run() {
            tracing::error!("stage {} failed: {:?}", name, e);
            return Err(e).with_context(|| format!("stage {} failed", name));
        }

        self.monitor.log_stats(name);
        tracing::info!(">>>>>> stage {} completed <<<<<<\n\nx==========x", name);
        Ok(())
    }

    /// Stops at the first failing stage; later stages never start.
    pub fn run_all(&self, stages: &[Box<dyn Stage>]) -> anyhow::Result<()> {
        for stage in stages {
            self.run_stage(stage.as_ref())?;
        }
        Ok(())
    }
}

impl Default for StageRunner {
    fn default() -> Self {
        Self::new()
    }
}
