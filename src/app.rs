use std::future::Future;
use std::time::Duration;

use chrono::Local;
use color_eyre::Result;
use tokio::time::MissedTickBehavior;

use crate::report::Reporter;
use crate::system::sampler::Sampler;

/// Loop state. The monitor runs until the shutdown signal fires, then stops
/// for good; there is no restart path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

pub struct App<S, R> {
    pub sampler: S,
    pub reporter: R,
    pub state: RunState,
    interval: Duration,
}

impl<S: Sampler, R: Reporter> App<S, R> {
    pub fn new(sampler: S, reporter: R, interval: Duration) -> Self {
        App {
            sampler,
            reporter,
            state: RunState::Running,
            interval,
        }
    }

    /// Drives sample/display/log cycles, one per interval tick, until
    /// `shutdown` resolves. The signal is only checked between cycles; a
    /// cycle that has started always runs to completion. The first cycle
    /// fires immediately.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) -> Result<()> {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut shutdown = std::pin::pin!(shutdown);

        while self.state == RunState::Running {
            tokio::select! {
                biased;
                _ = &mut shutdown => self.state = RunState::Stopped,
                _ = ticker.tick() => self.cycle().await?,
            }
        }

        self.reporter.shutdown()
    }

    async fn cycle(&mut self) -> Result<()> {
        let bundle = match self.sampler.sample().await {
            Ok(bundle) => bundle,
            Err(err) => {
                // Sampling failures are fatal; leave an ERROR record behind
                // even if the log write itself also fails.
                let _ = self.reporter.fatal(&err.to_string());
                return Err(err);
            }
        };
        self.reporter.display(&bundle, Local::now())?;
        self.reporter.log(&bundle)?;
        Ok(())
    }
}
