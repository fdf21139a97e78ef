// src/quiz/timer.rs

use std::sync::Arc;
use std::time::Duration;

use tokio::{sync::Mutex, task::JoinHandle};

/// Receiver of countdown ticks.
pub trait Countdown: Send + 'static {
    /// Called once per period for the question at `index`.
    /// Returning `false` ends the countdown.
    fn on_tick(&mut self, index: usize) -> bool;
}

/// Owns at most one running countdown task.
///
/// Starting a countdown aborts the previous one, so two questions can never
/// tick at the same time.
#[derive(Debug, Default)]
pub struct QuestionTimer {
    handle: Option<JoinHandle<()>>,
}

impl QuestionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<T: Countdown>(&mut self, target: Arc<Mutex<T>>, index: usize, period: Duration) {
        self.stop();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut guard = target.lock().await;
                if !guard.on_tick(index) {
                    break;
                }
            }
        });

        self.handle = Some(handle);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
