//! The global tick loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::observability::metrics::{self, MetricSink};
use crate::probe::{self, ProbeRequest};
use crate::scheduler::state::EndpointState;

/// One scheduled endpoint: its prepared request, its schedule state, and
/// the handle of the probe currently in flight, if any.
struct Entry {
    request: Arc<ProbeRequest>,
    state: EndpointState,
    in_flight: Option<JoinHandle<()>>,
}

/// Drives the global tick and dispatches due probes.
///
/// The tick loop is the sole writer of all schedule state. Probe tasks read
/// their immutable descriptor and emit their result; they never touch the
/// scheduler, so one endpoint's latency or failure cannot delay another's
/// evaluation.
pub struct Scheduler {
    entries: Vec<Entry>,
    client: reqwest::Client,
    sink: Arc<dyn MetricSink>,
    tick_interval: Duration,
}

impl Scheduler {
    /// Create a scheduler from prepared request descriptors and their
    /// effective per-endpoint intervals.
    pub fn new(
        tick_interval: Duration,
        endpoints: Vec<(ProbeRequest, Duration)>,
        client: reqwest::Client,
        sink: Arc<dyn MetricSink>,
    ) -> Self {
        let entries = endpoints
            .into_iter()
            .map(|(request, interval)| Entry {
                request: Arc::new(request),
                state: EndpointState::new(interval),
                in_flight: None,
            })
            .collect();

        Self {
            entries,
            client,
            sink,
            tick_interval,
        }
    }

    pub fn endpoint_count(&self) -> usize {
        self.entries.len()
    }

    /// Run the tick loop until the shutdown signal fires.
    ///
    /// The first tick fires immediately. The loop re-arms at the fixed
    /// cadence without waiting for in-flight probes; a configuration with
    /// zero endpoints simply ticks forever doing nothing.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            endpoints = self.entries.len(),
            tick_ms = self.tick_interval.as_millis() as u64,
            "scheduler starting"
        );

        let mut ticker = time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick(Instant::now());
                }
                _ = shutdown.recv() => {
                    tracing::info!("scheduler received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// One tick: dispatch a probe for every endpoint that is due.
    fn tick(&mut self, now: Instant) {
        for index in self.collect_due(now) {
            self.dispatch(index);
        }
    }

    /// Clear finished probe handles, then mark and collect every endpoint
    /// that should fire at `now`.
    ///
    /// An endpoint with a probe still in flight is never collected, however
    /// overdue: at most one probe per endpoint is outstanding, and a slow
    /// probe pushes the endpoint's next fire later in wall-clock time.
    /// `last_polled_at` is updated here, before dispatch.
    fn collect_due(&mut self, now: Instant) -> Vec<usize> {
        let mut due = Vec::new();

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if let Some(handle) = &entry.in_flight {
                if handle.is_finished() {
                    entry.in_flight = None;
                }
            }
            if entry.in_flight.is_some() || !entry.state.is_due(now) {
                continue;
            }

            entry.state.mark_polled(now);
            due.push(index);
        }

        due
    }

    /// Spawn the probe task for one endpoint. Completion emits exactly one
    /// metric line; nothing propagates back to the tick loop.
    fn dispatch(&mut self, index: usize) {
        let entry = &mut self.entries[index];
        let client = self.client.clone();
        let request = Arc::clone(&entry.request);
        let sink = Arc::clone(&self.sink);

        entry.in_flight = Some(tokio::spawn(async move {
            let result = probe::execute(&client, &request).await;
            metrics::report(sink.as_ref(), &result, request.debug);
        }));
    }
}
