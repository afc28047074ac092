use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

// What paces the live ticker. `wait_tick` blocks until the next tick is due
// and returns false once `cancel` fires or disconnects.
pub trait Clock: Clone + Send + 'static {
    fn wait_tick(&mut self, interval: Duration, cancel: &Receiver<()>) -> bool;
}

// Wall clock. Deadlines are absolute, so a late tick doesn't push every
// following tick late.
#[derive(Clone, Debug, Default)]
pub struct SystemClock {
    next: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn wait_tick(&mut self, interval: Duration, cancel: &Receiver<()>) -> bool {
        let now = Instant::now();
        let deadline = match self.next {
            // more than a whole tick behind: resync instead of bursting
            Some(prev) if prev + interval + interval < now => now,
            Some(prev) => prev + interval,
            None => now + interval,
        };
        self.next = Some(deadline);
        match cancel.recv_deadline(deadline) {
            Err(RecvTimeoutError::Timeout) => true,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}

// Test clock: a tick happens only when the handle hands one out.
#[derive(Clone, Debug)]
pub struct ManualClock {
    permits: Receiver<()>,
}

#[derive(Clone, Debug)]
pub struct ManualClockHandle {
    tx: Sender<()>,
}

impl ManualClock {
    pub fn new() -> (Self, ManualClockHandle) {
        let (tx, permits) = crossbeam_channel::unbounded();
        (Self { permits }, ManualClockHandle { tx })
    }
}

impl ManualClockHandle {
    pub fn advance(&self, ticks: usize) {
        for _ in 0..ticks {
            let _ = self.tx.send(());
        }
    }
}

impl Clock for ManualClock {
    fn wait_tick(&mut self, _interval: Duration, cancel: &Receiver<()>) -> bool {
        crossbeam_channel::select! {
            recv(cancel) -> _ => false,
            recv(self.permits) -> permit => permit.is_ok(),
        }
    }
}
