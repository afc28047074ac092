// Scheduled parameter curves. Mirrors how an AudioParam evaluates its event
// list: events are kept sorted by time, a ramp runs from the previous event's
// value to its own target, anything else holds the last value.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ramp {
    Set,
    Linear,
    Exponential,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutomationEvent {
    pub time: f64,
    pub value: f32,
    pub ramp: Ramp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Automation {
    default: f32, // value before the first event
    events: Vec<AutomationEvent>,
}

impl Automation {
    pub fn new(default: f32) -> Self {
        Self { default, events: Vec::new() }
    }

    pub fn set_value_at(mut self, value: f32, time: f64) -> Self {
        self.insert(AutomationEvent { time, value, ramp: Ramp::Set });
        self
    }

    pub fn linear_ramp_to(mut self, value: f32, time: f64) -> Self {
        self.insert(AutomationEvent { time, value, ramp: Ramp::Linear });
        self
    }

    pub fn exponential_ramp_to(mut self, value: f32, time: f64) -> Self {
        self.insert(AutomationEvent { time, value, ramp: Ramp::Exponential });
        self
    }

    pub fn events(&self) -> &[AutomationEvent] {
        &self.events
    }

    // same-time events keep insertion order
    fn insert(&mut self, event: AutomationEvent) {
        let idx = self.events.partition_point(|e| e.time <= event.time);
        self.events.insert(idx, event);
    }

    pub fn value_at(&self, t: f64) -> f32 {
        let next = self.events.partition_point(|e| e.time <= t);
        // (time, value) the curve is currently coming from
        let (t0, v0) = match next.checked_sub(1) {
            Some(i) => (self.events[i].time, self.events[i].value),
            None => (0.0, self.default),
        };
        let Some(target) = self.events.get(next) else {
            return v0;
        };
        let span = target.time - t0;
        if span <= 0.0 {
            return v0;
        }
        let progress = ((t - t0) / span) as f32;
        match target.ramp {
            Ramp::Set => v0,
            Ramp::Linear => v0 + (target.value - v0) * progress,
            Ramp::Exponential => {
                // undefined for zero or a sign change, hold instead
                if v0 == 0.0 || target.value == 0.0 || (v0 < 0.0) != (target.value < 0.0) {
                    v0
                } else {
                    v0 * (target.value / v0).powf(progress)
                }
            }
        }
    }
}
