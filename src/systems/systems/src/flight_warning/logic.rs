//! The logic nodes found on the FWC sheets. Every node owns its own state and is advanced once per
//! tick with the elapsed time, so their timing does not depend on the tick rate.

use std::time::Duration;

/// A confirmation node only passes its input through once it has been stable for the configured
/// time. A leading edge node delays the rising edge and drops instantly, a falling edge node delays
/// the falling edge and rises instantly.
#[derive(Clone, Debug)]
pub struct ConfirmationNode {
    leading_edge: bool,
    time_delay: Duration,
    condition_met_for: Duration,
    output: bool,
}

impl ConfirmationNode {
    pub fn new(leading_edge: bool, time_delay: Duration) -> Self {
        Self {
            leading_edge,
            time_delay,
            condition_met_for: Duration::ZERO,
            output: false,
        }
    }

    pub fn new_leading(time_delay: Duration) -> Self {
        Self::new(true, time_delay)
    }

    pub fn new_falling(time_delay: Duration) -> Self {
        Self::new(false, time_delay)
    }

    /// Sets the output the node reports before its first update.
    pub fn with_initial_output(mut self, output: bool) -> Self {
        self.output = output;
        self
    }

    pub fn update(&mut self, value: bool, delta: Duration) -> bool {
        if self.leading_edge {
            if value {
                self.condition_met_for += delta;
                self.output = self.condition_met_for >= self.time_delay;
            } else {
                self.condition_met_for = Duration::ZERO;
                self.output = false;
            }
        } else if value {
            self.condition_met_for = Duration::ZERO;
            self.output = true;
        } else if self.output {
            self.condition_met_for += delta;
            self.output = self.condition_met_for < self.time_delay;
        }

        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

/// A set/reset latch. Which input wins when both are asserted is fixed per instance.
#[derive(Clone, Debug)]
pub struct MemoryNode {
    has_set_priority: bool,
    output: bool,
}

impl MemoryNode {
    pub fn new(has_set_priority: bool) -> Self {
        Self::new_with_value(has_set_priority, false)
    }

    pub fn new_with_value(has_set_priority: bool, output: bool) -> Self {
        Self {
            has_set_priority,
            output,
        }
    }

    pub fn update(&mut self, set: bool, reset: bool) -> bool {
        self.output = if self.has_set_priority {
            set || (!reset && self.output)
        } else {
            !reset && (set || self.output)
        };
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

/// Emits true for exactly one update when its input changes in the configured direction.
#[derive(Clone, Debug)]
pub struct PulseNode {
    rising_edge: bool,
    last_value: bool,
    output: bool,
}

impl PulseNode {
    pub fn new(rising_edge: bool) -> Self {
        Self {
            rising_edge,
            last_value: false,
            output: false,
        }
    }

    pub fn new_leading() -> Self {
        Self::new(true)
    }

    pub fn new_falling() -> Self {
        Self::new(false)
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.output = if self.rising_edge {
            value && !self.last_value
        } else {
            !value && self.last_value
        };
        self.last_value = value;
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

/// Once triggered by an edge, the output stays true for the configured duration regardless of the
/// input. A retriggerable node restarts its duration on every edge, otherwise edges are ignored
/// while the output is active.
#[derive(Clone, Debug)]
pub struct MonostableTriggerNode {
    pulse: PulseNode,
    retriggerable: bool,
    duration: Duration,
    remaining: Duration,
}

impl MonostableTriggerNode {
    pub fn new(rising_edge: bool, duration: Duration) -> Self {
        Self {
            pulse: PulseNode::new(rising_edge),
            retriggerable: false,
            duration,
            remaining: Duration::ZERO,
        }
    }

    pub fn new_retriggerable(rising_edge: bool, duration: Duration) -> Self {
        Self {
            retriggerable: true,
            ..Self::new(rising_edge, duration)
        }
    }

    pub fn new_leading(duration: Duration) -> Self {
        Self::new(true, duration)
    }

    pub fn new_falling(duration: Duration) -> Self {
        Self::new(false, duration)
    }

    pub fn update(&mut self, value: bool, delta: Duration) -> bool {
        let triggered = self.pulse.update(value);
        if triggered && (self.retriggerable || self.remaining.is_zero()) {
            self.remaining = self.duration;
        } else {
            self.remaining = self.remaining.saturating_sub(delta);
        }
        self.output()
    }

    pub fn output(&self) -> bool {
        !self.remaining.is_zero()
    }
}

/// A free running oscillator that toggles its output every period.
#[derive(Clone, Debug)]
pub struct ClockNode {
    period: Duration,
    elapsed: Duration,
    output: bool,
}

impl ClockNode {
    pub fn new(period: Duration, initial: bool) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            output: initial,
        }
    }

    pub fn update(&mut self, delta: Duration) -> bool {
        if self.period.is_zero() {
            return self.output;
        }

        self.elapsed += delta;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            self.output = !self.output;
        }
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

/// Delays a value by one update.
#[derive(Clone, Debug, Default)]
pub struct PreceedingValueNode<T> {
    value: T,
}

impl<T: Copy + Default> PreceedingValueNode<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_value(value: T) -> Self {
        Self { value }
    }

    /// Stores the new value and returns the one stored by the previous update.
    pub fn update(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }
}
