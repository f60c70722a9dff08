//! Named countdown timers shared by every behavior state.

/// Timer names carried by each enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cooldown {
    /// Delay between the end of one attack and the start of the next.
    Attack,
    /// Delay between dashes, armed when a dash starts.
    Dash,
    /// Minimum time between patrol reversals.
    TurnDebounce,
    /// Delay between contact damage hits.
    DamageTick,
    /// Remaining hit-stun.
    Stun,
}

impl Cooldown {
    pub const ALL: [Cooldown; 5] = [
        Cooldown::Attack,
        Cooldown::Dash,
        Cooldown::TurnDebounce,
        Cooldown::DamageTick,
        Cooldown::Stun,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Remaining seconds per [`Cooldown`]. Every timer starts ready.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CooldownSet {
    remaining: [f32; Cooldown::ALL.len()],
}

impl CooldownSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every timer by `dt` seconds, clamping at zero.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        for remaining in &mut self.remaining {
            *remaining = (*remaining - dt).max(0.0);
        }
    }

    /// Arm `name` for `duration` seconds, overwriting whatever was left.
    pub fn start(&mut self, name: Cooldown, duration: f32) {
        self.remaining[name.index()] = duration.max(0.0);
    }

    pub fn is_ready(&self, name: Cooldown) -> bool {
        self.remaining[name.index()] <= 0.0
    }

    pub fn remaining(&self, name: Cooldown) -> f32 {
        self.remaining[name.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_start_ready() {
        let set = CooldownSet::new();
        for name in Cooldown::ALL {
            assert!(set.is_ready(name));
        }
    }

    #[test]
    fn start_overwrites_and_tick_counts_down() {
        let mut set = CooldownSet::new();
        set.start(Cooldown::Attack, 1.0);
        set.start(Cooldown::Attack, 0.5);
        assert_eq!(set.remaining(Cooldown::Attack), 0.5);

        set.tick(0.2);
        assert!(!set.is_ready(Cooldown::Attack));
        assert!((set.remaining(Cooldown::Attack) - 0.3).abs() < 1e-6);

        set.tick(0.3);
        assert!(set.is_ready(Cooldown::Attack));
    }

    #[test]
    fn tick_never_goes_negative() {
        let mut set = CooldownSet::new();
        set.start(Cooldown::Dash, 0.1);
        set.start(Cooldown::Stun, 2.0);
        for _ in 0..50 {
            set.tick(0.07);
            for name in Cooldown::ALL {
                assert!(set.remaining(name) >= 0.0);
            }
        }
        assert_eq!(set.remaining(Cooldown::Dash), 0.0);
        assert_eq!(set.remaining(Cooldown::Stun), 0.0);
    }

    #[test]
    fn timers_are_independent() {
        let mut set = CooldownSet::new();
        set.start(Cooldown::TurnDebounce, 0.4);
        set.start(Cooldown::Attack, 1.0);
        set.tick(0.5);
        assert!(set.is_ready(Cooldown::TurnDebounce));
        assert!(!set.is_ready(Cooldown::Attack));
        assert!(set.is_ready(Cooldown::Dash));
    }
}
