//! Combat resolution: attack phases, hit tests, incoming damage, stun and death.

use bevy::log::{debug, info};
use rand::Rng;

use super::cooldown::Cooldown;
use super::engine::{halt, AttackAction, AiState, BehaviorEngine, DeathCountdown, TickContext};
use super::intent::{Cue, Intent, SignalSink};

/// What an [`BehaviorEngine::apply_damage`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Non-positive amount, or the enemy was already dead.
    Ignored,
    /// Health dropped; the enemy keeps doing what it was doing.
    Wounded,
    /// Health dropped and the enemy is (or will be, once its swing lands) in hit-stun.
    Stunned,
    Killed,
}

impl BehaviorEngine {
    /// External damage entry point.
    ///
    /// Hits arriving after death or with a non-positive amount are dropped
    /// silently; combat code routinely over-applies hits across frames.
    pub fn apply_damage(&mut self, amount: i32, sink: &mut dyn SignalSink) -> DamageOutcome {
        if amount <= 0 || self.is_dead() {
            return DamageOutcome::Ignored;
        }

        self.health = self.health.saturating_sub(amount);
        if self.health <= 0 {
            self.die(sink);
            return DamageOutcome::Killed;
        }

        if self.state == AiState::Dormant {
            self.enter(AiState::Patrol);
            sink.emit(Intent::Cue(Cue::Wake));
        }

        let capabilities = self.config.capabilities;
        if capabilities.contact_damage_only {
            // No hurt reaction: a light shove that leaves the state alone.
            self.knockback(sink);
            return DamageOutcome::Wounded;
        }

        if !capabilities.can_stun || !self.rng.gen_bool(f64::from(self.config.stun_chance)) {
            return DamageOutcome::Wounded;
        }

        match self.state {
            AiState::Attack(action) if !action.struck => {
                self.state = AiState::Attack(AttackAction {
                    stun_pending: true,
                    ..action
                });
            }
            AiState::Attack(_) => {
                // Recovery is cut short.
                self.cooldowns
                    .start(Cooldown::Attack, self.config.attack_cooldown);
                self.enter_stun(sink);
            }
            _ => self.enter_stun(sink),
        }
        DamageOutcome::Stunned
    }

    pub(super) fn advance_attack(
        &mut self,
        mut action: AttackAction,
        dt: f32,
        ctx: &TickContext<'_>,
        sink: &mut dyn SignalSink,
    ) {
        action.elapsed += dt;
        sink.emit(halt());

        let timing = self.config.attack;
        if !action.struck && action.elapsed >= timing.hit_delay {
            action.struck = true;
            self.strike(ctx, sink);
            if action.stun_pending {
                self.cooldowns
                    .start(Cooldown::Attack, self.config.attack_cooldown);
                self.enter_stun(sink);
                return;
            }
        }

        if action.elapsed >= timing.windup + timing.recovery {
            self.cooldowns
                .start(Cooldown::Attack, self.config.attack_cooldown);
            self.resume();
            return;
        }

        self.state = AiState::Attack(action);
    }

    /// One hit test against every live target in reach.
    fn strike(&mut self, ctx: &TickContext<'_>, sink: &mut dyn SignalSink) {
        let amount = self.config.attack_damage;
        if amount <= 0 {
            return;
        }
        let reach = self.config.hit_range();
        for target in ctx.targets.targets() {
            if target.alive && ctx.position.distance(target.position) <= reach {
                debug!("enemy attack hits {:?} for {}", target.id, amount);
                sink.emit(Intent::RequestDamage {
                    target: target.id,
                    amount,
                });
            }
        }
    }

    /// Damage the first live target touching the body, at most once per cooldown.
    pub(super) fn contact_damage(&mut self, ctx: &TickContext<'_>, sink: &mut dyn SignalSink) {
        let amount = self.config.contact_damage;
        if amount <= 0 || !self.cooldowns.is_ready(Cooldown::DamageTick) {
            return;
        }
        let range = self.config.contact_range;
        let touching = ctx
            .targets
            .targets()
            .iter()
            .find(|target| target.alive && ctx.position.distance(target.position) <= range);
        if let Some(target) = touching {
            sink.emit(Intent::RequestDamage {
                target: target.id,
                amount,
            });
            self.cooldowns
                .start(Cooldown::DamageTick, self.config.contact_cooldown);
        }
    }

    fn enter_stun(&mut self, sink: &mut dyn SignalSink) {
        self.cooldowns
            .start(Cooldown::Stun, self.config.hit_stun_duration);
        self.enter(AiState::HurtStun);
        sink.emit(Intent::Cue(Cue::Hurt));
        self.knockback(sink);
    }

    /// Push away from the current facing.
    fn knockback(&mut self, sink: &mut dyn SignalSink) {
        let knockback = self.config.knockback;
        sink.emit(Intent::SetVelocity {
            x: -self.facing.sign() * knockback.horizontal,
            y: (knockback.vertical != 0.0).then_some(knockback.vertical),
        });
    }

    fn die(&mut self, sink: &mut dyn SignalSink) {
        info!("enemy died, removal in {:.1}s", self.config.removal_delay);
        self.enter(AiState::Dead(DeathCountdown {
            remaining: self.config.removal_delay,
            removal_requested: false,
        }));
        self.target = None;
        sink.emit(Intent::SetVelocity {
            x: 0.0,
            y: Some(0.0),
        });
        sink.emit(Intent::DisableCollision);
        sink.emit(Intent::Cue(Cue::Die));
    }
}
