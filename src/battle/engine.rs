use crate::battle::action_queue::{DeferredQueue, DeferredTask};
use crate::battle::ai::{Behavior, RandomMoveBehavior};
use crate::battle::calculators::{
    apply_damage, apply_heal, compute_catch_chance, compute_damage, roll_capture,
};
use crate::battle::encounter::EncounterGenerator;
use crate::battle::events::{BattleEvent, BattleObserver, EventBus, Side};
use crate::battle::rng::RandomSource;
use crate::battle::state::{BattlePhase, BattleState};
use crate::combatant::Combatant;
use crate::errors::{ActionError, ActionResult, RosterResult};
use crate::player::PlayerAction;
use crate::roster::Roster;

/// Turn-based battle state machine.
///
/// Each public action resolves the player's half of a turn synchronously
/// and queues any follow-up (the opponent's counter-attack, or a
/// replacement opponent) as a [`DeferredTask`]. Front-ends drive logical
/// time with [`BattleEngine::advance`] or [`BattleEngine::run_until_idle`].
/// Player input stays disabled until the queue has drained.
pub struct BattleEngine {
    state: BattleState,
    rng: Box<dyn RandomSource>,
    queue: DeferredQueue,
    encounters: EncounterGenerator,
    opponent_behavior: Box<dyn Behavior>,
    event_bus: EventBus,
    keep_event_log: bool,
    observers: Vec<Box<dyn BattleObserver>>,
}

impl BattleEngine {
    /// Start a battle from a roster: the player's combatant is stamped from
    /// `roster.player` and the first opponent is drawn from the encounter
    /// table.
    pub fn new(roster: &Roster, mut rng: Box<dyn RandomSource>) -> RosterResult<Self> {
        roster.validate()?;
        let encounters = EncounterGenerator::new(roster.encounters.clone())?;
        let player = Combatant::instantiate(&roster.player, roster.player_name.as_deref())?;
        let opponent = encounters.generate(rng.as_mut());
        log::info!("Battle started: {} vs wild {}", player.name, opponent.name);

        let state = BattleState::new(player, opponent, roster.inventory());
        Ok(Self::from_state(state, encounters, rng))
    }

    /// Resume from an existing state, e.g. a hand-built test position.
    pub fn from_state(
        state: BattleState,
        encounters: EncounterGenerator,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            state,
            rng,
            queue: DeferredQueue::new(),
            encounters,
            opponent_behavior: Box::new(RandomMoveBehavior),
            event_bus: EventBus::new(),
            keep_event_log: true,
            observers: Vec::new(),
        }
    }

    pub fn with_opponent_behavior(mut self, behavior: Box<dyn Behavior>) -> Self {
        self.opponent_behavior = behavior;
        self
    }

    /// Stop recording events in the engine's own log. Subscribed observers
    /// still see every event. Front-ends that only subscribe should use this,
    /// since the log otherwise grows until [`drain_events`](Self::drain_events).
    pub fn without_event_log(mut self) -> Self {
        self.keep_event_log = false;
        self
    }

    pub fn subscribe(&mut self, observer: Box<dyn BattleObserver>) {
        self.observers.push(observer);
    }

    /// Read-only view of the battle.
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Owned copy of the battle state, e.g. for serialization.
    pub fn snapshot(&self) -> BattleState {
        self.state.clone()
    }

    /// Every event emitted since the last drain, oldest first. Empty when the
    /// engine was built [`without_event_log`](Self::without_event_log).
    pub fn events(&self) -> &[BattleEvent] {
        self.event_bus.events()
    }

    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        self.event_bus.drain()
    }

    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// The task [`advance`](Self::advance) would run next.
    pub fn next_task(&self) -> Option<DeferredTask> {
        self.queue.peek()
    }

    /// Dispatch a player decision to the matching action.
    pub fn submit(&mut self, action: PlayerAction) -> ActionResult<()> {
        match action {
            PlayerAction::Attack { move_index } => self.attack(move_index),
            PlayerAction::UseItem { item_id } => self.use_item(&item_id),
            PlayerAction::AttemptCatch => self.attempt_catch(),
            PlayerAction::SwitchActive => self.switch_active(),
        }
    }

    /// Attack the opponent with the move in `move_index`.
    pub fn attack(&mut self, move_index: usize) -> ActionResult<()> {
        if !self.state.accepting_actions() || self.state.either_defeated() {
            return self.reject(ActionError::NoOp);
        }
        let move_def = match self.state.player.get_move(move_index) {
            Some(move_def) => move_def.clone(),
            None => return self.reject(ActionError::UnknownMove(move_index)),
        };

        self.begin_player_action();

        let damage = compute_damage(&move_def, self.rng.as_mut());
        let fainted = apply_damage(&mut self.state.opponent, damage);
        self.emit(BattleEvent::DamageDealt {
            source: self.state.player.name.clone(),
            target: self.state.opponent.name.clone(),
            target_side: Side::Opponent,
            move_name: move_def.name.clone(),
            amount: damage,
        });
        self.emit_hp_changed(Side::Opponent);

        if fainted {
            self.emit(BattleEvent::Fainted {
                combatant: self.state.opponent.name.clone(),
                side: Side::Opponent,
            });
            self.state.record.opponents_defeated += 1;
            self.state.phase = BattlePhase::BattleWon;
            self.queue.schedule(DeferredTask::SpawnOpponent);
        } else {
            self.queue.schedule(DeferredTask::OpponentTurn);
        }
        Ok(())
    }

    /// Use a healing item on the player's combatant. The opponent always
    /// gets a turn afterwards.
    pub fn use_item(&mut self, item_id: &str) -> ActionResult<()> {
        if let Err(err) = self.state.inventory.available(item_id) {
            return self.reject(err);
        }
        if self.state.player.is_defeated() {
            return self.reject(ActionError::TargetInvalid);
        }
        if !self.state.accepting_actions() || self.state.opponent.is_defeated() {
            return self.reject(ActionError::NoOp);
        }

        let item = match self.state.inventory.consume(item_id) {
            Ok(item) => item,
            Err(err) => return self.reject(err),
        };
        self.begin_player_action();

        let restored = apply_heal(&mut self.state.player, item.heal_amount);
        self.emit(BattleEvent::Healed {
            combatant: self.state.player.name.clone(),
            item: item.name,
            amount: restored,
        });
        self.emit_hp_changed(Side::Player);

        self.queue.schedule(DeferredTask::OpponentTurn);
        Ok(())
    }

    /// Throw a ball at the opponent. A failed throw still gives the opponent
    /// its turn.
    pub fn attempt_catch(&mut self) -> ActionResult<()> {
        if self.state.opponent.is_defeated() {
            return self.reject(ActionError::NothingToCatch);
        }
        if !self.state.accepting_actions() || self.state.player.is_defeated() {
            return self.reject(ActionError::NoOp);
        }

        self.begin_player_action();

        let opponent = self.state.opponent.name.clone();
        let chance = compute_catch_chance(&self.state.opponent);
        self.emit(BattleEvent::CaptureAttempted {
            opponent: opponent.clone(),
            chance,
        });

        let success = roll_capture(chance, self.rng.as_mut());
        self.emit(BattleEvent::CaptureResult {
            opponent: opponent.clone(),
            success,
        });

        if success {
            log::info!("Caught wild {} (chance {:.2})", opponent, chance);
            self.state.record.opponents_caught.push(opponent);
            self.state.phase = BattlePhase::BattleWon;
            self.queue.schedule(DeferredTask::SpawnOpponent);
        } else {
            self.queue.schedule(DeferredTask::OpponentTurn);
        }
        Ok(())
    }

    /// Swap the active combatant. The party only ever has one member, so
    /// this always reports that there is nobody to switch to.
    pub fn switch_active(&mut self) -> ActionResult<()> {
        self.reject(ActionError::NoAlternateCombatant)
    }

    /// Run the next deferred task, if any. Returns the task that ran.
    pub fn advance(&mut self) -> Option<DeferredTask> {
        let task = self.queue.pop_next()?;
        log::debug!("Running deferred task {:?}", task);
        match task {
            DeferredTask::OpponentTurn => self.opponent_turn(),
            DeferredTask::SpawnOpponent => self.spawn_opponent(),
        }
        Some(task)
    }

    /// Drain the deferred queue. Returns how many tasks ran.
    pub fn run_until_idle(&mut self) -> usize {
        let mut executed = 0;
        while self.advance().is_some() {
            executed += 1;
        }
        executed
    }

    // --- Deferred task bodies ---

    fn opponent_turn(&mut self) {
        if self.state.either_defeated() {
            log::debug!("Skipping opponent turn: a combatant is down");
            return;
        }
        self.state.phase = BattlePhase::ResolvingOpponentAction;

        let move_index = self.opponent_behavior.choose_move(
            &self.state.opponent,
            &self.state.player,
            self.rng.as_mut(),
        );
        let move_def = match self.state.opponent.get_move(move_index) {
            Some(move_def) => move_def.clone(),
            None => {
                log::warn!(
                    "Opponent behavior chose missing move slot {}; using slot 0",
                    move_index
                );
                match self.state.opponent.moves().first() {
                    Some(move_def) => move_def.clone(),
                    None => {
                        log::warn!(
                            "{} has no moves; skipping its turn",
                            self.state.opponent.name
                        );
                        self.state.phase = BattlePhase::AwaitingPlayerAction;
                        self.set_actions_enabled(true);
                        return;
                    }
                }
            }
        };

        let damage = compute_damage(&move_def, self.rng.as_mut());
        let fainted = apply_damage(&mut self.state.player, damage);
        self.emit(BattleEvent::DamageDealt {
            source: self.state.opponent.name.clone(),
            target: self.state.player.name.clone(),
            target_side: Side::Player,
            move_name: move_def.name.clone(),
            amount: damage,
        });
        self.emit_hp_changed(Side::Player);

        if fainted {
            let combatant = self.state.player.name.clone();
            self.emit(BattleEvent::Fainted {
                combatant: combatant.clone(),
                side: Side::Player,
            });
            self.emit(BattleEvent::BlackedOut { combatant });
            log::info!("Player blacked out");
            self.state.phase = BattlePhase::PlayerDefeated;
            self.set_actions_enabled(false);
        } else {
            self.state.phase = BattlePhase::AwaitingPlayerAction;
            self.set_actions_enabled(true);
        }
    }

    fn spawn_opponent(&mut self) {
        let opponent = self.encounters.generate(self.rng.as_mut());
        log::info!("Wild {} replaces {}", opponent.name, self.state.opponent.name);

        self.state.opponent = opponent;
        self.state.record.encounters += 1;
        self.emit(BattleEvent::OpponentAppeared {
            opponent: self.state.opponent.name.clone(),
            max_hp: self.state.opponent.max_hp(),
        });
        self.emit_hp_changed(Side::Opponent);

        self.state.phase = BattlePhase::AwaitingPlayerAction;
        self.set_actions_enabled(true);
    }

    // --- Private Helper Functions ---

    fn begin_player_action(&mut self) {
        self.state.phase = BattlePhase::ResolvingPlayerAction;
        self.set_actions_enabled(false);
    }

    fn reject(&mut self, reason: ActionError) -> ActionResult<()> {
        log::debug!("Rejected player action: {}", reason);
        self.emit(BattleEvent::ActionRejected {
            reason: reason.clone(),
        });
        Err(reason)
    }

    fn set_actions_enabled(&mut self, enabled: bool) {
        if self.state.actions_enabled != enabled {
            self.state.actions_enabled = enabled;
            self.emit(BattleEvent::ActionsEnabledChanged { enabled });
        }
    }

    fn emit_hp_changed(&mut self, side: Side) {
        let combatant = match side {
            Side::Player => &self.state.player,
            Side::Opponent => &self.state.opponent,
        };
        let event = BattleEvent::HpChanged {
            combatant: combatant.name.clone(),
            side,
            current_hp: combatant.current_hp(),
            max_hp: combatant.max_hp(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: BattleEvent) {
        log::debug!("{:?}", event);
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
        if self.keep_event_log {
            self.event_bus.push(event);
        }
    }
}
