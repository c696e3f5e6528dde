#[cfg(test)]
mod tests {
    use crate::battle::events::{BattleEvent, BattleObserver, EventBus, Side};
    use crate::battle::tests::common::{
        create_test_battle, create_test_engine, default_opponent, default_player, NO_VARIANCE,
    };
    use crate::errors::ActionError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Tracks what a front-end would show: the two HP readouts and
    /// whether the action buttons are live.
    #[derive(Default)]
    struct BattleScreen {
        player_hp: Option<u16>,
        opponent_hp: Option<u16>,
        buttons_enabled: bool,
        log: Vec<String>,
    }

    impl BattleObserver for BattleScreen {
        fn on_event(&mut self, event: &BattleEvent) {
            match event {
                BattleEvent::HpChanged {
                    side, current_hp, ..
                } => match side {
                    Side::Player => self.player_hp = Some(*current_hp),
                    Side::Opponent => self.opponent_hp = Some(*current_hp),
                },
                BattleEvent::ActionsEnabledChanged { enabled } => self.buttons_enabled = *enabled,
                _ => {}
            }
            if let Some(line) = event.format() {
                self.log.push(line);
            }
        }
    }

    #[test]
    fn test_subscribed_bus_mirrors_engine_events() {
        let state = create_test_battle(default_player(), default_opponent());
        // attack, counter-attack, a missed ball, counter-attack
        let rolls = vec![NO_VARIANCE, 0.0, NO_VARIANCE, 0.9, 0.0, NO_VARIANCE];
        let mut engine = create_test_engine(state, rolls);
        let mirror = Rc::new(RefCell::new(EventBus::new()));
        engine.subscribe(Box::new(mirror.clone()));

        engine.attack(0).unwrap();
        engine.run_until_idle();
        assert_eq!(engine.attempt_catch(), Ok(()));
        engine.run_until_idle();

        assert_eq!(engine.state().player.current_hp(), 72);
        assert_eq!(mirror.borrow().events(), engine.events());
    }

    #[test]
    fn test_subscribe_only_engine_keeps_no_log() {
        let state = create_test_battle(default_player(), default_opponent());
        let mut engine = create_test_engine(state, vec![NO_VARIANCE, 0.0, NO_VARIANCE])
            .without_event_log();
        let mirror = Rc::new(RefCell::new(EventBus::new()));
        engine.subscribe(Box::new(mirror.clone()));

        engine.attack(0).unwrap();
        engine.run_until_idle();

        assert!(engine.events().is_empty());
        assert_eq!(mirror.borrow().len(), 6);
        assert!(mirror.borrow().events().contains(&BattleEvent::ActionsEnabledChanged {
            enabled: true
        }));
    }

    #[test]
    fn test_observer_tracks_presentation_state() {
        let state = create_test_battle(default_player(), default_opponent());
        let mut engine = create_test_engine(state, vec![NO_VARIANCE, 0.0, NO_VARIANCE]);
        let display = Rc::new(RefCell::new(BattleScreen {
            buttons_enabled: true,
            ..BattleScreen::default()
        }));
        engine.subscribe(Box::new(display.clone()));

        engine.attack(0).unwrap();
        assert!(!display.borrow().buttons_enabled);
        assert_eq!(display.borrow().opponent_hp, Some(54));
        assert_eq!(display.borrow().player_hp, None);

        engine.run_until_idle();
        let screen = display.borrow();
        assert!(screen.buttons_enabled);
        assert_eq!(screen.player_hp, Some(86));
        assert_eq!(
            screen.log,
            vec![
                "Hero used Quick Attack! The wild Wildling took 16 damage!".to_string(),
                "The wild Wildling used Scratch! Hero took 14 damage!".to_string(),
            ]
        );
    }

    #[test]
    fn test_rejections_reach_observers() {
        let state = create_test_battle(default_player(), default_opponent());
        let mut engine = create_test_engine(state, vec![]);
        let mirror = Rc::new(RefCell::new(EventBus::new()));
        engine.subscribe(Box::new(mirror.clone()));

        assert_eq!(
            engine.use_item("elixir"),
            Err(ActionError::UnknownItem("elixir".to_string()))
        );
        assert_eq!(
            mirror.borrow().formatted(),
            vec!["You don't have any elixir left!".to_string()]
        );
    }

    #[test]
    fn test_drain_events_leaves_observers_untouched() {
        let state = create_test_battle(default_player(), default_opponent());
        let mut engine = create_test_engine(state, vec![NO_VARIANCE]);
        let mirror = Rc::new(RefCell::new(EventBus::new()));
        engine.subscribe(Box::new(mirror.clone()));

        engine.attack(0).unwrap();
        let drained = engine.drain_events();

        assert!(engine.events().is_empty());
        assert_eq!(drained.as_slice(), mirror.borrow().events());
    }
}
