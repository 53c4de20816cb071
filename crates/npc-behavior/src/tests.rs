//! Unit tests for npc-behavior.

use std::sync::Arc;

use npc_core::{Tick, Vec2};

use crate::{
    AgentBehavior, AgentConfig, Event, Forager, Patroller, PlayerView, Stockpile, StoragePoint,
    TickContext,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f32 = 0.1;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn ctx(player: Vec2, armed: bool) -> TickContext {
    TickContext::new(Tick(0), DT, PlayerView { position: player, armed })
}

fn far_storage() -> StoragePoint {
    StoragePoint::new(v(500.0, 500.0))
}

fn forager(waypoints: Vec<Vec2>, spawn: Vec2) -> Forager {
    Forager::builder(AgentConfig::with_waypoints(waypoints))
        .spawn_at(spawn)
        .storage(far_storage())
        .stockpile(Stockpile::new())
        .build()
        .unwrap()
}

fn patroller(waypoints: Vec<Vec2>, spawn: Vec2) -> Patroller {
    Patroller::builder(AgentConfig::with_waypoints(waypoints))
        .spawn_at(spawn)
        .build()
        .unwrap()
}

fn approx(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-4
}

fn mode_changes(events: &[Event]) -> Vec<(&'static str, &'static str)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::ModeChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use npc_mobility::MobilityError;

    use super::*;
    use crate::BehaviorError;

    #[test]
    fn defaults() {
        let cfg = AgentConfig::default();
        assert_eq!(cfg.forage_speed, 1.5);
        assert_eq!(cfg.flee_speed, 2.0);
        assert_eq!(cfg.min_distance_to_waypoint, 0.1);
        assert_eq!(cfg.distance_to_player, 3.0);
        assert!(cfg.waypoints.is_empty());
    }

    #[test]
    fn zero_speed_is_rejected() {
        let cfg = AgentConfig { forage_speed: 0.0, ..AgentConfig::with_waypoints(vec![v(0.0, 0.0)]) };
        assert_eq!(
            cfg.validate(),
            Err(BehaviorError::InvalidParameter { name: "forageSpeed", value: 0.0 })
        );
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let cfg = AgentConfig {
            min_distance_to_waypoint: f32::NAN,
            ..AgentConfig::with_waypoints(vec![v(0.0, 0.0)])
        };
        assert!(matches!(
            cfg.tuning(),
            Err(BehaviorError::InvalidParameter { name: "minDistanceToWaypoint", .. })
        ));
    }

    #[test]
    fn negative_proximity_is_rejected() {
        let cfg = AgentConfig { distance_to_player: -1.0, ..AgentConfig::default() };
        assert!(matches!(
            cfg.tuning(),
            Err(BehaviorError::InvalidParameter { name: "distanceToPlayer", .. })
        ));
    }

    #[test]
    fn empty_waypoints_are_rejected() {
        assert_eq!(
            AgentConfig::default().validate(),
            Err(BehaviorError::Waypoints(MobilityError::EmptyWaypoints))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_camel_case_with_defaults() {
        let json = r#"{ "forageSpeed": 2.5, "waypoints": [{ "x": 1.0, "y": 2.0 }] }"#;
        let cfg: AgentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.forage_speed, 2.5);
        assert_eq!(cfg.flee_speed, 2.0);
        assert_eq!(cfg.distance_to_player, 3.0);
        assert_eq!(cfg.waypoints, vec![v(1.0, 2.0)]);
    }
}

// ── Transition tables ─────────────────────────────────────────────────────────

#[cfg(test)]
mod transition {
    use super::*;
    use crate::{
        Condition, FORAGER_TRANSITIONS, ForagerMode, PATROLLER_TRANSITIONS, PatrollerMode, Senses,
        Transition, next_mode,
    };

    fn senses(distance: f32, armed: bool) -> Senses {
        Senses { player_distance: distance, proximity: 3.0, player_armed: armed }
    }

    #[test]
    fn threshold_counts_as_near_and_clear() {
        let s = senses(3.0, false);
        assert!(Condition::PlayerNear.holds(&s));
        assert!(Condition::PlayerClear.holds(&s));
    }

    #[test]
    fn senses_measure_from_agent() {
        let player = PlayerView { position: v(3.0, 4.0), armed: true };
        let s = Senses::new(v(0.0, 0.0), &player, 3.0);
        assert_eq!(s.player_distance, 5.0);
        assert!(s.player_armed);
    }

    #[test]
    fn first_matching_row_wins() {
        let table = [
            Transition { from: 0u8, when: Condition::PlayerNear,  to: 1 },
            Transition { from: 0u8, when: Condition::PlayerArmed, to: 2 },
        ];
        assert_eq!(next_mode(&table, 0, &senses(1.0, true)), Some(1));
        assert_eq!(next_mode(&table, 0, &senses(9.0, true)), Some(2));
        assert_eq!(next_mode(&table, 0, &senses(9.0, false)), None);
        assert_eq!(next_mode(&table, 1, &senses(1.0, true)), None);
    }

    #[test]
    fn forager_table() {
        assert_eq!(
            next_mode(&FORAGER_TRANSITIONS, ForagerMode::Foraging, &senses(2.0, false)),
            Some(ForagerMode::Fleeing)
        );
        assert_eq!(next_mode(&FORAGER_TRANSITIONS, ForagerMode::Foraging, &senses(4.0, false)), None);
        assert_eq!(next_mode(&FORAGER_TRANSITIONS, ForagerMode::Fleeing, &senses(2.0, false)), None);
        assert_eq!(
            next_mode(&FORAGER_TRANSITIONS, ForagerMode::Fleeing, &senses(4.0, false)),
            Some(ForagerMode::Foraging)
        );
    }

    #[test]
    fn armed_player_beats_distance_while_attacking() {
        assert_eq!(
            next_mode(&PATROLLER_TRANSITIONS, PatrollerMode::Attacking, &senses(5.0, true)),
            Some(PatrollerMode::Fleeing)
        );
        assert_eq!(
            next_mode(&PATROLLER_TRANSITIONS, PatrollerMode::Attacking, &senses(5.0, false)),
            Some(PatrollerMode::Patrolling)
        );
        assert_eq!(
            next_mode(&PATROLLER_TRANSITIONS, PatrollerMode::Attacking, &senses(1.0, false)),
            None
        );
    }

    #[test]
    fn patrolling_ignores_armed_player() {
        assert_eq!(
            next_mode(&PATROLLER_TRANSITIONS, PatrollerMode::Patrolling, &senses(1.0, true)),
            Some(PatrollerMode::Attacking)
        );
        assert_eq!(
            next_mode(&PATROLLER_TRANSITIONS, PatrollerMode::Patrolling, &senses(5.0, true)),
            None
        );
    }
}

// ── Stockpile ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stockpile {
    use super::*;

    #[test]
    fn deposit_returns_new_total() {
        let pile = Stockpile::with_total(5);
        assert_eq!(pile.deposit(10), 15);
        assert_eq!(pile.total(), 15);
    }

    #[test]
    fn clones_share_the_counter() {
        let a = Stockpile::new();
        let b = a.clone();
        b.deposit(7);
        assert_eq!(a.total(), 7);
        assert!(a.same_as(&b));
        assert!(!a.same_as(&Stockpile::new()));
    }

    #[test]
    fn concurrent_deposits_are_not_lost() {
        let pile = Stockpile::new();
        std::thread::scope(|s| {
            for _ in 0..8 {
                let pile = pile.clone();
                s.spawn(move || {
                    for _ in 0..1_000 {
                        pile.deposit(10);
                    }
                });
            }
        });
        assert_eq!(pile.total(), 8 * 1_000 * 10);
    }

    #[test]
    fn storage_reach_is_strict() {
        let storage = StoragePoint::new(v(0.0, 0.0));
        assert!(storage.in_reach(v(0.5, 0.0)));
        assert!(!storage.in_reach(v(1.0, 0.0)));
    }
}

// ── Forager ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod forager {
    use proptest::prelude::*;

    use super::*;
    use crate::{BehaviorError, ForagerState};

    #[test]
    fn builder_requires_storage() {
        let err = Forager::builder(AgentConfig::with_waypoints(vec![v(0.0, 0.0)]))
            .stockpile(Stockpile::new())
            .build()
            .unwrap_err();
        assert_eq!(err, BehaviorError::MissingReference("storage point"));
    }

    #[test]
    fn builder_requires_stockpile() {
        let err = Forager::builder(AgentConfig::with_waypoints(vec![v(0.0, 0.0)]))
            .storage(far_storage())
            .build()
            .unwrap_err();
        assert_eq!(err, BehaviorError::MissingReference("stockpile"));
    }

    #[test]
    fn spawns_on_first_waypoint_by_default() {
        let f = Forager::builder(AgentConfig::with_waypoints(vec![v(2.0, 3.0), v(9.0, 9.0)]))
            .storage(far_storage())
            .stockpile(Stockpile::new())
            .build()
            .unwrap();
        assert_eq!(f.position(), v(2.0, 3.0));
        assert_eq!(f.state(), ForagerState::Foraging { waypoint_locked: false });
        assert_eq!(f.state_name(), "Foraging");
        assert_eq!(f.resources(), Some(0));
    }

    #[test]
    fn shared_route_overrides_config() {
        let route = Arc::new(npc_mobility::WaypointSet::new(vec![v(1.0, 1.0)]).unwrap());
        let f = Forager::builder(AgentConfig::default())
            .shared_waypoints(Arc::clone(&route))
            .storage(far_storage())
            .stockpile(Stockpile::new())
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(f.navigator().waypoints(), &route));
    }

    #[test]
    fn locks_waypoint_nearest_player_and_seeks_it() {
        let mut f = forager(vec![v(0.0, 0.0), v(10.0, 0.0)], v(0.0, 0.0));
        let events = f.tick(&ctx(v(9.0, 0.0), false));

        assert!(events.is_empty());
        assert_eq!(f.waypoint_index(), 1);
        assert_eq!(f.state(), ForagerState::Foraging { waypoint_locked: true });
        // forageSpeed 1.5 * dt 0.1
        assert!(approx(f.position(), v(0.15, 0.0)));
    }

    #[test]
    fn lock_happens_once_per_entry() {
        let mut f = forager(vec![v(0.0, 0.0), v(10.0, 0.0)], v(5.0, 0.0));
        f.tick(&ctx(v(11.0, 20.0), false));
        assert_eq!(f.waypoint_index(), 1);

        // Player moves next to the other waypoint, but far from the agent.
        f.tick(&ctx(v(-1.0, 20.0), false));
        assert_eq!(f.waypoint_index(), 1);
    }

    #[test]
    fn deposits_exactly_once() {
        let pile = Stockpile::new();
        let mut f = Forager::builder(AgentConfig::with_waypoints(vec![v(5.0, 0.0), v(10.0, 0.0)]))
            .spawn_at(v(0.0, 0.0))
            .storage(StoragePoint::new(v(0.5, 0.0)))
            .stockpile(pile.clone())
            .carrying(10)
            .build()
            .unwrap();

        let far = ctx(v(100.0, 100.0), false);
        let mut deposits = Vec::new();
        for _ in 0..3 {
            for e in f.tick(&far) {
                if let Event::Deposited { amount, stockpile_total } = e {
                    deposits.push((amount, stockpile_total));
                }
            }
        }

        assert_eq!(deposits, vec![(10, 10)]);
        assert_eq!(f.held(), 0);
        assert_eq!(pile.total(), 10);
    }

    #[test]
    fn empty_handed_forager_does_not_deposit() {
        let pile = Stockpile::new();
        let mut f = Forager::builder(AgentConfig::with_waypoints(vec![v(5.0, 0.0)]))
            .spawn_at(v(0.0, 0.0))
            .storage(StoragePoint::new(v(0.0, 0.0)))
            .stockpile(pile.clone())
            .build()
            .unwrap();
        let events = f.tick(&ctx(v(100.0, 0.0), false));
        assert!(!events.iter().any(|e| matches!(e, Event::Deposited { .. })));
        assert_eq!(pile.total(), 0);
    }

    #[test]
    fn parked_on_single_waypoint_is_rewarded_once() {
        let mut f = forager(vec![v(0.0, 0.0)], v(0.0, 0.0));
        let far = ctx(v(100.0, 0.0), false);

        let first = f.tick(&far);
        assert_eq!(
            first,
            vec![Event::WaypointReached { index: 0 }, Event::Collected { amount: 10, held: 10 }]
        );
        for _ in 0..20 {
            assert!(f.tick(&far).is_empty());
        }
        assert_eq!(f.held(), 10);
    }

    #[test]
    fn loops_route_and_collects_per_arrival() {
        let mut f = forager(vec![v(0.0, 0.0), v(1.0, 0.0)], v(0.0, 0.0));
        let far = ctx(v(100.0, 100.0), false);

        let mut reached = Vec::new();
        for _ in 0..100 {
            for e in f.tick(&far) {
                if let Event::WaypointReached { index } = e {
                    reached.push(index);
                }
            }
        }

        assert!(reached.len() >= 4, "reached: {reached:?}");
        assert_eq!(reached[0], 1);
        for pair in reached.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert_eq!(f.held(), 10 * reached.len() as u32);
    }

    #[test]
    fn overlapping_waypoints_each_pay_out() {
        let mut f = forager(vec![v(0.0, 0.0), v(0.05, 0.0), v(5.0, 0.0)], v(0.0, 0.0));
        let west = ctx(v(-100.0, 0.0), false);

        let mut reached = Vec::new();
        for _ in 0..2 {
            for e in f.tick(&west) {
                if let Event::WaypointReached { index } = e {
                    reached.push(index);
                }
            }
        }
        assert_eq!(reached, vec![0, 1]);
        assert_eq!(f.held(), 20);
        assert_eq!(f.navigator().waypoint_index(), 2);
    }

    #[test]
    fn collapsed_loop_pays_each_waypoint_once() {
        let mut f = forager(vec![v(0.0, 0.0), v(0.05, 0.0)], v(0.0, 0.0));
        let west = ctx(v(-100.0, 0.0), false);
        for _ in 0..20 {
            f.tick(&west);
        }
        assert_eq!(f.held(), 20);
    }

    #[test]
    fn flees_on_next_tick_after_transition() {
        let mut f = forager(vec![v(0.0, 0.0), v(10.0, 0.0)], v(0.0, 0.0));
        let near = ctx(v(2.0, 0.0), false);

        let events = f.tick(&near);
        assert_eq!(mode_changes(&events), vec![("Foraging", "Fleeing")]);
        assert_eq!(f.position(), v(0.0, 0.0));

        f.tick(&near);
        assert_eq!(f.state_name(), "Fleeing");
        // fleeSpeed 2.0 * dt 0.1, directly away from the player
        assert!(approx(f.position(), v(-0.2, 0.0)));
    }

    #[test]
    fn returns_to_foraging_and_relocks() {
        let mut f = forager(vec![v(0.0, 0.0), v(10.0, 0.0)], v(1.0, 0.0));
        f.tick(&ctx(v(2.0, 0.0), false));
        assert_eq!(f.state(), ForagerState::Fleeing);

        let events = f.tick(&ctx(v(50.0, 0.0), false));
        assert_eq!(mode_changes(&events), vec![("Fleeing", "Foraging")]);
        assert_eq!(f.state(), ForagerState::Foraging { waypoint_locked: false });

        f.tick(&ctx(v(-50.0, 0.0), false));
        assert_eq!(f.waypoint_index(), 0);
    }

    #[test]
    fn exact_threshold_triggers_flight() {
        let mut f = forager(vec![v(0.0, 0.0)], v(0.0, 0.0));
        let events = f.tick(&ctx(v(3.0, 0.0), false));
        assert_eq!(mode_changes(&events), vec![("Foraging", "Fleeing")]);
    }

    proptest! {
        #[test]
        fn flight_only_when_player_within_proximity(
            ax in -20.0f32..20.0, ay in -20.0f32..20.0,
            px in -20.0f32..20.0, py in -20.0f32..20.0,
        ) {
            let spawn = v(ax, ay);
            let player = v(px, py);
            let mut f = forager(vec![v(0.0, 0.0), v(10.0, 10.0)], spawn);
            f.tick(&ctx(player, false));
            let fled = f.state() == ForagerState::Fleeing;
            prop_assert_eq!(fled, spawn.distance(player) <= 3.0);
        }

        #[test]
        fn fleeing_never_closes_distance(
            ax in -2.0f32..2.0, ay in -2.0f32..2.0,
        ) {
            let spawn = v(ax, ay);
            prop_assume!(spawn.length() > 1e-3);
            let near = ctx(v(0.0, 0.0), false);
            let mut f = forager(vec![v(50.0, 50.0)], spawn);
            f.tick(&near);
            prop_assert_eq!(f.state(), ForagerState::Fleeing);
            let before = f.position().length();
            f.tick(&near);
            prop_assert!(f.position().length() >= before);
        }
    }
}

// ── Patroller ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod patroller {
    use super::*;
    use crate::PatrollerState;

    #[test]
    fn carries_no_resources() {
        let p = patroller(vec![v(0.0, 0.0)], v(0.0, 0.0));
        assert_eq!(p.resources(), None);
        assert_eq!(p.state_name(), "Patrolling");
    }

    #[test]
    fn attacks_unarmed_player_and_chases() {
        let mut p = patroller(vec![v(0.0, 0.0), v(10.0, 0.0)], v(0.0, 0.0));
        let near = ctx(v(2.0, 0.0), false);

        let events = p.tick(&near);
        assert_eq!(mode_changes(&events), vec![("Patrolling", "Attacking")]);
        assert_eq!(p.position(), v(0.0, 0.0));

        for _ in 0..3 {
            p.tick(&near);
            assert_eq!(p.state(), PatrollerState::Attacking);
        }
        // forageSpeed 1.5 * dt 0.1 per tick, towards the player
        assert!(approx(p.position(), v(0.45, 0.0)));
    }

    #[test]
    fn chase_stops_on_player() {
        let mut p = patroller(vec![v(0.0, 0.0)], v(0.0, 0.0));
        let near = ctx(v(0.05, 0.0), false);
        p.tick(&near);
        p.tick(&near);
        assert_eq!(p.position(), v(0.05, 0.0));
    }

    #[test]
    fn flees_once_player_is_armed() {
        let mut p = patroller(vec![v(0.0, 0.0), v(10.0, 0.0)], v(0.0, 0.0));
        p.tick(&ctx(v(2.0, 0.0), false));
        assert_eq!(p.state(), PatrollerState::Attacking);

        let armed = ctx(v(2.0, 0.0), true);
        let events = p.tick(&armed);
        assert_eq!(mode_changes(&events), vec![("Attacking", "Fleeing")]);
        assert_eq!(p.position(), v(0.0, 0.0));

        p.tick(&armed);
        // forageSpeed 1.5 * dt 0.1, away from the player
        assert!(approx(p.position(), v(-0.15, 0.0)));
    }

    #[test]
    fn flee_ignores_flee_speed() {
        let config = AgentConfig { flee_speed: 9.0, ..AgentConfig::with_waypoints(vec![v(0.0, 0.0)]) };
        let mut p = Patroller::builder(config).spawn_at(v(0.0, 0.0)).build().unwrap();
        p.tick(&ctx(v(2.0, 0.0), false));
        p.tick(&ctx(v(2.0, 0.0), true));
        assert_eq!(p.state(), PatrollerState::Fleeing);

        p.tick(&ctx(v(2.0, 0.0), true));
        assert!(approx(p.position(), v(-0.15, 0.0)), "at {}", p.position());
    }

    #[test]
    fn gives_up_when_player_leaves() {
        let mut p = patroller(vec![v(0.0, 0.0), v(10.0, 0.0)], v(0.0, 0.0));
        p.tick(&ctx(v(2.0, 0.0), false));
        let events = p.tick(&ctx(v(8.0, 0.0), false));
        assert_eq!(mode_changes(&events), vec![("Attacking", "Patrolling")]);
        assert_eq!(p.state(), PatrollerState::Patrolling { waypoint_locked: false });

        // Re-entry locks on the waypoint nearest the player.
        p.tick(&ctx(v(8.0, 0.0), false));
        assert_eq!(p.waypoint_index(), 1);
    }

    #[test]
    fn fleeing_ends_when_player_is_clear() {
        let mut p = patroller(vec![v(0.0, 0.0)], v(0.0, 0.0));
        p.tick(&ctx(v(1.0, 0.0), false));
        p.tick(&ctx(v(1.0, 0.0), true));
        assert_eq!(p.state(), PatrollerState::Fleeing);

        let events = p.tick(&ctx(v(6.0, 0.0), true));
        assert_eq!(mode_changes(&events), vec![("Fleeing", "Patrolling")]);
    }

    #[test]
    fn patrols_route() {
        let mut p = patroller(vec![v(0.0, 0.0), v(0.5, 0.0)], v(0.0, 0.0));
        let far = ctx(v(-100.0, 0.0), false);
        let mut reached = Vec::new();
        for _ in 0..30 {
            for e in p.tick(&far) {
                if let Event::WaypointReached { index } = e {
                    reached.push(index);
                }
            }
        }
        assert_eq!(&reached[..3], &[0, 1, 0]);
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use super::*;

    #[test]
    fn labels_and_display() {
        let e = Event::ModeChanged { from: "Foraging", to: "Fleeing" };
        assert_eq!(e.as_str(), "mode_changed");
        assert_eq!(e.to_string(), "Foraging -> Fleeing");
        let d = Event::Deposited { amount: 10, stockpile_total: 30 };
        assert_eq!(d.as_str(), "deposited");
        assert_eq!(d.to_string(), "10 deposited (stockpile 30)");
    }
}
