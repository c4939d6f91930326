#[cfg(test)]
mod tests {
    use skirmish_core::components::{MoveIntent, TargetRef, WeaponMount};
    use skirmish_core::constants::*;
    use skirmish_core::enums::{CandidateKind, UnitKind};
    use skirmish_core::types::{Position, SerialId, Team};

    use crate::decision::{decide, UnitContext};
    use crate::engagement::EngagementPlan;
    use crate::movement::{classify, Band};
    use crate::policy::*;
    use crate::query::{effective_radius, EntityQuery, StructureEntry, UnitEntry, WorldView};

    const OURS: Team = Team::SHARDED;
    const THEIRS: Team = Team::CRUX;

    fn make_unit(kind: UnitKind, range: f64) -> UnitContext {
        UnitContext {
            id: SerialId(1),
            kind,
            team: OURS,
            position: Position::new(0.0, 0.0),
            speed: 30.0,
            facing: 0.0,
            weapon_range: range,
            current_target: None,
        }
    }

    fn enemy_unit(id: u32, x: f64, y: f64) -> UnitEntry {
        UnitEntry {
            id: SerialId(id),
            team: THEIRS,
            position: Position::new(x, y),
            alive: true,
            targetable: true,
            radius: 0.0,
        }
    }

    fn structure(id: u32, team: Team, x: f64, y: f64, is_base: bool) -> StructureEntry {
        StructureEntry {
            id: SerialId(id),
            team,
            position: Position::new(x, y),
            radius: 0.0,
            is_base,
        }
    }

    fn custom_policy(priority: PriorityClass, filter: CandidateFilter) -> ArchetypePolicy {
        ArchetypePolicy {
            priority,
            filter,
            bands: DistanceBands {
                optimal: BandDistance::World(120.0),
                min: BandDistance::World(80.0),
            },
            facing: FacingRule::TrackTarget,
            no_target: NoTargetRule::SeekBase,
        }
    }

    fn table_with(kind: UnitKind, policy: ArchetypePolicy) -> PolicyTable {
        let mut table = PolicyTable::default();
        table.insert(kind, policy);
        table
    }

    // ---- Entity query ----

    #[test]
    fn test_nearest_unit_filters_dead_untargetable_and_friendly() {
        let mut view = WorldView::new();
        view.push_unit(UnitEntry {
            alive: false,
            ..enemy_unit(2, 5.0, 0.0)
        });
        view.push_unit(UnitEntry {
            targetable: false,
            ..enemy_unit(3, 6.0, 0.0)
        });
        view.push_unit(UnitEntry {
            team: OURS,
            ..enemy_unit(4, 7.0, 0.0)
        });
        view.push_unit(enemy_unit(5, 50.0, 0.0));

        let found = view.nearest_unit(Position::new(0.0, 0.0), OURS).unwrap();
        assert_eq!(found.id, SerialId(5));
        assert_eq!(found.kind, CandidateKind::Unit);
    }

    #[test]
    fn test_nearest_unit_none_when_pool_ineligible() {
        let mut view = WorldView::new();
        for id in 0..10 {
            let alive = id % 2 == 0;
            view.push_unit(UnitEntry {
                alive,
                targetable: !alive,
                ..enemy_unit(id, id as f64 * 3.0, 1.0)
            });
        }
        assert!(view.nearest_unit(Position::new(0.0, 0.0), OURS).is_none());
    }

    #[test]
    fn test_nearest_ties_resolve_to_lowest_id() {
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(9, 10.0, 0.0));
        view.push_unit(enemy_unit(4, -10.0, 0.0));
        view.push_unit(enemy_unit(7, 0.0, 10.0));

        let found = view.nearest_unit(Position::new(0.0, 0.0), OURS).unwrap();
        assert_eq!(found.id, SerialId(4));
    }

    #[test]
    fn test_derelict_structures_are_candidates() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, OURS, 5.0, 0.0, false));
        view.push_structure(structure(3, Team::DERELICT, 20.0, 0.0, false));

        let found = view.nearest_structure(Position::new(0.0, 0.0), OURS).unwrap();
        assert_eq!(found.id, SerialId(3));
        assert_eq!(found.team, Team::DERELICT);
    }

    #[test]
    fn test_enemy_base_excludes_own_and_derelict() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, OURS, 5.0, 0.0, true));
        view.push_structure(structure(3, Team::DERELICT, 10.0, 0.0, true));
        view.push_structure(structure(4, THEIRS, 400.0, 0.0, false));
        view.push_structure(structure(5, THEIRS, 800.0, 0.0, true));

        let base = view.nearest_enemy_base(Position::new(0.0, 0.0), OURS);
        assert_eq!(base, Some(Position::new(800.0, 0.0)));
    }

    #[test]
    fn test_effective_radius() {
        assert!((effective_radius(None, Some(3)) - 12.0).abs() < 1e-9);
        assert!((effective_radius(Some(10.0), None) - 5.0).abs() < 1e-9);
        // Footprint wins when both are present.
        assert!((effective_radius(Some(10.0), Some(2)) - 8.0).abs() < 1e-9);
        assert!((effective_radius(None, None) - DEFAULT_TARGET_RADIUS).abs() < 1e-9);
    }

    // ---- Target selection ----

    #[test]
    fn test_structure_first_prefers_in_range_structure() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 50.0, 0.0, false));
        view.push_unit(enemy_unit(3, 0.0, 30.0));

        let unit = make_unit(UnitKind::Disintegrator, 100.0);
        let policy = get_policy(UnitKind::Disintegrator);
        let target = policy.select_target(&unit, &view).unwrap();
        assert_eq!(target.id, SerialId(2));
        assert_eq!(target.kind, CandidateKind::Structure);
    }

    #[test]
    fn test_structure_first_falls_back_to_in_range_unit() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 150.0, 0.0, false));
        view.push_unit(enemy_unit(3, 0.0, 90.0));

        let unit = make_unit(UnitKind::Disintegrator, 100.0);
        let target = get_policy(UnitKind::Disintegrator)
            .select_target(&unit, &view)
            .unwrap();
        assert_eq!(target.id, SerialId(3));
    }

    #[test]
    fn test_structure_first_nothing_in_range_picks_closer() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 300.0, 0.0, false));
        view.push_unit(enemy_unit(3, 0.0, 200.0));

        let unit = make_unit(UnitKind::Disintegrator, 100.0);
        let policy = get_policy(UnitKind::Disintegrator);
        assert_eq!(policy.select_target(&unit, &view).unwrap().id, SerialId(3));

        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 180.0, 0.0, false));
        view.push_unit(enemy_unit(3, 0.0, 200.0));
        assert_eq!(policy.select_target(&unit, &view).unwrap().id, SerialId(2));
    }

    #[test]
    fn test_structure_first_range_counts_target_radius() {
        let mut view = WorldView::new();
        view.push_structure(StructureEntry {
            radius: 16.0,
            ..structure(2, THEIRS, 110.0, 0.0, false)
        });
        view.push_unit(enemy_unit(3, 0.0, 60.0));

        let unit = make_unit(UnitKind::Disintegrator, 100.0);
        let target = get_policy(UnitKind::Disintegrator)
            .select_target(&unit, &view)
            .unwrap();
        assert_eq!(target.id, SerialId(2), "surface at 94 is within 100");
    }

    #[test]
    fn test_structure_first_scans_all_structures_in_range() {
        let mut view = WorldView::new();
        // Nearest structure, but its surface (96) is out of reach.
        view.push_structure(StructureEntry {
            radius: 4.0,
            ..structure(2, THEIRS, 100.0, 0.0, false)
        });
        // Farther, larger structure whose surface (90) is in reach.
        view.push_structure(StructureEntry {
            radius: 20.0,
            ..structure(3, THEIRS, -110.0, 0.0, false)
        });
        view.push_unit(enemy_unit(4, 0.0, 50.0));

        let unit = make_unit(UnitKind::Disintegrator, 95.0);
        let target = get_policy(UnitKind::Disintegrator)
            .select_target(&unit, &view)
            .unwrap();
        assert_eq!(target.id, SerialId(3));
        assert_eq!(target.kind, CandidateKind::Structure);
    }

    #[test]
    fn test_nearest_within_filters_by_surface_distance() {
        let mut view = WorldView::new();
        view.push_structure(StructureEntry {
            radius: 4.0,
            ..structure(2, THEIRS, 100.0, 0.0, false)
        });
        view.push_structure(StructureEntry {
            radius: 20.0,
            ..structure(3, THEIRS, -110.0, 0.0, false)
        });
        view.push_unit(UnitEntry {
            radius: 10.0,
            ..enemy_unit(5, 0.0, 104.0)
        });
        view.push_unit(enemy_unit(6, 0.0, 96.0));

        let origin = Position::new(0.0, 0.0);
        let s = view.nearest_structure_within(origin, OURS, 95.0).unwrap();
        assert_eq!(s.id, SerialId(3));
        assert!(view.nearest_structure_within(origin, OURS, 80.0).is_none());

        // Unit 5 is farther by center but its surface (94) is in reach.
        let u = view.nearest_unit_within(origin, OURS, 95.0).unwrap();
        assert_eq!(u.id, SerialId(5));
        assert!(view.nearest_unit_within(origin, THEIRS, 95.0).is_none());
    }

    #[test]
    fn test_unit_first_ignores_closer_structure() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 10.0, 0.0, false));
        view.push_unit(enemy_unit(3, 500.0, 0.0));

        let unit = make_unit(UnitKind::Trihedron, TRIHEDRON_RANGE);
        let target = get_policy(UnitKind::Trihedron)
            .select_target(&unit, &view)
            .unwrap();
        assert_eq!(target.id, SerialId(3));
    }

    #[test]
    fn test_unit_first_uses_structure_when_no_units() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 10.0, 0.0, false));
        view.push_unit(UnitEntry {
            alive: false,
            ..enemy_unit(3, 5.0, 0.0)
        });

        let unit = make_unit(UnitKind::Trihedron, TRIHEDRON_RANGE);
        let target = get_policy(UnitKind::Trihedron)
            .select_target(&unit, &view)
            .unwrap();
        assert_eq!(target.kind, CandidateKind::Structure);
    }

    #[test]
    fn test_units_only_filter_skips_structures() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 10.0, 0.0, false));

        let unit = make_unit(UnitKind::Overseer, OVERSEER_RANGE);
        assert!(get_policy(UnitKind::Overseer)
            .select_target(&unit, &view)
            .is_none());
    }

    #[test]
    fn test_nearest_of_either_tie_favors_unit() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 40.0, 0.0, false));
        view.push_unit(enemy_unit(3, 0.0, 40.0));

        let unit = make_unit(UnitKind::Prism, PRISM_RANGE);
        let policy = get_policy(UnitKind::Prism);
        assert_eq!(
            policy.select_target(&unit, &view).unwrap().kind,
            CandidateKind::Unit
        );

        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 39.0, 0.0, false));
        view.push_unit(enemy_unit(3, 0.0, 40.0));
        assert_eq!(
            policy.select_target(&unit, &view).unwrap().kind,
            CandidateKind::Structure
        );
    }

    // ---- Movement ----

    #[test]
    fn test_band_classification() {
        assert_eq!(classify(60.0, 80.0, 120.0), Band::Retreat);
        assert_eq!(classify(80.0, 80.0, 120.0), Band::Hold);
        assert_eq!(classify(100.0, 80.0, 120.0), Band::Hold);
        assert_eq!(classify(120.0, 80.0, 120.0), Band::Hold);
        assert_eq!(classify(200.0, 80.0, 120.0), Band::Pursuit);
    }

    #[test]
    fn test_band_transitions_produce_intents() {
        let policy = custom_policy(PriorityClass::UnitFirst, CandidateFilter::UnitsOnly);
        let table = table_with(UnitKind::Prism, policy);
        let unit = make_unit(UnitKind::Prism, 300.0);

        // Retreat: straight away from the target at unit speed.
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 60.0, 0.0));
        let decision = decide(&unit, &table, &view);
        match decision.movement.intent {
            MoveIntent::Drift { velocity } => {
                assert!(velocity.x < 0.0, "should back away from +x target");
                assert!(velocity.y.abs() < 1e-9);
                assert!((velocity.speed() - unit.speed).abs() < 1e-9);
            }
            other => panic!("expected retreat, got {other:?}"),
        }

        // Hold.
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 100.0, 0.0));
        let decision = decide(&unit, &table, &view);
        assert_eq!(decision.movement.intent, MoveIntent::Hold);

        // Pursue, stopping at the optimal distance.
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 200.0, 0.0));
        let decision = decide(&unit, &table, &view);
        assert_eq!(
            decision.movement.intent,
            MoveIntent::MoveTo {
                point: Position::new(200.0, 0.0),
                arrival: 120.0,
            }
        );
    }

    #[test]
    fn test_range_factor_bands_scale_with_weapon() {
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 500.0, 0.0));

        let unit = make_unit(UnitKind::Trihedron, 100.0);
        let decision = decide(&unit, &PolicyTable::default(), &view);
        match decision.movement.intent {
            MoveIntent::MoveTo { arrival, .. } => assert!((arrival - 80.0).abs() < 1e-9),
            other => panic!("expected approach, got {other:?}"),
        }
    }

    #[test]
    fn test_no_target_seeks_enemy_base() {
        let policy = custom_policy(PriorityClass::UnitFirst, CandidateFilter::UnitsOnly);
        let table = table_with(UnitKind::Trihedron, policy);

        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 600.0, 800.0, true));
        view.push_unit(UnitEntry {
            alive: false,
            ..enemy_unit(3, 10.0, 0.0)
        });

        let unit = make_unit(UnitKind::Trihedron, TRIHEDRON_RANGE);
        let decision = decide(&unit, &table, &view);
        assert_eq!(decision.target, None);
        assert_eq!(
            decision.movement.intent,
            MoveIntent::MoveTo {
                point: Position::new(600.0, 800.0),
                arrival: BASE_ARRIVAL_TOLERANCE,
            }
        );

        let mut mounts = vec![
            WeaponMount {
                shoot: true,
                aim: Some(Position::new(1.0, 1.0)),
            };
            2
        ];
        decision.engagement.apply(&mut mounts);
        assert!(mounts.iter().all(|m| !m.shoot && m.aim.is_none()));
    }

    #[test]
    fn test_no_target_and_no_base_holds() {
        let unit = make_unit(UnitKind::Trihedron, TRIHEDRON_RANGE);
        let decision = decide(&unit, &PolicyTable::default(), &WorldView::new());
        assert_eq!(decision.target, None);
        assert_eq!(decision.movement.intent, MoveIntent::Hold);
        assert_eq!(decision.engagement, EngagementPlan::disabled());
    }

    #[test]
    fn test_overseer_orbits_base_with_bands() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, THEIRS, 1000.0, 0.0, true));

        let unit = make_unit(UnitKind::Overseer, OVERSEER_RANGE);
        let decision = decide(&unit, &PolicyTable::default(), &view);
        assert_eq!(
            decision.movement.intent,
            MoveIntent::MoveTo {
                point: Position::new(1000.0, 0.0),
                arrival: OVERSEER_OPTIMAL_RANGE,
            }
        );
        // Structures are not Overseer candidates, so nothing is shot at.
        assert!(!decision.engagement.shoot);

        let close = UnitContext {
            position: Position::new(950.0, 0.0),
            ..unit
        };
        let decision = decide(&close, &PolicyTable::default(), &view);
        assert!(matches!(decision.movement.intent, MoveIntent::Drift { .. }));
    }

    #[test]
    fn test_monolith_holds_without_target() {
        let mut view = WorldView::new();
        view.push_structure(structure(2, OURS, 1000.0, 0.0, true));

        let unit = make_unit(UnitKind::Monolith, MONOLITH_RANGE);
        let decision = decide(&unit, &PolicyTable::default(), &view);
        assert_eq!(decision.movement.intent, MoveIntent::Hold);
    }

    #[test]
    fn test_tracking_units_face_target() {
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 0.0, 200.0));

        let unit = make_unit(UnitKind::Trihedron, TRIHEDRON_RANGE);
        let decision = decide(&unit, &PolicyTable::default(), &view);
        assert!((decision.movement.facing - 90.0).abs() < 1e-9);
        // Facing applies even though the target is out of weapon range.
        assert!(!decision.engagement.shoot);
    }

    #[test]
    fn test_spin_increments_every_tick_regardless_of_target() {
        let mut with_target = WorldView::new();
        with_target.push_unit(enemy_unit(3, 0.0, -300.0));
        let empty = WorldView::new();
        let table = PolicyTable::default();

        let mut unit = make_unit(UnitKind::Overseer, OVERSEER_RANGE);
        for tick in 0..20 {
            let view = if tick % 2 == 0 { &with_target } else { &empty };
            let decision = decide(&unit, &table, view);
            let expected = unit.facing + OVERSEER_SPIN_PER_TICK;
            assert!(
                (decision.movement.facing - expected).abs() < 1e-12,
                "tick {tick}: facing {} != {expected}",
                decision.movement.facing
            );
            assert!(decision.movement.facing > unit.facing);
            unit.facing = decision.movement.facing;
            unit.current_target = decision.target;
        }
        assert!((unit.facing - 20.0 * OVERSEER_SPIN_PER_TICK).abs() < 1e-9);
    }

    // ---- Engagement ----

    #[test]
    fn test_engagement_uses_surface_distance() {
        let mut view = WorldView::new();
        view.push_unit(UnitEntry {
            radius: 10.0,
            ..enemy_unit(3, 30.0, 40.0)
        });

        let unit = make_unit(UnitKind::Trihedron, 45.0);
        let decision = decide(&unit, &PolicyTable::default(), &view);
        assert!(decision.engagement.shoot);
        assert_eq!(decision.engagement.aim, Some(Position::new(30.0, 40.0)));

        let unit = make_unit(UnitKind::Trihedron, 35.0);
        let decision = decide(&unit, &PolicyTable::default(), &view);
        assert!(!decision.engagement.shoot);
        assert_eq!(decision.engagement.aim, None);
        // Still targeted and faced, just not fired upon.
        assert!(decision.target.is_some());
    }

    #[test]
    fn test_engagement_plan_applies_to_every_mount() {
        let plan = EngagementPlan {
            shoot: true,
            aim: Some(Position::new(5.0, 6.0)),
        };
        let mut mounts = vec![WeaponMount::default(); 3];
        plan.apply(&mut mounts);
        assert!(mounts
            .iter()
            .all(|m| m.shoot && m.aim == Some(Position::new(5.0, 6.0))));
    }

    // ---- Decision ----

    #[test]
    fn test_decision_is_idempotent_for_unchanged_world() {
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 60.0, 20.0));
        view.push_unit(enemy_unit(4, -80.0, 5.0));
        view.push_structure(structure(5, THEIRS, 40.0, 40.0, false));
        let table = PolicyTable::default();

        for kind in UnitKind::ALL {
            let mut unit = make_unit(kind, 150.0);
            let first = decide(&unit, &table, &view);
            unit.current_target = first.target;
            let second = decide(&unit, &table, &view);
            assert_eq!(first.target, second.target, "{kind:?}");
            assert_eq!(first.engagement, second.engagement, "{kind:?}");
            assert_eq!(first.movement.intent, second.movement.intent, "{kind:?}");
        }
    }

    #[test]
    fn test_stale_target_is_reported_and_replaced() {
        let mut view = WorldView::new();
        view.push_unit(UnitEntry {
            alive: false,
            ..enemy_unit(3, 10.0, 0.0)
        });
        view.push_unit(enemy_unit(4, 50.0, 0.0));

        let unit = UnitContext {
            current_target: Some(TargetRef {
                id: SerialId(3),
                kind: CandidateKind::Unit,
            }),
            ..make_unit(UnitKind::Trihedron, TRIHEDRON_RANGE)
        };
        let decision = decide(&unit, &PolicyTable::default(), &view);
        assert_eq!(decision.lost_target, Some(SerialId(3)));
        assert_eq!(decision.target.map(|t| t.id), Some(SerialId(4)));
    }

    #[test]
    fn test_vanished_target_is_stale() {
        let unit = UnitContext {
            current_target: Some(TargetRef {
                id: SerialId(99),
                kind: CandidateKind::Structure,
            }),
            ..make_unit(UnitKind::Disintegrator, DISINTEGRATOR_RANGE)
        };
        let decision = decide(&unit, &PolicyTable::default(), &WorldView::new());
        assert_eq!(decision.lost_target, Some(SerialId(99)));
        assert_eq!(decision.target, None);
    }

    #[test]
    fn test_missing_policy_seeks_enemy_base() {
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 10.0, 0.0));
        view.push_structure(structure(4, THEIRS, 500.0, 0.0, true));

        let mut table = PolicyTable::default();
        table.remove(UnitKind::Prism);
        assert!(table.get(UnitKind::Prism).is_err());

        let unit = make_unit(UnitKind::Prism, PRISM_RANGE);
        let decision = decide(&unit, &table, &view);
        assert_eq!(decision.target, None);
        assert_eq!(
            decision.movement.intent,
            MoveIntent::MoveTo {
                point: Position::new(500.0, 0.0),
                arrival: BASE_ARRIVAL_TOLERANCE,
            }
        );
        assert!(decision.movement.facing.abs() < 1e-9);
        assert_eq!(decision.engagement, EngagementPlan::disabled());
    }

    #[test]
    fn test_missing_policy_without_base_holds() {
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 10.0, 0.0));

        let unit = UnitContext {
            facing: 33.0,
            ..make_unit(UnitKind::Prism, PRISM_RANGE)
        };
        let decision = decide(&unit, &PolicyTable::empty(), &view);
        assert_eq!(decision.movement.intent, MoveIntent::Hold);
        assert_eq!(decision.movement.facing, 33.0);
        assert!(!decision.engagement.shoot);
    }

    #[test]
    fn test_overlapping_target_treated_as_none() {
        let mut view = WorldView::new();
        view.push_unit(enemy_unit(3, 0.0, 0.0));
        view.push_structure(structure(4, THEIRS, 500.0, 0.0, true));

        let policy = custom_policy(PriorityClass::UnitFirst, CandidateFilter::UnitsOnly);
        let table = table_with(UnitKind::Trihedron, policy);
        let unit = make_unit(UnitKind::Trihedron, TRIHEDRON_RANGE);
        let decision = decide(&unit, &table, &view);
        assert_eq!(decision.target, None);
        assert!(!decision.engagement.shoot);
        assert_eq!(
            decision.movement.intent,
            MoveIntent::MoveTo {
                point: Position::new(500.0, 0.0),
                arrival: BASE_ARRIVAL_TOLERANCE,
            }
        );
    }

    // ---- Policy table ----

    #[test]
    fn test_default_table_has_every_kind() {
        let table = PolicyTable::default();
        assert_eq!(table.len(), UnitKind::ALL.len());
        for kind in UnitKind::ALL {
            assert_eq!(*table.get(kind).unwrap(), get_policy(kind));
        }
        assert!(PolicyTable::empty().is_empty());
    }

    #[test]
    fn test_policy_overrides_from_json() {
        let json = r#"{
            "Prism": {
                "priority": "StructureFirst",
                "filter": "Both",
                "bands": { "optimal": { "World": 64.0 }, "min": { "RangeFactor": 0.25 } },
                "facing": { "Spin": { "degrees_per_tick": 1.5 } },
                "no_target": "Hold"
            }
        }"#;
        let overrides: PolicyTable = serde_json::from_str(json).unwrap();
        let mut table = PolicyTable::default();
        table.merge(overrides);

        let prism = table.get(UnitKind::Prism).unwrap();
        assert_eq!(prism.priority, PriorityClass::StructureFirst);
        assert_eq!(prism.bands.optimal.resolve(200.0), 64.0);
        assert_eq!(prism.bands.min.resolve(200.0), 50.0);
        assert_eq!(prism.no_target, NoTargetRule::Hold);
        // Other rows untouched.
        assert_eq!(
            *table.get(UnitKind::Trihedron).unwrap(),
            get_policy(UnitKind::Trihedron)
        );
    }
}
