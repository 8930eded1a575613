use chrono::NaiveDate;
use uuid::Uuid;

use tabtre_core::domain::{Category, Sign};
use tabtre_core::simulation::{
    MovementDraft, MovementPatch, ScenarioSnapshot, Schedule, SimulationEngine,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(category: Category, kind: &str, amount: f64, sign: Sign, schedule: Schedule) -> MovementDraft {
    MovementDraft {
        category,
        kind: kind.into(),
        amount,
        sign,
        schedule,
        reference: None,
        reference_type: None,
        note: None,
        visibility: None,
    }
}

fn engine_for(user: &str) -> SimulationEngine {
    let mut engine = SimulationEngine::new();
    engine.set_current_user(Some(user.into()));
    engine
}

#[test]
fn create_scenario_requires_a_signed_in_user() {
    let mut engine = SimulationEngine::new();
    engine.create_scenario("Plan", "");
    assert!(engine.active_scenario().is_none());
    assert!(engine.user_scenarios().is_empty());
}

#[test]
fn create_scenario_sets_owner_and_becomes_active() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Plan Q1", "Hypothèses T1");
    let scenario = engine.active_scenario().expect("active scenario");
    assert_eq!(scenario.name, "Plan Q1");
    assert_eq!(scenario.created_by, "u1");
    assert_eq!(scenario.created_at, scenario.updated_at);
}

#[test]
fn quarterly_payroll_plan_generates_three_dated_events() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Q1 Plan", "");
    engine.add_movement(draft(
        Category::Rh,
        "Salaire",
        5000.0,
        Sign::Outflow,
        Schedule::Monthly {
            start: date(2024, 1, 1),
            end: date(2024, 3, 1),
        },
    ));

    let events = engine.generated_movements();
    assert_eq!(events.len(), 3);
    let expected_dates = [date(2024, 1, 1), date(2024, 2, 1), date(2024, 3, 1)];
    for (event, expected) in events.iter().zip(expected_dates) {
        assert_eq!(event.date, expected);
        assert_eq!(event.amount, 5000.0);
        assert_eq!(event.sign, Sign::Outflow);
        assert_eq!(event.category, Category::Rh);
        assert_eq!(event.kind, "Salaire");
    }
}

#[test]
fn generated_movements_are_sorted_across_movements() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Mix", "");
    engine.add_movement(draft(
        Category::Vente,
        "Encaissement",
        900.0,
        Sign::Inflow,
        Schedule::OneTime {
            start: date(2024, 6, 15),
        },
    ));
    engine.add_movement(draft(
        Category::Achat,
        "Licence",
        300.0,
        Sign::Outflow,
        Schedule::Custom {
            dates: vec![date(2024, 6, 1), date(2024, 7, 1)],
        },
    ));

    let dates: Vec<NaiveDate> = engine.generated_movements().iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 6, 1), date(2024, 6, 15), date(2024, 7, 1)]);
}

#[test]
fn scenario_of_another_user_cannot_be_activated() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Privé", "");
    let foreign_id = engine.active_scenario().unwrap().id;

    engine.set_current_user(Some("u2".into()));
    engine.create_scenario("Mien", "");
    let own_id = engine.active_scenario().unwrap().id;

    engine.set_active_scenario(foreign_id);
    assert_eq!(engine.active_scenario().unwrap().id, own_id);
}

#[test]
fn signed_out_sessions_cannot_activate_anything() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Premier", "");
    let first_id = engine.active_scenario().unwrap().id;
    engine.create_scenario("Second", "");
    let second_id = engine.active_scenario().unwrap().id;

    engine.set_current_user(None);
    engine.set_active_scenario(first_id);
    assert_eq!(engine.active_scenario().unwrap().id, second_id);
    assert!(engine.user_scenarios().is_empty());
}

#[test]
fn user_scenarios_lists_only_own_scenarios_oldest_first() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Premier", "");
    engine.create_scenario("Deuxième", "");
    engine.set_current_user(Some("u2".into()));
    engine.create_scenario("Autre", "");

    engine.set_current_user(Some("u1".into()));
    let names: Vec<&str> = engine
        .user_scenarios()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Premier", "Deuxième"]);
}

#[test]
fn deleting_the_active_scenario_clears_the_selection() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Éphémère", "");
    let id = engine.active_scenario().unwrap().id;
    engine.delete_scenario(id);
    assert!(engine.active_scenario().is_none());
    assert!(engine.active_movements().is_empty());
}

#[test]
fn update_movement_regenerates_dates_from_the_merged_result() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Plan", "");
    engine.add_movement(draft(
        Category::Compta,
        "Acompte IS",
        1200.0,
        Sign::Outflow,
        Schedule::OneTime {
            start: date(2024, 3, 15),
        },
    ));
    let id = engine.active_movements()[0].id;

    engine.update_movement(
        id,
        MovementPatch {
            schedule: Some(Schedule::Monthly {
                start: date(2024, 3, 15),
                end: date(2024, 5, 15),
            }),
            amount: Some(1500.0),
            ..MovementPatch::default()
        },
    );

    let movement = engine.active_movements()[0].clone();
    assert_eq!(movement.amount, 1500.0);
    assert_eq!(
        movement.generated_dates,
        vec![date(2024, 3, 15), date(2024, 4, 15), date(2024, 5, 15)]
    );
}

#[test]
fn update_and_delete_of_unknown_movements_are_no_ops() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Plan", "");
    engine.add_movement(draft(
        Category::Autre,
        "Divers",
        10.0,
        Sign::Inflow,
        Schedule::OneTime {
            start: date(2024, 1, 1),
        },
    ));
    let updated_at = engine.active_scenario().unwrap().updated_at;

    engine.update_movement(Uuid::new_v4(), MovementPatch::default());
    engine.delete_movement(Uuid::new_v4());

    assert_eq!(engine.active_movements().len(), 1);
    assert_eq!(engine.active_scenario().unwrap().updated_at, updated_at);
}

#[test]
fn mutations_refresh_the_scenario_timestamp() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Plan", "");
    let created_at = engine.active_scenario().unwrap().created_at;
    engine.add_movement(draft(
        Category::Vente,
        "Vente",
        50.0,
        Sign::Inflow,
        Schedule::OneTime {
            start: date(2024, 2, 2),
        },
    ));
    assert!(engine.active_scenario().unwrap().updated_at >= created_at);

    let id = engine.active_movements()[0].id;
    engine.delete_movement(id);
    assert!(engine.active_movements().is_empty());
}

#[test]
fn import_reassigns_identity_and_ownership() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Origine", "desc");
    engine.add_movement(draft(
        Category::Rh,
        "Prime",
        800.0,
        Sign::Outflow,
        Schedule::OneTime {
            start: date(2024, 4, 1),
        },
    ));
    let source_id = engine.active_scenario().unwrap().id;
    let snapshot = engine.snapshot(source_id).expect("snapshot");

    engine.set_current_user(Some("u2".into()));
    engine.import_snapshot(snapshot.clone());

    let imported = engine.active_scenario().expect("imported active");
    assert_ne!(imported.id, source_id);
    assert_eq!(imported.created_by, "u2");
    assert_eq!(imported.movements, snapshot.movements);
    assert!(imported.created_at >= snapshot.created_at);
}

#[test]
fn import_without_a_user_changes_nothing() {
    let mut engine = SimulationEngine::new();
    let snapshot = ScenarioSnapshot {
        name: "Orphelin".into(),
        description: String::new(),
        movements: Vec::new(),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
        created_by: "u9".into(),
    };
    engine.import_snapshot(snapshot);
    assert!(engine.active_scenario().is_none());
}

#[test]
fn snapshot_of_unknown_scenario_is_none() {
    let engine = SimulationEngine::new();
    assert!(engine.snapshot(Uuid::new_v4()).is_none());
}

#[test]
fn clear_drops_every_scenario_and_the_selection() {
    let mut engine = engine_for("u1");
    engine.create_scenario("Un", "");
    engine.create_scenario("Deux", "");
    engine.clear();
    assert!(engine.active_scenario().is_none());
    assert!(engine.user_scenarios().is_empty());
}
