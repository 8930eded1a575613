use chrono::{NaiveDate, TimeZone, Utc};

use tabtre_core::domain::{
    Category, Criticality, Exception, ExceptionState, ExceptionType, FinancialMovement, Frequency,
    ManualEntry, RecordStatus, ReferenceType, Sign, Source, Visibility,
};
use tabtre_core::filters::{ExceptionFilter, FilterLogic, ManualEntryFilter, MovementFilter};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn movement(id: &str, category: Category, amount: f64, sign: Sign, day: NaiveDate) -> FinancialMovement {
    FinancialMovement {
        id: id.into(),
        company_id: "c1".into(),
        category,
        kind: "Facture".into(),
        amount,
        sign,
        date: day,
        reference_type: None,
        reference: None,
        reference_state: None,
        odoo_link: None,
        source: Source::Odoo,
        note: None,
        visibility: Visibility::Public,
        status: RecordStatus::Active,
        exclude_from_analytics: false,
        created_by: None,
        created_at: None,
        updated_by: None,
        updated_at: None,
        deactivated_by: None,
        deactivated_at: None,
        deactivation_reason: None,
    }
}

fn entry(id: &str, created_by: &str) -> ManualEntry {
    ManualEntry {
        id: id.into(),
        company_id: "c1".into(),
        category: Category::Compta,
        kind: "Loyer".into(),
        reference: None,
        reference_type: None,
        amount: 1500.0,
        sign: Sign::Outflow,
        frequency: Frequency::Monthly,
        start_date: date(2024, 1, 1),
        end_date: Some(date(2024, 12, 1)),
        note: None,
        visibility: Visibility::Public,
        status: RecordStatus::Active,
        created_by: created_by.into(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
        updated_by: None,
        updated_at: None,
        reference_state: None,
    }
}

fn exception(id: &str, description: &str) -> Exception {
    Exception {
        id: id.into(),
        company_id: "c1".into(),
        category: Category::Achat,
        kind: "Facture fournisseur".into(),
        exception_type: ExceptionType::Unprocessed,
        criticality: Criticality::Major,
        description: description.into(),
        amount: 420.0,
        sign: Sign::Outflow,
        reference_type: None,
        reference: None,
        reference_state: None,
        odoo_link: None,
        state: ExceptionState::Visible,
    }
}

#[test]
fn empty_specification_passes_everything_in_order() {
    let movements = vec![
        movement("m1", Category::Vente, 100.0, Sign::Inflow, date(2024, 1, 1)),
        movement("m2", Category::Achat, 200.0, Sign::Outflow, date(2024, 1, 2)),
    ];
    let filter = MovementFilter::default();
    let kept = filter.apply(&movements);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].id, "m1");
    assert_eq!(kept[1].id, "m2");
}

#[test]
fn and_excludes_what_or_includes_on_a_single_match() {
    let record = movement("m1", Category::Vente, 100.0, Sign::Inflow, date(2024, 1, 1));
    let mut filter = MovementFilter {
        category: Some(vec![Category::Vente]),
        sign: Some(vec![Sign::Outflow]),
        ..MovementFilter::default()
    };

    filter.logic = FilterLogic::Or;
    assert!(filter.matches(&record));
    filter.logic = FilterLogic::And;
    assert!(!filter.matches(&record));
}

#[test]
fn amount_bounds_compare_magnitudes() {
    let record = movement("m1", Category::Compta, -500.0, Sign::Outflow, date(2024, 1, 1));
    let filter = MovementFilter {
        amount_min: Some(400.0),
        amount_max: Some(600.0),
        ..MovementFilter::default()
    };
    assert!(filter.matches(&record));
}

#[test]
fn date_bounds_are_inclusive() {
    let filter = MovementFilter {
        date_min: Some(date(2024, 1, 10)),
        date_max: Some(date(2024, 1, 20)),
        ..MovementFilter::default()
    };
    assert!(filter.matches(&movement("m", Category::Rh, 1.0, Sign::Inflow, date(2024, 1, 10))));
    assert!(filter.matches(&movement("m", Category::Rh, 1.0, Sign::Inflow, date(2024, 1, 20))));
    assert!(!filter.matches(&movement("m", Category::Rh, 1.0, Sign::Inflow, date(2024, 1, 21))));
}

#[test]
fn absent_reference_type_never_matches_a_required_set() {
    let record = movement("m1", Category::Vente, 10.0, Sign::Inflow, date(2024, 1, 1));
    let filter = MovementFilter {
        reference_type: Some(vec![ReferenceType::SaleInvoice]),
        ..MovementFilter::default()
    };
    assert!(!filter.matches(&record));

    let mut with_reference = record;
    with_reference.reference_type = Some(ReferenceType::SaleInvoice);
    assert!(filter.matches(&with_reference));
}

#[test]
fn reference_search_is_case_insensitive() {
    let mut record = movement("m1", Category::Vente, 10.0, Sign::Inflow, date(2024, 1, 1));
    record.reference = Some("FAC-2024-0042".into());
    let filter = MovementFilter {
        reference: Some("fac-2024".into()),
        ..MovementFilter::default()
    };
    assert!(filter.matches(&record));
}

#[test]
fn manual_entry_author_and_note_predicates() {
    let mut records = vec![entry("e1", "alice"), entry("e2", "bob")];
    records[1].note = Some("Réglé en février".into());

    let by_author = ManualEntryFilter {
        user: Some(vec!["alice".into()]),
        ..ManualEntryFilter::default()
    };
    assert_eq!(by_author.apply(&records).len(), 1);

    let by_note = ManualEntryFilter {
        note_search: Some("février".into()),
        ..ManualEntryFilter::default()
    };
    let kept = by_note.apply(&records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "e2");
}

#[test]
fn update_date_bounds_only_apply_to_updated_entries() {
    let mut never_updated = entry("e1", "alice");
    never_updated.updated_at = None;
    let mut updated = entry("e2", "alice");
    updated.updated_at = Some(Utc.with_ymd_and_hms(2024, 3, 5, 17, 45, 0).unwrap());

    let filter = ManualEntryFilter {
        update_date_min: Some(date(2024, 3, 1)),
        update_date_max: Some(date(2024, 3, 31)),
        ..ManualEntryFilter::default()
    };
    // No check is collected for the never-updated entry, so it passes.
    assert!(filter.matches(&never_updated));
    assert!(filter.matches(&updated));

    let out_of_range = ManualEntryFilter {
        update_date_max: Some(date(2024, 2, 1)),
        ..ManualEntryFilter::default()
    };
    assert!(!out_of_range.matches(&updated));
}

#[test]
fn exception_description_and_state_predicates() {
    let mut records = vec![
        exception("x1", "Montant TVA incohérent"),
        exception("x2", "Pièce manquante"),
    ];
    records[1].state = ExceptionState::Hidden;

    let by_description = ExceptionFilter {
        description_search: Some("tva".into()),
        ..ExceptionFilter::default()
    };
    let kept = by_description.apply(&records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "x1");

    let visible_only = ExceptionFilter {
        state: Some(vec![ExceptionState::Visible]),
        ..ExceptionFilter::default()
    };
    assert_eq!(visible_only.apply(&records).len(), 1);
}

#[test]
fn or_logic_unions_exception_predicates() {
    let records = vec![
        exception("x1", "Montant TVA incohérent"),
        exception("x2", "Pièce manquante"),
    ];
    let filter = ExceptionFilter {
        description_search: Some("manquante".into()),
        criticality: Some(vec![Criticality::Major]),
        logic: FilterLogic::Or,
        ..ExceptionFilter::default()
    };
    assert_eq!(filter.apply(&records).len(), 2);
}
