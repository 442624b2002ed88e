//! End-to-end walk-throughs of the list-query engine against seeded
//! record collections, mirroring how the dashboard views drive it.

use carebase_core::forms::{submit_add, PatientDraft};
use carebase_core::models::{Appointment, Gender, Patient};
use carebase_core::query::{DateRange, ListQuery, PageSize};
use carebase_core::store::RecordStore;
use chrono::NaiveDate;

/// Fourteen patients, alternating gender, with stable ids and names.
fn seed_patients() -> RecordStore<Patient> {
    let names = [
        "Asha Rao",
        "Vikram Iyer",
        "Radha Nair",
        "Arjun Mehta",
        "Priya Menon",
        "Rohan Das",
        "Kavya Pillai",
        "Sanjay Kulkarni",
        "Divya Bhat",
        "Nikhil Joshi",
        "Lakshmi Reddy",
        "Aditya Verma",
        "Sneha Kamat",
        "Rahul Sen",
    ];
    let records = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let gender = if i % 2 == 0 { Gender::Female } else { Gender::Male };
            let mut patient = Patient::new((*name).to_string(), gender);
            patient.id = format!("{:08}", 10_000_001 + i);
            patient
        })
        .collect();
    RecordStore::from_records(records)
}

#[test]
fn fourteen_patients_paginate_into_two_pages() {
    let store = seed_patients();
    let mut query = ListQuery::new(PageSize::fixed(10));

    let page = query.page(store.records());
    assert_eq!(page.filtered_count, 14);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].name, "Asha Rao");
    assert_eq!(page.items[9].name, "Nikhil Joshi");

    query.next_page(store.records());
    let page = query.page(store.records());
    assert_eq!(page.current_page, 2);
    assert_eq!(page.items.len(), 4);
    assert_eq!(page.items[0].name, "Lakshmi Reddy");
}

#[test]
fn gender_filter_narrows_and_resets_to_page_one() {
    let store = seed_patients();
    let mut query = ListQuery::new(PageSize::fixed(10));
    query.next_page(store.records());
    assert_eq!(query.page(store.records()).current_page, 2);

    query.set_field("gender", "Female");
    let page = query.page(store.records());
    assert_eq!(page.current_page, 1);
    assert_eq!(page.filtered_count, 7);
    assert!(page.items.iter().all(|p| p.gender == Gender::Female));
}

#[test]
fn next_on_last_page_is_a_noop() {
    let store = seed_patients();
    let mut query = ListQuery::new(PageSize::fixed(10));
    query.next_page(store.records());

    let before = query.page(store.records());
    assert_eq!(before.current_page, before.total_pages);

    query.next_page(store.records());
    assert_eq!(query.page(store.records()).current_page, 2);
}

#[test]
fn page_size_all_disables_pagination() {
    let store = seed_patients();
    let mut query = ListQuery::new(PageSize::fixed(10));
    query.set_page_size(PageSize::All);

    let page = query.page(store.records());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 14);
}

#[test]
fn empty_filters_pass_everything_in_order() {
    let store = seed_patients();
    let mut query = ListQuery::new(PageSize::All);
    let page = query.page(store.records());

    let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
    let expected: Vec<String> = (0..14).map(|i| format!("{:08}", 10_000_001 + i)).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn filtering_twice_is_idempotent() {
    let store = seed_patients();
    let mut query = ListQuery::new(PageSize::All);
    query.set_search("ra");

    let first: Vec<String> = query
        .page(store.records())
        .items
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let second: Vec<String> = query
        .page(store.records())
        .items
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn blank_age_add_form_yields_zero_not_error() {
    let mut store = seed_patients();
    let id = submit_add(
        &mut store,
        PatientDraft {
            name: "Walk-in".into(),
            gender: Some(Gender::Other),
            ..Default::default()
        },
    );
    let added = store.get(&id).unwrap();
    assert_eq!(added.age, 0);
    assert_eq!(store.len(), 15);
}

fn seed_appointments() -> Vec<Appointment> {
    let day = |d| NaiveDate::from_ymd_opt(2026, 4, d).unwrap();
    (1..=20)
        .map(|d| {
            Appointment::new(
                format!("{:08}", 20_000_000 + d),
                format!("Patient {d}"),
                "Meera Shah".into(),
                day(d as u32),
            )
        })
        .collect()
}

#[test]
fn appointment_date_range_is_inclusive() {
    let records = seed_appointments();
    let mut query = ListQuery::new(PageSize::All);
    let day = |d| NaiveDate::from_ymd_opt(2026, 4, d).unwrap();

    query.set_date_range(DateRange::new(Some(day(5)), Some(day(8))));
    let page = query.page(&records);
    assert_eq!(page.filtered_count, 4);
    assert!(page
        .items
        .iter()
        .all(|a| a.date >= day(5) && a.date <= day(8)));
}

#[test]
fn one_sided_date_range_bounds_one_side() {
    let records = seed_appointments();
    let mut query = ListQuery::new(PageSize::All);
    let day = |d| NaiveDate::from_ymd_opt(2026, 4, d).unwrap();

    query.set_date_range(DateRange::new(Some(day(18)), None));
    assert_eq!(query.page(&records).filtered_count, 3);

    query.set_date_range(DateRange::new(None, Some(day(3))));
    assert_eq!(query.page(&records).filtered_count, 3);
}

#[test]
fn zero_match_filter_renders_page_one_of_one() {
    let store = seed_patients();
    let mut query = ListQuery::new(PageSize::fixed(10));
    query.set_search("zzz-no-such-name");

    let page = query.page(store.records());
    assert_eq!(page.filtered_count, 0);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}
