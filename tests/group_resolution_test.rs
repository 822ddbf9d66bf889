// ABOUTME: Integration tests for student group resolution and standard lookup
// ABOUTME: Age bands, class labels, gendered groups, and lookup failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mbg_menu_validator::intelligence::group_resolver::{place_by_class, resolve_group};
use mbg_menu_validator::intelligence::standards::get_standard;
use mbg_menu_validator::models::{
    AgeGroupRecord, EducationGroupRecord, EducationLevel, Gender, StudentProfile,
};
use mbg_menu_validator::tables::{AgeGroupTable, EducationGroupTable, ReferenceTables};
use mbg_menu_validator::{ErrorCode, EvaluationError};

mod common;

fn group_of(tables: &ReferenceTables, student: &StudentProfile) -> String {
    resolve_group(student, &tables.age_groups, &tables.education_groups)
        .unwrap()
        .group_id
}

#[test]
fn test_age_and_class_label_agree() {
    common::init_test_logging();
    let tables = common::reference_tables();

    let by_age = group_of(&tables, &StudentProfile::by_age(9, Gender::Unspecified));
    let by_class = group_of(
        &tables,
        &StudentProfile::by_class("SD Kelas III", Gender::Unspecified),
    );

    assert_eq!(by_age, "SD_1_3");
    assert_eq!(by_age, by_class);
}

#[test]
fn test_class_label_variants() {
    let tables = common::reference_tables();
    let group = |label: &str| group_of(&tables, &StudentProfile::by_class(label, Gender::Unspecified));

    assert_eq!(group("kelas iii"), "SD_1_3");
    assert_eq!(group("MI Kelas II"), "SD_1_3");
    assert_eq!(group("Kelas VIII-B"), "SMP_7_9");
    assert_eq!(group("SMP Kelas II"), "SMP_7_9");
}

#[test]
fn test_explicit_gender_selects_gendered_group() {
    let tables = common::reference_tables();

    let boy = group_of(&tables, &StudentProfile::by_class("SD Kelas V", Gender::Male));
    let girl = group_of(&tables, &StudentProfile::by_class("SD Kelas V", Gender::Female));

    assert_eq!(boy, "SD_4_6_L");
    assert_eq!(girl, "SD_4_6_P");
}

#[test]
fn test_band_default_gender_is_reported_not_applied() {
    let tables = common::reference_tables();

    let resolved = resolve_group(
        &StudentProfile::by_age(10, Gender::Unspecified),
        &tables.age_groups,
        &tables.education_groups,
    )
    .unwrap();
    assert_eq!(resolved.group_id, "SD_4_6_L");
    assert_eq!(resolved.gender, Gender::Unspecified);
    assert_eq!(resolved.default_gender, Gender::Female);
    assert_eq!(resolved.level, EducationLevel::Sd);
    assert_eq!(resolved.grade, 4);

    let by_class = group_of(
        &tables,
        &StudentProfile::by_class("SD Kelas IV", Gender::Unspecified),
    );
    assert_eq!(resolved.group_id, by_class);

    let girl = group_of(&tables, &StudentProfile::by_age(10, Gender::Female));
    assert_eq!(girl, "SD_4_6_P");
}

#[test]
fn test_age_and_class_agree_with_gendered_lower_primary_groups() {
    let tables = ReferenceTables {
        age_groups: AgeGroupTable::from_records([AgeGroupRecord {
            age_min: 7,
            age_max: 9,
            education_level: EducationLevel::Sd,
            grade: 3,
            default_gender: Gender::Female,
        }]),
        education_groups: EducationGroupTable::from_records(["SD_1_3_L", "SD_1_3_P"].map(
            |group_id| EducationGroupRecord {
                level: EducationLevel::Sd,
                class_min: 1,
                class_max: 3,
                group_id: group_id.to_owned(),
            },
        )),
        ..ReferenceTables::default()
    };

    for gender in [Gender::Unspecified, Gender::Male, Gender::Female] {
        let by_age = group_of(&tables, &StudentProfile::by_age(9, gender));
        let by_class = group_of(&tables, &StudentProfile::by_class("SD Kelas III", gender));
        assert_eq!(by_age, by_class, "gender = {gender:?}");
    }

    assert_eq!(
        group_of(&tables, &StudentProfile::by_age(9, Gender::Male)),
        "SD_1_3_L"
    );
    assert_eq!(
        group_of(&tables, &StudentProfile::by_age(9, Gender::Female)),
        "SD_1_3_P"
    );
}

#[test]
fn test_class_label_level_must_match_numeral() {
    for label in ["SMP Kelas V", "SMA Kelas VI"] {
        let err = place_by_class(label).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnparsableClass, "label = {label:?}");
    }

    let placement = place_by_class("Kelas VII Ma'arif").unwrap();
    assert_eq!(placement.level, EducationLevel::Smp);
    assert_eq!(placement.grade, 7);
}

#[test]
fn test_ungendered_group_serves_every_gender() {
    let tables = common::reference_tables();
    for gender in [Gender::Male, Gender::Female, Gender::Unspecified] {
        assert_eq!(
            group_of(&tables, &StudentProfile::by_age(14, gender)),
            "SMP_7_9"
        );
    }
}

#[test]
fn test_age_outside_every_band() {
    let tables = common::reference_tables();

    for age in [3, 19, 40] {
        let err = resolve_group(
            &StudentProfile::by_age(age, Gender::Unspecified),
            &tables.age_groups,
            &tables.education_groups,
        )
        .unwrap_err();
        assert_eq!(err, EvaluationError::AgeOutOfRange { age });
    }
}

#[test]
fn test_label_without_numeral_is_unparsable() {
    for label in ["Kelas 3", "kelas tiga", "", "SD"] {
        let err = place_by_class(label).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnparsableClass, "label = {label:?}");
    }
}

#[test]
fn test_missing_education_row_is_group_not_found() {
    let mut tables = common::reference_tables();
    tables.education_groups = EducationGroupTable::default();

    let err = resolve_group(
        &StudentProfile::by_age(9, Gender::Unspecified),
        &tables.age_groups,
        &tables.education_groups,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GroupNotFound);
}

#[test]
fn test_standard_lookup() {
    let tables = common::reference_tables();

    let standard = get_standard("sd_1_3", &tables.standards).unwrap();
    assert_eq!(standard.group_id, "SD_1_3");

    // Group exists in education_group but has no standard row
    let group = group_of(&tables, &StudentProfile::by_age(17, Gender::Unspecified));
    let err = get_standard(&group, &tables.standards).unwrap_err();
    assert_eq!(err, EvaluationError::standard_not_found("SMA_10_12"));
}
