// ABOUTME: Resolves a student's MBG standard group from age or class label
// ABOUTME: Age bands and roman-numeral class labels map to level/grade, then to a group id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Group Resolver
//!
//! Two entry paths place a student on the school ladder:
//!
//! - **Age**: the first age band containing the age gives level, grade, and a
//!   default gender (reported only, never used to narrow the match)
//! - **Class label**: a roman numeral token (`I`..`XII`) gives the grade; an
//!   optional level token (`SD`, `SMP`, `SMA`, ...) gives the level, otherwise
//!   it is derived from the grade
//!
//! The placement is then matched against education-group rows by level and
//! grade range. When a gender is given, rows whose group id carries that
//! gender's suffix are preferred; ungendered rows serve as the fallback.

use mbg_core::models::{
    EducationGroupRecord, EducationLevel, Gender, StudentPlacement, StudentProfile,
};
use mbg_core::tables::{AgeGroupTable, EducationGroupTable};
use mbg_core::{EvaluationError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Roman numerals recognized in class labels
const ROMAN_NUMERALS: [(&str, u8); 12] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
    ("XI", 11),
    ("XII", 12),
];

/// A student's position on the school ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradePlacement {
    /// Education level
    pub level: EducationLevel,
    /// Absolute grade (1-12)
    pub grade: u8,
    /// Default gender of the age band (unspecified for class labels)
    pub default_gender: Gender,
}

/// Outcome of group resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGroup {
    /// Standard group id
    pub group_id: String,
    /// Education level the student was placed at
    pub level: EducationLevel,
    /// Absolute grade the student was placed at
    pub grade: u8,
    /// Gender filter that was applied
    pub gender: Gender,
    /// Default gender of the matching age band, informational only
    pub default_gender: Gender,
}

/// Place a student by age using the first matching age band
///
/// # Errors
///
/// Returns `AgeOutOfRange` if no band contains `age`
pub fn place_by_age(age: u32, age_groups: &AgeGroupTable) -> Result<GradePlacement> {
    let band = age_groups
        .find(age)
        .ok_or(EvaluationError::AgeOutOfRange { age })?;

    Ok(GradePlacement {
        level: band.education_level,
        grade: band.grade,
        default_gender: band.default_gender,
    })
}

/// Parse the grade numeral of a class label, e.g. `"SD Kelas III"` → 3
///
/// Tokens are split on anything that is not alphanumeric and compared
/// case-insensitively, so numerals inside words are never picked up.
#[must_use]
pub fn parse_grade_numeral(label: &str) -> Option<u8> {
    label_tokens(label).find_map(roman_grade)
}

/// Place a student by class label
///
/// A level token is optional and only counts when it precedes the numeral,
/// so school names after the class (`"Kelas VII Ma'arif"`) are ignored.
/// When a level is given and the numeral fits within that level's grades,
/// it counts within the level (`"SMP Kelas I"` → grade 7). The resulting
/// grade must belong to the given level.
///
/// # Errors
///
/// Returns `UnparsableClass` if the label has no roman numeral token, or if
/// the numeral cannot be a grade of the given level (`"SMP Kelas V"`)
pub fn place_by_class(label: &str) -> Result<GradePlacement> {
    let unparsable = || EvaluationError::UnparsableClass {
        label: label.to_owned(),
    };

    let tokens: Vec<&str> = label_tokens(label).collect();
    let (numeral_at, numeral) = tokens
        .iter()
        .enumerate()
        .find_map(|(at, token)| roman_grade(token).map(|grade| (at, grade)))
        .ok_or_else(unparsable)?;
    let explicit_level = tokens
        .iter()
        .take(numeral_at)
        .find_map(|token| EducationLevel::from_str_lossy(token));

    let grade = match explicit_level {
        Some(level) if numeral <= level.grade_count() => numeral + level.grade_offset(),
        _ => numeral,
    };
    let level = EducationLevel::from_grade(grade).ok_or_else(unparsable)?;
    if explicit_level.is_some_and(|explicit| explicit != level) {
        return Err(unparsable());
    }

    Ok(GradePlacement {
        level,
        grade,
        default_gender: Gender::Unspecified,
    })
}

/// Pick the group id for a level, grade, and gender
///
/// # Errors
///
/// Returns `GroupNotFound` if no row covers the grade at that level, or if
/// a gender is given and only rows of the other gender cover it
pub fn resolve_group_id(
    level: EducationLevel,
    grade: u8,
    gender: Gender,
    education_groups: &EducationGroupTable,
) -> Result<String> {
    let covering: Vec<&EducationGroupRecord> = education_groups.covering(level, grade).collect();

    let candidates: Vec<&EducationGroupRecord> = if gender.is_specified() {
        let gendered: Vec<_> = covering
            .iter()
            .copied()
            .filter(|row| row.gender_suffix() == Some(gender))
            .collect();
        if gendered.is_empty() {
            covering
                .iter()
                .copied()
                .filter(|row| row.gender_suffix().is_none())
                .collect()
        } else {
            gendered
        }
    } else {
        covering
    };

    let Some(first) = candidates.first() else {
        return Err(EvaluationError::GroupNotFound {
            level: level.to_string(),
            grade,
            gender: gender.to_string(),
        });
    };

    if candidates.len() > 1 {
        warn!(
            level = %level,
            grade,
            gender = %gender,
            matches = candidates.len(),
            chosen = %first.group_id,
            "Multiple education groups match; using the first row"
        );
    }

    Ok(first.group_id.clone())
}

/// Resolve a student's standard group
///
/// Only the caller's gender filters groups, so the age and class-label
/// paths agree for the same grade. The age band's default gender is
/// reported but never narrows the match.
///
/// # Errors
///
/// Returns `AgeOutOfRange`, `UnparsableClass`, or `GroupNotFound`
pub fn resolve_group(
    student: &StudentProfile,
    age_groups: &AgeGroupTable,
    education_groups: &EducationGroupTable,
) -> Result<ResolvedGroup> {
    let placement = match &student.placement {
        StudentPlacement::Age(age) => place_by_age(*age, age_groups)?,
        StudentPlacement::ClassLabel(label) => place_by_class(label)?,
    };

    let gender = student.gender;
    let group_id = resolve_group_id(placement.level, placement.grade, gender, education_groups)?;

    debug!(
        group.id = %group_id,
        level = %placement.level,
        grade = placement.grade,
        gender = %gender,
        "Resolved student group"
    );

    Ok(ResolvedGroup {
        group_id,
        level: placement.level,
        grade: placement.grade,
        gender,
        default_gender: placement.default_gender,
    })
}

fn roman_grade(token: &str) -> Option<u8> {
    ROMAN_NUMERALS
        .iter()
        .find(|(numeral, _)| numeral.eq_ignore_ascii_case(token))
        .map(|&(_, grade)| grade)
}

fn label_tokens(label: &str) -> impl Iterator<Item = &str> {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}
