// ABOUTME: Student placement models and group reference rows
// ABOUTME: Education levels, gender, age-group and education-group records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use crate::constants::grades::{JUNIOR_SECONDARY_LAST, MAX_GRADE, MIN_GRADE, PRIMARY_LAST};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Education level of a student group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EducationLevel {
    /// Early childhood (PAUD/TK)
    Paud,
    /// Primary school, grades 1-6 (SD/MI)
    Sd,
    /// Junior secondary, grades 7-9 (SMP/MTs)
    Smp,
    /// Senior secondary, grades 10-12 (SMA/SMK/MA)
    Sma,
}

impl EducationLevel {
    /// Parse a level from its abbreviation or an equivalent school type
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paud" | "tk" | "ra" => Some(Self::Paud),
            "sd" | "mi" => Some(Self::Sd),
            "smp" | "mts" => Some(Self::Smp),
            "sma" | "smk" | "ma" => Some(Self::Sma),
            _ => None,
        }
    }

    /// Level a school grade belongs to
    #[must_use]
    pub const fn from_grade(grade: u8) -> Option<Self> {
        match grade {
            MIN_GRADE..=PRIMARY_LAST => Some(Self::Sd),
            7..=JUNIOR_SECONDARY_LAST => Some(Self::Smp),
            10..=MAX_GRADE => Some(Self::Sma),
            _ => None,
        }
    }

    /// Grade preceding the first grade of this level
    ///
    /// Used to place level-relative class numbers (e.g. "SMP kelas I")
    /// on the absolute 1-12 scale.
    #[must_use]
    pub const fn grade_offset(self) -> u8 {
        match self {
            Self::Paud | Self::Sd => 0,
            Self::Smp => PRIMARY_LAST,
            Self::Sma => JUNIOR_SECONDARY_LAST,
        }
    }

    /// Number of grades taught at this level (PAUD has no numbered grades)
    #[must_use]
    pub const fn grade_count(self) -> u8 {
        match self {
            Self::Paud => 0,
            Self::Sd => PRIMARY_LAST,
            Self::Smp => JUNIOR_SECONDARY_LAST - PRIMARY_LAST,
            Self::Sma => MAX_GRADE - JUNIOR_SECONDARY_LAST,
        }
    }

    /// Canonical abbreviation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paud => "PAUD",
            Self::Sd => "SD",
            Self::Smp => "SMP",
            Self::Sma => "SMA",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Student gender used to pick gendered groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (laki-laki)
    Male,
    /// Female (perempuan)
    Female,
    /// Not specified, or "all"
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse a gender from a free-form value; unknown values are unspecified
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        Self::from_code(s).unwrap_or(Self::Unspecified)
    }

    /// Parse a gender code as used in group-id suffixes
    ///
    /// Returns `None` when the value names no gender, so callers can tell
    /// an ungendered group id apart from a gendered one.
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "m" | "male" | "laki" | "laki-laki" | "pria" | "putra" => Some(Self::Male),
            "p" | "f" | "female" | "perempuan" | "wanita" | "putri" => Some(Self::Female),
            _ => None,
        }
    }

    /// Whether a gender filter should be applied
    #[must_use]
    pub const fn is_specified(self) -> bool {
        !matches!(self, Self::Unspecified)
    }

    /// Lower-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "all",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age band mapped to a school level and grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroupRecord {
    /// Lowest age in years (inclusive)
    pub age_min: u32,
    /// Highest age in years (inclusive)
    pub age_max: u32,
    /// Education level for this band
    pub education_level: EducationLevel,
    /// Absolute grade (1-12)
    pub grade: u8,
    /// Band default gender; reported with the resolution, never used to filter groups
    pub default_gender: Gender,
}

impl AgeGroupRecord {
    /// Whether the band contains `age`
    #[must_use]
    pub const fn contains(&self, age: u32) -> bool {
        self.age_min <= age && age <= self.age_max
    }
}

/// Grade band within a level mapped to a standard group id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationGroupRecord {
    /// Education level
    pub level: EducationLevel,
    /// Lowest grade (inclusive)
    pub class_min: u8,
    /// Highest grade (inclusive)
    pub class_max: u8,
    /// Standard group id, possibly with a gender suffix
    pub group_id: String,
}

impl EducationGroupRecord {
    /// Whether this row covers `grade` at `level`
    #[must_use]
    pub fn covers(&self, level: EducationLevel, grade: u8) -> bool {
        self.level == level && self.class_min <= grade && grade <= self.class_max
    }

    /// Gender encoded in the last segment of the group id, if any
    #[must_use]
    pub fn gender_suffix(&self) -> Option<Gender> {
        self.group_id
            .rsplit(['_', '-', ' '])
            .next()
            .filter(|segment| segment.len() < self.group_id.len())
            .and_then(Gender::from_code)
    }
}

/// How the student is placed in the school system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentPlacement {
    /// Age in years
    Age(u32),
    /// Class label such as "SD Kelas III"
    ClassLabel(String),
}

/// Student the menu is evaluated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Age or class label
    pub placement: StudentPlacement,
    /// Gender filter
    #[serde(default)]
    pub gender: Gender,
}

impl StudentProfile {
    /// Student identified by age
    #[must_use]
    pub const fn by_age(age: u32, gender: Gender) -> Self {
        Self {
            placement: StudentPlacement::Age(age),
            gender,
        }
    }

    /// Student identified by class label
    #[must_use]
    pub fn by_class(label: impl Into<String>, gender: Gender) -> Self {
        Self {
            placement: StudentPlacement::ClassLabel(label.into()),
            gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(group_id: &str) -> EducationGroupRecord {
        EducationGroupRecord {
            level: EducationLevel::Sd,
            class_min: 1,
            class_max: 3,
            group_id: group_id.to_owned(),
        }
    }

    #[test]
    fn test_level_equivalents() {
        assert_eq!(EducationLevel::from_str_lossy("MI"), Some(EducationLevel::Sd));
        assert_eq!(EducationLevel::from_str_lossy("MTs"), Some(EducationLevel::Smp));
        assert_eq!(EducationLevel::from_str_lossy(" smk "), Some(EducationLevel::Sma));
        assert_eq!(EducationLevel::from_str_lossy("kuliah"), None);
    }

    #[test]
    fn test_grade_counts_cover_the_ladder() {
        let total: u8 = [EducationLevel::Sd, EducationLevel::Smp, EducationLevel::Sma]
            .into_iter()
            .map(EducationLevel::grade_count)
            .sum();
        assert_eq!(total, MAX_GRADE);
        assert_eq!(EducationLevel::Paud.grade_count(), 0);
        assert_eq!(EducationLevel::Smp.grade_count(), 3);
    }

    #[test]
    fn test_level_from_grade() {
        assert_eq!(EducationLevel::from_grade(3), Some(EducationLevel::Sd));
        assert_eq!(EducationLevel::from_grade(7), Some(EducationLevel::Smp));
        assert_eq!(EducationLevel::from_grade(12), Some(EducationLevel::Sma));
        assert_eq!(EducationLevel::from_grade(0), None);
        assert_eq!(EducationLevel::from_grade(13), None);
    }

    #[test]
    fn test_group_gender_suffix() {
        assert_eq!(group("SD_4_6_L").gender_suffix(), Some(Gender::Male));
        assert_eq!(group("smp-7-9-p").gender_suffix(), Some(Gender::Female));
        assert_eq!(group("SD_1_3").gender_suffix(), None);
        assert_eq!(group("L").gender_suffix(), None);
    }

    #[test]
    fn test_age_band_is_inclusive() {
        let band = AgeGroupRecord {
            age_min: 7,
            age_max: 9,
            education_level: EducationLevel::Sd,
            grade: 3,
            default_gender: Gender::Female,
        };
        assert!(band.contains(7));
        assert!(band.contains(9));
        assert!(!band.contains(10));
    }
}
