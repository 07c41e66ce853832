//! Age/grade labels for timeline axes.
//!
//! # Responsibility
//! - Convert a calendar year into a school-stage label relative to a birth
//!   year.
//!
//! # Invariants
//! - The label depends only on `calendar_year - birth_year`.
//! - Ages outside every declared bucket (4, negative ages) use the
//!   working-adult formula.

const INFANT_AGES: (i32, i32) = (0, 3);
const KINDERGARTEN_AGES: (i32, i32) = (5, 6);
const ELEMENTARY_SCHOOL_AGE: i32 = 7;
const JUNIOR_HIGH_SCHOOL_AGE: i32 = 13;
const HIGH_SCHOOL_AGE: i32 = 16;
const GAP_YEARS: i32 = 1;
const UNIVERSITY_ENTRY_AGE: i32 = 19;
const UNIVERSITY_YEARS: i32 = 4;
const WORKING_AGE: i32 = UNIVERSITY_ENTRY_AGE + GAP_YEARS + UNIVERSITY_YEARS;

/// School stage bucket for one age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeStage {
    Infant,
    Kindergarten,
    /// 1-based school year.
    Elementary(i32),
    JuniorHigh(i32),
    HighSchool(i32),
    GapYear,
    University(i32),
    /// 1-based working year. Can be zero or negative for unmatched ages.
    WorkingAdult(i32),
}

impl GradeStage {
    /// Buckets an age in years; first matching range wins.
    pub fn from_age(age: i32) -> Self {
        match age {
            a if (INFANT_AGES.0..=INFANT_AGES.1).contains(&a) => Self::Infant,
            a if (KINDERGARTEN_AGES.0..=KINDERGARTEN_AGES.1).contains(&a) => Self::Kindergarten,
            a if (ELEMENTARY_SCHOOL_AGE..JUNIOR_HIGH_SCHOOL_AGE).contains(&a) => {
                Self::Elementary(a - ELEMENTARY_SCHOOL_AGE + 1)
            }
            a if (JUNIOR_HIGH_SCHOOL_AGE..HIGH_SCHOOL_AGE).contains(&a) => {
                Self::JuniorHigh(a - JUNIOR_HIGH_SCHOOL_AGE + 1)
            }
            a if (HIGH_SCHOOL_AGE..UNIVERSITY_ENTRY_AGE).contains(&a) => {
                Self::HighSchool(a - HIGH_SCHOOL_AGE + 1)
            }
            a if (UNIVERSITY_ENTRY_AGE..UNIVERSITY_ENTRY_AGE + GAP_YEARS).contains(&a) => {
                Self::GapYear
            }
            a if (UNIVERSITY_ENTRY_AGE + GAP_YEARS..WORKING_AGE).contains(&a) => {
                Self::University(a - UNIVERSITY_ENTRY_AGE - GAP_YEARS + 1)
            }
            a => Self::WorkingAdult(a.saturating_sub(WORKING_AGE - 1)),
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Infant => "infant".to_string(),
            Self::Kindergarten => "kindergarten".to_string(),
            Self::Elementary(n) => format!("elementary {n}"),
            Self::JuniorHigh(n) => format!("junior-high {n}"),
            Self::HighSchool(n) => format!("high-school {n}"),
            Self::GapYear => "gap-year".to_string(),
            Self::University(n) => format!("university {n}"),
            Self::WorkingAdult(n) => format!("working-adult {n}"),
        }
    }
}

/// Returns the grade label for `calendar_year` given `birth_year`.
pub fn grade_label(calendar_year: i32, birth_year: i32) -> String {
    GradeStage::from_age(calendar_year.saturating_sub(birth_year)).label()
}
