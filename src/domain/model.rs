use crate::utils::error::{NeisError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One row from the NEIS school lookup. Identity is the
/// (office code, school code) pair assigned by the source system.
///
/// Upstream rows carry many more columns than we name here; they are kept in
/// `extra` so the HTTP front-end forwards complete rows to the browser bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    #[serde(rename = "SCHUL_NM")]
    pub name: String,

    /// Raw school-kind label ("초등학교", "중학교", "고등학교", ...). Kept as the
    /// upstream string so rows with kinds we cannot serve still round-trip.
    #[serde(rename = "SCHUL_KND_SC_NM", default)]
    pub kind: String,

    #[serde(rename = "ATPT_OFCDC_SC_CODE", default)]
    pub office_code: String,

    #[serde(rename = "SD_SCHUL_CODE", default)]
    pub school_code: String,

    #[serde(rename = "ORG_RDNMA", default)]
    pub road_address: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// School level, selecting which timetable endpoint family applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolKind {
    Elementary,
    Middle,
    High,
}

impl SchoolKind {
    /// Endpoint path under the NEIS hub; doubles as the envelope data key.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SchoolKind::Elementary => "elsTimetable",
            SchoolKind::Middle => "misTimetable",
            SchoolKind::High => "hisTimetable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchoolKind::Elementary => "초등학교",
            SchoolKind::Middle => "중학교",
            SchoolKind::High => "고등학교",
        }
    }
}

impl FromStr for SchoolKind {
    type Err = NeisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "초등학교" => Ok(SchoolKind::Elementary),
            "중학교" => Ok(SchoolKind::Middle),
            "고등학교" => Ok(SchoolKind::High),
            other => Err(NeisError::validation(
                "school_kind",
                format!("timetables are not available for school kind '{}'", other),
            )),
        }
    }
}

impl fmt::Display for SchoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One timetable row. `PERIO` arrives as a string-encoded integer and may be
/// absent; `period_number` coerces it for sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    #[serde(rename = "PERIO", default)]
    pub period: String,

    #[serde(rename = "ITRT_CNTNT", default)]
    pub subject: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl TimetableEntry {
    pub fn period_number(&self) -> i64 {
        self.period.trim().parse().unwrap_or(0)
    }
}

/// Parameters for a single-day timetable lookup.
///
/// Grade and class name are forwarded verbatim to the remote API; the console
/// front-end applies its stricter prompt-side rules before building one.
#[derive(Debug, Clone)]
pub struct TimetableQuery {
    pub kind: SchoolKind,
    pub office_code: String,
    pub school_code: String,
    pub grade: String,
    pub class_name: String,
    pub date: String,
}

impl TimetableQuery {
    /// Builds a query from a school record picked out of a search result.
    pub fn from_school(
        school: &School,
        grade: impl Into<String>,
        class_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self> {
        Ok(TimetableQuery {
            kind: school.kind.parse()?,
            office_code: school.office_code.clone(),
            school_code: school.school_code.clone(),
            grade: grade.into(),
            class_name: class_name.into(),
            date: date.into(),
        })
    }

    /// Academic year, taken from the date. Only meaningful after `validate`.
    pub fn academic_year(&self) -> &str {
        &self.date[..4]
    }
}

impl Validate for TimetableQuery {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("office_code", &self.office_code)?;
        validation::validate_non_empty_string("school_code", &self.school_code)?;
        validation::validate_non_empty_string("grade", &self.grade)?;
        validation::validate_non_empty_string("class_nm", &self.class_name)?;
        validation::validate_date_yyyymmdd("date", &self.date)?;
        Ok(())
    }
}
