//! Resource bindings for the school platform's core entity types.
//!
//! Each binding is a zero-sized marker implementing [`Resource`], plus the
//! entity, create/update payloads, and list query with the platform API's
//! camelCase field names. Dashboards instantiate one [`ResourceStore`]
//! per binding.
//!
//! [`ResourceStore`]: crate::store::ResourceStore

use crate::{
    pagination::{ListQuery, PageQuery},
    resource::Resource,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Academic years
// ---------------------------------------------------------------------------

/// A school year, e.g. "2025-2026".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYear {
    pub id: String,
    pub name: String,
    /// ISO 8601 date
    pub start_date: String,
    /// ISO 8601 date
    pub end_date: String,
    pub is_active: bool,
}

/// Payload to create an academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAcademicYear {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Payload to update an academic year. Absent fields are left unchanged by
/// the server; the response still carries the full entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYearPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Marker for the academic-year collection.
pub struct AcademicYears;

impl Resource for AcademicYears {
    type Entity = AcademicYear;
    type Id = String;
    type Create = NewAcademicYear;
    type Update = AcademicYearPatch;
    type Query = PageQuery;

    const NAME: &'static str = "academic year";

    fn id(entity: &AcademicYear) -> &String {
        &entity.id
    }
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// A class within a grade, taught by at most one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    pub id: String,
    pub name: String,
    pub grade_id: String,
    pub teacher_id: Option<String>,
    pub capacity: u32,
}

/// Payload to create a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchoolClass {
    pub name: String,
    pub grade_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    pub capacity: u32,
}

/// Payload to update a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClassPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// List query for classes: pagination plus the grade filter used by the
/// admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClassQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_id: Option<String>,
}

impl ListQuery for SchoolClassQuery {
    fn page(&self) -> Option<u32> {
        self.page
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

/// Marker for the class collection.
pub struct SchoolClasses;

impl Resource for SchoolClasses {
    type Entity = SchoolClass;
    type Id = String;
    type Create = NewSchoolClass;
    type Update = SchoolClassPatch;
    type Query = SchoolClassQuery;

    const NAME: &'static str = "class";

    fn id(entity: &SchoolClass) -> &String {
        &entity.id
    }
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

/// A student, optionally assigned to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub parent_phone: Option<String>,
    pub class_id: Option<String>,
}

/// Payload to create a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

/// Payload to update a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

/// List query for students: pagination plus name search and class filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

impl ListQuery for StudentQuery {
    fn page(&self) -> Option<u32> {
        self.page
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

/// Marker for the student collection.
pub struct Students;

impl Resource for Students {
    type Entity = Student;
    type Id = String;
    type Create = NewStudent;
    type Update = StudentPatch;
    type Query = StudentQuery;

    const NAME: &'static str = "student";

    fn id(entity: &Student) -> &String {
        &entity.id
    }
}

// ---------------------------------------------------------------------------
// Enrollment fees
// ---------------------------------------------------------------------------

/// Billing status of an enrollment fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    Pending,
    Paid,
    Overdue,
}

/// A tuition fee charged to a student for one academic year. Amounts are in
/// minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentFee {
    pub id: String,
    pub student_id: String,
    pub academic_year_id: String,
    pub amount: u64,
    /// Whole-percent discount applied to `amount`, 0-100
    pub discount_percent: u8,
    pub status: FeeStatus,
    /// ISO 8601 date
    pub due_date: String,
}

/// Payload to create an enrollment fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollmentFee {
    pub student_id: String,
    pub academic_year_id: String,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    pub due_date: String,
}

/// Payload to update an enrollment fee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentFeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// List query for enrollment fees: pagination plus the student and status
/// filters used by the tuition dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentFeeQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeeStatus>,
}

impl ListQuery for EnrollmentFeeQuery {
    fn page(&self) -> Option<u32> {
        self.page
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

/// Marker for the enrollment-fee collection.
pub struct EnrollmentFees;

impl Resource for EnrollmentFees {
    type Entity = EnrollmentFee;
    type Id = String;
    type Create = NewEnrollmentFee;
    type Update = EnrollmentFeePatch;
    type Query = EnrollmentFeeQuery;

    const NAME: &'static str = "enrollment fee";

    fn id(entity: &EnrollmentFee) -> &String {
        &entity.id
    }
}
