use serde::{Deserialize, Serialize};
use validator::Validate;

use fest_core::domain::entities::{GuestRegistration, StudentRegistration};

use super::lenient_string;

/// Body of `POST /api/save-student`
///
/// Absent fields deserialize as empty strings so that the service reports
/// them as missing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveStudentRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 200))]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 64))]
    pub reg_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 200))]
    pub department: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 16))]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 254))]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 32))]
    pub phone: String,
}

impl From<SaveStudentRequest> for StudentRegistration {
    fn from(req: SaveStudentRequest) -> Self {
        StudentRegistration {
            name: req.name,
            reg_no: req.reg_no,
            department: req.department,
            year: req.year,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Body of `POST /api/save-guest`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveGuestRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 200))]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 64))]
    pub roll_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 200))]
    pub college: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 200))]
    pub department: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 254))]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 32))]
    pub phone: String,
}

impl From<SaveGuestRequest> for GuestRegistration {
    fn from(req: SaveGuestRequest) -> Self {
        GuestRegistration {
            name: req.name,
            roll_no: req.roll_no,
            college: req.college,
            department: req.department,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Body of `POST /api/update-payment-status`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 254))]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 128))]
    pub transaction_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 64))]
    pub payment_status: String,
}
