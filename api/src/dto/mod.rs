//! Request bodies of the public endpoints

pub mod otp;
pub mod registration;

pub use otp::{SendOtpRequest, VerifyOtpRequest};
pub use registration::{SaveGuestRequest, SaveStudentRequest, UpdatePaymentRequest};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept strings and numbers for text fields; `null` becomes empty
///
/// Form clients post years and phone numbers as JSON numbers.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_student_request_accepts_numbers_and_missing_fields() {
        let req: SaveStudentRequest = serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "regNo": "RA2111003",
            "year": 2,
            "phone": 9876543210u64,
            "email": null
        }))
        .unwrap();

        assert_eq!(req.reg_no, "RA2111003");
        assert_eq!(req.year, "2");
        assert_eq!(req.phone, "9876543210");
        assert_eq!(req.email, "");
        assert_eq!(req.department, "");
    }

    #[test]
    fn test_rejects_structured_values() {
        let result: Result<SendOtpRequest, _> =
            serde_json::from_value(serde_json::json!({ "email": ["a@b.co"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_request_uses_camel_case() {
        let req: UpdatePaymentRequest = serde_json::from_value(serde_json::json!({
            "email": "asha@college.edu",
            "transactionId": "TXN1",
            "paymentStatus": "paid"
        }))
        .unwrap();
        assert_eq!(req.transaction_id, "TXN1");
        assert_eq!(req.payment_status, "paid");
    }

    #[test]
    fn test_length_limits() {
        let req = VerifyOtpRequest {
            email: "a@b.co".to_string(),
            otp: "1".repeat(40),
        };
        assert!(req.validate().is_err());
    }
}
