use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient_string;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Address the code is mailed to; its shape is checked by the service
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 254))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 254))]
    pub email: String,

    /// 6-digit code; numeric JSON values are accepted
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(max = 16))]
    pub otp: String,
}
