use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{Role, UserDto};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SendOtpDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
    pub otp: String,
    /// Required when registering as a driver.
    pub license_number: Option<String>,
    /// Required when registering as a driver.
    pub city: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Returned by login and registration. Drivers awaiting approval receive no token.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AuthResponseDto {
    pub token: Option<String>,
    pub user: UserDto,
}
