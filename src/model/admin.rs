use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
pub struct UserCountsDto {
    pub customers: u64,
    pub owners: u64,
    pub drivers: u64,
    pub admins: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
pub struct ApprovalCountsDto {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
pub struct BookingCountsDto {
    pub confirmed: u64,
    pub ongoing: u64,
    pub completed: u64,
    pub cancelled: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
pub struct StatsDto {
    pub users: UserCountsDto,
    pub cars: ApprovalCountsDto,
    pub drivers: ApprovalCountsDto,
    pub bookings: BookingCountsDto,
    pub revenue: i64,
}
