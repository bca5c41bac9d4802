use crate::{
    model::api::ApprovalStatus,
    server::{data::driver::DriverRepository, error::AppError, model::driver::CreateDriverParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_approved_by_city;
mod get_by_status_paginated;
mod set_approval;
