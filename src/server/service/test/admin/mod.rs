use crate::{
    model::{api::ApprovalStatus, user::Role},
    server::{
        error::AppError,
        service::admin::{AdminService, Review},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod review;
mod seed_admin;
mod stats;
