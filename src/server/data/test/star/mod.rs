use crate::server::data::star::StarRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
