use crate::server::data::spa_hours::SpaHoursRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::time, spa_hours::SpaHoursFactory},
};

mod get_all;
