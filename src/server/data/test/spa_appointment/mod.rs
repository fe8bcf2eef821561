use crate::server::{
    data::spa_appointment::SpaAppointmentRepository,
    model::spa::{AppointmentStatus, CreateAppointmentParams, SpaSlot},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{date, time},
        spa_appointment::SpaAppointmentFactory,
    },
};

mod is_slot_taken;
