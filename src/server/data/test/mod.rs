mod booking;
mod meal_order;
mod room;
mod spa_appointment;
mod spa_hours;
