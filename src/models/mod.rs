pub mod activity;
pub mod challenge;
pub mod custom_workout;
pub mod goal;
pub mod user;
pub mod user_challenge;
pub mod user_stats;
pub mod workout;

pub use user::UserDto;
