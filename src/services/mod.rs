// Business logic services

pub mod routine_service;
pub mod workout_service;

pub use routine_service::RoutineService;
pub use workout_service::WorkoutService;
