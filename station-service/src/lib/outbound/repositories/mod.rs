pub mod station;
pub mod user;

pub use station::PostgresStationRepository;
pub use user::PostgresUserRepository;
