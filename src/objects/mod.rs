pub mod config;
pub mod rigid_body;

pub use config::BodyConfig;
pub use rigid_body::RigidBody;
