pub mod secret;
pub mod seed;
