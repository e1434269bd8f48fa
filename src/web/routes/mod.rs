pub mod admin;
pub mod advocates;
pub mod home;
