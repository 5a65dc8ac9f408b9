pub mod home;
pub mod map;
