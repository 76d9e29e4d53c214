pub mod home;
pub mod mcq;
pub mod practice;
