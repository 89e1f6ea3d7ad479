pub mod ask;
pub mod home;
pub mod status;
pub mod webhook;
