pub mod home;
pub mod local;
pub mod remote;
pub mod wrapper;
