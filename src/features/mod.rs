pub mod action;
pub mod activity;
pub mod app;
pub mod device;
pub mod dispatch;
pub mod rotation;
pub mod screen;
