//! Page views composed from the widget primitives

pub mod home;
