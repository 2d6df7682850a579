pub mod notification;
pub mod postgres;
pub mod security;
