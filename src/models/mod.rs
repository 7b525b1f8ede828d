pub mod category;
pub mod health;
pub mod notification;
pub mod push;
pub mod response;
