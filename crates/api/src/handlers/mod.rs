pub mod album;
pub mod auth;
pub mod images;
pub mod lookup;
pub mod ownership;
pub mod song;
pub mod user;
