mod admin;
mod auth;
mod booking;
mod car;
