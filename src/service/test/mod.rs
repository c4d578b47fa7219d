mod admin;
mod auth;
mod word;
