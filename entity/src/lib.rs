pub mod prelude;

pub mod admin;
pub mod invalidated_token;
pub mod invitation;
pub mod lookup;
pub mod notification;
pub mod super_admin;
pub mod user_request;
pub mod word;
