pub use super::admin::Entity as Admin;
pub use super::invalidated_token::Entity as InvalidatedToken;
pub use super::invitation::Entity as Invitation;
pub use super::lookup::Entity as Lookup;
pub use super::notification::Entity as Notification;
pub use super::super_admin::Entity as SuperAdmin;
pub use super::user_request::Entity as UserRequest;
pub use super::word::Entity as Word;
