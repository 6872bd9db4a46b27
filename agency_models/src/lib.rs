pub mod contact;
pub mod email_address;
mod macros;
pub mod message;
pub mod name;
pub mod referral;
pub mod request;
pub mod submission;
pub mod website;
