pub mod audience;
pub mod bot_detection;
pub mod http;
pub mod leads;
