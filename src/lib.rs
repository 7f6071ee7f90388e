pub mod config;
pub mod contact;
pub mod document;
pub mod i18n;
pub mod locale;
pub mod notify;
pub mod reveal;
pub mod store;
