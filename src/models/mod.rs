pub mod garden;
pub mod request;
pub mod vegetable;
