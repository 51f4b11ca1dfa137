pub mod catalog;
pub mod decode;
pub mod encode;
