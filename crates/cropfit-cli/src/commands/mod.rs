pub mod catalog;
pub mod recommend;
