#![allow(dead_code)]

pub mod http;
pub mod publisher;
pub mod quotes;
pub mod source;
