#![allow(dead_code)]

pub mod pipeline;
pub mod samples;
