pub mod data;
pub mod pipeline;
pub mod recommend;
