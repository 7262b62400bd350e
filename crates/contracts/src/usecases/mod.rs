pub mod common;
pub mod u101_recommend_patterns;
