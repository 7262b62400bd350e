pub mod u101_recommend_patterns;
