pub mod api_utils;
pub mod components;
pub mod number_format;
pub mod rich_text;
