//! Общие контракты между фронтендом и сервисом рекомендаций.

pub mod usecases;
