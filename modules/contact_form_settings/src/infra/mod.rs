//! Infrastructure layer - settings storage adapters

pub mod storage;
