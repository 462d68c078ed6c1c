//! 한글 조합 핵심 로직

pub mod converter;
pub mod engine;
pub mod hangul_fsm;
pub mod jamo;
pub mod jamo_mapper;
pub mod tables;
pub mod unicode;
