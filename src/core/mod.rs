//! 한글 코드포인트 판별, 자모 매핑, 분해/정규화

pub mod jamo_mapper;
pub mod normalizer;
pub mod unicode;
