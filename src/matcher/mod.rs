//! 한글 자모 검색
//!
//! 초성만, 또는 받침을 뺀 음절만 입력해도 완성된 글자와 일치하도록
//! 문자 단위로 비교하는 검색 함수들입니다.
//!
//! # 사용 예시
//!
//! ```
//! use kstring::matcher::{contains, equals, index_of, matches};
//!
//! assert_eq!(matches("동해물과 백두산이", "ㄷㅎㅁㄱ"), Some("동해물과"));
//! assert_eq!(matches("마르고 닳도록", "마르고 다도로"), Some("마르고 닳도록"));
//! assert_eq!(index_of("한글초성", "ㅊㅅ"), Some(2));
//! assert!(contains("한글초성", "초서"));
//! assert!(!equals("한글초성", "ㅊㅅ"));
//! ```
//!
//! # 비교기 교체
//!
//! `_with` 함수는 [`Comparator`]를, `_by` 함수는 검색 함수를 주입받습니다.
//!
//! ```
//! use kstring::matcher::{index_of_with, ChoseongComparator};
//! assert_eq!(index_of_with("동해물과", "두혀", &ChoseongComparator), Some(0));
//! ```

mod comparator;
mod search;

pub use comparator::{
    ChoseongComparator, Comparator, ComparatorKind, JamoComparator, JungseongComparator,
};
pub use search::{char_slice, find};

/// 기본 비교기로 문자 하나 비교: '한' ≈ 'ㅎ', '한' ≈ '하'
pub fn char_equals(c: char, keyword: char) -> bool {
    JamoComparator.char_equals(c, keyword)
}

/// 기본 비교기로 검색: "한글초성"에서 "ㅊㅅ" → Some(2)
pub fn index_of(s: &str, keyword: &str) -> Option<usize> {
    index_of_with(s, keyword, &JamoComparator)
}

/// 기본 비교기로 포함 여부 판정
pub fn contains(s: &str, keyword: &str) -> bool {
    contains_with(s, keyword, &JamoComparator)
}

/// 기본 비교기로 전체 일치 판정. 길이가 같아야 함
///
/// "한글초성" ≈ "ㅎㄱㅊㅅ", "하글ㅊㅅ". "ㅊㅅ"는 포함되지만 같지는 않음
pub fn equals(s: &str, keyword: &str) -> bool {
    equals_with(s, keyword, &JamoComparator)
}

/// 기본 비교기로 일치한 원문 조각 반환: "한글초성"에서 "초서" → Some("초성")
pub fn matches<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    matches_with(s, keyword, &JamoComparator)
}

pub fn char_equals_with<C: Comparator + ?Sized>(c: char, keyword: char, cmp: &C) -> bool {
    cmp.char_equals(c, keyword)
}

pub fn index_of_with<C: Comparator + ?Sized>(s: &str, keyword: &str, cmp: &C) -> Option<usize> {
    cmp.index_of(s, keyword)
}

pub fn contains_with<C: Comparator + ?Sized>(s: &str, keyword: &str, cmp: &C) -> bool {
    cmp.index_of(s, keyword).is_some()
}

pub fn equals_with<C: Comparator + ?Sized>(s: &str, keyword: &str, cmp: &C) -> bool {
    s.chars().count() == keyword.chars().count() && cmp.index_of(s, keyword) == Some(0)
}

pub fn matches_with<'a, C: Comparator + ?Sized>(
    s: &'a str,
    keyword: &str,
    cmp: &C,
) -> Option<&'a str> {
    cmp.matches(s, keyword)
}

/// 주입된 검색 함수로 위치 검색
pub fn index_of_by<F>(s: &str, keyword: &str, finder: F) -> Option<usize>
where
    F: Fn(&str, &str) -> Option<usize>,
{
    finder(s, keyword)
}

/// 주입된 검색 함수로 포함 여부 판정
pub fn contains_by<F>(s: &str, keyword: &str, finder: F) -> bool
where
    F: Fn(&str, &str) -> Option<usize>,
{
    finder(s, keyword).is_some()
}

/// 주입된 검색 함수로 전체 일치 판정
pub fn equals_by<F>(s: &str, keyword: &str, finder: F) -> bool
where
    F: Fn(&str, &str) -> Option<usize>,
{
    s.chars().count() == keyword.chars().count() && finder(s, keyword) == Some(0)
}

/// 주입된 검색 함수로 일치한 원문 조각 반환
pub fn matches_by<'a, F>(s: &'a str, keyword: &str, finder: F) -> Option<&'a str>
where
    F: Fn(&str, &str) -> Option<usize>,
{
    let start = finder(s, keyword)?;
    Some(char_slice(s, start, keyword.chars().count()))
}
