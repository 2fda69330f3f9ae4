//! 문자 비교 전략
//!
//! 검색 루프(`search::find`)는 그대로 두고 비교 규칙만 교체할 수 있도록
//! 비교기를 트레이트로 분리합니다.

use serde::{Deserialize, Serialize};

use super::search::{char_slice, find};
use crate::core::normalizer::{jungseong_letter_of, normalize_level1, normalize_level2};
use crate::core::unicode::{is_choseong_jamo, is_hangul_syllable, jamo_level, JamoLevel};
use crate::core::jamo_mapper::letter_to_choseong;

/// 문자 비교기
///
/// `char_equals`만 구현하면 검색(`index_of`)과 부분 일치(`matches`)는
/// 공통 검색 루프로 제공됩니다. 두 메서드도 필요하면 재정의할 수 있습니다.
pub trait Comparator {
    /// 원문 문자 `c`가 검색어 문자 `keyword`와 일치하는지 판정
    fn char_equals(&self, c: char, keyword: char) -> bool;

    /// `keyword`가 처음 일치하는 문자 위치. 없으면 None
    fn index_of(&self, s: &str, keyword: &str) -> Option<usize> {
        find(self, s, keyword)
    }

    /// 일치한 위치의 원문 조각 (검색어가 아니라 원문을 반환)
    fn matches<'a>(&self, s: &'a str, keyword: &str) -> Option<&'a str> {
        let start = self.index_of(s, keyword)?;
        Some(char_slice(s, start, keyword.chars().count()))
    }
}

impl<F> Comparator for F
where
    F: Fn(char, char) -> bool,
{
    fn char_equals(&self, c: char, keyword: char) -> bool {
        self(c, keyword)
    }
}

/// 기본 비교기: 검색어 글자의 분해 단계에 따라 비교 범위가 달라짐
///
/// - 초성 글자(ㄱ): 원문 글자의 초성만 비교 (ㄱ ≈ 가, 각, 공)
/// - 받침 없는 음절(가): 원문 글자의 받침을 무시하고 비교 (가 ≈ 각, 간, 갑)
/// - 받침 있는 음절, 한글이 아닌 문자: 정확히 일치해야 함
#[derive(Debug, Clone, Copy, Default)]
pub struct JamoComparator;

impl Comparator for JamoComparator {
    fn char_equals(&self, c: char, keyword: char) -> bool {
        match jamo_level(keyword) {
            JamoLevel::Level1 => normalize_level1(c) == normalize_level1(keyword),
            JamoLevel::Level2 => normalize_level2(c) == keyword,
            JamoLevel::Level3 | JamoLevel::None => c == keyword,
        }
    }
}

/// 초성만 비교하는 비교기
///
/// 두 글자 모두 초성을 가진 한글이면 초성끼리 비교 (한 ≈ 혀 ≈ ㅎ)
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoseongComparator;

fn has_choseong(c: char) -> bool {
    is_hangul_syllable(c) || is_choseong_jamo(letter_to_choseong(c))
}

impl Comparator for ChoseongComparator {
    fn char_equals(&self, c: char, keyword: char) -> bool {
        if has_choseong(c) && has_choseong(keyword) {
            normalize_level1(c) == normalize_level1(keyword)
        } else {
            c == keyword
        }
    }
}

/// 중성만 비교하는 비교기
///
/// 두 글자 모두 중성을 가진 한글이면 중성끼리 비교 (한 ≈ 감 ≈ ㅏ)
#[derive(Debug, Clone, Copy, Default)]
pub struct JungseongComparator;

impl Comparator for JungseongComparator {
    fn char_equals(&self, c: char, keyword: char) -> bool {
        match (jungseong_letter_of(c), jungseong_letter_of(keyword)) {
            (Some(a), Some(b)) => a == b,
            _ => c == keyword,
        }
    }
}

/// 미리 정의된 비교기 종류 (설정 파일, CLI 인자에서 선택)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComparatorKind {
    #[default]
    Jamo,
    Choseong,
    Jungseong,
}

impl ComparatorKind {
    /// 해당 비교기 인스턴스
    pub fn comparator(self) -> &'static dyn Comparator {
        match self {
            ComparatorKind::Jamo => &JamoComparator,
            ComparatorKind::Choseong => &ChoseongComparator,
            ComparatorKind::Jungseong => &JungseongComparator,
        }
    }
}

impl std::str::FromStr for ComparatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jamo" => Ok(ComparatorKind::Jamo),
            "choseong" => Ok(ComparatorKind::Choseong),
            "jungseong" => Ok(ComparatorKind::Jungseong),
            other => Err(format!("알 수 없는 비교기: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jamo_level1_keyword() {
        let cmp = JamoComparator;
        assert!(cmp.char_equals('한', 'ㅎ'));
        assert!(cmp.char_equals('하', 'ㅎ'));
        assert!(cmp.char_equals('ㅎ', 'ㅎ'));
        assert!(cmp.char_equals('\u{1112}', 'ㅎ'));
        assert!(cmp.char_equals('한', '\u{1112}'));
        assert!(!cmp.char_equals('간', 'ㅎ'));
        assert!(!cmp.char_equals('h', 'ㅎ'));
    }

    #[test]
    fn test_jamo_level2_keyword() {
        let cmp = JamoComparator;
        assert!(cmp.char_equals('가', '가'));
        assert!(cmp.char_equals('각', '가'));
        assert!(cmp.char_equals('간', '가'));
        assert!(cmp.char_equals('갑', '가'));
        assert!(!cmp.char_equals('거', '가'));
        assert!(!cmp.char_equals('ㄱ', '가'));
        // 음절 범위 바로 앞 문자는 가와 일치하지 않음
        assert!(!cmp.char_equals('\u{ABFF}', '가'));
    }

    #[test]
    fn test_jamo_level3_and_other_keyword() {
        let cmp = JamoComparator;
        assert!(cmp.char_equals('각', '각'));
        assert!(!cmp.char_equals('가', '각'));
        assert!(!cmp.char_equals('간', '각'));

        assert!(cmp.char_equals('K', 'K'));
        assert!(!cmp.char_equals('K', 'k'));
        // 받침 전용 글자는 정확히 일치해야 함
        assert!(cmp.char_equals('ㄳ', 'ㄳ'));
        assert!(!cmp.char_equals('각', 'ㄳ'));
    }

    #[test]
    fn test_choseong_comparator() {
        let cmp = ChoseongComparator;
        assert!(cmp.char_equals('한', '혀'));
        assert!(cmp.char_equals('한', 'ㅎ'));
        assert!(cmp.char_equals('ㅎ', '훈'));
        assert!(!cmp.char_equals('한', '간'));
        assert!(!cmp.char_equals('ㅏ', '아'));
        assert!(cmp.char_equals('a', 'a'));
        assert_eq!(cmp.index_of("동해물과", "두혀"), Some(0));
    }

    #[test]
    fn test_jungseong_comparator() {
        let cmp = JungseongComparator;
        assert!(cmp.char_equals('한', '감'));
        assert!(cmp.char_equals('한', 'ㅏ'));
        assert!(!cmp.char_equals('한', '헌'));
        assert!(!cmp.char_equals('ㄱ', '가'));
        assert!(cmp.char_equals('ㄱ', 'ㄱ'));
        assert_eq!(cmp.index_of("소나무", "ㅏㅜ"), Some(1));
    }

    #[test]
    fn test_closure_comparator() {
        let exact = |c: char, k: char| c == k;
        assert_eq!(exact.index_of("한글초성", "초성"), Some(2));
        assert_eq!(exact.index_of("한글초성", "ㅊㅅ"), None);
        assert_eq!(exact.matches("한글초성", "글초"), Some("글초"));
    }

    #[test]
    fn test_comparator_kind() {
        assert_eq!("jamo".parse::<ComparatorKind>(), Ok(ComparatorKind::Jamo));
        assert_eq!("Choseong".parse::<ComparatorKind>(), Ok(ComparatorKind::Choseong));
        assert!("fuzzy".parse::<ComparatorKind>().is_err());
        assert_eq!(ComparatorKind::default(), ComparatorKind::Jamo);

        let cmp = ComparatorKind::Jungseong.comparator();
        assert!(cmp.char_equals('한', 'ㅏ'));

        let json = serde_json::to_string(&ComparatorKind::Choseong).unwrap();
        assert_eq!(json, "\"choseong\"");
    }
}
