//! 음절 분해/재조합과 비교용 정규화
//!
//! 분해 결과는 모두 호환용 자모(키보드로 입력하는 낱자)로 표현합니다.
//! 매핑에 없는 문자는 오류 없이 그대로 통과합니다.

use crate::core::jamo_mapper::{
    choseong_to_letter, jongseong_to_letter, jungseong_to_letter, letter_to_choseong,
    letter_to_jongseong, letter_to_jungseong,
};
use crate::core::unicode::{
    choseong_jamo_of, compose_syllable, is_choseong_jamo, is_hangul_syllable, is_jamo_or_letter,
    jongseong_jamo_of, jungseong_jamo_of, HANGUL_JAMO_START, HANGUL_SYLLABLE_BASE,
    JONGSEONG_COUNT, JONGSEONG_JAMO_START, JUNGSEONG_COUNT, JUNGSEONG_JAMO_START,
};

/// 음절 하나를 분해한 낱자 (초성, 중성, 선택적 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letters {
    pub choseong: char,
    pub jungseong: char,
    pub jongseong: Option<char>,
}

impl Letters {
    /// 초성, 중성, 종성 순서로 낱자 순회
    pub fn iter(&self) -> impl Iterator<Item = char> {
        [Some(self.choseong), Some(self.jungseong), self.jongseong]
            .into_iter()
            .flatten()
    }

    /// 낱자 개수 (2 또는 3)
    pub fn count(&self) -> usize {
        if self.jongseong.is_some() {
            3
        } else {
            2
        }
    }
}

/// 완성형 음절을 호환용 낱자로 분해
///
/// 한 → (ㅎ, ㅏ, ㄴ), 가 → (ㄱ, ㅏ). 음절이 아니면 None
pub fn decompose_letters(c: char) -> Option<Letters> {
    let choseong = choseong_to_letter(choseong_jamo_of(c)?);
    let jungseong = jungseong_to_letter(jungseong_jamo_of(c)?);
    let jongseong = jongseong_jamo_of(c).map(jongseong_to_letter);
    Some(Letters {
        choseong,
        jungseong,
        jongseong,
    })
}

/// 호환용 낱자를 완성형 음절로 재조합
///
/// 초성으로 쓸 수 없는 글자, 모음이 아닌 중성, 받침으로 쓸 수 없는 종성은 None
pub fn compose_letters(letters: Letters) -> Option<char> {
    let cho_jamo = letter_to_choseong(letters.choseong);
    if !is_choseong_jamo(cho_jamo) {
        return None;
    }
    let cho = cho_jamo as u32 - HANGUL_JAMO_START;

    let jung = (letter_to_jungseong(letters.jungseong) as u32).checked_sub(JUNGSEONG_JAMO_START)?;
    if jung >= JUNGSEONG_COUNT {
        return None;
    }

    let jong = match letters.jongseong {
        None => 0,
        Some(letter) => {
            let index = (letter_to_jongseong(letter) as u32).checked_sub(JONGSEONG_JAMO_START)? + 1;
            if index >= JONGSEONG_COUNT {
                return None;
            }
            index
        }
    };

    compose_syllable(cho, jung, jong)
}

/// 문장의 음절을 초성으로 바꿔서 반환. 음절이 아닌 문자는 그대로 유지
///
/// "한글초성" → "ㅎㄱㅊㅅ", "Korean초성" → "Koreanㅊㅅ"
pub fn extract_choseong(s: &str) -> String {
    s.chars()
        .map(|c| match choseong_jamo_of(c) {
            Some(jamo) => choseong_to_letter(jamo),
            None => c,
        })
        .collect()
}

/// 1단계 정규화: 한글 문자를 초성 글자로 축약
///
/// 가, 각, 간, ㄱ(U+1100) → ㄱ(U+3131). 한글이 아니면 그대로
pub fn normalize_level1(c: char) -> char {
    if is_jamo_or_letter(c) {
        choseong_to_letter(c)
    } else if let Some(jamo) = choseong_jamo_of(c) {
        choseong_to_letter(jamo)
    } else {
        c
    }
}

/// 2단계 정규화: 받침을 떼어낸 초성+중성 음절
///
/// 각, 간, 갛 → 가. 음절이 아니면 그대로
pub fn normalize_level2(c: char) -> char {
    if !is_hangul_syllable(c) {
        return c;
    }
    let code = c as u32;
    let jongseong = (code - HANGUL_SYLLABLE_BASE) % JONGSEONG_COUNT;
    char::from_u32(code - jongseong).unwrap_or(c)
}

/// 문자의 중성을 호환용 모음 글자로 반환
///
/// 음절, 조합용 중성 자모, 호환용 모음 글자가 대상이며 나머지는 None
pub fn jungseong_letter_of(c: char) -> Option<char> {
    if let Some(jamo) = jungseong_jamo_of(c) {
        return Some(jungseong_to_letter(jamo));
    }
    let letter = jungseong_to_letter(c);
    if letter_to_jungseong(letter) != letter {
        Some(letter)
    } else {
        None
    }
}

/// 문자 하나를 낱자로 분해하여 버퍼에 추가
fn push_separated(c: char, out: &mut String) {
    match decompose_letters(c) {
        Some(letters) => out.extend(letters.iter()),
        None => out.push(c),
    }
}

/// 문자 하나를 낱자로 분해: '한' → "ㅎㅏㄴ"
pub fn separate_char(c: char) -> String {
    let mut result = String::with_capacity(12);
    push_separated(c, &mut result);
    result
}

/// 문자열 전체를 낱자로 분해: "동해물" → "ㄷㅗㅇㅎㅐㅁㅜㄹ"
pub fn separate(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        push_separated(c, &mut result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unicode::HANGUL_SYLLABLE_END;

    #[test]
    fn test_decompose_letters() {
        let han = decompose_letters('한').unwrap();
        assert_eq!(han.choseong, 'ㅎ');
        assert_eq!(han.jungseong, 'ㅏ');
        assert_eq!(han.jongseong, Some('ㄴ'));
        assert_eq!(han.count(), 3);

        let ga = decompose_letters('가').unwrap();
        assert_eq!(ga.iter().collect::<String>(), "ㄱㅏ");
        assert_eq!(ga.count(), 2);

        // 겹받침
        assert_eq!(decompose_letters('닳').unwrap().jongseong, Some('ㅀ'));
        assert_eq!(decompose_letters('값').unwrap().jongseong, Some('ㅄ'));

        // ㅌ, ㅍ, ㅎ 받침
        assert_eq!(decompose_letters('밭').unwrap().jongseong, Some('ㅌ'));
        assert_eq!(decompose_letters('앞').unwrap().jongseong, Some('ㅍ'));
        assert_eq!(decompose_letters('힣').unwrap().jongseong, Some('ㅎ'));

        assert_eq!(decompose_letters('a'), None);
        assert_eq!(decompose_letters('ㄱ'), None);
    }

    #[test]
    fn test_compose_round_trip_all_syllables() {
        for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END {
            let c = char::from_u32(code).unwrap();
            let letters = decompose_letters(c).unwrap();
            assert_eq!(compose_letters(letters), Some(c), "U+{:04X}", code);
        }
    }

    #[test]
    fn test_compose_invalid_letters() {
        // ㄳ은 초성으로 쓸 수 없음
        let letters = Letters {
            choseong: 'ㄳ',
            jungseong: 'ㅏ',
            jongseong: None,
        };
        assert_eq!(compose_letters(letters), None);

        // ㄸ은 받침으로 쓸 수 없음
        let letters = Letters {
            choseong: 'ㄱ',
            jungseong: 'ㅏ',
            jongseong: Some('ㄸ'),
        };
        assert_eq!(compose_letters(letters), None);

        // 중성 자리에 자음
        let letters = Letters {
            choseong: 'ㄱ',
            jungseong: 'ㄴ',
            jongseong: None,
        };
        assert_eq!(compose_letters(letters), None);
    }

    #[test]
    fn test_extract_choseong() {
        assert_eq!(extract_choseong("가나다라"), "ㄱㄴㄷㄹ");
        assert_eq!(extract_choseong("동해물과 백두산이"), "ㄷㅎㅁㄱ ㅂㄷㅅㅇ");
        assert_eq!(extract_choseong("하나2셋4"), "ㅎㄴ2ㅅ4");
        assert_eq!(extract_choseong("one투three포"), "oneㅌthreeㅍ");
        assert_eq!(extract_choseong("hello world"), "hello world");
        assert_eq!(extract_choseong("Korean초성"), "Koreanㅊㅅ");
        assert_eq!(extract_choseong(""), "");
        assert_eq!(extract_choseong("   "), "   ");
    }

    #[test]
    fn test_normalize_level1() {
        assert_eq!(normalize_level1('가'), 'ㄱ');
        assert_eq!(normalize_level1('각'), 'ㄱ');
        assert_eq!(normalize_level1('괔'), 'ㄱ');
        assert_eq!(normalize_level1('ㄱ'), 'ㄱ');
        assert_eq!(normalize_level1('\u{1100}'), 'ㄱ');
        assert_eq!(normalize_level1('ㅏ'), 'ㅏ');
        assert_eq!(normalize_level1('A'), 'A');
    }

    #[test]
    fn test_normalize_level2() {
        assert_eq!(normalize_level2('각'), '가');
        assert_eq!(normalize_level2('간'), '가');
        assert_eq!(normalize_level2('갛'), '가');
        assert_eq!(normalize_level2('가'), '가');
        assert_eq!(normalize_level2('닳'), '다');

        // 음절 범위 밖은 그대로
        assert_eq!(normalize_level2('\u{ABFF}'), '\u{ABFF}');
        assert_eq!(normalize_level2('ㄱ'), 'ㄱ');
        assert_eq!(normalize_level2('z'), 'z');
    }

    #[test]
    fn test_jungseong_letter_of() {
        assert_eq!(jungseong_letter_of('한'), Some('ㅏ'));
        assert_eq!(jungseong_letter_of('의'), Some('ㅢ'));
        assert_eq!(jungseong_letter_of('ㅗ'), Some('ㅗ'));
        assert_eq!(jungseong_letter_of('\u{1169}'), Some('ㅗ'));
        assert_eq!(jungseong_letter_of('ㄱ'), None);
        assert_eq!(jungseong_letter_of('o'), None);
    }

    #[test]
    fn test_separate() {
        assert_eq!(separate("동해물"), "ㄷㅗㅇㅎㅐㅁㅜㄹ");
        assert_eq!(separate("Korean"), "Korean");
        assert_eq!(separate("한River"), "ㅎㅏㄴRiver");
        assert_eq!(separate("ㄳㄷㄷ"), "ㄳㄷㄷ");
        assert_eq!(separate(""), "");
        assert_eq!(separate_char('한'), "ㅎㅏㄴ");
        assert_eq!(separate_char('!'), "!");
    }
}
