//! 조합용 자모 <-> 호환용 자모 매핑 테이블
//!
//! 테이블은 최초 접근 시 한 번만 만들어지고 이후 읽기 전용입니다.
//! 조회 함수는 테이블에 없는 문자를 그대로 돌려줍니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 호환용 초성 글자와 조합용 초성 자모 쌍 (19개)
#[rustfmt::skip]
const CHOSEONG_PAIRS: [(char, char); 19] = [
    ('\u{3131}', '\u{1100}'), // ㄱ
    ('\u{3132}', '\u{1101}'), // ㄲ
    ('\u{3134}', '\u{1102}'), // ㄴ
    ('\u{3137}', '\u{1103}'), // ㄷ
    ('\u{3138}', '\u{1104}'), // ㄸ
    ('\u{3139}', '\u{1105}'), // ㄹ
    ('\u{3141}', '\u{1106}'), // ㅁ
    ('\u{3142}', '\u{1107}'), // ㅂ
    ('\u{3143}', '\u{1108}'), // ㅃ
    ('\u{3145}', '\u{1109}'), // ㅅ
    ('\u{3146}', '\u{110A}'), // ㅆ
    ('\u{3147}', '\u{110B}'), // ㅇ
    ('\u{3148}', '\u{110C}'), // ㅈ
    ('\u{3149}', '\u{110D}'), // ㅉ
    ('\u{314A}', '\u{110E}'), // ㅊ
    ('\u{314B}', '\u{110F}'), // ㅋ
    ('\u{314C}', '\u{1110}'), // ㅌ
    ('\u{314D}', '\u{1111}'), // ㅍ
    ('\u{314E}', '\u{1112}'), // ㅎ
];

/// 조합용 중성 자모와 호환용 모음 글자 쌍 (21개)
#[rustfmt::skip]
const JUNGSEONG_PAIRS: [(char, char); 21] = [
    ('\u{1161}', '\u{314F}'), // ㅏ
    ('\u{1162}', '\u{3150}'), // ㅐ
    ('\u{1163}', '\u{3151}'), // ㅑ
    ('\u{1164}', '\u{3152}'), // ㅒ
    ('\u{1165}', '\u{3153}'), // ㅓ
    ('\u{1166}', '\u{3154}'), // ㅔ
    ('\u{1167}', '\u{3155}'), // ㅕ
    ('\u{1168}', '\u{3156}'), // ㅖ
    ('\u{1169}', '\u{3157}'), // ㅗ
    ('\u{116A}', '\u{3158}'), // ㅘ
    ('\u{116B}', '\u{3159}'), // ㅙ
    ('\u{116C}', '\u{315A}'), // ㅚ
    ('\u{116D}', '\u{315B}'), // ㅛ
    ('\u{116E}', '\u{315C}'), // ㅜ
    ('\u{116F}', '\u{315D}'), // ㅝ
    ('\u{1170}', '\u{315E}'), // ㅞ
    ('\u{1171}', '\u{315F}'), // ㅟ
    ('\u{1172}', '\u{3160}'), // ㅠ
    ('\u{1173}', '\u{3161}'), // ㅡ
    ('\u{1174}', '\u{3162}'), // ㅢ
    ('\u{1175}', '\u{3163}'), // ㅣ
];

/// 조합용 종성 자모와 호환용 자음 글자 쌍 (27개, 종성 인덱스 1~27)
#[rustfmt::skip]
const JONGSEONG_PAIRS: [(char, char); 27] = [
    ('\u{11A8}', '\u{3131}'), // ㄱ
    ('\u{11A9}', '\u{3132}'), // ㄲ
    ('\u{11AA}', '\u{3133}'), // ㄳ
    ('\u{11AB}', '\u{3134}'), // ㄴ
    ('\u{11AC}', '\u{3135}'), // ㄵ
    ('\u{11AD}', '\u{3136}'), // ㄶ
    ('\u{11AE}', '\u{3137}'), // ㄷ
    ('\u{11AF}', '\u{3139}'), // ㄹ
    ('\u{11B0}', '\u{313A}'), // ㄺ
    ('\u{11B1}', '\u{313B}'), // ㄻ
    ('\u{11B2}', '\u{313C}'), // ㄼ
    ('\u{11B3}', '\u{313D}'), // ㄽ
    ('\u{11B4}', '\u{313E}'), // ㄾ
    ('\u{11B5}', '\u{313F}'), // ㄿ
    ('\u{11B6}', '\u{3140}'), // ㅀ
    ('\u{11B7}', '\u{3141}'), // ㅁ
    ('\u{11B8}', '\u{3142}'), // ㅂ
    ('\u{11B9}', '\u{3144}'), // ㅄ
    ('\u{11BA}', '\u{3145}'), // ㅅ
    ('\u{11BB}', '\u{3146}'), // ㅆ
    ('\u{11BC}', '\u{3147}'), // ㅇ
    ('\u{11BD}', '\u{3148}'), // ㅈ
    ('\u{11BE}', '\u{314A}'), // ㅊ
    ('\u{11BF}', '\u{314B}'), // ㅋ
    ('\u{11C0}', '\u{314C}'), // ㅌ
    ('\u{11C1}', '\u{314D}'), // ㅍ
    ('\u{11C2}', '\u{314E}'), // ㅎ
];

lazy_static! {
    /// 호환용 초성 글자 -> 조합용 초성 자모
    static ref LETTER_TO_CHOSEONG: HashMap<char, char> = CHOSEONG_PAIRS.iter().copied().collect();
    /// 조합용 초성 자모 -> 호환용 초성 글자
    static ref CHOSEONG_TO_LETTER: HashMap<char, char> =
        CHOSEONG_PAIRS.iter().map(|&(letter, jamo)| (jamo, letter)).collect();
    /// 조합용 중성 자모 -> 호환용 모음 글자
    static ref JUNGSEONG_TO_LETTER: HashMap<char, char> = JUNGSEONG_PAIRS.iter().copied().collect();
    /// 조합용 종성 자모 -> 호환용 자음 글자
    static ref JONGSEONG_TO_LETTER: HashMap<char, char> = JONGSEONG_PAIRS.iter().copied().collect();
    /// 호환용 모음 글자 -> 조합용 중성 자모 (재조합용)
    static ref LETTER_TO_JUNGSEONG: HashMap<char, char> =
        JUNGSEONG_PAIRS.iter().map(|&(jamo, letter)| (letter, jamo)).collect();
    /// 호환용 자음 글자 -> 조합용 종성 자모 (재조합용)
    static ref LETTER_TO_JONGSEONG: HashMap<char, char> =
        JONGSEONG_PAIRS.iter().map(|&(jamo, letter)| (letter, jamo)).collect();
}

/// ㄱ(U+3131) -> ㄱ(U+1100). 초성 글자가 아니면 그대로 반환
pub fn letter_to_choseong(c: char) -> char {
    LETTER_TO_CHOSEONG.get(&c).copied().unwrap_or(c)
}

/// ㄱ(U+1100) -> ㄱ(U+3131). 조합용 초성이 아니면 그대로 반환
pub fn choseong_to_letter(c: char) -> char {
    CHOSEONG_TO_LETTER.get(&c).copied().unwrap_or(c)
}

/// ㅏ(U+1161) -> ㅏ(U+314F). 조합용 중성이 아니면 그대로 반환
pub fn jungseong_to_letter(c: char) -> char {
    JUNGSEONG_TO_LETTER.get(&c).copied().unwrap_or(c)
}

/// ㄱ(U+11A8) -> ㄱ(U+3131). 조합용 종성이 아니면 그대로 반환
pub fn jongseong_to_letter(c: char) -> char {
    JONGSEONG_TO_LETTER.get(&c).copied().unwrap_or(c)
}

/// ㅏ(U+314F) -> ㅏ(U+1161). 모음 글자가 아니면 그대로 반환
pub fn letter_to_jungseong(c: char) -> char {
    LETTER_TO_JUNGSEONG.get(&c).copied().unwrap_or(c)
}

/// ㄱ(U+3131) -> ㄱ(U+11A8). 받침으로 쓸 수 없는 글자(ㄸ, ㅃ, ㅉ 등)는 그대로 반환
pub fn letter_to_jongseong(c: char) -> char {
    LETTER_TO_JONGSEONG.get(&c).copied().unwrap_or(c)
}
