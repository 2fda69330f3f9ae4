//! 유니코드 한글 영역 판별 및 음절 조합/분해 연산

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_END: u32 = 0xD7A3;

/// 한글 자모 영역 (조합용, U+1100 ~ U+11FF)
pub const HANGUL_JAMO_START: u32 = 0x1100;
pub const HANGUL_JAMO_END: u32 = 0x11FF;
/// 조합용 중성 시작 (ㅏ)
pub const JUNGSEONG_JAMO_START: u32 = 0x1161;
/// 조합용 종성 시작 (ㄱ), 종성 인덱스 1에 대응
pub const JONGSEONG_JAMO_START: u32 = 0x11A8;
/// 조합용 초성 끝 (ㅎ)
pub const CHOSEONG_JAMO_END: u32 = 0x1112;

/// 호환용 자모 영역 (U+3130 ~ U+318F)
pub const HANGUL_LETTER_START: u32 = 0x3130;
pub const HANGUL_LETTER_END: u32 = 0x318F;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;
/// 초성 하나가 차지하는 음절 수 (21 × 28)
pub const CHOSEONG_INTERVAL: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 글자의 분해 단계
///
/// - `Level1`: 초성만으로 이루어진 글자 (ㄱ, ㄴ, ㄲ ...). ㄳ, ㅀ 같은 받침 전용 글자는 제외
/// - `Level2`: 초성+중성 음절 (가, 나, 로, 휘 ...)
/// - `Level3`: 초성+중성+종성 음절 (각, 한, 닳 ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JamoLevel {
    None,
    Level1,
    Level2,
    Level3,
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END).contains(&(c as u32))
}

/// 조합용 자모 또는 호환용 자모 영역인지 확인
pub fn is_jamo_or_letter(c: char) -> bool {
    let cp = c as u32;
    (HANGUL_JAMO_START..=HANGUL_JAMO_END).contains(&cp)
        || (HANGUL_LETTER_START..=HANGUL_LETTER_END).contains(&cp)
}

/// 조합용 초성 자모(U+1100 ~ U+1112)인지 확인
pub fn is_choseong_jamo(c: char) -> bool {
    (HANGUL_JAMO_START..=CHOSEONG_JAMO_END).contains(&(c as u32))
}

/// 받침이 있는 음절인지 확인
pub fn has_jongseong(c: char) -> bool {
    is_hangul_syllable(c) && syllable_offset(c) % JONGSEONG_COUNT != 0
}

/// 글자의 분해 단계 판별
pub fn jamo_level(c: char) -> JamoLevel {
    if is_jamo_or_letter(c) {
        let jamo = crate::core::jamo_mapper::letter_to_choseong(c);
        if is_choseong_jamo(jamo) {
            JamoLevel::Level1
        } else {
            JamoLevel::None
        }
    } else if is_hangul_syllable(c) {
        if has_jongseong(c) {
            JamoLevel::Level3
        } else {
            JamoLevel::Level2
        }
    } else {
        JamoLevel::None
    }
}

/// 음절 시작(가)으로부터의 오프셋. 호출 전에 음절 범위를 확인해야 함
fn syllable_offset(c: char) -> u32 {
    c as u32 - HANGUL_SYLLABLE_BASE
}

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = syllable_offset(c);
    let choseong = offset / CHOSEONG_INTERVAL;
    let jungseong = (offset % CHOSEONG_INTERVAL) / JONGSEONG_COUNT;
    let jongseong = (offset % CHOSEONG_INTERVAL) % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 음절의 초성을 조합용 초성 자모로 반환 (한 → U+1112)
pub fn choseong_jamo_of(c: char) -> Option<char> {
    let (cho, _, _) = decompose_syllable(c)?;
    char::from_u32(HANGUL_JAMO_START + cho)
}

/// 음절의 중성을 조합용 중성 자모로 반환 (한 → U+1161)
pub fn jungseong_jamo_of(c: char) -> Option<char> {
    let (_, jung, _) = decompose_syllable(c)?;
    char::from_u32(JUNGSEONG_JAMO_START + jung)
}

/// 음절의 종성을 조합용 종성 자모로 반환 (받침이 없으면 None)
pub fn jongseong_jamo_of(c: char) -> Option<char> {
    let (_, _, jong) = decompose_syllable(c)?;
    if jong == 0 {
        return None;
    }
    char::from_u32(JONGSEONG_JAMO_START + jong - 1)
}
