//! 받침 유무에 따른 조사 선택

use serde::{Deserialize, Serialize};

use crate::core::normalizer::decompose_letters;
use crate::core::unicode::{has_jongseong, is_hangul_syllable};

/// 자주 쓰는 조사 쌍
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Josa {
    /// 은/는
    EunNeun,
    /// 이/가
    IGa,
    /// 을/를
    EulReul,
    /// 과/와
    GwaWa,
    /// 이다/다
    IdaDa,
    /// 으로/로
    EuroRo,
}

impl Josa {
    /// (받침 뒤에 붙는 조사, 받침 없는 글자 뒤에 붙는 조사)
    pub fn forms(self) -> (&'static str, &'static str) {
        match self {
            Josa::EunNeun => ("은", "는"),
            Josa::IGa => ("이", "가"),
            Josa::EulReul => ("을", "를"),
            Josa::GwaWa => ("과", "와"),
            Josa::IdaDa => ("이다", "다"),
            Josa::EuroRo => ("으로", "로"),
        }
    }
}

impl std::str::FromStr for Josa {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "은" | "는" | "은는" | "eunneun" => Ok(Josa::EunNeun),
            "이" | "가" | "이가" | "iga" => Ok(Josa::IGa),
            "을" | "를" | "을를" | "eulreul" => Ok(Josa::EulReul),
            "과" | "와" | "과와" | "gwawa" => Ok(Josa::GwaWa),
            "이다" | "다" | "idada" => Ok(Josa::IdaDa),
            "으로" | "로" | "euroro" => Ok(Josa::EuroRo),
            other => Err(format!("알 수 없는 조사: {}", other)),
        }
    }
}

/// 단어 끝 글자의 받침 유무에 맞는 조사를 붙여서 반환
///
/// 끝 글자가 완성형 음절이 아니면(영문, 숫자, 낱자) 조사를 붙이지 않음
pub fn append_josa(word: &str, after_jongseong: &str, after_vowel: &str) -> String {
    if word.trim().is_empty() {
        return word.to_string();
    }

    match word.chars().last() {
        Some(last) if is_hangul_syllable(last) => {
            let josa = if has_jongseong(last) {
                after_jongseong
            } else {
                after_vowel
            };
            format!("{}{}", word, josa)
        }
        _ => word.to_string(),
    }
}

/// 조사 종류로 조사 붙이기: "사과" + 을/를 → "사과를"
pub fn append_josa_type(word: &str, josa: Josa) -> String {
    let (after_jongseong, after_vowel) = josa.forms();

    // ㄹ 받침 뒤에는 '으로'가 아니라 '로'
    if josa == Josa::EuroRo && ends_with_rieul(word) {
        return format!("{}{}", word, after_vowel);
    }

    append_josa(word, after_jongseong, after_vowel)
}

fn ends_with_rieul(word: &str) -> bool {
    word.chars()
        .last()
        .and_then(decompose_letters)
        .is_some_and(|letters| letters.jongseong == Some('ㄹ'))
}
