//! 문자 비교기를 주입받는 부분 문자열 검색

use super::comparator::Comparator;

/// `keyword`가 처음 나타나는 위치(문자 단위)를 찾음
///
/// 단순 전수 비교(O(|s|·|keyword|))이며 분해된 문자열을 만들지 않고
/// 두 입력을 직접 비교합니다. 문자 비교는 `cmp`에 위임합니다.
pub fn find<C: Comparator + ?Sized>(cmp: &C, s: &str, keyword: &str) -> Option<usize> {
    let text: Vec<char> = s.chars().collect();
    let pattern: Vec<char> = keyword.chars().collect();

    if pattern.len() > text.len() {
        return None;
    }
    let Some((&first, rest)) = pattern.split_first() else {
        return Some(0);
    };

    let max = text.len() - pattern.len();
    let mut i = 0;
    while i <= max {
        // 첫 글자가 맞는 위치까지 이동
        if !cmp.char_equals(text[i], first) {
            i += 1;
            continue;
        }

        let tail = &text[i + 1..i + pattern.len()];
        if tail
            .iter()
            .zip(rest)
            .all(|(&c, &k)| cmp.char_equals(c, k))
        {
            log::trace!("'{}' 검색 성공: 위치 {}", keyword, i);
            return Some(i);
        }
        i += 1;
    }

    None
}

/// 문자 위치 `start`부터 `len`글자에 해당하는 원문 조각
pub fn char_slice(s: &str, start: usize, len: usize) -> &str {
    let mut indices = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
    let Some(begin) = indices.nth(start) else {
        return "";
    };
    let end = if len == 0 {
        begin
    } else {
        indices.nth(len - 1).unwrap_or(s.len())
    };
    &s[begin..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(c: char, k: char) -> bool {
        c == k
    }

    #[test]
    fn test_find_exact() {
        assert_eq!(find(&exact, "hello", "ll"), Some(2));
        assert_eq!(find(&exact, "hello", "lo"), Some(3));
        assert_eq!(find(&exact, "hello", "hello"), Some(0));
        assert_eq!(find(&exact, "hello", "z"), None);
        assert_eq!(find(&exact, "aaab", "aab"), Some(1));
    }

    #[test]
    fn test_find_degenerate() {
        assert_eq!(find(&exact, "hello", ""), Some(0));
        assert_eq!(find(&exact, "", ""), Some(0));
        assert_eq!(find(&exact, "", "a"), None);
        assert_eq!(find(&exact, "hi", "high"), None);
    }

    #[test]
    fn test_find_counts_chars() {
        // 바이트가 아닌 문자 단위 위치
        assert_eq!(find(&exact, "한글abc", "a"), Some(2));
    }

    #[test]
    fn test_char_slice() {
        assert_eq!(char_slice("한글초성", 2, 2), "초성");
        assert_eq!(char_slice("한글초성", 0, 1), "한");
        assert_eq!(char_slice("강남 Style", 0, 5), "강남 St");
        assert_eq!(char_slice("abc", 3, 0), "");
        assert_eq!(char_slice("abc", 1, 0), "");
    }
}
