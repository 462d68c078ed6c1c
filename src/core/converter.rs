//! 영문 키 입력 -> 한글 한 번에 변환

use crate::core::engine::InputEngine;

/// 영문 키 입력 문자열을 기본 두벌식 테이블로 입력했을 때 화면에 보이는 결과
/// 매핑 없는 문자(숫자, 특수문자, 공백 등)는 그대로 유지
pub fn convert(input: &str) -> String {
    let mut engine = InputEngine::dubeolsik();
    engine.input(input);
    engine.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert("rkskek"), "가나다");
        assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(convert("gksrmf"), "한글");
        assert_eq!(convert("dkswl"), "안지");
    }

    #[test]
    fn test_complex_vowel() {
        assert_eq!(convert("dhksfy"), "완료");
    }

    #[test]
    fn test_complex_jongseong() {
        assert_eq!(convert("dlfr"), "읽");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(convert("123rksk"), "123가나");
        assert_eq!(convert("rk!sk"), "가!나");
    }

    #[test]
    fn test_uppercase_passes_through_to_jamo() {
        // 쌍자음이 없는 키는 대문자도 같은 자모
        assert_eq!(convert("X"), "ㅌ");
        assert_eq!(convert("GKS"), "한");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_jongseong_split() {
        assert_eq!(convert("rkrkrl"), "가가기");
    }
}
