//! 유니코드 한글 음절 블록 계산

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
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
