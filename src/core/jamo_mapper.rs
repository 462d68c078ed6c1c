//! 두벌식 자판 기본 테이블 데이터
//!
//! 영문 키 -> 자모 매핑, 초성/중성/종성 순서표, 복합 자모 결합표를
//! 담고 있습니다. [`StaticTables::dubeolsik`](crate::StaticTables::dubeolsik)이
//! 이 데이터로 만들어집니다.

use crate::core::jamo::{Jamo, RoleSet};

/// 초성+종성 모두 가능한 자음
const CONSONANT: RoleSet = RoleSet::CHOSEONG.union(RoleSet::JONGSEONG);
/// 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
const CHOSEONG_ONLY: RoleSet = RoleSet::CHOSEONG;
const VOWEL: RoleSet = RoleSet::JUNGSEONG;

/// 영문 키 -> (자모, 가능한 자리)
#[rustfmt::skip]
pub const KEYMAP: [(char, char, RoleSet); 33] = [
    // 자음
    ('r', 'ㄱ', CONSONANT),
    ('R', 'ㄲ', CONSONANT),
    ('s', 'ㄴ', CONSONANT),
    ('e', 'ㄷ', CONSONANT),
    ('E', 'ㄸ', CHOSEONG_ONLY),
    ('f', 'ㄹ', CONSONANT),
    ('a', 'ㅁ', CONSONANT),
    ('q', 'ㅂ', CONSONANT),
    ('Q', 'ㅃ', CHOSEONG_ONLY),
    ('t', 'ㅅ', CONSONANT),
    ('T', 'ㅆ', CONSONANT),
    ('d', 'ㅇ', CONSONANT),
    ('w', 'ㅈ', CONSONANT),
    ('W', 'ㅉ', CHOSEONG_ONLY),
    ('c', 'ㅊ', CONSONANT),
    ('z', 'ㅋ', CONSONANT),
    ('x', 'ㅌ', CONSONANT),
    ('v', 'ㅍ', CONSONANT),
    ('g', 'ㅎ', CONSONANT),
    // 모음
    ('k', 'ㅏ', VOWEL),
    ('o', 'ㅐ', VOWEL),
    ('i', 'ㅑ', VOWEL),
    ('O', 'ㅒ', VOWEL),
    ('j', 'ㅓ', VOWEL),
    ('p', 'ㅔ', VOWEL),
    ('u', 'ㅕ', VOWEL),
    ('P', 'ㅖ', VOWEL),
    ('h', 'ㅗ', VOWEL),
    ('y', 'ㅛ', VOWEL),
    ('n', 'ㅜ', VOWEL),
    ('b', 'ㅠ', VOWEL),
    ('m', 'ㅡ', VOWEL),
    ('l', 'ㅣ', VOWEL),
];

/// 초성 순서 (인덱스 0~18)
#[rustfmt::skip]
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 순서 (인덱스 0~20)
#[rustfmt::skip]
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 순서 (인덱스 1~27, 0 = 종성 없음이라 목록에는 없음)
#[rustfmt::skip]
pub const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 복합 자모 결합표: (앞 자모, 뒤 자모) -> 결합 자모
#[rustfmt::skip]
pub const BINDS: [(char, char, char); 18] = [
    // 복합 모음
    ('ㅗ', 'ㅏ', 'ㅘ'),
    ('ㅗ', 'ㅐ', 'ㅙ'),
    ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'),
    ('ㅜ', 'ㅔ', 'ㅞ'),
    ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
    // 복합 종성
    ('ㄱ', 'ㅅ', 'ㄳ'),
    ('ㄴ', 'ㅈ', 'ㄵ'),
    ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'),
    ('ㄹ', 'ㅁ', 'ㄻ'),
    ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'),
    ('ㄹ', 'ㅌ', 'ㄾ'),
    ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'),
    ('ㅂ', 'ㅅ', 'ㅄ'),
];

/// 키맵 전체 (Shift 대문자 포함)
///
/// 쌍자음/ㅒ/ㅖ가 없는 키는 대문자로 눌러도 소문자와 같은 자모가 됩니다.
pub fn dubeolsik_keys() -> Vec<(char, Jamo, RoleSet)> {
    let mut keys: Vec<(char, Jamo, RoleSet)> = KEYMAP
        .iter()
        .map(|&(key, jamo, roles)| (key, Jamo::new(jamo), roles))
        .collect();

    for &(key, jamo, roles) in KEYMAP.iter().filter(|(key, ..)| key.is_ascii_lowercase()) {
        let upper = key.to_ascii_uppercase();
        if !KEYMAP.iter().any(|(k, ..)| *k == upper) {
            keys.push((upper, Jamo::new(jamo), roles));
        }
    }

    keys
}
