//! 통합 테스트 - 공개 API로 본 입력/백스페이스/렌더링

use dubeolsik::{convert, InputEngine, StaticTables, TableError, TableSource};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_basic_jamo_composition() {
    assert_eq!(convert("rkskek"), "가나다");
    assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
}

#[test]
fn test_jongseong_handling() {
    assert_eq!(convert("gksrmf"), "한글");
    assert_eq!(convert("dkswl"), "안지"); // ㄴ+ㅈ -> 종성ㄴ + 초성ㅈ
}

#[test]
fn test_complex_vowel() {
    assert_eq!(convert("dhksfy"), "완료");
}

#[test]
fn test_complex_jongseong() {
    assert_eq!(convert("dlfr"), "읽"); // ㄹㄱ 복합종성
    assert_eq!(convert("dlfrj"), "일거"); // 복합종성 뒤 자음만 다음 초성으로
}

#[test]
fn test_double_consonant() {
    assert_eq!(convert("Tks"), "싼"); // ㅆ
    assert_eq!(convert("Rk"), "까"); // ㄲ
}

#[test]
fn test_mixed_input() {
    assert_eq!(convert("123rksk"), "123가나"); // 숫자는 그대로
    assert_eq!(convert("rk!sk"), "가!나"); // 특수문자에서 끊김
}

#[test]
fn test_empty_string() {
    assert_eq!(convert(""), "");
}

#[test]
fn test_jongseong_to_next_choseong() {
    assert_eq!(convert("rkrkrl"), "가가기"); // ㄱ이 종성->초성으로
}

#[test]
fn test_consonant_only() {
    assert_eq!(convert("r"), "ㄱ");
    assert_eq!(convert("rs"), "ㄱㄴ");
    // ㄱ+ㄴ은 결합 불가, ㄴ+ㅎ은 ㄶ으로 결합
    assert_eq!(convert("rsg"), "ㄱㄶ");
}

#[test]
fn test_vowel_only() {
    assert_eq!(convert("k"), "ㅏ");
    assert_eq!(convert("kh"), "ㅏㅗ");
}

#[test]
fn test_space_handling() {
    assert_eq!(convert("rk sk"), "가 나");
    assert_eq!(convert("gksrmf thtm"), "한글 소스");
}

#[test]
fn test_various_words() {
    assert_eq!(convert("zjavbxj"), "컴퓨터");
    assert_eq!(convert("vmfhrmfoa"), "프로그램");
}

#[test]
fn test_scenario_backspace_leaves_raw_choseong() {
    init_logger();
    let mut engine = InputEngine::dubeolsik();
    engine.input("dk");
    engine.backspace(1);
    assert_eq!(engine.render(), "ㅇ");
}

#[test]
fn test_typing_session_with_corrections() {
    init_logger();
    let mut engine = InputEngine::dubeolsik();
    engine.input("dkssudgktpdy");
    assert_eq!(engine.render(), "안녕하세요");

    // 요 -> ㅇ -> 세
    engine.backspace(2);
    assert_eq!(engine.render(), "안녕하세");
    engine.input("dy!");
    assert_eq!(engine.render(), "안녕하세요!");
    engine.backspace(1);
    engine.input(" rkqtek");
    assert_eq!(engine.render(), "안녕하세요 값다");
}

#[test]
fn test_unmapped_text_with_restricted_tables() {
    init_logger();
    // ㄱ, ㅏ 두 키만 있는 테이블에서는 "hello"가 전부 매핑 없는 문자
    let json = r#"{
        "keys": [
            {"key": "r", "jamo": "ㄱ", "roles": ["initial", "final"]},
            {"key": "k", "jamo": "ㅏ", "roles": ["medial"]}
        ],
        "choseong": ["ㄱ"],
        "jungseong": ["ㅏ"],
        "jongseong": ["ㄱ"]
    }"#;
    let source = TableSource::from_json(json).unwrap();
    let tables = StaticTables::from_source(&source).unwrap();

    let mut engine = InputEngine::new(&tables);
    engine.input("hello");
    assert_eq!(engine.render(), "hello");

    engine.input(" rkr");
    assert_eq!(engine.render(), "hello 각");
}

#[test]
fn test_tables_from_file() {
    init_logger();
    let dir = std::env::temp_dir().join(format!("dubeolsik-it-{}", std::process::id()));
    let path = dir.join("dubeolsik.json");

    StaticTables::dubeolsik().source().save(&path).unwrap();
    let tables = StaticTables::load(&path).unwrap();

    let mut engine = InputEngine::new(&tables);
    engine.input("gksrmf");
    assert_eq!(engine.render(), "한글");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_tables_are_rejected() {
    let json = r#"{
        "keys": [{"key": "r", "jamo": "ㄱ", "roles": ["choseong"]}],
        "choseong": []
    }"#;
    let source = TableSource::from_json(json).unwrap();
    let err = StaticTables::from_source(&source).unwrap_err();
    assert!(matches!(err, TableError::Format(_)));
    assert!(!err.to_string().is_empty());
}
