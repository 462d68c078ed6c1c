//! 자판 테이블 파일 로드/저장 (JSON)
//!
//! 기본 두벌식 테이블 대신 다른 테이블 세트를 쓰고 싶을 때 사용합니다.
//! 파일은 검증 없이 [`TableSource`]로 읽히고,
//! [`StaticTables::from_source`](crate::StaticTables::from_source)에서 검증됩니다.
//!
//! # 파일 형식
//! ```json
//! {
//!   "keys": [{ "key": "r", "jamo": "ㄱ", "roles": ["choseong", "jongseong"] }],
//!   "choseong": ["ㄱ", "ㄲ"],
//!   "jungseong": ["ㅏ", "ㅐ"],
//!   "jongseong": ["ㄱ", "ㄲ"],
//!   "binds": [{ "first": "ㄱ", "second": "ㅅ", "combined": "ㄳ" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::jamo::{Jamo, Role};
use crate::core::jamo_mapper::{dubeolsik_keys, BINDS, CHOSEONG, JONGSEONG, JUNGSEONG};
use crate::core::tables::TableError;

/// 키 하나의 매핑
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KeyEntry {
    pub key: char,
    pub jamo: Jamo,
    pub roles: Vec<Role>,
}

/// 복합 자모 결합 규칙 하나
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BindEntry {
    pub first: Jamo,
    pub second: Jamo,
    pub combined: Jamo,
}

/// 테이블 세트 원본 데이터
///
/// `choseong[i]`의 인덱스는 `i`, `jungseong[i]`는 `i`,
/// `jongseong[i]`는 `i + 1`입니다 (종성 0번은 "종성 없음").
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSource {
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
    #[serde(default)]
    pub choseong: Vec<Jamo>,
    #[serde(default)]
    pub jungseong: Vec<Jamo>,
    #[serde(default)]
    pub jongseong: Vec<Jamo>,
    #[serde(default)]
    pub binds: Vec<BindEntry>,
}

impl TableSource {
    /// 기본 두벌식 테이블
    pub fn dubeolsik() -> Self {
        Self {
            keys: dubeolsik_keys()
                .into_iter()
                .map(|(key, jamo, roles)| KeyEntry {
                    key,
                    jamo,
                    roles: roles.roles().collect(),
                })
                .collect(),
            choseong: CHOSEONG.iter().copied().map(Jamo::new).collect(),
            jungseong: JUNGSEONG.iter().copied().map(Jamo::new).collect(),
            jongseong: JONGSEONG.iter().copied().map(Jamo::new).collect(),
            binds: BINDS
                .iter()
                .map(|&(first, second, combined)| BindEntry {
                    first: Jamo::new(first),
                    second: Jamo::new(second),
                    combined: Jamo::new(combined),
                })
                .collect(),
        }
    }

    /// JSON 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// JSON 문자열에서 로드
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(|e| TableError::Json(e.to_string()))
    }

    /// JSON 파일로 저장
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(self).map_err(|e| TableError::Json(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }
}
