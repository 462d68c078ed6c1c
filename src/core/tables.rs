//! 조합에 쓰는 정적 룩업 테이블
//!
//! 엔진은 이 모듈의 조회 함수만 사용하고 내부 저장 구조에는 접근하지 않습니다.
//! 한 번 만들어진 테이블은 바뀌지 않으므로 여러 엔진이 참조로 공유할 수 있습니다.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::config::TableSource;
use crate::core::jamo::{Jamo, Role, RoleSet};
use crate::core::unicode::{CHOSEONG_COUNT, JONGSEONG_COUNT, JUNGSEONG_COUNT};

/// 테이블 로드/검증 에러
#[derive(Debug)]
pub enum TableError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Json(String),
    /// 테이블 내용 오류
    Format(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
            TableError::Json(s) => write!(f, "JSON 처리 오류: {}", s),
            TableError::Format(s) => write!(f, "테이블 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::Io(e)
    }
}

lazy_static! {
    static ref DUBEOLSIK: StaticTables = StaticTables::from_parts(&TableSource::dubeolsik());
}

/// 키맵, 초성/중성/종성 인덱스표, 결합표와 그 역인 분리표
#[derive(Debug, Clone, Default)]
pub struct StaticTables {
    keymap: HashMap<char, (Jamo, RoleSet)>,
    choseong: HashMap<Jamo, u32>,
    jungseong: HashMap<Jamo, u32>,
    jongseong: HashMap<Jamo, u32>,
    binds: HashMap<(Jamo, Jamo), Jamo>,
    splits: HashMap<Jamo, (Jamo, Jamo)>,
}

impl StaticTables {
    /// 프로세스 전체가 공유하는 기본 두벌식 테이블
    pub fn dubeolsik() -> &'static StaticTables {
        &DUBEOLSIK
    }

    /// 원본 데이터를 검증한 뒤 테이블 생성
    pub fn from_source(source: &TableSource) -> Result<Self, TableError> {
        validate(source)?;
        let tables = Self::from_parts(source);
        log::debug!(
            "테이블 생성: 키 {}개, 결합 규칙 {}개",
            tables.keymap.len(),
            tables.binds.len()
        );
        Ok(tables)
    }

    /// JSON 파일에서 로드 후 검증
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TableError> {
        Self::from_source(&TableSource::load(path)?)
    }

    fn from_parts(source: &TableSource) -> Self {
        let keymap = source
            .keys
            .iter()
            .map(|entry| {
                let roles: RoleSet = entry.roles.iter().copied().collect();
                (entry.key, (entry.jamo, roles))
            })
            .collect();

        let binds: HashMap<(Jamo, Jamo), Jamo> = source
            .binds
            .iter()
            .map(|bind| ((bind.first, bind.second), bind.combined))
            .collect();
        let splits = binds.iter().map(|(&pair, &combined)| (combined, pair)).collect();

        Self {
            keymap,
            choseong: index_map(&source.choseong, 0),
            jungseong: index_map(&source.jungseong, 0),
            jongseong: index_map(&source.jongseong, 1),
            binds,
            splits,
        }
    }

    /// 테이블을 원본 데이터 형식으로 되돌림 (키는 문자 순, 인덱스표는 인덱스 순)
    pub fn source(&self) -> TableSource {
        use crate::config::{BindEntry, KeyEntry};

        let mut keys: Vec<KeyEntry> = self
            .keymap
            .iter()
            .map(|(&key, &(jamo, roles))| KeyEntry {
                key,
                jamo,
                roles: roles.roles().collect(),
            })
            .collect();
        keys.sort_by_key(|entry| entry.key);

        let mut binds: Vec<BindEntry> = self
            .binds
            .iter()
            .map(|(&(first, second), &combined)| BindEntry {
                first,
                second,
                combined,
            })
            .collect();
        binds.sort_by_key(|bind| (bind.first, bind.second));

        TableSource {
            keys,
            choseong: ordered(&self.choseong),
            jungseong: ordered(&self.jungseong),
            jongseong: ordered(&self.jongseong),
            binds,
        }
    }

    /// 키 -> (자모, 가능한 자리). 매핑 없는 키는 None
    pub fn resolve_key(&self, key: char) -> Option<(Jamo, RoleSet)> {
        self.keymap.get(&key).copied()
    }

    /// 초성 인덱스 (0~18)
    pub fn choseong_index(&self, jamo: Jamo) -> Option<u32> {
        self.choseong.get(&jamo).copied()
    }

    /// 중성 인덱스 (0~20)
    pub fn jungseong_index(&self, jamo: Jamo) -> Option<u32> {
        self.jungseong.get(&jamo).copied()
    }

    /// 종성 인덱스 (1~27). 종성 없음(None)은 0
    pub fn jongseong_index(&self, jamo: Option<Jamo>) -> Option<u32> {
        match jamo {
            None => Some(0),
            Some(jamo) => self.jongseong.get(&jamo).copied(),
        }
    }

    /// 두 자모를 복합 자모로 결합
    pub fn bind(&self, first: Jamo, second: Jamo) -> Option<Jamo> {
        self.binds.get(&(first, second)).copied()
    }

    /// 복합 자모를 결합 전 두 자모로 분리 (`bind`의 역)
    pub fn split(&self, jamo: Jamo) -> Option<(Jamo, Jamo)> {
        self.splits.get(&jamo).copied()
    }
}

fn index_map(jamos: &[Jamo], offset: u32) -> HashMap<Jamo, u32> {
    jamos
        .iter()
        .enumerate()
        .map(|(i, &jamo)| (jamo, i as u32 + offset))
        .collect()
}

fn ordered(map: &HashMap<Jamo, u32>) -> Vec<Jamo> {
    let mut entries: Vec<(u32, Jamo)> = map.iter().map(|(&jamo, &i)| (i, jamo)).collect();
    entries.sort();
    entries.into_iter().map(|(_, jamo)| jamo).collect()
}

fn validate(source: &TableSource) -> Result<(), TableError> {
    check_index_table("choseong", &source.choseong, CHOSEONG_COUNT as usize)?;
    check_index_table("jungseong", &source.jungseong, JUNGSEONG_COUNT as usize)?;
    // 종성 0번(없음)은 목록에 없음
    check_index_table("jongseong", &source.jongseong, JONGSEONG_COUNT as usize - 1)?;

    let mut seen_keys = HashSet::new();
    for entry in &source.keys {
        if !seen_keys.insert(entry.key) {
            return Err(TableError::Format(format!("중복 키: {:?}", entry.key)));
        }
        if entry.roles.is_empty() {
            return Err(TableError::Format(format!(
                "키 {:?}에 자리가 지정되지 않았습니다",
                entry.key
            )));
        }
        for role in &entry.roles {
            let table = match role {
                Role::Choseong => &source.choseong,
                Role::Jungseong => &source.jungseong,
                Role::Jongseong => &source.jongseong,
            };
            if !table.contains(&entry.jamo) {
                return Err(TableError::Format(format!(
                    "키 {:?}의 자모 {}가 {:?} 인덱스표에 없습니다",
                    entry.key, entry.jamo, role
                )));
            }
        }
    }

    let mut seen_pairs = HashSet::new();
    let mut seen_combined = HashSet::new();
    for bind in &source.binds {
        if !seen_pairs.insert((bind.first, bind.second)) {
            return Err(TableError::Format(format!(
                "중복 결합 규칙: {} + {}",
                bind.first, bind.second
            )));
        }
        // 분리표가 결합표의 역이 되려면 결합 결과가 유일해야 함
        if !seen_combined.insert(bind.combined) {
            return Err(TableError::Format(format!(
                "결합 결과 {}가 두 번 이상 나옵니다",
                bind.combined
            )));
        }
        // 복합 종성의 뒤 자음은 모음이 오면 다음 초성으로 넘어감
        if source.jongseong.contains(&bind.combined) && !source.choseong.contains(&bind.second) {
            return Err(TableError::Format(format!(
                "복합 종성 {}의 뒤 자음 {}가 초성 인덱스표에 없습니다",
                bind.combined, bind.second
            )));
        }
    }

    Ok(())
}

fn check_index_table(name: &str, jamos: &[Jamo], max: usize) -> Result<(), TableError> {
    if jamos.len() > max {
        return Err(TableError::Format(format!(
            "{} 인덱스표가 너무 깁니다: {}개 (최대 {}개)",
            name,
            jamos.len(),
            max
        )));
    }
    let mut seen = HashSet::new();
    for jamo in jamos {
        if !seen.insert(jamo) {
            return Err(TableError::Format(format!("{} 인덱스표에 중복 자모: {}", name, jamo)));
        }
    }
    Ok(())
}
