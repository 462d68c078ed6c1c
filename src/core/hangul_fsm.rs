//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 상태는 조합 버퍼의 초성/중성/종성 칸 중 어느 칸이 차 있는지로 정해집니다.
//! 전이는 순수 함수 [`transition`]과 [`retreat`]로 표현되어 엔진 없이도
//! 하나씩 검증할 수 있습니다.

use std::fmt;

use crate::core::jamo::{Jamo, RoleSet};
use crate::core::tables::StaticTables;
use crate::core::unicode::compose_syllable;

/// FSM 상태 (버퍼의 어느 칸이 차 있는지)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 중성만 입력됨 (자음 없이 모음으로 시작)
    Jungseong,
    /// 초성+중성 (한 글자 조합 중)
    ChoseongJungseong,
    /// 초성+중성+종성 (한 글자 조합 중)
    ChoseongJungseongJongseong,
    /// 중성+종성 (모음으로 시작한 뒤 자음이 붙음)
    JungseongJongseong,
    /// 종성 칸만 (모음 없이 자음 두 개가 결합됨, 예: ㄳ)
    Jongseong,
}

/// 조합 중인 한 음절
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositionBuffer {
    choseong: Option<Jamo>,
    jungseong: Option<Jamo>,
    jongseong: Option<Jamo>,
}

/// 전이 한 번으로 버퍼 밖으로 확정되어 나가는 내용
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// 확정된 음절 (미완성이면 낱자모 나열)
    Commit(String),
    /// 조합 중이던 내용(비어 있을 수 있음)을 확정한 뒤 매핑 없는 문자를 그대로 출력
    Passthrough { flushed: String, raw: char },
}

impl Emission {
    /// 출력 로그에 덧붙임
    pub fn append_to(&self, out: &mut String) {
        match self {
            Emission::Commit(text) => out.push_str(text),
            Emission::Passthrough { flushed, raw } => {
                out.push_str(flushed);
                out.push(*raw);
            }
        }
    }
}

impl CompositionBuffer {
    /// 빈 버퍼
    pub const fn new() -> Self {
        Self {
            choseong: None,
            jungseong: None,
            jongseong: None,
        }
    }

    /// 초성 칸
    pub fn choseong(&self) -> Option<Jamo> {
        self.choseong
    }

    /// 중성 칸
    pub fn jungseong(&self) -> Option<Jamo> {
        self.jungseong
    }

    /// 종성 칸
    pub fn jongseong(&self) -> Option<Jamo> {
        self.jongseong
    }

    /// 세 칸이 모두 비었는지
    pub fn is_empty(&self) -> bool {
        self.choseong.is_none() && self.jungseong.is_none() && self.jongseong.is_none()
    }

    /// 초성과 중성이 모두 있어 음절 블록으로 표시할 수 있는지
    pub fn is_complete(&self) -> bool {
        self.choseong.is_some() && self.jungseong.is_some()
    }

    /// 현재 FSM 상태
    pub fn state(&self) -> State {
        match (self.choseong, self.jungseong, self.jongseong) {
            (None, None, None) => State::Empty,
            (Some(_), None, None) => State::Choseong,
            (None, Some(_), None) => State::Jungseong,
            (Some(_), Some(_), None) => State::ChoseongJungseong,
            (Some(_), Some(_), Some(_)) => State::ChoseongJungseongJongseong,
            (None, Some(_), Some(_)) => State::JungseongJongseong,
            // 초성+종성 조합은 전이 규칙상 만들어지지 않음
            (_, None, Some(_)) => State::Jongseong,
        }
    }

    /// 화면에 보이는 모양
    ///
    /// 완성된 음절이면 음절 블록 하나, 아니면 차 있는 칸의 자모를
    /// 초성 -> 중성 -> 종성 순으로 나열합니다.
    pub fn compose(&self, tables: &StaticTables) -> String {
        if let (Some(cho), Some(jung)) = (self.choseong, self.jungseong) {
            if let Some(syllable) = syllable(tables, cho, jung, self.jongseong) {
                return syllable.to_string();
            }
            log::warn!("음절 인덱스 조회 실패, 낱자모로 표시: {:?}", self);
        }
        self.raw()
    }

    fn raw(&self) -> String {
        [self.choseong, self.jungseong, self.jongseong]
            .into_iter()
            .flatten()
            .map(Jamo::as_char)
            .collect()
    }

    /// 현재 글자를 확정해서 꺼내고 버퍼를 비움 (flush)
    pub fn take(&mut self, tables: &StaticTables) -> String {
        let composed = self.compose(tables);
        if !composed.is_empty() {
            log::debug!("확정: {}", composed);
        }
        *self = Self::new();
        composed
    }
}

impl fmt::Debug for CompositionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionBuffer")
            .field("choseong", &self.choseong.map(Jamo::as_char))
            .field("jungseong", &self.jungseong.map(Jamo::as_char))
            .field("jongseong", &self.jongseong.map(Jamo::as_char))
            .finish()
    }
}

/// 인덱스 계산은 여기서만: 종성 없음(None)이 0번으로 바뀌는 곳
fn syllable(tables: &StaticTables, cho: Jamo, jung: Jamo, jong: Option<Jamo>) -> Option<char> {
    compose_syllable(
        tables.choseong_index(cho)?,
        tables.jungseong_index(jung)?,
        tables.jongseong_index(jong)?,
    )
}

/// 키 하나를 입력했을 때의 상태 전이
///
/// 규칙은 위에서부터 처음 맞는 것 하나만 적용됩니다.
/// 1. 매핑 없는 키: 버퍼 확정 후 문자를 그대로 출력
/// 2. 빈 버퍼: 초성 자리가 가능하면 초성, 아니면 중성
/// 3. 종성 있음: 모음이면 종성(복합 종성이면 뒤 자음)을 다음 글자 초성으로 넘기고,
///    자음이면 복합 종성 결합 시도
/// 4. 중성 있음: 종성 가능하면 종성, 모음이면 복합 모음 결합 시도
/// 5. 초성만 있음: 모음이면 중성, 자음이면 결합 시도 (결합 결과는 종성 칸으로)
///
/// 결합 실패는 모두 "현재 글자 확정 후 새 글자 시작"으로 처리됩니다.
pub fn transition(
    tables: &StaticTables,
    mut buffer: CompositionBuffer,
    key: char,
) -> (CompositionBuffer, Option<Emission>) {
    let Some((jamo, roles)) = tables.resolve_key(key) else {
        let flushed = buffer.take(tables);
        return (buffer, Some(Emission::Passthrough { flushed, raw: key }));
    };

    let mut flushed = String::new();

    if buffer.is_empty() {
        if roles.contains(RoleSet::CHOSEONG) {
            buffer.choseong = Some(jamo);
        } else {
            buffer.jungseong = Some(jamo);
        }
    } else if let Some(jong) = buffer.jongseong {
        if roles.contains(RoleSet::JUNGSEONG) {
            // 종성을 다음 글자 초성으로 분리
            // 복합 종성이면 뒤 자음만, 단일 종성이면 전체
            let carried = match tables.split(jong) {
                Some((kept, carried)) => {
                    buffer.jongseong = Some(kept);
                    carried
                }
                None => {
                    buffer.jongseong = None;
                    jong
                }
            };
            flushed = buffer.take(tables);
            buffer.choseong = Some(carried);
            buffer.jungseong = Some(jamo);
        } else if let Some(combined) = tables.bind(jong, jamo) {
            buffer.jongseong = Some(combined);
        } else {
            flushed = buffer.take(tables);
            buffer.choseong = Some(jamo);
        }
    } else if let Some(jung) = buffer.jungseong {
        if roles.contains(RoleSet::JONGSEONG) {
            buffer.jongseong = Some(jamo);
        } else if roles.contains(RoleSet::JUNGSEONG) {
            if let Some(combined) = tables.bind(jung, jamo) {
                buffer.jungseong = Some(combined);
            } else {
                flushed = buffer.take(tables);
                buffer.jungseong = Some(jamo);
            }
        } else {
            // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
            flushed = buffer.take(tables);
            buffer.choseong = Some(jamo);
        }
    } else if let Some(cho) = buffer.choseong {
        if roles.contains(RoleSet::JUNGSEONG) {
            buffer.jungseong = Some(jamo);
        } else if let Some(combined) = tables.bind(cho, jamo) {
            // 모음 없이 자음 두 개: 모음이 오면 규칙 3에서 다시 나뉨
            buffer.choseong = None;
            buffer.jongseong = Some(combined);
        } else {
            flushed = buffer.take(tables);
            buffer.choseong = Some(jamo);
        }
    }

    log::trace!("{:?} -> {:?} ({:?})", key, buffer.state(), buffer);

    let emission = (!flushed.is_empty()).then_some(Emission::Commit(flushed));
    (buffer, emission)
}

/// 백스페이스 한 번: 마지막에 입력된 자모 하나를 버퍼에서 떼어냄
///
/// 종성 -> 중성 -> 초성 순으로, 복합 자모는 앞 자모만 남깁니다.
/// 버퍼가 이미 비어 있으면 None (출력 로그에서 지워야 함).
pub fn retreat(tables: &StaticTables, mut buffer: CompositionBuffer) -> Option<CompositionBuffer> {
    if let Some(jong) = buffer.jongseong {
        buffer.jongseong = tables.split(jong).map(|(first, _)| first);
    } else if let Some(jung) = buffer.jungseong {
        buffer.jungseong = tables.split(jung).map(|(first, _)| first);
    } else if buffer.choseong.is_some() {
        buffer.choseong = None;
    } else {
        return None;
    }

    log::trace!("backspace -> {:?}", buffer.state());
    Some(buffer)
}
