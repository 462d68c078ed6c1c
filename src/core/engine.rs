//! 키 입력 엔진
//!
//! 조합 버퍼 하나와 확정된 출력 로그를 가지고, 키 입력과 백스페이스를
//! 상태 기계에 차례로 흘려보냅니다. 테이블은 참조로만 들고 있어
//! 여러 엔진이 같은 테이블을 공유할 수 있습니다.

use std::fmt;

use crate::core::hangul_fsm::{retreat, transition, CompositionBuffer};
use crate::core::tables::StaticTables;

/// 두벌식 입력 세션
#[derive(Clone)]
pub struct InputEngine<'t> {
    tables: &'t StaticTables,
    buffer: CompositionBuffer,
    /// 확정된 출력
    log: String,
}

impl InputEngine<'static> {
    /// 기본 두벌식 테이블을 쓰는 엔진
    pub fn dubeolsik() -> Self {
        Self::new(StaticTables::dubeolsik())
    }
}

impl<'t> InputEngine<'t> {
    /// 빈 버퍼, 빈 출력으로 시작
    pub fn new(tables: &'t StaticTables) -> Self {
        Self {
            tables,
            buffer: CompositionBuffer::new(),
            log: String::new(),
        }
    }

    /// 문자 하나를 키 하나로 보고 왼쪽부터 차례로 입력
    pub fn input(&mut self, text: &str) {
        for key in text.chars() {
            let (buffer, emission) = transition(self.tables, self.buffer, key);
            if let Some(emission) = emission {
                emission.append_to(&mut self.log);
            }
            self.buffer = buffer;
        }
    }

    /// 백스페이스 `count`번
    ///
    /// 조합 중인 글자는 자모 하나씩 지우고, 버퍼가 비면 확정된 출력에서
    /// 문자 하나씩 지웁니다. 지울 것이 없으면 아무 일도 하지 않습니다.
    pub fn backspace(&mut self, count: usize) {
        for _ in 0..count {
            match retreat(self.tables, self.buffer) {
                Some(buffer) => self.buffer = buffer,
                None => {
                    self.log.pop();
                }
            }
        }
    }

    /// 확정된 출력 + 조합 중인 글자
    pub fn render(&self) -> String {
        let mut rendered = self.log.clone();
        rendered.push_str(&self.composing());
        rendered
    }

    /// 확정된 출력만
    pub fn committed(&self) -> &str {
        &self.log
    }

    /// 조합 중인 글자만 (미완성이면 낱자모 나열)
    pub fn composing(&self) -> String {
        self.buffer.compose(self.tables)
    }

    /// 조합 버퍼 복사본
    pub fn buffer(&self) -> CompositionBuffer {
        self.buffer
    }

    /// 조합 중인 글자를 확정 (입력 포커스를 잃을 때 등)
    pub fn commit(&mut self) {
        let composed = self.buffer.take(self.tables);
        self.log.push_str(&composed);
    }

    /// 버퍼와 출력을 모두 비움
    pub fn clear(&mut self) {
        self.buffer = CompositionBuffer::new();
        self.log.clear();
    }
}

impl fmt::Display for InputEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.log, self.composing())
    }
}

impl fmt::Debug for InputEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputEngine")
            .field("committed", &self.log)
            .field("composing", &self.composing())
            .finish()
    }
}
