//! 자모와 자리(초성/중성/종성) 타입

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// 한글 자모 한 글자 (호환용 자모 글리프)
///
/// 같은 글리프는 같은 자모입니다. ㄱ은 초성이든 종성이든 같은 `Jamo`이고,
/// 어느 자리에 들어갈 수 있는지는 [`RoleSet`]이 따로 표현합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jamo(char);

impl Jamo {
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Jamo {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Jamo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 음절 안의 자리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 초성 (첫소리)
    #[serde(alias = "initial")]
    Choseong,
    /// 중성 (가운뎃소리)
    #[serde(alias = "medial")]
    Jungseong,
    /// 종성 (끝소리)
    #[serde(alias = "final")]
    Jongseong,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Choseong, Role::Jungseong, Role::Jongseong];

    pub fn flag(self) -> RoleSet {
        match self {
            Role::Choseong => RoleSet::CHOSEONG,
            Role::Jungseong => RoleSet::JUNGSEONG,
            Role::Jongseong => RoleSet::JONGSEONG,
        }
    }
}

bitflags! {
    /// 자모가 들어갈 수 있는 자리의 집합
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RoleSet: u8 {
        const CHOSEONG = 0b001;
        const JUNGSEONG = 0b010;
        const JONGSEONG = 0b100;
    }
}

impl RoleSet {
    /// 집합에 포함된 자리 목록 (초성 -> 중성 -> 종성 순)
    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL
            .into_iter()
            .filter(move |role| self.contains(role.flag()))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RoleSet::empty(), |set, role| set | role.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_roundtrip_through_set() {
        let set: RoleSet = [Role::Jongseong, Role::Choseong].into_iter().collect();
        assert_eq!(set, RoleSet::CHOSEONG | RoleSet::JONGSEONG);
        assert_eq!(
            set.roles().collect::<Vec<_>>(),
            vec![Role::Choseong, Role::Jongseong]
        );
    }

    #[test]
    fn test_role_aliases() {
        let roles: Vec<Role> =
            serde_json::from_str(r#"["initial", "medial", "final", "choseong"]"#).unwrap();
        assert_eq!(
            roles,
            vec![Role::Choseong, Role::Jungseong, Role::Jongseong, Role::Choseong]
        );
    }

    #[test]
    fn test_jamo_is_glyph() {
        assert_eq!(Jamo::new('ㄱ'), Jamo::from('ㄱ'));
        assert_ne!(Jamo::new('ㄱ'), Jamo::new('ㄲ'));
        assert_eq!(Jamo::new('ㅘ').to_string(), "ㅘ");
        assert_eq!(serde_json::to_string(&Jamo::new('ㅏ')).unwrap(), "\"ㅏ\"");
    }
}
