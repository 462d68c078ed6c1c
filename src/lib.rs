//! 두벌식 자판 키 입력 에뮬레이터
//!
//! 영문 키 입력을 두벌식 자판의 한글 자모로 바꾸고, 실제 입력기(IME)처럼
//! 음절 단위로 조합해서 보여줍니다.
//!
//! ```
//! use dubeolsik::InputEngine;
//!
//! let mut engine = InputEngine::dubeolsik();
//! engine.input("dkssud");
//! assert_eq!(engine.render(), "안녕");
//!
//! engine.backspace(1);
//! assert_eq!(engine.render(), "안녀");
//! ```

pub mod config;
pub mod core;

pub use crate::config::TableSource;
pub use crate::core::converter::convert;
pub use crate::core::engine::InputEngine;
pub use crate::core::hangul_fsm::{CompositionBuffer, Emission, State};
pub use crate::core::jamo::{Jamo, Role, RoleSet};
pub use crate::core::tables::{StaticTables, TableError};
