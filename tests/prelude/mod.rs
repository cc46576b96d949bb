//! Shared imports for the conversion test suites.
#![allow(unfulfilled_lint_expectations)]

#[expect(unused_imports, reason = "not every suite drives the binary")]
pub use assert_cmd::{Command, prelude::*};
#[expect(unused_imports, reason = "not every suite asserts on output text")]
pub use predicates::prelude::*;
#[expect(unused_imports, reason = "re-exported for case-style tests")]
pub use rstest::rstest;

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
#[expect(unused_imports, reason = "envelope helpers are only used by some suites")]
pub use common::{assert_parts_well_formed, rune_len};
