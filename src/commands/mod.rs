//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule. Handlers take their options plus the
//! loaded [`Config`](crate::config::Config) and return `anyhow::Result`.

pub mod check;
pub mod describe;
pub mod highlight;
pub mod skeleton;

pub use check::{execute_check, CheckOptions};
pub use describe::{execute_describe, DescribeOptions};
pub use highlight::{execute_highlight, HighlightOptions};
pub use skeleton::{execute_skeleton, SkeletonOptions};
