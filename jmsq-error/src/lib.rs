// Copyright 2026 The JMSQ Admin Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # JMSQ Error Handling
//!
//! One error type for every JMSQ admin crate:
//! - **Semantic**: each variant says what went wrong (a bad timestamp literal in a selector, a
//!   ragged report row, a missing queue)
//! - **Propagating**: parse failures surface to the caller instead of being swallowed
//! - **Ergonomic**: `From` conversions for I/O and configuration errors
//!
//! ### Usage
//!
//! ```rust
//! use jmsq_error::JmsqError;
//! use jmsq_error::JmsqResult;
//!
//! fn check_month(literal: &str, month: u32) -> JmsqResult<()> {
//!     if month > 12 {
//!         return Err(JmsqError::malformed_timestamp(literal, "month out of range"));
//!     }
//!     Ok(())
//! }
//! # check_month("2018-05-03 17:47:53.728", 5).unwrap();
//! ```

pub mod unified;

pub use unified::JmsqError;
pub use unified::JmsqResult;
pub use unified::SerializationError;
pub use unified::ToolsError;
