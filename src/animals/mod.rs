// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The animals the feeder knows nothing about.
//!
//! Each animal is a small immutable struct implementing
//! [`Eater`](crate::traits::Eater) with its own phrasing. New species slot in
//! as new implementors; none of the existing code changes.

mod cat;
mod dog;
mod factory;
mod portion;
mod rat;

pub use cat::Cat;
pub use dog::Dog;
pub use factory::AnimalFactory;
pub use portion::Portion;
pub use rat::Rat;
