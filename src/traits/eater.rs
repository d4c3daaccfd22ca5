// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// The "describe eating" capability.
///
/// Every animal the feeder handles implements this trait. The feeder relies
/// on it exclusively; it never inspects the concrete type behind the
/// reference. This is the extension point: adding a new animal means adding
/// a new implementor, never touching the feeder.
pub trait Eater {
    /// Produce a human-readable line describing how this animal eats,
    /// referencing its name and portion size where it has them.
    ///
    /// Reads only the animal's own construction-time state. No side effects,
    /// no failure modes.
    fn describe_eating(&self) -> String;

    /// Species identifier, used for logging only. Control flow must never
    /// branch on it.
    fn species(&self) -> &'static str;
}
