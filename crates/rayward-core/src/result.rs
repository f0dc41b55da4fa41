// Copyright 2025 eraflo
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

//! The crate-wide result alias and sequence combinators.
//!
//! `std::result::Result` already carries the combinator surface the layer is
//! built on (`and_then` chains short-circuit at the first `Err`, `unwrap_or`
//! extracts with a default, `match` handles both variants exhaustively), so
//! this module only adds what std does not: collapsing a sequence of results
//! into one.

use crate::error::RayError;

/// Result alias used by every fallible operation in the graphics layer.
pub type RayResult<T> = Result<T, RayError>;

/// Collapses a sequence of results into a single result.
///
/// Returns `Ok` with all collected values, or the first `Err` by position.
/// The traversal stops at the first `Err`: when `results` is lazy, later
/// elements are never produced.
///
/// Useful for expressing a whole per-frame draw sequence as one value that
/// stops at the first failure without manual branching.
pub fn collect_results<T>(results: impl IntoIterator<Item = RayResult<T>>) -> RayResult<Vec<T>> {
    let mut collected = Vec::new();
    for result in results {
        collected.push(result?);
    }
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::cell::Cell;

    #[test]
    fn collects_all_ok_values_in_order() {
        let results = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(collect_results(results).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn first_error_by_position_wins() {
        let results = vec![
            Ok(1),
            Err(RayError::validation("first")),
            Err(RayError::ffi("second")),
        ];
        let err = collect_results(results).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "first");
    }

    #[test]
    fn lazy_traversal_stops_at_first_error() {
        let produced = Cell::new(0u32);
        let results = (0..10).map(|i| {
            produced.set(produced.get() + 1);
            if i == 3 {
                Err(RayError::draw("stop here"))
            } else {
                Ok(i)
            }
        });
        let err = collect_results(results).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Draw);
        // Elements 0..=3 were produced; 4..10 never were.
        assert_eq!(produced.get(), 4);
    }

    #[test]
    fn and_then_chain_short_circuits() {
        // Pins the std behavior the whole layer leans on: once a step fails,
        // no later step runs and the error passes through unchanged.
        let invoked = Cell::new(0u32);
        let step = |value: i32, fail: bool| -> RayResult<i32> {
            invoked.set(invoked.get() + 1);
            if fail {
                Err(RayError::state("step failed"))
            } else {
                Ok(value + 1)
            }
        };

        let outcome = step(0, false)
            .and_then(|v| step(v, true))
            .and_then(|v| step(v, false))
            .and_then(|v| step(v, false));

        let err = outcome.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);
        assert_eq!(err.message(), "step failed");
        assert_eq!(invoked.get(), 2);
    }

    #[test]
    fn empty_sequence_is_ok() {
        let results: Vec<RayResult<i32>> = Vec::new();
        assert_eq!(collect_results(results).unwrap(), Vec::<i32>::new());
    }
}
