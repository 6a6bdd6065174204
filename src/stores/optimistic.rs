// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Snapshot of a value taken right before a tentative mutation.
///
/// Either [`Undo::commit`] once the remote side accepted the change, or
/// [`Undo::rollback`] to put the value back as it was.
#[must_use = "a pending mutation must be committed or rolled back"]
#[derive(Debug)]
pub struct Undo<T> {
    snapshot: T,
}

impl<T: Clone> Undo<T> {
    pub fn apply(target: &mut T, mutate: impl FnOnce(&mut T)) -> Self {
        let snapshot = target.clone();
        mutate(target);
        Self { snapshot }
    }

    pub fn commit(self) {}

    pub fn rollback(self, target: &mut T) {
        *target = self.snapshot;
    }
}
