// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timecard_domain::PersonId;

/// Lookup seam for the external person directory.
///
/// The engine resolves every actor through this trait before accepting
/// a transition; the persistence layer provides the production
/// implementation and tests provide stubs.
pub trait PersonDirectory {
    /// Returns true if the person is known to the directory.
    fn exists(&self, person: PersonId) -> bool;
}
