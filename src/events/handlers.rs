// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::time::Instant;

use tracing::trace;

use crate::{App, engine::Key};

pub(super) fn handle_press(app: &mut App, key: Key) {
    let snapshot = app.engine.apply_key(key);
    trace!(phase = ?app.engine.phase(), ?snapshot, "display updated");
}

pub(super) fn handle_tick(app: &mut App) {
    if app.engine.expire_error(Instant::now()) {
        trace!("error notice expired");
    }
}
