// This file is part of anewalphabet.
//
// anewalphabet is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// anewalphabet is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{env, io::Write};

use chrono::Utc;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Logs go to stderr, stdout only ever carries transcoded text.
pub fn init_logger(debug: bool) {
    let mut builder = Builder::new();

    builder.target(Target::Stderr).format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}
