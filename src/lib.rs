//! A cipher for the Kattis problem "A New Alphabet".
//!
//! Every Latin letter is replaced by a string of ASCII characters that looks a
//! little like it, and everything else is left alone:
//!
//! ```text
//! HELLO  -> [-]3110
//! abc123 -> @8(123
//! ```
//!
//! ## Feature Flags
//!
//! * bench - enable the criterion benchmark

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

#![deny(clippy::panic)]

pub mod alphabet;
pub mod utils;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the anewalphabet project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the anewalphabet project
Licensed under the AGPLv3"
);
