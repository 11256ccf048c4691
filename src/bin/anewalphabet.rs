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

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

use std::io::{self, BufRead, BufWriter, Write};

use clap::{self, CommandFactory, Parser};
use log::debug;

use anewalphabet::{
    COPYRIGHT, LONG_VERSION,
    alphabet::{table, transcode_to},
    utils,
};

/// A New Alphabet
///
/// Reads a line from stdin and writes it back with every letter replaced by
/// its look-alike in the new alphabet.
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "A New Alphabet")]
struct Args {
    /// Transcode every line until the end of input
    #[arg(long)]
    every_line: bool,

    /// Print the substitution table and exit
    #[arg(long)]
    table: bool,

    /// Log on the debug level
    #[arg(long)]
    debug: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Args::command().name("anewalphabet").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-18");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("anewalphabet.1", buffer)?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if args.table {
        for (letter, substitution) in table() {
            writeln!(writer, "{letter} {substitution}")?;
        }

        writer.flush()?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = Vec::new();

    loop {
        line.clear();
        let bytes_read = reader.read_until(b'\n', &mut line)?;

        if bytes_read == 0 {
            debug!("end of input");
            break;
        }

        let (text, terminator) = split_terminator(&line);
        debug!("line: {:?}", String::from_utf8_lossy(text));

        transcode_to(text, &mut writer)?;

        if !args.every_line {
            break;
        }

        writer.write_all(terminator)?;
    }

    writer.flush()?;
    Ok(())
}

/// Splits off a trailing `\n`, `\r\n` or `\r`.
fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    let mut len = line.len();

    if line.ends_with(b"\n") {
        len -= 1;
    }

    if line.get(..len).is_some_and(|text| text.ends_with(b"\r")) {
        len -= 1;
    }

    line.split_at(len)
}
