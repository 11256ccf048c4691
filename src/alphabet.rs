//! A New Alphabet, from the Kattis problem `anewalphabet`
//! (<https://open.kattis.com/problems/anewalphabet>)

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

use std::{fmt, io::Write};

use thiserror::Error;

/// The substitution for every letter, `A` through `Z`.
pub const NEW_ALPHABET: [&str; 26] = [
    "@",        // A
    "8",        // B
    "(",        // C
    "|)",       // D
    "3",        // E
    "#",        // F
    "6",        // G
    "[-]",      // H
    "|",        // I
    "_|",       // J
    "|<",       // K
    "1",        // L
    r"[]\/[]",  // M
    r"[]\[]",   // N
    "0",        // O
    "|D",       // P
    "(,)",      // Q
    "|Z",       // R
    "$",        // S
    "']['",     // T
    "|_|",      // U
    r"\/",      // V
    r"\/\/",    // W
    "}{",       // X
    "`/",       // Y
    "2",        // Z
];

/// One of the 26 Latin letters, without regard to case.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Letter(u8);

impl Letter {
    #[must_use]
    pub fn substitution(self) -> &'static str {
        NEW_ALPHABET[usize::from(self.0)]
    }

    #[must_use]
    pub fn uppercase(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uppercase())
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("letter: '{0}' is not an ASCII letter")]
pub struct NotALetter(pub char);

impl TryFrom<u8> for Letter {
    type Error = NotALetter;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            b'A'..=b'Z' => Ok(Self(byte - b'A')),
            b'a'..=b'z' => Ok(Self(byte - b'a')),
            byte => Err(NotALetter(char::from(byte))),
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = NotALetter;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .map_err(|_| NotALetter(c))
            .and_then(Letter::try_from)
    }
}

/// The table in alphabetical order.
pub fn table() -> impl Iterator<Item = (Letter, &'static str)> {
    (0..26).map(|i| {
        let letter = Letter(i);
        (letter, letter.substitution())
    })
}

#[must_use]
pub fn substitution(c: char) -> Option<&'static str> {
    Letter::try_from(c).ok().map(Letter::substitution)
}

#[must_use]
pub fn transcode(line: &str) -> String {
    let mut output = String::with_capacity(line.len());

    for c in line.chars() {
        match substitution(c) {
            Some(string) => output.push_str(string),
            None => output.push(c),
        }
    }

    output
}

/// Works on raw bytes, so a line that isn't valid UTF-8 still gets its ASCII
/// letters replaced. Bytes of multi-byte characters are never letters.
#[must_use]
pub fn transcode_bytes(line: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(line.len());

    for &byte in line {
        match Letter::try_from(byte) {
            Ok(letter) => output.extend_from_slice(letter.substitution().as_bytes()),
            Err(_) => output.push(byte),
        }
    }

    output
}

/// # Errors
///
/// If writing to `writer` fails.
pub fn transcode_to<W: Write>(line: &[u8], writer: &mut W) -> std::io::Result<()> {
    // Every chunk is a run of non-letters, possibly ending in one letter.
    for chunk in line.split_inclusive(u8::is_ascii_alphabetic) {
        let (passthrough, letter) = match chunk.split_last() {
            Some((&last, rest)) => match Letter::try_from(last) {
                Ok(letter) => (rest, Some(letter)),
                Err(_) => (chunk, None),
            },
            None => (chunk, None),
        };

        writer.write_all(passthrough)?;

        if let Some(letter) = letter {
            writer.write_all(letter.substitution().as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{
        Letter, NEW_ALPHABET, NotALetter, substitution, table, transcode, transcode_bytes,
        transcode_to,
    };

    #[test]
    fn hello() {
        assert_eq!(transcode("HELLO"), "[-]3110");
    }

    #[test]
    fn lowercase_and_digits() {
        assert_eq!(transcode("abc123"), "@8(123");
    }

    #[test]
    fn empty_line() {
        assert_eq!(transcode(""), "");
        assert!(transcode_bytes(b"").is_empty());
    }

    #[test]
    fn spaces_and_punctuation() {
        assert_eq!(transcode("A B!"), "@ 8!");
    }

    #[test]
    fn both_cases_use_the_same_substitution() {
        for (upper, lower) in ('A'..='Z').zip('a'..='z') {
            assert_eq!(substitution(upper), substitution(lower));
            assert_eq!(transcode(&upper.to_string()), transcode(&lower.to_string()));
        }
    }

    #[test]
    fn every_letter_follows_the_table() {
        for (i, upper) in ('A'..='Z').enumerate() {
            assert_eq!(transcode(&upper.to_string()), NEW_ALPHABET[i]);
        }

        assert_eq!(transcode("m"), r"[]\/[]");
        assert_eq!(transcode("N"), r"[]\[]");
        assert_eq!(transcode("t"), "']['");
        assert_eq!(transcode("W"), r"\/\/");
    }

    #[test]
    fn non_letters_pass_through() {
        for byte in 0..=127_u8 {
            let c = char::from(byte);
            if !c.is_ascii_alphabetic() {
                assert_eq!(transcode(&c.to_string()), c.to_string());
                assert_eq!(substitution(c), None);
            }
        }

        assert_eq!(transcode("ÁÐé ß ᚠ"), "ÁÐé ß ᚠ");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        assert_eq!(transcode_bytes(b"a\xffz\xc3"), b"@\xff2\xc3");
    }

    #[test]
    fn writer_matches_string() {
        let line = "The quick brown fox, 42 times!";
        let mut buffer = Vec::new();
        transcode_to(line.as_bytes(), &mut buffer).unwrap();

        assert_eq!(buffer, transcode(line).as_bytes());
        assert_eq!(buffer, transcode_bytes(line.as_bytes()));
    }

    #[test]
    fn output_is_never_shorter() {
        let line = "Sphinx of black quartz, judge my vow.";
        assert!(transcode(line).len() >= line.len());
    }

    #[test]
    fn letters() {
        let letter = Letter::try_from('q').unwrap();
        assert_eq!(letter, Letter::try_from(b'Q').unwrap());
        assert_eq!(letter.to_string(), "Q");
        assert_eq!(letter.substitution(), "(,)");

        assert_eq!(Letter::try_from('7'), Err(NotALetter('7')));
        assert_eq!(Letter::try_from('é'), Err(NotALetter('é')));
        assert_eq!(
            NotALetter('?').to_string(),
            "letter: '?' is not an ASCII letter"
        );
    }

    #[test]
    fn table_is_alphabetical() {
        let table: Vec<_> = table().collect();
        assert_eq!(table.len(), 26);

        for ((letter, string), upper) in table.into_iter().zip('A'..='Z') {
            assert_eq!(letter.uppercase(), upper);
            assert_eq!(substitution(upper), Some(string));
        }
    }
}
