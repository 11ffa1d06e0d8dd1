//! Parsing of textual UUID representations

use std::str;

use crate::{ParseError, Uuid};

const URN_PREFIX: &[u8] = b"urn:uuid:";

impl Uuid {
    /// Creates an object from one of the four accepted string notations.
    ///
    /// | Length | Notation                                        |
    /// | ------ | ----------------------------------------------- |
    /// | 36     | `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`          |
    /// | 45     | `urn:uuid:xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` |
    /// | 38     | `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`        |
    /// | 32     | `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx`              |
    ///
    /// Hex digits and the `urn:uuid:` prefix are case-insensitive. The version and variant
    /// fields are not validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid9562::{ParseError, Uuid};
    ///
    /// let x = Uuid::parse("{123E4567-E89B-12D3-A456-426614174000}")?;
    /// assert_eq!(x.to_string(), "123e4567-e89b-12d3-a456-426614174000");
    ///
    /// assert_eq!(
    ///     Uuid::parse("123e4567-e89b-12d3-a456-42661417400"),
    ///     Err(ParseError::InvalidLength { len: 35 })
    /// );
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let bytes = src.as_bytes();
        match bytes.len() {
            32 => parse_compact(bytes, 0),
            36 => parse_canonical(bytes, 0),
            38 => {
                expect_literal(bytes, 0, b'{')?;
                let value = parse_canonical(bytes, 1)?;
                expect_literal(bytes, 37, b'}')?;
                Ok(value)
            }
            45 => {
                for (i, e) in URN_PREFIX.iter().enumerate() {
                    if !bytes[i].eq_ignore_ascii_case(e) {
                        return Err(unexpected(bytes, i, *e));
                    }
                }
                parse_canonical(bytes, URN_PREFIX.len())
            }
            len => Err(ParseError::InvalidLength { len }),
        }
    }
}

/// Decodes 16 octets from 32 consecutive hex digits starting at `offset`.
fn parse_compact(src: &[u8], offset: usize) -> Result<Uuid, ParseError> {
    let mut dst = [0u8; 16];
    for (i, e) in dst.iter_mut().enumerate() {
        *e = hex_pair(src, offset + i * 2)?;
    }
    Ok(Uuid::from(dst))
}

/// Decodes 16 octets from the 8-4-4-4-12 notation starting at `offset`.
fn parse_canonical(src: &[u8], offset: usize) -> Result<Uuid, ParseError> {
    let mut dst = [0u8; 16];
    let mut pos = offset;
    for (i, e) in dst.iter_mut().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            expect_literal(src, pos, b'-')?;
            pos += 1;
        }
        *e = hex_pair(src, pos)?;
        pos += 2;
    }
    Ok(Uuid::from(dst))
}

fn hex_pair(src: &[u8], pos: usize) -> Result<u8, ParseError> {
    Ok((hex_digit(src, pos)? << 4) | hex_digit(src, pos + 1)?)
}

fn hex_digit(src: &[u8], pos: usize) -> Result<u8, ParseError> {
    match src[pos] {
        c @ b'0'..=b'9' => Ok(c - b'0'),
        c @ b'a'..=b'f' => Ok(c - b'a' + 10),
        c @ b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseError::InvalidDigit {
            index: pos,
            found: char_at(src, pos),
        }),
    }
}

fn expect_literal(src: &[u8], pos: usize, expected: u8) -> Result<(), ParseError> {
    if src[pos] == expected {
        Ok(())
    } else {
        Err(unexpected(src, pos, expected))
    }
}

fn unexpected(src: &[u8], pos: usize, expected: u8) -> ParseError {
    ParseError::UnexpectedCharacter {
        index: pos,
        found: char_at(src, pos),
        expected: char::from(expected),
    }
}

/// Returns the character starting at `pos`, or U+FFFD if `pos` is not on a character boundary.
fn char_at(src: &[u8], pos: usize) -> char {
    str::from_utf8(&src[pos..])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from any notation accepted by [`Uuid::parse`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse(src)
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse(&src)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParseError, Uuid, Variant};

    const CANONICAL: &str = "123e4567-e89b-12d3-a456-426614174000";

    /// Parses all four notations into the same value
    #[test]
    fn parses_all_four_notations_into_the_same_value() {
        let expected = Uuid::from(0x123e4567_e89b_12d3_a456_426614174000u128);
        let cases = [
            CANONICAL.to_owned(),
            format!("urn:uuid:{CANONICAL}"),
            format!("{{{CANONICAL}}}"),
            CANONICAL.replace('-', ""),
        ];
        for e in cases {
            assert_eq!(Uuid::parse(&e), Ok(expected));
            assert_eq!(Uuid::parse(&e.to_uppercase()), Ok(expected));
            assert_eq!(e.parse::<Uuid>(), Ok(expected));
        }
        assert_eq!(expected.to_string(), CANONICAL);
    }

    /// Round-trips all four notations for every version
    #[test]
    fn round_trips_all_four_notations_for_every_version() {
        let mut cases = vec![
            Uuid::NIL,
            Uuid::MAX,
            Uuid::from_fields_v1(0x1ec9414c232ab00, 0x33c8, [1, 2, 3, 4, 5, 6]),
            Uuid::from_fields_v6(0x1ec9414c232ab00, 0x33c8, [1, 2, 3, 4, 5, 6]),
            Uuid::from_fields_v7(0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f),
        ];
        for i in 0..100u32 {
            let name = format!("name-{i}");
            cases.push(crate::uuid1().unwrap());
            cases.push(crate::uuid2(crate::Domain::Org, i).unwrap());
            cases.push(crate::uuid3(Uuid::NAMESPACE_URL, &name));
            cases.push(crate::uuid4().unwrap());
            cases.push(crate::uuid5(Uuid::NAMESPACE_DNS, &name));
            cases.push(crate::V6Generator::new().generate().unwrap());
            cases.push(crate::V7Generator::new().generate().unwrap());
            #[cfg(feature = "global_gen")]
            cases.extend([crate::uuid6().unwrap(), crate::uuid7().unwrap()]);
        }
        for e in cases {
            assert_eq!(Uuid::parse(&e.encode()), Ok(e));
            assert_eq!(Uuid::parse(&e.encode_compact()), Ok(e));
            assert_eq!(Uuid::parse(&e.to_string().to_uppercase()), Ok(e));
            assert_eq!(Uuid::parse(&format!("urn:uuid:{e}")), Ok(e));
            assert_eq!(Uuid::parse(&format!("{{{e}}}")), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
        }
    }

    /// Accepts foreign versions and variants
    #[test]
    fn accepts_foreign_versions_and_variants() {
        let e = Uuid::parse("00000000-0000-f000-e000-000000000000").unwrap();
        assert_eq!(e.version(), 15);
        assert_eq!(e.variant(), Variant::Future);
        assert_eq!(e.to_string(), "00000000-0000-f000-e000-000000000000");
    }

    /// Rejects wrong lengths
    #[test]
    fn rejects_wrong_lengths() {
        let cases = [
            "",
            "123e4567-e89b-12d3-a456-42661417400",
            "123e4567-e89b-12d3-a456-4266141740000",
            "123e4567e89b12d3a45642661417400",
            " 123e4567-e89b-12d3-a456-426614174000",
            "urn:uuid:123e4567e89b12d3a456426614174000",
        ];
        for e in cases {
            assert_eq!(
                Uuid::parse(e),
                Err(ParseError::InvalidLength { len: e.len() })
            );
        }
    }

    /// Reports offending hex digit position
    #[test]
    fn reports_offending_hex_digit_position() {
        let cases = [
            ("123e4567-e89b-12d3-a456-42661417400g", 35, 'g'),
            ("x23e4567-e89b-12d3-a456-426614174000", 0, 'x'),
            ("123e4567-e89b-12d3-a456-4266 4174000", 28, ' '),
            ("123e4567-e89b-+2d3-a456-426614174000", 14, '+'),
            ("{123e4567-e89b-12d3-a45z-426614174000}", 23, 'z'),
            ("urn:uuid:123e4567-e89b-12d3-a456-42661417400-", 44, '-'),
            ("123e4567e89b12d3a456426614174_00", 29, '_'),
        ];
        for (text, index, found) in cases {
            assert_eq!(
                Uuid::parse(text),
                Err(ParseError::InvalidDigit { index, found }),
                "{text}"
            );
        }
    }

    /// Reports mismatched literal position
    #[test]
    fn reports_mismatched_literal_position() {
        let cases = [
            ("123e4567_e89b-12d3-a456-426614174000", 8, '_', '-'),
            ("123e4567-e89b-12d3-a456+426614174000", 23, '+', '-'),
            ("123e4567-e89b-12d3a-456-426614174000", 18, 'a', '-'),
            ("(123e4567-e89b-12d3-a456-426614174000}", 0, '(', '{'),
            ("{123e4567-e89b-12d3-a456-426614174000]", 37, ']', '}'),
            ("urn:uiid:123e4567-e89b-12d3-a456-426614174000", 5, 'i', 'u'),
            ("urn-uuid:123e4567-e89b-12d3-a456-426614174000", 3, '-', ':'),
        ];
        for (text, index, found, expected) in cases {
            assert_eq!(
                Uuid::parse(text),
                Err(ParseError::UnexpectedCharacter {
                    index,
                    found,
                    expected
                }),
                "{text}"
            );
        }
    }

    /// Accepts uppercase URN prefix
    #[test]
    fn accepts_uppercase_urn_prefix() {
        let e = Uuid::parse(&format!("URN:UUID:{CANONICAL}")).unwrap();
        assert_eq!(e.to_string(), CANONICAL);
    }

    /// Reports non-ASCII characters without panicking
    #[test]
    fn reports_non_ascii_characters_without_panicking() {
        // 'é' takes two bytes, so the input is 36 bytes long
        let text = "123e4567-e89b-12d3-a456-4266141740é";
        assert_eq!(text.len(), 36);
        assert_eq!(
            Uuid::parse(text),
            Err(ParseError::InvalidDigit {
                index: 34,
                found: 'é'
            })
        );
        assert_eq!(Uuid::parse(text).unwrap_err().index(), Some(34));
    }
}
