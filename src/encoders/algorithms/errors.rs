use std::fmt;

/// The input to [`encode`](crate::encode) or [`decode`](crate::decode) violated the format.
///
/// `offset` is the index of the first offending byte in the input that was
/// being processed: a disallowed symbol, an unsupported or malformed UTF-8
/// byte, the closing delimiter of a high run whose length is not a multiple
/// of three, or the end of input when a high run is never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorruptInputError {
    pub offset: usize,
}

impl CorruptInputError {
    pub fn new(offset: usize) -> Self {
        CorruptInputError { offset }
    }
}

impl fmt::Display for CorruptInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal input data at input byte {}", self.offset)
    }
}

impl std::error::Error for CorruptInputError {}

/// Errors raised while building a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not have exactly 64 symbols
    InvalidLength { actual: usize },
    /// A symbol appears twice
    DuplicateSymbol { symbol: u8, position: usize },
    /// The delimiter is also an alphabet symbol
    DelimiterInAlphabet { delimiter: u8, position: usize },
    /// A configured delimiter is not exactly one byte
    InvalidDelimiter { value: String },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::InvalidLength { actual } => {
                write!(f, "alphabet must have exactly 64 symbols, got {}", actual)
            }
            AlphabetError::DuplicateSymbol { symbol, position } => write!(
                f,
                "duplicate symbol {} at position {}",
                describe_byte(*symbol),
                position
            ),
            AlphabetError::DelimiterInAlphabet {
                delimiter,
                position,
            } => write!(
                f,
                "delimiter {} also appears in the alphabet at position {}",
                describe_byte(*delimiter),
                position
            ),
            AlphabetError::InvalidDelimiter { value } => {
                write!(f, "delimiter must be a single byte, got {:?}", value)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

fn describe_byte(b: u8) -> String {
    if b.is_ascii_graphic() {
        format!("'{}'", b as char)
    } else {
        format!("0x{:02X}", b)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`nb64 config list`\x1b[0m to see all alphabets"
            )?;
        } else {
            write!(f, "      run `nb64 config list` to see all alphabets")?;
        }

        Ok(())
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
