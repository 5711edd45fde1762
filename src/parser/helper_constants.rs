// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but longer numbers have
// been seen in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Input longer than this is rejected outright, which bounds the work any
/// single call can do.
pub const MAX_INPUT_LENGTH: usize = 250;
/// The maximum number of digits an extension may carry. Longer digit runs
/// after an extension label are usually a second number, not an extension.
pub const MAX_LENGTH_FOR_EXTENSION: usize = 7;

pub const PLUS_SIGN: char = '+';
pub const PLUS_CHARS: &str = "+\u{FF0B}";

// Regular expression of acceptable punctuation found in phone numbers. This
// consists of dash characters, white space characters, full stops, slashes,
// square brackets, parentheses and tildes. Full-width variants are also
// present. Letters are deliberately absent: a letter stuck to a number is a
// sign the text is not a dialable number at all.
pub const VALID_PUNCTUATION: &str = "-\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

pub const DIGITS: &str = r"\p{Nd}";

pub const RFC3966_PREFIX: &str = "tel:";
pub const RFC3966_EXTN_PARAMETER: &str = "ext=";

// Optional full stop (.) or colon, followed by zero or more
// spaces/tabs/commas, between an extension label and its digits.
pub const POSSIBLE_SEPARATORS_BEFORE_EXT_LABEL: &str = "[ \u{00A0}\\t,]*";
pub const POSSIBLE_CHARS_AFTER_EXT_LABEL: &str = "[:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*";
