/// Splits text into lines that keep their terminators, so joining them gives
/// back the input byte for byte.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}
