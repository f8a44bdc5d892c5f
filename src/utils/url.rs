//! Percent-decoding for link components

/// Percent-decodes a link component such as a `#remark`.
///
/// Input whose escapes do not form valid UTF-8 is returned unchanged.
/// `+` is left alone.
///
/// # Examples
/// ```
/// use surfconv::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}
