use std::io::BufRead;

/// Reads every line of `reader` into memory
///
/// Lines are kept verbatim apart from the line terminator (`\n` or `\r\n`):
/// blank lines and duplicates are preserved, each becoming its own domain.
/// Invalid UTF-8 is decoded lossily, so a bad byte only affects its own line.
pub fn read_domains<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| {
            let mut bytes = line?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        })
        .collect()
}
