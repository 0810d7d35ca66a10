//! Interactive prompting for messages and keys.

use std::io::{self, BufRead, Write};

use log::debug;
use rijndael_core::{Aes128Key, KeyProvider};

/// Reads one line after printing `prompt`, without the trailing newline.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a line was entered",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Asks for a 16-character key until one of the right length is entered.
pub struct PromptKeyProvider<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptKeyProvider<R, W> {
    /// Wraps an input/output pair.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> KeyProvider for PromptKeyProvider<R, W> {
    fn provide_key(&mut self) -> rijndael_core::Result<Aes128Key> {
        loop {
            let entered = prompt_line(&mut self.input, &mut self.output, "Key: ")?;
            match Aes128Key::try_from(entered.as_bytes()) {
                Ok(key) => return Ok(key),
                Err(err) => {
                    debug!("rejected key: {err}");
                    writeln!(self.output, "[-] Key must be 128 bits long.")?;
                }
            }
        }
    }
}
