use super::{Command, CommandError};
use std::fs::File;
use std::io::{self, Read, Write};

const CHUNK_SIZE: usize = 2048;

#[derive(Clone, Copy)]
pub struct CatCommand;

impl Default for CatCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CatCommand {
    pub fn new() -> Self {
        Self
    }

    /// Copies `reader` to `writer` through a fixed-size chunk. Only the
    /// bytes each read actually returned are written; a zero-length read
    /// ends the loop.
    fn stream<R: Read, W: Write>(&self, reader: &mut R, writer: &mut W) -> io::Result<()> {
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let count = reader.read(&mut chunk)?;
            if count == 0 {
                break;
            }
            writer.write_all(&chunk[..count])?;
        }
        writer.flush()
    }
}

impl Command for CatCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let path = args.first().ok_or(CommandError::MissingOperand("cat"))?;

        let mut file = File::open(path).map_err(|e| {
            CommandError::ExecutionError(format!("unable to open {}: {}", path, e))
        })?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.stream(&mut file, &mut out)
            .map_err(|e| CommandError::ExecutionError(format!("cat: {}: {}", path, e)))
    }
}
