use libpngmeta::prelude::*;
use libpngmeta::read_as_chunks;
use std::{env, fs, io};

/// Print the chunk layout of a PNG file
fn main() -> io::Result<()> {
    let path = env::args().nth(1).expect("usage: list_chunks <image.png>");
    let file = fs::File::open(path)?;
    for chunk in read_as_chunks(file)? {
        let chunk = chunk?;
        println!("{} {:>8} bytes", chunk.ty(), chunk.length());
    }
    Ok(())
}
