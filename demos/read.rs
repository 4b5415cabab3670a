use anvilnbt::Document;
use std::env;
use std::fs::File;
use std::io::Read;

fn main() {
    let path = env::args().nth(1).expect("usage: read <path-to-nbt-file>");

    let mut file = File::open(&path).expect("file to exist");
    let mut data = vec![];
    file.read_to_end(&mut data).expect("read to succeed");

    // Document::decode_file sniffs the GZIP envelope and transparently
    // inflates it before parsing, same as a loose .nbt file would need.
    let doc = Document::decode_file(&data).expect("valid NBT document");

    for entry in doc.roots() {
        println!("name: {:?}", entry.name);
        println!("{:#?}", entry.value);
    }
}
