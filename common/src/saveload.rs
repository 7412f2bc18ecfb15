use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open_file(path: &Path) -> Option<File> {
    File::open(path)
        .map_err(|e| log::error!("could not open {}: {}", path.display(), e))
        .ok()
}

pub fn load_reader(path: &Path) -> Option<BufReader<File>> {
    let file = open_file(path)?;
    Some(BufReader::new(file))
}

pub fn load_json_path<T: DeserializeOwned>(path: &Path) -> Option<T> {
    serde_json::from_reader(load_reader(path)?)
        .map_err(|err| log::error!("failed deserializing {}: {}", path.display(), err))
        .map(|x| {
            log::info!("successfully loaded {}", path.display());
            x
        })
        .ok()
}
