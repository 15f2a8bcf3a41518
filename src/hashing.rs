//! Hash SHA-256 para comprobar que la copia limpia difiere del original.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const HASH_SIZE_LIMIT: u64 = 256 * 1024 * 1024; // 256 MiB

/// Devuelve el hash SHA-256 del archivo o un mensaje cuando no aplica.
pub fn file_hash(path: &Path) -> String {
    let metadata = match path.metadata() {
        Ok(metadata) => metadata,
        Err(error) => return format!("No disponible ({error})"),
    };

    if !metadata.is_file() {
        return "No aplica".to_string();
    }

    if metadata.len() > HASH_SIZE_LIMIT {
        return format!("Omitido (> {} MiB)", HASH_SIZE_LIMIT / (1024 * 1024));
    }

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => return format!("No disponible ({error})"),
    };

    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(bytes_read) => hasher.update(&buffer[..bytes_read]),
            Err(error) => return format!("No disponible ({error})"),
        }
    }

    format!("{:x}", hasher.finalize())
}
