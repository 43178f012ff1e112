use crate::core::Io;
use crate::utils::error::Result;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// 本地 IO：路徑 "-" 對應標準串流，其餘視為檔案
#[derive(Debug, Clone, Default)]
pub struct LocalIo;

impl LocalIo {
    pub fn new() -> Self {
        Self
    }
}

impl Io for LocalIo {
    fn read_input(&self, path: &str) -> Result<Vec<u8>> {
        if path == "-" {
            let mut data = Vec::new();
            std::io::stdin().lock().read_to_end(&mut data)?;
            return Ok(data);
        }

        let data = fs::read(path)?;
        Ok(data)
    }

    fn write_output(&self, path: &str, data: &[u8]) -> Result<()> {
        if path == "-" {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
            return Ok(());
        }

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, data)?;
        Ok(())
    }
}
