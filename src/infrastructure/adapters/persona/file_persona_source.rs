//! File Persona Source - 从文本文件读取人设
//!
//! 每个 NPC 一个文件：`<dir>/<Name>_en.txt`

use std::path::{Path, PathBuf};

use crate::application::ports::PersonaSourcePort;

/// 文件人设来源
pub struct FilePersonaSource {
    dir: PathBuf,
}

impl FilePersonaSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, npc_name: &str) -> PathBuf {
        self.dir.join(format!("{}_en.txt", npc_name))
    }
}

impl PersonaSourcePort for FilePersonaSource {
    fn load(&self, npc_name: &str) -> String {
        let path = self.path_for(npc_name);
        match std::fs::read_to_string(&path) {
            Ok(text) => text,
            // 文件缺失回退为空人设，与源系统行为一致
            Err(e) => {
                tracing::warn!(
                    npc_name = %npc_name,
                    path = %path.display(),
                    error = %e,
                    "Persona file not readable, using empty persona"
                );
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_reads_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("Ted_en.txt")).unwrap();
        write!(file, "Name: Ted\nJob: lumberjack\n").unwrap();

        let source = FilePersonaSource::new(dir.path());
        assert_eq!(source.load("Ted"), "Name: Ted\nJob: lumberjack\n");
    }

    #[test]
    fn test_missing_file_yields_empty_persona() {
        let dir = tempfile::tempdir().unwrap();
        let source = FilePersonaSource::new(dir.path());
        assert_eq!(source.load("Nobody"), "");
    }
}
