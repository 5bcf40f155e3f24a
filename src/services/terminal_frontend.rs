use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use terminal_size::{terminal_size, Width};
use tokio::io::{AsyncBufReadExt, BufReader};
use crate::errors::{CodequestError, CodequestResult};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::markdown_document::MarkdownDocument;
use crate::structs::notice::Notice;
use crate::traits::frontend::Frontend;

/// Terminal host: prompts on stdin, notices on stderr, documents on stdout.
pub struct TerminalFrontend {
    save_dir: Option<PathBuf>,
    rule_width: usize,
}

impl TerminalFrontend {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            save_dir: output.save_dir.clone(),
            rule_width: output.rule_width,
        }
    }

    fn rule(&self) -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(self.rule_width);
        "─".repeat(width)
    }

    pub fn write_document<W: Write>(&self, out: &mut W, document: &MarkdownDocument) -> io::Result<()> {
        let rule = self.rule();
        writeln!(out, "{rule}")?;
        writeln!(out, "{}", document.content.trim_end())?;
        writeln!(out, "{rule}")?;
        out.flush()
    }

    pub fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
        writeln!(out, "{} {}", notice.level.emoji(), notice.message)
    }

    pub fn save_document(dir: &Path, document: &MarkdownDocument) -> CodequestResult<PathBuf> {
        let path = dir.join(document.untitled_file_name());
        let display = path.display().to_string();

        fs::create_dir_all(dir).map_err(|e| CodequestError::file_error(&dir.display().to_string(), "create directory", &e.to_string()))?;
        fs::write(&path, &document.content).map_err(|e| CodequestError::file_error(&display, "write", &e.to_string()))?;

        Ok(path)
    }
}

#[async_trait]
impl Frontend for TerminalFrontend {
    async fn prompt_query(&self, prompt: &str, placeholder: &str) -> Option<String> {
        print!("❓ {prompt} ({placeholder}) ");
        if let Err(e) = io::stdout().flush() {
            log::warn!("⚠️ Could not flush prompt: {e}");
        }

        let mut line = String::new();
        match BufReader::new(tokio::io::stdin()).read_line(&mut line).await {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => {
                log::warn!("⚠️ Could not read question: {e}");
                None
            }
        }
    }

    fn show_notice(&self, notice: &Notice) {
        log::debug!("Showing {} notice", notice.level);
        if let Err(e) = Self::write_notice(&mut io::stderr().lock(), notice) {
            log::warn!("⚠️ Could not write notice: {e}");
        }
    }

    async fn open_document(&self, document: &MarkdownDocument) -> CodequestResult<()> {
        if let Some(dir) = &self.save_dir {
            let path = Self::save_document(dir, document)?;
            eprintln!("💾 Saved answer to {}", path.display());
        }

        let stdout = io::stdout();
        self.write_document(&mut stdout.lock(), document)?;
        Ok(())
    }
}
