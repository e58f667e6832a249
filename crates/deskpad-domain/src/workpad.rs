//! Workpad: the code/text editor's value, language, and page model.
//!
//! The editing surface itself is an external concern; this store holds
//! what the surface edits. Code mode keeps a single buffer seeded from a
//! per-language starter template. Text mode keeps an ordered set of
//! pages with one current page.

use std::path::{Path, PathBuf};

use deskpad_core::DeskResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadMode {
    Code,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    Cpp,
    CpTemplate,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Python, Language::Cpp, Language::CpTemplate];

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::Cpp => "cpp",
            Language::CpTemplate => "cp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python (.py)",
            Language::Cpp => "C++ (.cpp)",
            Language::CpTemplate => "CP Template (.cp)",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Language::Python => "# Python code here\n",
            Language::Cpp => "// C++ code here\n",
            Language::CpTemplate => "// Competitive programming template here\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Normal,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Normal,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Normal => "Normal",
            FontSize::Large => "Large",
            FontSize::ExtraLarge => "Extra Large",
        }
    }
}

#[derive(Debug)]
pub struct Workpad {
    pub mode: PadMode,
    language: Language,
    pub code: String,
    pages: Vec<String>,
    current_page: usize,
    pub font_size: FontSize,
}

impl Workpad {
    pub fn new() -> Self {
        Self {
            mode: PadMode::Code,
            language: Language::Python,
            code: Language::Python.template().to_string(),
            pages: vec![String::new()],
            current_page: 0,
            font_size: FontSize::Normal,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switching language replaces the buffer with that language's
    /// starter template.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.code = language.template().to_string();
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_text(&self) -> &str {
        &self.pages[self.current_page]
    }

    pub fn set_page_text(&mut self, text: String) {
        self.pages[self.current_page] = text;
    }

    /// Append a blank page and jump to it.
    pub fn add_page(&mut self) {
        self.pages.push(String::new());
        self.current_page = self.pages.len() - 1;
    }

    /// Switch page, clamped to the existing range.
    pub fn go_to_page(&mut self, index: usize) {
        self.current_page = index.min(self.pages.len() - 1);
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    /// Write the code buffer to `export.<ext>` under `dir` and return the
    /// written path.
    pub fn export_code(&self, dir: &Path) -> DeskResult<PathBuf> {
        let path = dir.join(format!("export.{}", self.language.extension()));
        std::fs::write(&path, &self.code)?;
        Ok(path)
    }
}

impl Default for Workpad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_python_template() {
        let pad = Workpad::new();
        assert_eq!(pad.mode, PadMode::Code);
        assert_eq!(pad.language(), Language::Python);
        assert_eq!(pad.code, "# Python code here\n");
    }

    #[test]
    fn test_language_switch_loads_template() {
        let mut pad = Workpad::new();
        pad.code.push_str("print('hi')\n");
        pad.set_language(Language::Cpp);
        assert_eq!(pad.code, "// C++ code here\n");
        assert_eq!(pad.language().extension(), "cpp");
    }

    #[test]
    fn test_add_page_jumps_to_new_page() {
        let mut pad = Workpad::new();
        pad.set_page_text("first".to_string());
        pad.add_page();
        assert_eq!(pad.page_count(), 2);
        assert_eq!(pad.current_page(), 1);
        assert_eq!(pad.page_text(), "");
        pad.prev_page();
        assert_eq!(pad.page_text(), "first");
    }

    #[test]
    fn test_go_to_page_is_clamped() {
        let mut pad = Workpad::new();
        pad.add_page();
        pad.go_to_page(99);
        assert_eq!(pad.current_page(), 1);
        pad.prev_page();
        pad.prev_page();
        assert_eq!(pad.current_page(), 0);
        pad.next_page();
        pad.next_page();
        assert_eq!(pad.current_page(), 1);
    }

    #[test]
    fn test_export_code_writes_extension_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut pad = Workpad::new();
        pad.set_language(Language::CpTemplate);
        let path = pad.export_code(dir.path()).unwrap();
        assert!(path.ends_with("export.cp"));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, Language::CpTemplate.template());
    }
}
