use std::path::Path;

use serde::Deserialize;

use crate::error::ComicError;

/// Physical page dimensions (any unit, as long as page and trim agree).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub const fn new(width: f64, height: f64) -> Self {
        PageSize { width, height }
    }
}

/// A3 sheet in centimetres.
pub const A3: PageSize = PageSize::new(29.70, 42.00);

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 用紙サイズ（断裁前）
    pub page_size: PageSize,
    /// 仕上がりサイズ（断裁後）
    pub trim_size: PageSize,
    /// ワーカースレッド数（0 = CPU数）
    pub parallel_workers: usize,
    pub online: bool,
    pub print: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            page_size: A3,
            trim_size: A3,
            parallel_workers: 0,
            online: true,
            print: true,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            ComicError::config(format!("Failed to parse settings YAML: {e}"))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// 寸法がすべて正の有限値で、仕上がりサイズが用紙サイズに収まることを検証する。
    pub fn validate(&self) -> crate::error::Result<()> {
        let dims = [
            ("page_size.width", self.page_size.width),
            ("page_size.height", self.page_size.height),
            ("trim_size.width", self.trim_size.width),
            ("trim_size.height", self.trim_size.height),
        ];
        for (key, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(ComicError::config(format!(
                    "{key} must be a positive number, got {value}"
                )));
            }
        }

        if self.trim_size.width > self.page_size.width
            || self.trim_size.height > self.page_size.height
        {
            return Err(ComicError::config(format!(
                "trim size {}x{} does not fit page size {}x{}",
                self.trim_size.width,
                self.trim_size.height,
                self.page_size.width,
                self.page_size.height
            )));
        }

        Ok(())
    }
}
